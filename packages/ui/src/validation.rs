//! # Field validation rules
//!
//! A field is checked by a [`Validator`]: an ordered list of [`FieldRule`]s,
//! each pairing a [`Rule`] predicate with the message shown when it fails.
//! The first failing rule wins. Validators are plain `const` data so every
//! form in the app shares the same definitions.
//!
//! | Validator | Fails when |
//! |-----------|-----------|
//! | [`TITLE`] | empty, or longer than 100 characters |
//! | [`DESCRIPTION`] | empty |
//! | [`EMAIL`] | 8 characters or fewer, or not `local@domain.tld` |
//! | [`PASSWORD`] | 5 characters or fewer |
//! | [`FIRST_NAME`] / [`LAST_NAME`] | 2 characters or fewer |
//! | [`ROLE`] / [`PROJECT`] / [`STATUS`] | nothing selected |
//! | [`LOGIN_EMAIL`] / [`LOGIN_PASSWORD`] | empty |
//!
//! Lengths count `char`s, not bytes.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A single predicate over one input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// At least one character.
    NonEmpty,
    /// No more than `n` characters.
    MaxChars(usize),
    /// Strictly more than `n` characters.
    LongerThan(usize),
    /// Shaped like `local@domain.tld`.
    EmailShape,
}

impl Rule {
    pub fn holds(&self, input: &str) -> bool {
        match self {
            Rule::NonEmpty => !input.is_empty(),
            Rule::MaxChars(n) => input.chars().count() <= *n,
            Rule::LongerThan(n) => input.chars().count() > *n,
            Rule::EmailShape => EMAIL_PATTERN.is_match(input),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

/// Ordered rules for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validator(pub &'static [FieldRule]);

impl Validator {
    /// `Err` carries the message of the first rule that fails.
    pub fn check(&self, input: &str) -> Result<(), &'static str> {
        match self.0.iter().find(|r| !r.rule.holds(input)) {
            Some(failed) => Err(failed.message),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }
}

pub const TITLE: Validator = Validator(&[
    FieldRule::new(Rule::NonEmpty, "Title should not be empty"),
    FieldRule::new(Rule::MaxChars(100), "Title should not be more than 100 characters"),
]);

pub const DESCRIPTION: Validator = Validator(&[FieldRule::new(
    Rule::NonEmpty,
    "Description should not be empty",
)]);

pub const EMAIL: Validator = Validator(&[
    FieldRule::new(Rule::LongerThan(8), "Enter a valid email"),
    FieldRule::new(Rule::EmailShape, "Enter a valid email"),
]);

pub const PASSWORD: Validator = Validator(&[FieldRule::new(
    Rule::LongerThan(5),
    "Password should be more than 5 characters",
)]);

pub const FIRST_NAME: Validator = Validator(&[FieldRule::new(
    Rule::LongerThan(2),
    "First name should be at least 3 characters",
)]);

pub const LAST_NAME: Validator = Validator(&[FieldRule::new(
    Rule::LongerThan(2),
    "Last name should be at least 3 characters",
)]);

pub const ROLE: Validator = Validator(&[FieldRule::new(Rule::NonEmpty, "Please select a role")]);

pub const PROJECT: Validator = Validator(&[FieldRule::new(Rule::NonEmpty, "Select a project")]);

pub const STATUS: Validator = Validator(&[FieldRule::new(Rule::NonEmpty, "Select a status")]);

pub const LOGIN_EMAIL: Validator =
    Validator(&[FieldRule::new(Rule::NonEmpty, "Email can't be empty")]);

pub const LOGIN_PASSWORD: Validator =
    Validator(&[FieldRule::new(Rule::NonEmpty, "Password can't be empty")]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rules() {
        assert_eq!(TITLE.check(""), Err("Title should not be empty"));
        assert_eq!(
            TITLE.check(&"x".repeat(101)),
            Err("Title should not be more than 100 characters")
        );
        assert!(TITLE.is_valid("x"));
        assert!(TITLE.is_valid(&"x".repeat(100)));
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        assert!(TITLE.is_valid(&"é".repeat(100)));
        assert!(!TITLE.is_valid(&"é".repeat(101)));
    }

    #[test]
    fn test_description_rules() {
        assert_eq!(DESCRIPTION.check(""), Err("Description should not be empty"));
        assert!(DESCRIPTION.is_valid(" "));
        assert!(DESCRIPTION.is_valid("anything at all"));
    }

    #[test]
    fn test_email_rules() {
        assert!(!EMAIL.is_valid("a@b.co"));
        assert!(EMAIL.is_valid("validuser@example.com"));
        assert!(!EMAIL.is_valid("not-an-email"));
        assert!(!EMAIL.is_valid("with space@example.com"));
        assert!(!EMAIL.is_valid("missing@tld"));
        assert_eq!(EMAIL.check("a@b.co"), Err("Enter a valid email"));
    }

    #[test]
    fn test_password_rules() {
        assert!(!PASSWORD.is_valid("abc12"));
        assert!(PASSWORD.is_valid("abc123"));
    }

    #[test]
    fn test_name_rules() {
        assert!(!FIRST_NAME.is_valid("Al"));
        assert!(FIRST_NAME.is_valid("Ada"));
        assert_eq!(
            LAST_NAME.check(""),
            Err("Last name should be at least 3 characters")
        );
    }

    #[test]
    fn test_selection_rules() {
        assert_eq!(ROLE.check(""), Err("Please select a role"));
        assert!(ROLE.is_valid("Member"));
        assert_eq!(PROJECT.check(""), Err("Select a project"));
        assert_eq!(STATUS.check(""), Err("Select a status"));
        assert!(STATUS.is_valid("Done"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        const BOTH: Validator = Validator(&[
            FieldRule::new(Rule::NonEmpty, "first"),
            FieldRule::new(Rule::LongerThan(3), "second"),
        ]);
        assert_eq!(BOTH.check(""), Err("first"));
        assert_eq!(BOTH.check("ab"), Err("second"));
        assert_eq!(BOTH.check("abcd"), Ok(()));
    }
}
