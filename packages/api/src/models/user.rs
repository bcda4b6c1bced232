//! # User profile, roles and record ownership
//!
//! ## [`UserProfile`]
//!
//! The authenticated user as returned by `GET /profile/`. The shell fetches
//! it once after mount and hands it to every screen as a prop.
//!
//! ## [`Owner`]
//!
//! The denormalized creator fields the server attaches to every project and
//! task row (`user_id`, `first_name`, `last_name`, `role`, `email_id`). They
//! are display-only: the client never sends them back.
//!
//! ## Permission gate
//!
//! [`can_edit_or_delete`] enables the Edit/Delete controls when the viewer
//! owns the record or holds the [`Role::Admin`] role. This is a UI
//! affordance; the server re-checks every write.

use serde::{Deserialize, Serialize};

use super::de_id;

/// Account role chosen at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }

    /// Parse a select-box value. Empty or unknown means "not selected".
    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "de_id")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, alias = "email")]
    pub email_id: String,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        initials(&self.first_name, &self.last_name)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Creator of a project or task, as denormalized by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(deserialize_with = "de_id")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub email_id: String,
}

impl Owner {
    pub fn initials(&self) -> String {
        initials(&self.first_name, &self.last_name)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Upper-cased first letters of first and last name.
pub fn initials(first: &str, last: &str) -> String {
    first
        .chars()
        .take(1)
        .chain(last.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether `viewer` may edit or delete a record created by `owner`.
///
/// No profile (still loading, or failed) grants nothing.
pub fn can_edit_or_delete(viewer: Option<&UserProfile>, owner: &Owner) -> bool {
    match viewer {
        Some(v) => v.is_admin() || v.user_id == owner.user_id,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, role: Role) -> UserProfile {
        UserProfile {
            user_id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role,
            email_id: "ada@example.com".to_string(),
        }
    }

    fn owner(id: &str) -> Owner {
        Owner {
            user_id: id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: Role::Member,
            email_id: "grace@example.com".to_string(),
        }
    }

    #[test]
    fn test_member_cannot_edit_other_users_records() {
        let member = profile("1", Role::Member);
        assert!(!can_edit_or_delete(Some(&member), &owner("2")));
    }

    #[test]
    fn test_member_can_edit_own_records() {
        let member = profile("1", Role::Member);
        assert!(can_edit_or_delete(Some(&member), &owner("1")));
    }

    #[test]
    fn test_admin_can_edit_everything() {
        let admin = profile("9", Role::Admin);
        assert!(can_edit_or_delete(Some(&admin), &owner("1")));
        assert!(can_edit_or_delete(Some(&admin), &owner("9")));
    }

    #[test]
    fn test_missing_profile_grants_nothing() {
        assert!(!can_edit_or_delete(None, &owner("1")));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada", "lovelace"), "AL");
        assert_eq!(initials("", "hopper"), "H");
        assert_eq!(initials("", ""), "");
        assert_eq!(profile("1", Role::Member).initials(), "AL");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Member"), Some(Role::Member));
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_profile_from_json_with_numeric_id() {
        let p: UserProfile = serde_json::from_str(
            r#"{"user_id": 7, "first_name": "Ada", "last_name": "Lovelace", "role": "Admin", "email": "ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(p.user_id, "7");
        assert_eq!(p.email_id, "ada@example.com");
        assert!(p.is_admin());
        assert_eq!(p.full_name(), "Ada Lovelace");
    }
}
