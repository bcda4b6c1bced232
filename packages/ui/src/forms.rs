//! # Form state
//!
//! A [`Field`] holds an input's current value and visible error, re-checked
//! on every keystroke. Each form groups its fields and offers
//! `validate_all`, which re-checks every field synchronously on submit and
//! returns `true` only if all pass, and `reset`, which restores the values
//! the dialog was opened with.
//!
//! Forms are plain data; components keep them in a `Signal`.

use api::{
    LoginRequest, NewProject, NewTask, Project, ProjectUpdate, Role, SignupRequest, Task,
    TaskStatus, TaskUpdate, UserProfile,
};

use crate::validation::{self, Validator};

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub value: String,
    pub error: Option<&'static str>,
    validator: Validator,
    trim: bool,
}

impl Field {
    pub fn new(validator: Validator) -> Self {
        Self::with_value(validator, String::new())
    }

    pub fn with_value(validator: Validator, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
            validator,
            trim: false,
        }
    }

    /// Strip surrounding whitespace from every value typed in.
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Store a keystroke and refresh the visible error.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = if self.trim {
            value.trim().to_string()
        } else {
            value
        };
        self.validate();
    }

    pub fn validate(&mut self) -> bool {
        self.error = self.validator.check(&self.value).err();
        self.error.is_none()
    }

    /// Show an error that came from the server rather than a rule.
    pub fn reject(&mut self, message: &'static str) {
        self.error = Some(message);
    }

    /// Restore `value` and clear the error.
    pub fn reset_to(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }
}

/// Checks every field, never short-circuiting, so each shows its error.
fn all_valid(fields: &mut [&mut Field]) -> bool {
    fields
        .iter_mut()
        .fold(true, |ok, field| field.validate() && ok)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginForm {
    pub email: Field,
    pub password: Field,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: Field::new(validation::LOGIN_EMAIL).trimmed(),
            password: Field::new(validation::LOGIN_PASSWORD).trimmed(),
        }
    }
}

impl LoginForm {
    pub fn validate_all(&mut self) -> bool {
        all_valid(&mut [&mut self.email, &mut self.password])
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    /// Route a failed login's server message to the field it concerns.
    /// Returns the message when it belongs to neither field.
    pub fn apply_server_error(&mut self, message: &str) -> Option<String> {
        match message {
            "Invalid email" => self.email.reject("Invalid email"),
            "Invalid password" => self.password.reject("Invalid password"),
            other => return Some(other.to_string()),
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupForm {
    pub first_name: Field,
    pub last_name: Field,
    pub role: Field,
    pub email: Field,
    pub password: Field,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            first_name: Field::new(validation::FIRST_NAME).trimmed(),
            last_name: Field::new(validation::LAST_NAME).trimmed(),
            role: Field::new(validation::ROLE),
            email: Field::new(validation::EMAIL).trimmed(),
            password: Field::new(validation::PASSWORD).trimmed(),
        }
    }
}

impl SignupForm {
    pub fn validate_all(&mut self) -> bool {
        all_valid(&mut [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.role,
            &mut self.email,
            &mut self.password,
        ])
    }

    /// `None` until a role is chosen.
    pub fn request(&self) -> Option<SignupRequest> {
        Some(SignupRequest {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            role: Role::parse(&self.role.value)?,
        })
    }
}

/// Create and edit dialog for a project.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectForm {
    pub title: Field,
    pub description: Field,
    origin: (String, String),
}

impl ProjectForm {
    pub fn empty() -> Self {
        Self::with_values(String::new(), String::new())
    }

    pub fn for_edit(project: &Project) -> Self {
        Self::with_values(
            project.project_title.clone(),
            project.project_description.clone(),
        )
    }

    fn with_values(title: String, description: String) -> Self {
        Self {
            title: Field::with_value(validation::TITLE, title.clone()),
            description: Field::with_value(validation::DESCRIPTION, description.clone()),
            origin: (title, description),
        }
    }

    pub fn validate_all(&mut self) -> bool {
        all_valid(&mut [&mut self.title, &mut self.description])
    }

    pub fn reset(&mut self) {
        let (title, description) = self.origin.clone();
        self.title.reset_to(title);
        self.description.reset_to(description);
    }

    pub fn new_project(&self, owner: &UserProfile) -> NewProject {
        NewProject {
            project_title: self.title.value.clone(),
            project_description: self.description.value.clone(),
            user_id: owner.user_id.clone(),
        }
    }

    pub fn update(&self) -> ProjectUpdate {
        ProjectUpdate {
            updated_project_title: self.title.value.clone(),
            updated_project_description: self.description.value.clone(),
        }
    }
}

/// Create dialog for a task.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskForm {
    pub project: Field,
    pub status: Field,
    pub title: Field,
    pub description: Field,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            project: Field::new(validation::PROJECT),
            status: Field::new(validation::STATUS),
            title: Field::new(validation::TITLE),
            description: Field::new(validation::DESCRIPTION),
        }
    }
}

impl TaskForm {
    pub fn validate_all(&mut self) -> bool {
        all_valid(&mut [
            &mut self.project,
            &mut self.status,
            &mut self.title,
            &mut self.description,
        ])
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `None` until a status is chosen.
    pub fn new_task(&self, owner: &UserProfile) -> Option<NewTask> {
        Some(NewTask {
            task_title: self.title.value.clone(),
            task_description: self.description.value.clone(),
            project_id: self.project.value.clone(),
            task_status: TaskStatus::parse(&self.status.value)?,
            task_user_id: owner.user_id.clone(),
        })
    }
}

/// Edit dialog for a task.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEditForm {
    pub title: Field,
    pub description: Field,
    pub status: Field,
    origin: Task,
}

impl TaskEditForm {
    pub fn for_edit(task: &Task) -> Self {
        Self {
            title: Field::with_value(validation::TITLE, task.task_title.clone()),
            description: Field::with_value(
                validation::DESCRIPTION,
                task.task_description.clone(),
            ),
            status: Field::with_value(validation::STATUS, task.task_status.as_str()),
            origin: task.clone(),
        }
    }

    pub fn validate_all(&mut self) -> bool {
        all_valid(&mut [&mut self.title, &mut self.description, &mut self.status])
    }

    pub fn reset(&mut self) {
        *self = Self::for_edit(&self.origin);
    }

    pub fn update(&self) -> Option<TaskUpdate> {
        Some(TaskUpdate {
            updated_task_title: self.title.value.clone(),
            updated_task_description: self.description.value.clone(),
            task_status: TaskStatus::parse(&self.status.value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use api::Owner;

    use super::*;

    fn owner() -> Owner {
        Owner {
            user_id: "7".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Member,
            email_id: "ada@example.com".to_string(),
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "7".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Member,
            email_id: "ada@example.com".to_string(),
        }
    }

    fn project() -> Project {
        Project {
            project_id: "3".to_string(),
            project_title: "Launch".to_string(),
            project_description: "Ship it".to_string(),
            owner: owner(),
        }
    }

    fn task() -> Task {
        Task {
            task_id: "9".to_string(),
            task_title: "Write docs".to_string(),
            task_description: "All of them".to_string(),
            task_status: TaskStatus::InProgress,
            project_id: "3".to_string(),
            project_title: "Launch".to_string(),
            owner: owner(),
        }
    }

    #[test]
    fn test_keystroke_updates_error() {
        let mut title = Field::new(validation::TITLE);
        assert_eq!(title.error, None);
        title.set("a");
        assert_eq!(title.error, None);
        title.set("");
        assert_eq!(title.error, Some("Title should not be empty"));
    }

    #[test]
    fn test_trimmed_fields_strip_whitespace() {
        let mut name = Field::new(validation::FIRST_NAME).trimmed();
        name.set("  Al  ");
        assert_eq!(name.value, "Al");
        assert_eq!(
            name.error,
            Some("First name should be at least 3 characters")
        );

        let mut title = Field::new(validation::TITLE);
        title.set(" spaced ");
        assert_eq!(title.value, " spaced ");
    }

    #[test]
    fn test_validate_all_checks_every_field() {
        let mut form = TaskForm::default();
        assert!(!form.validate_all());
        assert_eq!(form.project.error, Some("Select a project"));
        assert_eq!(form.status.error, Some("Select a status"));
        assert_eq!(form.title.error, Some("Title should not be empty"));
        assert_eq!(form.description.error, Some("Description should not be empty"));
    }

    #[test]
    fn test_validate_all_ignores_stale_flags() {
        let mut form = ProjectForm::empty();
        form.title.value = "Typed without a keystroke event".to_string();
        form.description.value = "Also typed".to_string();
        assert!(form.validate_all());

        form.title.value.clear();
        assert!(!form.validate_all());
    }

    #[test]
    fn test_create_project_dialog_resets_to_empty() {
        let mut form = ProjectForm::empty();
        form.title.set("Draft");
        form.description.set("");
        form.reset();
        assert_eq!(form, ProjectForm::empty());
        assert_eq!(form.description.error, None);
    }

    #[test]
    fn test_edit_project_dialog_resets_to_entity() {
        let mut form = ProjectForm::for_edit(&project());
        form.title.set("");
        form.description.set("Changed");
        form.reset();
        assert_eq!(form, ProjectForm::for_edit(&project()));
        assert_eq!(form.title.value, "Launch");
        assert_eq!(form.title.error, None);
    }

    #[test]
    fn test_project_bodies() {
        let mut form = ProjectForm::for_edit(&project());
        form.title.set("Relaunch");
        assert_eq!(form.update().updated_project_title, "Relaunch");
        assert_eq!(form.update().updated_project_description, "Ship it");
        assert_eq!(form.new_project(&profile()).user_id, "7");
    }

    #[test]
    fn test_task_forms() {
        let mut form = TaskForm::default();
        form.project.set("3");
        form.status.set("To Do");
        form.title.set("T");
        form.description.set("D");
        assert!(form.validate_all());
        let body = form.new_task(&profile()).unwrap();
        assert_eq!(body.task_status, TaskStatus::ToDo);
        assert_eq!(body.project_id, "3");
        assert_eq!(body.task_user_id, "7");

        form.reset();
        assert_eq!(form, TaskForm::default());
    }

    #[test]
    fn test_task_edit_dialog_resets_to_entity() {
        let mut form = TaskEditForm::for_edit(&task());
        assert_eq!(form.status.value, "In Progress");
        form.status.set("Done");
        form.title.set("");
        assert_eq!(form.update().map(|u| u.task_status), Some(TaskStatus::Done));
        form.reset();
        assert_eq!(form, TaskEditForm::for_edit(&task()));
    }

    #[test]
    fn test_signup_request_requires_role() {
        let mut form = SignupForm::default();
        form.first_name.set("Ada");
        form.last_name.set("Lovelace");
        form.email.set("ada@example.com");
        form.password.set("secret1");
        assert!(!form.validate_all());
        assert_eq!(form.role.error, Some("Please select a role"));
        assert!(form.request().is_none());

        form.role.set("Admin");
        assert!(form.validate_all());
        assert_eq!(form.request().map(|r| r.role), Some(Role::Admin));
    }

    #[test]
    fn test_login_server_errors_route_to_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.apply_server_error("Invalid password"), None);
        assert_eq!(form.password.error, Some("Invalid password"));
        assert_eq!(form.email.error, None);

        assert_eq!(form.apply_server_error("Invalid email"), None);
        assert_eq!(form.email.error, Some("Invalid email"));

        assert_eq!(
            form.apply_server_error("Server down"),
            Some("Server down".to_string())
        );
    }
}
