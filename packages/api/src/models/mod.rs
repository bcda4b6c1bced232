//! Taskify entities as they come off the wire, and the request bodies that
//! go back out.
//!
//! List endpoints return snake_case rows, which deserialize straight into the
//! view models here. Request bodies use the camelCase keys the API expects.

mod project;
mod task;
mod user;

pub use project::{NewProject, Project, ProjectUpdate};
pub use task::{NewTask, Task, TaskStatus, TaskUpdate};
pub use user::{can_edit_or_delete, initials, Owner, Role, UserProfile};

use serde::{Deserialize, Deserializer, Serialize};

/// Identifiers arrive as JSON numbers or strings; both become strings.
pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Str(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Num(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

/// `POST /login/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login/` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

/// `POST /signup/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of create/update responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
