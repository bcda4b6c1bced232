//! # API crate: typed client for the remote Taskify REST API
//!
//! The web client owns no business data. Everything it shows comes through
//! this crate: [`ApiClient`] issues the HTTP calls, [`models`] holds the
//! records they carry, and [`ApiError`] classifies what went wrong.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-based client: login, signup, profile, project and task CRUD |
//! | [`error`] | Request failure taxonomy (network, 401, other status, decode) |
//! | [`models`] | `UserProfile`, `Project`, `Task`, request bodies, permission gate |

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    can_edit_or_delete, LoginRequest, NewProject, NewTask, Owner, Project, ProjectUpdate, Role,
    SignupRequest, Task, TaskStatus, TaskUpdate, UserProfile,
};
