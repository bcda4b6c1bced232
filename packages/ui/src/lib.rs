//! Shared UI for the Taskify client: form state, validation, the request
//! status machine and the Dioxus components every platform renders.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validation`] | Per-field rules and their messages |
//! | [`forms`] | Form state for login, signup and the project/task dialogs |
//! | [`resource`] | `RequestState` and the `use_async_resource` hook |
//! | [`views`] | Screens and dialogs; platforms wire in navigation |

pub mod forms;
pub mod resource;
pub mod validation;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod status_views;
pub use status_views::{EmptyView, FailureView, Loader};

mod header;
pub use header::Header;

mod side_nav;
pub use side_nav::{NavTab, SideNav};

mod owner_badge;
pub use owner_badge::OwnerBadge;

mod project_item;
pub use project_item::ProjectItem;

mod task_item;
pub use task_item::TaskItem;

pub use resource::{use_async_resource, AsyncResource, ListView, RequestState};
