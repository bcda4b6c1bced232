mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod fields;
pub use fields::{
    project_options, status_options, FieldInput, ProjectFields, SelectInput, TaskEditFields,
    TaskFields,
};

mod app_frame;
pub use app_frame::AppFrame;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod projects;
pub use projects::ProjectsView;

mod tasks;
pub use tasks::TasksView;
