use api::{ApiClient, UserProfile};
use dioxus::prelude::*;

use crate::forms::ProjectForm;
use crate::icons::FaPlus;
use crate::resource::{use_async_resource, ListView};
use crate::views::{ModalOverlay, ProjectFields};
use crate::{EmptyView, FailureView, Icon, Loader, ProjectItem};

/// Searchable project list with a "Create Project" dialog.
///
/// Creating needs the owner's id, so the button waits for `profile`.
#[component]
pub fn ProjectsView(client: ApiClient, profile: Option<UserProfile>) -> Element {
    let mut search = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut draft = use_signal(ProjectForm::empty);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut create_error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut projects = use_async_resource(move || {
        let client = list_client.clone();
        let query = search();
        async move { client.list_projects(&query).await }
    });

    let close_dialog = move |_: ()| {
        draft.write().reset();
        create_error.set(None);
        creating.set(false);
    };

    let create_client = client.clone();
    let owner = profile.clone();
    let submit_create = move |evt: FormEvent| {
        evt.prevent_default();
        if !draft.write().validate_all() {
            return;
        }
        let Some(owner) = owner.as_ref() else {
            return;
        };
        let body = draft.read().new_project(owner);
        let client = create_client.clone();
        spawn(async move {
            match client.create_project(&body).await {
                Ok(message) => {
                    tracing::info!("created project {}", body.project_title);
                    draft.write().reset();
                    create_error.set(None);
                    creating.set(false);
                    notice.set(Some(
                        message.unwrap_or_else(|| "Project created successfully".to_string()),
                    ));
                    projects.retry();
                }
                Err(e) => {
                    tracing::error!("failed to create project: {e}");
                    create_error.set(Some(e.message()));
                }
            }
        });
    };

    let state = projects.state();
    let listing = match state.list_view() {
        ListView::Loading => rsx! { Loader {} },
        ListView::Empty => rsx! { EmptyView {} },
        ListView::Failure => rsx! {
            FailureView { on_retry: move |_| projects.retry() }
        },
        ListView::List => {
            let rows = state.success().cloned().unwrap_or_default();
            rsx! {
                ul {
                    class: "item-list",
                    for project in rows {
                        ProjectItem {
                            key: "{project.project_id}",
                            client: client.clone(),
                            project,
                            profile: profile.clone(),
                            on_changed: move |_| projects.retry(),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "screen",
            div {
                class: "screen-toolbar",
                h2 { class: "screen-title", "Projects" }
                input {
                    class: "form-input search-input",
                    r#type: "search",
                    placeholder: "Search projects",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: profile.is_none(),
                    onclick: move |_| {
                        notice.set(None);
                        creating.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Create Project"
                }
            }
            if let Some(message) = notice() {
                p { class: "notice-text", "{message}" }
            }
            {listing}
        }
        if creating() {
            ModalOverlay {
                title: "Create Project",
                on_close: close_dialog,
                form {
                    class: "modal-form",
                    onsubmit: submit_create,
                    ProjectFields { form: draft }
                    if let Some(message) = create_error() {
                        p { class: "error-text", "{message}" }
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn btn-primary", r#type: "submit", "Create" }
                    }
                }
            }
        }
    }
}
