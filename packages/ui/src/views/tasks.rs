use api::{ApiClient, Project, TaskStatus, UserProfile};
use dioxus::prelude::*;

use crate::forms::TaskForm;
use crate::icons::{FaPlus, FaRotateRight};
use crate::resource::{use_async_resource, ListView, RequestState};
use crate::views::{ModalOverlay, TaskFields};
use crate::{EmptyView, FailureView, Icon, Loader, TaskItem};

/// Message to show when the project picker fetch failed.
fn picker_failure(state: &RequestState<Vec<Project>>) -> Option<String> {
    state.failure().map(|err| err.message())
}

/// Task list with search, a status filter and a "Create Task" dialog.
///
/// Creating needs the owner's id, so the button waits for `profile`.
#[component]
pub fn TasksView(client: ApiClient, profile: Option<UserProfile>) -> Element {
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| Option::<TaskStatus>::None);
    let mut creating = use_signal(|| false);
    let mut draft = use_signal(TaskForm::default);
    let mut create_error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut tasks = use_async_resource(move || {
        let client = list_client.clone();
        let query = search();
        let status = status_filter();
        async move { client.list_tasks(&query, status).await }
    });

    // Unfiltered, for the project picker.
    let picker_client = client.clone();
    let mut picker = use_async_resource(move || {
        let client = picker_client.clone();
        async move { client.list_projects("").await }
    });
    let picker_state = picker.state();
    let projects = picker_state.success().cloned().unwrap_or_default();
    let picker_error = picker_failure(&picker_state);

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
        let Some(body) = draft.read().new_task(owner) else {
            return;
        };
        let client = create_client.clone();
        spawn(async move {
            match client.create_task(&body).await {
                Ok(_) => {
                    tracing::info!("created task {}", body.task_title);
                    draft.write().reset();
                    create_error.set(None);
                    creating.set(false);
                    tasks.retry();
                }
                Err(e) => {
                    tracing::error!("failed to create task: {e}");
                    create_error.set(Some(e.message()));
                }
            }
        });
    };

    let state = tasks.state();
    let listing = match state.list_view() {
        ListView::Loading => rsx! { Loader {} },
        ListView::Empty => rsx! { EmptyView {} },
        ListView::Failure => rsx! {
            FailureView { on_retry: move |_| tasks.retry() }
        },
        ListView::List => {
            let rows = state.success().cloned().unwrap_or_default();
            rsx! {
                ul {
                    class: "item-list",
                    for task in rows {
                        TaskItem {
                            key: "{task.task_id}",
                            client: client.clone(),
                            task,
                            profile: profile.clone(),
                            on_changed: move |_| tasks.retry(),
                        }
                    }
                }
            }
        }
    };

    let filter_value = status_filter().map(|s| s.as_str()).unwrap_or_default();

    rsx! {
        section {
            class: "screen",
            div {
                class: "screen-toolbar",
                h2 { class: "screen-title", "Tasks" }
                input {
                    class: "form-input search-input",
                    r#type: "search",
                    placeholder: "Search tasks",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "form-input status-filter",
                    value: "{filter_value}",
                    onchange: move |evt: FormEvent| status_filter.set(TaskStatus::parse(&evt.value())),
                    option { value: "", "All" }
                    for status in TaskStatus::ALL {
                        option {
                            key: "{status}",
                            value: "{status}",
                            selected: status_filter() == Some(status),
                            "{status}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: profile.is_none(),
                    onclick: move |_| creating.set(true),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Create Task"
                }
            }
            {listing}
        }
        if creating() {
            ModalOverlay {
                title: "Create Task",
                on_close: close_dialog,
                form {
                    class: "modal-form",
                    onsubmit: submit_create,
                    TaskFields { form: draft, projects }
                    if let Some(message) = picker_error {
                        div {
                            class: "picker-error",
                            p { class: "error-text", "Could not load projects: {message}" }
                            button {
                                class: "btn btn-outline",
                                r#type: "button",
                                onclick: move |_| picker.retry(),
                                Icon { icon: FaRotateRight, width: 14, height: 14 }
                                "Retry"
                            }
                        }
                    }
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

#[cfg(test)]
mod tests {
    use api::ApiError;

    use super::*;

    #[test]
    fn test_picker_failure_is_reported_not_swallowed() {
        let failed = RequestState::Failure(ApiError::Network("connection refused".into()));
        assert_eq!(
            picker_failure(&failed),
            Some("Could not reach the server".to_string())
        );
        assert_eq!(picker_failure(&RequestState::Success(vec![])), None);
        assert_eq!(picker_failure(&RequestState::InProgress), None);
    }
}
