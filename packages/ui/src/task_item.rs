use api::{can_edit_or_delete, ApiClient, Task, UserProfile};
use dioxus::prelude::*;

use crate::forms::TaskEditForm;
use crate::icons::{FaPen, FaTrash};
use crate::views::{ConfirmDialog, ModalOverlay, TaskEditFields};
use crate::{Icon, OwnerBadge};

/// One task card: status badge, parent project, owner, gated controls.
#[component]
pub fn TaskItem(
    client: ApiClient,
    task: Task,
    profile: Option<UserProfile>,
    on_changed: EventHandler<()>,
) -> Element {
    let allowed = can_edit_or_delete(profile.as_ref(), &task.owner);
    let mut editing = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let origin = task.clone();
    let mut draft = use_signal(move || TaskEditForm::for_edit(&origin));

    let current = task.clone();
    let open_editor = move |_: MouseEvent| {
        draft.set(TaskEditForm::for_edit(&current));
        editing.set(true);
    };

    let close_editor = move |_: ()| {
        draft.write().reset();
        error.set(None);
        editing.set(false);
    };

    let edit_client = client.clone();
    let task_id = task.task_id.clone();
    let submit_edit = move |evt: FormEvent| {
        evt.prevent_default();
        if !draft.write().validate_all() {
            return;
        }
        let Some(update) = draft.read().update() else {
            return;
        };
        let client = edit_client.clone();
        let task_id = task_id.clone();
        spawn(async move {
            match client.update_task(&task_id, &update).await {
                Ok(_) => {
                    tracing::info!("updated task {task_id}");
                    editing.set(false);
                    error.set(None);
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::error!("failed to update task {task_id}: {e}");
                    error.set(Some(e.message()));
                }
            }
        });
    };

    let delete_client = client.clone();
    let delete_id = task.task_id.clone();
    let confirm_delete = move |_: ()| {
        let client = delete_client.clone();
        let task_id = delete_id.clone();
        deleting.set(false);
        spawn(async move {
            match client.delete_task(&task_id).await {
                Ok(()) => {
                    tracing::info!("deleted task {task_id}");
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::error!("failed to delete task {task_id}: {e}");
                    error.set(Some(e.message()));
                }
            }
        });
    };

    let badge = task.task_status.badge_class();

    rsx! {
        li {
            class: "item-card",
            div {
                class: "item-main",
                div {
                    class: "item-heading",
                    h3 { class: "item-title", "{task.task_title}" }
                    span { class: "status-badge {badge}", "{task.task_status}" }
                }
                p { class: "item-project", "{task.project_title}" }
                p { class: "item-description", "{task.task_description}" }
            }
            div {
                class: "item-footer",
                OwnerBadge { owner: task.owner.clone() }
                div {
                    class: "item-actions",
                    button {
                        class: "btn btn-outline",
                        disabled: !allowed,
                        onclick: open_editor,
                        Icon { icon: FaPen, width: 14, height: 14 }
                        "Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: !allowed,
                        onclick: move |_| deleting.set(true),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                        "Delete"
                    }
                }
            }
            if !editing() {
                if let Some(message) = error() {
                    p { class: "error-text", "{message}" }
                }
            }
        }
        if editing() {
            ModalOverlay {
                title: "Edit Task",
                on_close: close_editor,
                form {
                    class: "modal-form",
                    onsubmit: submit_edit,
                    TaskEditFields { form: draft }
                    if let Some(message) = error() {
                        p { class: "error-text", "{message}" }
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
        if deleting() {
            ConfirmDialog {
                title: "Delete this task?",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(false),
            }
        }
    }
}
