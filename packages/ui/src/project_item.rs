use api::{can_edit_or_delete, ApiClient, Project, UserProfile};
use dioxus::prelude::*;

use crate::forms::ProjectForm;
use crate::icons::{FaPen, FaTrash};
use crate::views::{ConfirmDialog, ModalOverlay, ProjectFields};
use crate::{Icon, OwnerBadge};

/// One project card with owner badge and gated Edit/Delete controls.
///
/// Both controls stay disabled until `profile` has loaded.
///
/// `on_changed` fires after a successful edit or delete so the parent list
/// can re-fetch.
#[component]
pub fn ProjectItem(
    client: ApiClient,
    project: Project,
    profile: Option<UserProfile>,
    on_changed: EventHandler<()>,
) -> Element {
    let allowed = can_edit_or_delete(profile.as_ref(), &project.owner);
    let mut editing = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let origin = project.clone();
    let mut draft = use_signal(move || ProjectForm::for_edit(&origin));

    let current = project.clone();
    let open_editor = move |_: MouseEvent| {
        draft.set(ProjectForm::for_edit(&current));
        editing.set(true);
    };

    let close_editor = move |_: ()| {
        draft.write().reset();
        error.set(None);
        editing.set(false);
    };

    let edit_client = client.clone();
    let project_id = project.project_id.clone();
    let submit_edit = move |evt: FormEvent| {
        evt.prevent_default();
        if !draft.write().validate_all() {
            return;
        }
        let client = edit_client.clone();
        let project_id = project_id.clone();
        let update = draft.read().update();
        spawn(async move {
            match client.update_project(&project_id, &update).await {
                Ok(_) => {
                    tracing::info!("updated project {project_id}");
                    editing.set(false);
                    error.set(None);
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::error!("failed to update project {project_id}: {e}");
                    error.set(Some(e.message()));
                }
            }
        });
    };

    let delete_client = client.clone();
    let delete_id = project.project_id.clone();
    let confirm_delete = move |_: ()| {
        let client = delete_client.clone();
        let project_id = delete_id.clone();
        deleting.set(false);
        spawn(async move {
            match client.delete_project(&project_id).await {
                Ok(()) => {
                    tracing::info!("deleted project {project_id}");
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::error!("failed to delete project {project_id}: {e}");
                    error.set(Some(e.message()));
                }
            }
        });
    };

    rsx! {
        li {
            class: "item-card",
            div {
                class: "item-main",
                h3 { class: "item-title", "{project.project_title}" }
                p { class: "item-description", "{project.project_description}" }
            }
            div {
                class: "item-footer",
                OwnerBadge { owner: project.owner.clone() }
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
                title: "Edit Project",
                on_close: close_editor,
                form {
                    class: "modal-form",
                    onsubmit: submit_edit,
                    ProjectFields { form: draft }
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
                title: "Delete this project?",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{Owner, Role};
    use dioxus::dioxus_core::{AttributeValue, Mutation};
    use store::TaskifyConfig;

    use super::*;

    thread_local! {
        static VIEWER: RefCell<Option<UserProfile>> = const { RefCell::new(None) };
    }

    fn viewer(user_id: &str, role: Role) -> UserProfile {
        UserProfile {
            user_id: user_id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role,
            email_id: "ada@example.com".to_string(),
        }
    }

    #[allow(non_snake_case)]
    fn OwnedProject() -> Element {
        let profile = VIEWER.with(|viewer| viewer.borrow().clone());
        rsx! {
            ProjectItem {
                client: ApiClient::new(&TaskifyConfig::default()),
                project: Project {
                    project_id: "3".to_string(),
                    project_title: "Launch".to_string(),
                    project_description: "Ship it".to_string(),
                    owner: Owner {
                        user_id: "u-1".to_string(),
                        first_name: "Grace".to_string(),
                        last_name: "Hopper".to_string(),
                        role: Role::Member,
                        email_id: "grace@example.com".to_string(),
                    },
                },
                profile,
                on_changed: |_| {},
            }
        }
    }

    /// `disabled` values written by the first render, in document order.
    fn disabled_flags(profile: Option<UserProfile>) -> Vec<bool> {
        VIEWER.with(|viewer| *viewer.borrow_mut() = profile);
        let mut dom = VirtualDom::new(OwnedProject);
        let mutations = dom.rebuild_to_vec();
        mutations
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: "disabled",
                    value: AttributeValue::Bool(flag),
                    ..
                } => Some(flag),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_controls_disabled_until_profile_loads() {
        assert_eq!(disabled_flags(None), vec![true, true]);
    }

    #[test]
    fn test_controls_follow_ownership_once_profile_loads() {
        assert!(!disabled_flags(Some(viewer("u-1", Role::Member))).contains(&true));
        assert!(!disabled_flags(Some(viewer("u-9", Role::Admin))).contains(&true));
        assert_eq!(
            disabled_flags(Some(viewer("u-9", Role::Member))),
            vec![true, true]
        );
    }
}
