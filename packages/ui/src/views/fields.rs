//! Labelled inputs bound to [`Field`] values, and the field groups the
//! project and task dialogs share.

use api::{Project, TaskStatus};
use dioxus::prelude::*;

use crate::forms::{Field, ProjectForm, TaskEditForm, TaskForm};

/// Text input or textarea with its error line underneath.
#[component]
pub fn FieldInput(
    id: String,
    label: String,
    field: Field,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] multiline: bool,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", class: "form-label", "{label}" }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "form-input",
                    rows: "4",
                    placeholder: "{placeholder}",
                    value: "{field.value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "form-input",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{field.value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
            if let Some(error) = field.error {
                p { class: "error-text", "{error}" }
            }
        }
    }
}

/// Select box whose empty value means "nothing chosen".
#[component]
pub fn SelectInput(
    id: String,
    label: String,
    field: Field,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", class: "form-label", "{label}" }
            select {
                id: "{id}",
                class: "form-input",
                value: "{field.value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", "{placeholder}" }
                for (value, text) in options {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == field.value,
                        "{text}"
                    }
                }
            }
            if let Some(error) = field.error {
                p { class: "error-text", "{error}" }
            }
        }
    }
}

pub fn status_options() -> Vec<(String, String)> {
    TaskStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

pub fn project_options(projects: &[Project]) -> Vec<(String, String)> {
    projects
        .iter()
        .map(|p| (p.project_id.clone(), p.project_title.clone()))
        .collect()
}

#[component]
pub fn ProjectFields(form: Signal<ProjectForm>) -> Element {
    let mut form = form;
    let current = form.read().clone();
    rsx! {
        FieldInput {
            id: "project-title",
            label: "Title",
            field: current.title,
            placeholder: "Project title",
            oninput: move |value: String| form.write().title.set(value),
        }
        FieldInput {
            id: "project-description",
            label: "Description",
            field: current.description,
            placeholder: "What is this project about?",
            multiline: true,
            oninput: move |value: String| form.write().description.set(value),
        }
    }
}

/// Create-task fields. `projects` feeds the project picker.
#[component]
pub fn TaskFields(form: Signal<TaskForm>, projects: Vec<Project>) -> Element {
    let mut form = form;
    let current = form.read().clone();
    rsx! {
        SelectInput {
            id: "task-project",
            label: "Project",
            field: current.project,
            options: project_options(&projects),
            placeholder: "Select project",
            onchange: move |value: String| form.write().project.set(value),
        }
        SelectInput {
            id: "task-status",
            label: "Status",
            field: current.status,
            options: status_options(),
            placeholder: "Select status",
            onchange: move |value: String| form.write().status.set(value),
        }
        FieldInput {
            id: "task-title",
            label: "Title",
            field: current.title,
            placeholder: "Task title",
            oninput: move |value: String| form.write().title.set(value),
        }
        FieldInput {
            id: "task-description",
            label: "Description",
            field: current.description,
            multiline: true,
            oninput: move |value: String| form.write().description.set(value),
        }
    }
}

#[component]
pub fn TaskEditFields(form: Signal<TaskEditForm>) -> Element {
    let mut form = form;
    let current = form.read().clone();
    rsx! {
        FieldInput {
            id: "edit-task-title",
            label: "Title",
            field: current.title,
            oninput: move |value: String| form.write().title.set(value),
        }
        FieldInput {
            id: "edit-task-description",
            label: "Description",
            field: current.description,
            multiline: true,
            oninput: move |value: String| form.write().description.set(value),
        }
        SelectInput {
            id: "edit-task-status",
            label: "Status",
            field: current.status,
            options: status_options(),
            placeholder: "Select status",
            onchange: move |value: String| form.write().status.set(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_cover_every_status() {
        let options = status_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[1], ("In Progress".to_string(), "In Progress".to_string()));
    }
}
