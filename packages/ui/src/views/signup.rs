use api::{ApiClient, Role};
use dioxus::prelude::*;

use crate::forms::SignupForm;
use crate::icons::{FaEye, FaEyeSlash, FaListCheck};
use crate::views::{FieldInput, SelectInput};
use crate::Icon;

fn role_options() -> Vec<(String, String)> {
    Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
        .collect()
}

/// Account registration. `on_signed_up` fires once the server accepts it.
#[component]
pub fn SignupView(client: ApiClient, on_signed_up: EventHandler<()>) -> Element {
    let mut form = use_signal(SignupForm::default);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut server_error = use_signal(|| Option::<String>::None);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        server_error.set(None);
        if !form.write().validate_all() {
            return;
        }
        let Some(request) = form.read().request() else {
            return;
        };
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.signup(&request).await {
                Ok(_) => {
                    tracing::info!("registered {}", request.email);
                    on_signed_up.call(());
                }
                Err(e) => {
                    tracing::warn!("signup rejected: {e}");
                    server_error.set(Some(e.message()));
                    submitting.set(false);
                }
            }
        });
    };

    let current = form.read().clone();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_signup,
                div {
                    class: "auth-logo",
                    Icon { icon: FaListCheck, width: 28, height: 28 }
                    h1 { "Create your account" }
                }
                div {
                    class: "form-row",
                    FieldInput {
                        id: "signup-first-name",
                        label: "First name",
                        field: current.first_name,
                        oninput: move |value: String| form.write().first_name.set(value),
                    }
                    FieldInput {
                        id: "signup-last-name",
                        label: "Last name",
                        field: current.last_name,
                        oninput: move |value: String| form.write().last_name.set(value),
                    }
                }
                SelectInput {
                    id: "signup-role",
                    label: "Role",
                    field: current.role,
                    options: role_options(),
                    placeholder: "Select role",
                    onchange: move |value: String| form.write().role.set(value),
                }
                FieldInput {
                    id: "signup-email",
                    label: "Email",
                    field: current.email,
                    placeholder: "you@example.com",
                    oninput: move |value: String| form.write().email.set(value),
                }
                div {
                    class: "password-row",
                    FieldInput {
                        id: "signup-password",
                        label: "Password",
                        field: current.password,
                        input_type: password_type.to_string(),
                        oninput: move |value: String| form.write().password.set(value),
                    }
                    button {
                        class: "password-toggle",
                        r#type: "button",
                        onclick: move |_| show_password.toggle(),
                        if show_password() {
                            Icon { icon: FaEyeSlash, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaEye, width: 16, height: 16 }
                        }
                    }
                }
                if let Some(message) = server_error() {
                    p { class: "error-text", "{message}" }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    "Sign up"
                }
                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: "/login", "Login" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_options() {
        assert_eq!(
            role_options(),
            vec![
                ("Admin".to_string(), "Admin".to_string()),
                ("Member".to_string(), "Member".to_string()),
            ]
        );
    }
}
