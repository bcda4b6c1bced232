use api::ApiClient;
use dioxus::prelude::*;

use crate::forms::LoginForm;
use crate::icons::{FaEye, FaEyeSlash, FaListCheck};
use crate::views::FieldInput;
use crate::Icon;

/// Email/password login form.
///
/// `on_logged_in` receives the bearer token; the platform stores it and
/// navigates away.
#[component]
pub fn LoginView(client: ApiClient, on_logged_in: EventHandler<String>) -> Element {
    let mut form = use_signal(LoginForm::default);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut server_error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        server_error.set(None);
        if !form.write().validate_all() {
            return;
        }
        let request = form.read().request();
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.login(&request).await {
                Ok(token) => {
                    tracing::info!("logged in as {}", request.email);
                    on_logged_in.call(token);
                }
                Err(e) => {
                    tracing::warn!("login rejected: {e}");
                    let unrouted = form.write().apply_server_error(&e.message());
                    server_error.set(unrouted);
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
                onsubmit: handle_login,
                div {
                    class: "auth-logo",
                    Icon { icon: FaListCheck, width: 28, height: 28 }
                    h1 { "Taskify" }
                }
                FieldInput {
                    id: "login-email",
                    label: "Email",
                    field: current.email,
                    placeholder: "Enter your email",
                    oninput: move |value: String| form.write().email.set(value),
                }
                div {
                    class: "password-row",
                    FieldInput {
                        id: "login-password",
                        label: "Password",
                        field: current.password,
                        input_type: password_type.to_string(),
                        placeholder: "Enter your password",
                        oninput: move |value: String| form.write().password.set(value),
                    }
                    button {
                        class: "password-toggle",
                        r#type: "button",
                        title: if show_password() { "Hide password" } else { "Show password" },
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
                    if submitting() { "Logging in..." } else { "Login" }
                }
                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: "/signup", "Sign up" }
                }
            }
        }
    }
}
