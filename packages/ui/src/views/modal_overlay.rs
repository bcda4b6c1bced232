use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a dialog card.
/// Clicking outside the card, or the close button, triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Yes/No confirmation inside a [`ModalOverlay`].
#[component]
pub fn ConfirmDialog(
    title: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title,
            on_close: on_cancel,
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
