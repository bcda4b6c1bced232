use api::Owner;
use dioxus::prelude::*;

/// Initials bubble for a record's creator, with name, role and email.
#[component]
pub fn OwnerBadge(owner: Owner) -> Element {
    let initials = owner.initials();
    let name = owner.full_name();
    rsx! {
        div {
            class: "owner-badge",
            span { class: "initials-badge", "{initials}" }
            div {
                class: "owner-details",
                p { class: "owner-name", "{name}" }
                p { class: "owner-meta", "{owner.role} · {owner.email_id}" }
            }
        }
    }
}
