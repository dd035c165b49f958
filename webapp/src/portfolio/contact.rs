use dioxus::prelude::*;
use tracing::debug;

use portfolio_common::Section;

use crate::{
    common::use_portfolio_config,
    components::{section_title::SectionTitle, social::ContactItem},
};

// the form is display-only: submitting it must not reload the page, and nothing
// is sent anywhere
#[component]
fn ContactForm() -> Element {
    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                debug!("contact form submitted, no handler is configured");
            },
            div { class: "form-field",
                label { r#for: "name", "Name" }
                input { r#type: "text", id: "name", name: "name", required: true }
            }
            div { class: "form-field",
                label { r#for: "email", "Email" }
                input { r#type: "email", id: "email", name: "email", required: true }
            }
            div { class: "form-field",
                label { r#for: "message", "Message" }
                textarea { id: "message", name: "message", rows: "4", required: true }
            }
            button { r#type: "submit", class: "btn btn-primary", "Send Message" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_portfolio_config();
    let contact = &config.contact;

    rsx! {
        section { id: Section::Contact.id(), class: "page-section",
            div { class: "container",
                SectionTitle { title: "Get In Touch" }
                div { class: "two-columns",
                    div { class: "card panel",
                        p { class: "contact-intro", "{contact.intro}" }
                        for item in contact.items.iter() {
                            ContactItem { key: "{item.href}", link: item.clone() }
                        }
                    }
                    div { class: "card panel", ContactForm {} }
                }
            }
        }
    }
}
