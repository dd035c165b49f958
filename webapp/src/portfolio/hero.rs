use dioxus::prelude::*;

use portfolio_common::Section;

use crate::{
    common::{
        icons::{Icon, IconKind},
        use_portfolio_config,
    },
    components::social::SocialRow,
};

#[component]
pub fn Hero() -> Element {
    let config = use_portfolio_config();
    let profile = &config.profile;
    let polished = config.site.variant.is_polished();

    rsx! {
        section { id: Section::Home.id(), class: "page-section hero",
            if polished {
                div { class: "hero-backdrop",
                    div { class: "hero-blob first" }
                    div { class: "hero-blob second" }
                }
            }

            div { class: "container fade-in",
                h1 { class: "hero-title",
                    "Hello, I'm "
                    br {}
                    span { class: "gradient-text", "{profile.name}" }
                }
                p { class: "hero-role",
                    "A passionate "
                    strong { class: "gradient-text", "{profile.role}" }
                }
                p { class: "hero-tagline", "{profile.tagline}" }

                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: Section::Contact.href(), "Contact Me" }
                    a { class: "btn btn-outline", href: Section::Projects.href(), "View Projects" }
                }

                SocialRow { links: config.socials.clone() }

                div { class: "discover",
                    a { href: Section::About.href(),
                        Icon { kind: IconKind::ArrowDown, size: 26 }
                        span { "Discover More" }
                    }
                }
            }
        }
    }
}
