use dioxus::prelude::*;

use portfolio_common::Section;

use crate::{common::use_portfolio_config, components::section_title::SectionTitle};

#[component]
pub fn About() -> Element {
    let config = use_portfolio_config();
    let profile = &config.profile;

    rsx! {
        section { id: Section::About.id(), class: "page-section",
            div { class: "container",
                SectionTitle { title: "About Me" }
                div { class: "about-grid",
                    div { class: "avatar",
                        if config.site.variant.is_polished() {
                            div { class: "avatar-glow" }
                        }
                        div { class: "avatar-frame",
                            match &profile.photo {
                                Some(photo) => rsx! {
                                    img { src: "{photo}", alt: "{profile.name}" }
                                },
                                None => rsx! {
                                    div { class: "avatar-initials", "{profile.initials()}" }
                                },
                            }
                        }
                    }
                    div { class: "about-text",
                        for (i, paragraph) in profile.about.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}
