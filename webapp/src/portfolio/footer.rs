use dioxus::prelude::*;

use crate::{
    common::{classes, current_year, use_portfolio_config},
    components::social::SocialRow,
};

#[component]
pub fn Footer() -> Element {
    let config = use_portfolio_config();
    let copyright = classes::copyright(current_year(), &config.profile.name);

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { class: "copyright", "{copyright}" }
                if !config.footer_links.is_empty() {
                    div { class: "footer-links",
                        for link in config.footer_links.iter() {
                            a { key: "{link.href}", href: link.url(), "{link.label}" }
                        }
                    }
                }
                SocialRow { links: config.socials.clone(), size: 22 }
            }
        }
    }
}
