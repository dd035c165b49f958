use dioxus::prelude::*;

use portfolio_common::content::SocialLink;

use crate::common::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct SocialIconProps {
    link: SocialLink,
    #[props(default = 26)]
    size: u32,
}

#[component]
pub fn SocialIcon(props: SocialIconProps) -> Element {
    let link = props.link;

    rsx! {
        a {
            class: "social-icon",
            href: link.url(),
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{link.label}",
            Icon { kind: IconKind::from(link.kind), size: props.size }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SocialRowProps {
    links: Vec<SocialLink>,
    #[props(default = 26)]
    size: u32,
}

#[component]
pub fn SocialRow(props: SocialRowProps) -> Element {
    rsx! {
        div { class: "social-row",
            for link in props.links.iter() {
                SocialIcon { key: "{link.href}", link: link.clone(), size: props.size }
            }
        }
    }
}

// contact list entry: icon badge followed by the visible label
#[derive(Clone, PartialEq, Props)]
pub struct ContactItemProps {
    link: SocialLink,
}

#[component]
pub fn ContactItem(props: ContactItemProps) -> Element {
    let link = props.link;

    rsx! {
        a {
            class: "contact-item",
            href: link.url(),
            target: "_blank",
            rel: "noopener noreferrer",
            span { class: "icon-badge",
                Icon { kind: IconKind::from(link.kind) }
            }
            span { "{link.label}" }
        }
    }
}
