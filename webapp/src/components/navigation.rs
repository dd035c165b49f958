use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio_common::Section;

use crate::{
    Route,
    common::{
        classes,
        icons::{Icon, IconKind},
        use_portfolio_config,
    },
    theme::use_theme,
    tracker::{use_active_section, use_section_tracker},
};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: Section,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let section = props.section;
    let active = use_active_section().is(section);

    rsx! {
        a { class: classes::nav_link(active), href: section.href(),
            "{section.title()}"
            if active {
                span { class: "nav-indicator" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobileNavLinkProps {
    section: Section,
    onclick: EventHandler<MouseEvent>,
}

#[component]
fn MobileNavLink(props: MobileNavLinkProps) -> Element {
    let section = props.section;
    let active = use_active_section().is(section);

    rsx! {
        a {
            class: classes::mobile_nav_link(active),
            href: section.href(),
            onclick: move |evt| props.onclick.call(evt),
            "{section.title()}"
        }
    }
}

// desktop toggle button
#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme.theme();

    rsx! {
        button {
            class: classes::theme_toggle(current),
            aria_label: "Toggle dark mode",
            onclick: move |_| theme.toggle(),
            Icon { kind: current.pick(IconKind::Sun, IconKind::Moon), size: 20 }
        }
    }
}

// mobile switch, a checkbox styled as a slider
#[component]
fn ThemeSwitch() -> Element {
    let mut theme = use_theme();
    let current = theme.theme();

    rsx! {
        label { class: classes::theme_switch(current),
            input {
                r#type: "checkbox",
                class: "sr-only",
                aria_label: "Toggle dark mode",
                checked: current.is_dark(),
                onchange: move |_| theme.toggle(),
            }
            span { class: "knob",
                Icon { kind: current.pick(IconKind::Sun, IconKind::Moon), size: 12 }
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_portfolio_config();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "app-header",
            div { class: "container nav-container",
                a { class: "brand", href: Section::Home.href(), "{config.brand()}" }

                div { class: "nav-links",
                    for section in Section::ALL {
                        NavLink { key: "{section}", section }
                    }
                    ThemeToggle {}
                }

                div { class: "mobile-controls",
                    ThemeSwitch {}
                    button {
                        class: "menu-button",
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            Icon { kind: IconKind::X }
                        } else {
                            Icon { kind: IconKind::Menu }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for section in Section::ALL {
                        MobileNavLink {
                            key: "{section}",
                            section,
                            onclick: move |_| menu_open.set(false),
                        }
                    }
                }
            }
        }
    }
}

// NavBar
//
// layout for the portfolio page.  the section tracker is installed here so the
// scroll listener lives exactly as long as the page does, and both nav lists read
// the active section from it
#[component]
pub fn NavBar() -> Element {
    let config = use_portfolio_config();
    let theme = use_theme();

    use_section_tracker(config.tracker.clone());

    rsx! {
        div { class: classes::page(theme.theme(), config.site.variant),
            NavBarInner {}
            Outlet::<Route> {}
        }
    }
}
