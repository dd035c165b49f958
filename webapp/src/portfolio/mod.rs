use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;

// the whole portfolio is one page; each section carries the element id the
// tracker looks up
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        main {
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
        }
        Footer {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Nothing here" }
            p { "There is no page at /{path}." }
            Link { to: Route::Portfolio {}, class: "btn btn-primary", "Back to the portfolio" }
        }
    }
}
