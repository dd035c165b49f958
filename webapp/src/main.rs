#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use portfolio_common::PortfolioConfig;

mod common;

mod components;
use components::navigation::NavBar;

mod portfolio;
use portfolio::{NotFound, Portfolio};

mod theme;
use theme::use_theme_provider;

mod tracker;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Portfolio {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[derive(Clone, PartialEq, Props)]
struct ConfiguredAppProps {
    config: Rc<PortfolioConfig>,
}

// everything below here can assume a valid configuration
#[component]
fn ConfiguredApp(props: ConfiguredAppProps) -> Element {
    let config = use_context_provider(|| props.config.clone());
    use_theme_provider(config.site.default_theme);

    rsx! {
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
pub fn App() -> Element {
    // the configuration is compiled in, so a failure here is a build problem; show
    // it instead of rendering a half-empty page
    let config = use_hook(|| {
        PortfolioConfig::bundled()
            .map(Rc::new)
            .map_err(|err| format!("{err:#}"))
            .inspect_err(|err| error!("{err}"))
    });

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        match config {
            Ok(config) => rsx! {
                ConfiguredApp { config }
            },
            Err(err) => rsx! {
                div { class: "config-error",
                    h1 { "The portfolio could not be loaded" }
                    pre { "{err}" }
                }
            },
        }
    }
}
