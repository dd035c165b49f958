use dioxus::prelude::*;
use tracing::{debug, error};

use portfolio_common::Theme;

use crate::common::{browser_document, storage::Persisted};

impl Persisted for Theme {
    const KEY: &'static str = "theme";
}

// ThemeController
//
// a copyable handle to the page theme.  the desktop button and the mobile switch
// both go through toggle(), which keeps the signal, local storage and the body
// class in step
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeController {
    theme: Signal<Theme>,
}

impl ThemeController {
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        debug!("switching to {next} theme");

        self.theme.set(next);
        next.store();
        apply_body_class(next);
    }
}

// installs the theme controller for everything below the calling component
//
// a stored preference wins over the configured default
pub fn use_theme_provider(default: Theme) -> ThemeController {
    let theme = use_signal(|| Theme::fetch().unwrap_or(default));

    use_hook(move || apply_body_class(*theme.peek()));

    use_context_provider(|| ThemeController { theme })
}

pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}

// the body sits outside the dioxus root, so the page background has to be
// switched by hand
fn apply_body_class(theme: Theme) {
    let Some(body) = browser_document().and_then(|document| document.body()) else {
        return;
    };

    if let Err(err) = body.class_list().toggle_with_force("dark", theme.is_dark()) {
        error!("failed to update body class: {err:?}");
    }
}
