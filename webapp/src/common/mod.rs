pub mod classes;
pub mod icons;
pub mod storage;
pub mod style;

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

// the parsed portfolio document, provided once by the app root
pub fn use_portfolio_config() -> std::rc::Rc<portfolio_common::PortfolioConfig> {
    dioxus::prelude::use_context()
}

// browser handles
//
// web_sys panics when touched off wasm, so host builds (tests, prerendering)
// always get None here and every caller takes its no-browser path
#[cfg(target_arch = "wasm32")]
pub fn browser_window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_window() -> Option<web_sys::Window> {
    None
}

pub fn browser_document() -> Option<web_sys::Document> {
    browser_window().and_then(|window| window.document())
}
