use portfolio_common::{Theme, Variant};

// class names that depend on page state
//
// colors themselves come from the css variables scoped under .light/.dark, so
// most of what changes here is which modifier classes are attached

pub fn page(theme: Theme, variant: Variant) -> String {
    format!("portfolio {theme} {}", variant.class())
}

pub fn nav_link(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

pub fn mobile_nav_link(active: bool) -> &'static str {
    if active {
        "mobile-nav-link active"
    } else {
        "mobile-nav-link"
    }
}

pub fn theme_toggle(theme: Theme) -> &'static str {
    theme.pick("theme-toggle sun", "theme-toggle moon")
}

pub fn theme_switch(theme: Theme) -> &'static str {
    theme.pick("theme-switch", "theme-switch checked")
}

// width of a skill bar fill; percentages are validated on load but clamp anyway
// so a bad value never overflows its track
pub fn skill_fill_style(percentage: u8) -> String {
    format!("width: {}%;", percentage.min(100))
}

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {year} {name}. Crafted with passion.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_class_carries_theme_and_variant() {
        assert_eq!(page(Theme::Dark, Variant::Polished), "portfolio dark polished");
        assert_eq!(page(Theme::Light, Variant::Classic), "portfolio light classic");
    }

    #[test]
    fn only_active_links_are_marked() {
        assert_eq!(nav_link(true), "nav-link active");
        assert_eq!(nav_link(false), "nav-link");
        assert_eq!(mobile_nav_link(true), "mobile-nav-link active");
        assert_eq!(mobile_nav_link(false), "mobile-nav-link");
    }

    #[test]
    fn toggle_icons_follow_theme() {
        assert_eq!(theme_toggle(Theme::Light), "theme-toggle sun");
        assert_eq!(theme_toggle(Theme::Dark), "theme-toggle moon");
        assert_eq!(theme_switch(Theme::Dark), "theme-switch checked");
    }

    #[test]
    fn skill_fill_is_clamped() {
        assert_eq!(skill_fill_style(85), "width: 85%;");
        assert_eq!(skill_fill_style(250), "width: 100%;");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(
            copyright(2025, "Anuj Puri"),
            "© 2025 Anuj Puri. Crafted with passion."
        );
    }
}
