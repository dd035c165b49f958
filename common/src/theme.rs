use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    // pick between two values depending on the theme, which is how most of the
    // conditional class names in the webapp are built
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pick("light", "dark"))
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(anyhow::Error::msg(format!("unknown theme: {s}"))),
        }
    }
}

// visual variant
//
// the polished variant layers gradients, blur and animations on top of the
// classic markup.  nothing behavioral depends on it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Polished,
    Classic,
}

impl Variant {
    pub fn is_polished(self) -> bool {
        self == Self::Polished
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Polished => "polished",
            Self::Classic => "classic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn pick_follows_theme() {
        assert_eq!(Theme::Light.pick("sun", "moon"), "sun");
        assert_eq!(Theme::Dark.pick("sun", "moon"), "moon");
    }

    #[test]
    fn parse_and_display_agree() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Variant>("\"classic\"").unwrap(),
            Variant::Classic
        );
    }
}
