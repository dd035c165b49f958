use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// page sections
//
// each section corresponds to exactly one region of the rendered page, located
// by its element id.  the declaration order here is also the default priority
// order used by the tracker, so adding a variant in the wrong place changes
// which link wins on overlap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    // element id of the section's region, also used as the link fragment
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section: {s}")))
    }
}
