use dioxus::prelude::*;

use portfolio_common::content::SocialKind;

// line icons on a 24x24 grid, drawn with the current text color
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconKind {
    ArrowDown,
    ExternalLink,
    Github,
    Globe,
    Linkedin,
    Mail,
    Menu,
    Moon,
    Sun,
    X,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Linkedin => Self::Linkedin,
            SocialKind::Email => Self::Mail,
            SocialKind::Github => Self::Github,
            SocialKind::Website => Self::Globe,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    #[props(default = 24)]
    size: u32,
    #[props(default)]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;

    rsx! {
        svg {
            class: "icon {props.class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in props.kind.paths() {
                path { d: *d }
            }
        }
    }
}
