use dioxus::prelude::*;

use portfolio_common::{Section, content::Project};

use crate::{
    common::{
        icons::{Icon, IconKind},
        use_portfolio_config,
    },
    components::section_title::SectionTitle,
};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "card project-card",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                h3 { "{project.title}" }
            }
            div { class: "project-body",
                p { "{project.description}" }
                div { class: "tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div { class: "project-links",
                    a {
                        href: "{project.live_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::ExternalLink, size: 16 }
                        "Live Demo"
                    }
                    a {
                        href: "{project.repo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::Github, size: 16 }
                        "Source Code"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let config = use_portfolio_config();

    rsx! {
        section { id: Section::Projects.id(), class: "page-section",
            div { class: "container",
                SectionTitle { title: "My Projects" }
                div { class: "project-grid",
                    for project in config.projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}
