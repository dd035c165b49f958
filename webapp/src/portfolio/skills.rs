use dioxus::prelude::*;

use portfolio_common::{Section, content::Skill};

use crate::{
    common::{classes, use_portfolio_config},
    components::section_title::SectionTitle,
};

#[derive(Clone, PartialEq, Props)]
struct SkillBarProps {
    skill: Skill,
}

#[component]
fn SkillBar(props: SkillBarProps) -> Element {
    let skill = props.skill;

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-label",
                span { "{skill.name}" }
                span { class: "percentage", "{skill.percentage}%" }
            }
            div { class: "skill-track",
                div { class: "skill-fill", style: classes::skill_fill_style(skill.percentage) }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let config = use_portfolio_config();

    rsx! {
        section { id: Section::Skills.id(), class: "page-section",
            div { class: "container",
                SectionTitle { title: "My Skills" }
                div { class: "two-columns",
                    for group in config.skill_groups.iter() {
                        div { key: "{group.title}", class: "card panel",
                            h3 { "{group.title}" }
                            for skill in group.skills.iter() {
                                SkillBar { key: "{skill.name}", skill: skill.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
