use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    #[props(into)]
    title: String,
}

#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    rsx! {
        div { class: "section-title",
            h2 { "{props.title}" }
            div { class: "title-rule" }
        }
    }
}
