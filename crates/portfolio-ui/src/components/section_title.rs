//! Section Title Component
//!
//! Kicker badge, heading and optional description at the top of each page
//! section. The heading doubles as a modifier-click region: its id is what
//! the host registers with the runtime, and raw clicks are forwarded.

use dioxus::prelude::*;

use super::Accent;

/// Properties for the SectionTitle component
#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    /// Small uppercase badge above the heading
    pub kicker: String,
    pub title: String,
    #[props(default)]
    pub desc: Option<String>,
    #[props(default)]
    pub accent: Accent,
    /// Element id of the heading, used as a click region
    #[props(default)]
    pub region_id: Option<String>,
    /// Raw click on the heading, modifiers included
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Section heading
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionTitle {
///         kicker: "WORK".to_string(),
///         title: "Projects".to_string(),
///         region_id: "projects-title".to_string(),
///         onclick: move |evt| on_title_click(evt),
///     }
/// }
/// ```
#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    let region_id = props.region_id.clone().unwrap_or_default();

    rsx! {
        div { class: "section-title",
            div { class: "section-kicker {props.accent.class()}", "{props.kicker}" }
            h2 {
                id: "{region_id}",
                class: "section-heading",
                onclick: move |evt| {
                    if let Some(handler) = &props.onclick {
                        handler.call(evt);
                    }
                },
                "{props.title}"
            }
            if let Some(desc) = &props.desc {
                p { class: "section-desc", "{desc}" }
            }
        }
    }
}
