//! Work experience timeline.
//!
//! The node of the first (most recent) entry is the click-burst marker for
//! the timeline deep dive. It registers with the runtime while mounted.

use dioxus::prelude::*;
use portfolio_core::content::format_year;
use portfolio_core::{TargetId, WorkExperience};
use portfolio_ui::{Accent, PillRow};

use super::{gesture_click, RegionTitle};
use crate::context::{use_page_state, use_portfolio, use_runtime, with_runtime};

/// Element id and target of the click-burst marker
pub const TIMELINE_DOT: &str = "timeline-dot";

/// "2019 - 2023", or "2021 - Present" when still ongoing
pub fn date_range(experience: &WorkExperience) -> String {
    let start = format_year(&experience.start_date);
    let end = experience
        .end_date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(format_year)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", start, end)
}

#[component]
pub fn Experience() -> Element {
    let portfolio = use_portfolio();
    let experiences = portfolio.read().work_experiences.clone();

    rsx! {
        section { id: "experience", class: "page-section",
            RegionTitle {
                section: "experience".to_string(),
                kicker: "CAREER JOURNEY".to_string(),
                title: "Work Experience".to_string(),
                desc: "9+ years building scalable web and mobile experiences across government, enterprise, and SaaS platforms.".to_string(),
                accent: Accent::Cyan,
            }

            if experiences.is_empty() {
                p { class: "empty-state", "Experience details are on their way." }
            } else {
                div { class: "timeline",
                    div { class: "timeline-line" }
                    for (i, experience) in experiences.iter().enumerate() {
                        TimelineEntry {
                            key: "{i}-{experience.company}",
                            experience: experience.clone(),
                            marker: i == 0,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineEntry(experience: WorkExperience, marker: bool) -> Element {
    rsx! {
        article { class: "timeline-entry",
            if marker {
                TimelineMarker {}
            } else {
                span { class: "timeline-node" }
            }
            div { class: "timeline-card",
                div { class: "timeline-meta",
                    span { class: "timeline-dates", "{date_range(&experience)}" }
                    if !experience.location.is_empty() {
                        span { class: "timeline-location", "{experience.location}" }
                    }
                }
                h3 { class: "timeline-title", "{experience.title}" }
                div { class: "timeline-company", "{experience.company}" }
                if !experience.summary.is_empty() {
                    p { class: "timeline-summary", "{experience.summary}" }
                }
                if !experience.achievements.is_empty() {
                    ul { class: "detail-list",
                        for achievement in experience.achievements.iter() {
                            li { "{achievement}" }
                        }
                    }
                }
                PillRow { labels: experience.stack.clone() }
            }
        }
    }
}

/// The first timeline node; three quick clicks open the deep dive
#[component]
fn TimelineMarker() -> Element {
    let runtime = use_runtime();
    let page = use_page_state();

    use_hook({
        let runtime = runtime.clone();
        move || {
            with_runtime(&runtime, |rt| rt.register_burst_target(TargetId::new(TIMELINE_DOT)));
        }
    });

    use_drop({
        let runtime = runtime.clone();
        move || {
            with_runtime(&runtime, |rt| {
                rt.unregister_burst_target(&TargetId::new(TIMELINE_DOT))
            });
        }
    });

    rsx! {
        span {
            id: TIMELINE_DOT,
            class: "timeline-node marker",
            onclick: move |evt| gesture_click(&runtime, page, TIMELINE_DOT, &evt),
        }
    }
}
