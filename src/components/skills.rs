//! Skill categories with icon and chips.

use dioxus::prelude::*;
use portfolio_ui::{Accent, IconGlyph, PillRow};

use super::RegionTitle;
use crate::context::use_portfolio;
use crate::theme::colors::accent_color;

#[component]
pub fn Skills() -> Element {
    let portfolio = use_portfolio();
    let categories = portfolio.read().skills.clone();

    rsx! {
        section { id: "skills", class: "page-section",
            RegionTitle {
                section: "skills".to_string(),
                kicker: "CAPABILITIES".to_string(),
                title: "Skills".to_string(),
                desc: "Hover the chips: neon lift and ring outline.".to_string(),
                accent: Accent::Orange,
            }

            if categories.is_empty() {
                p { class: "empty-state", "Skills are on their way." }
            } else {
                div { class: "skill-grid",
                    for (i, category) in categories.iter().enumerate() {
                        div { key: "{category.name}", class: "skill-card {Accent::nth(i).class()}",
                            div {
                                class: "skill-card-header",
                                style: "color: {accent_color(Accent::nth(i).class())}",
                                IconGlyph { kind: category.icon }
                                h3 { "{category.name}" }
                            }
                            PillRow { labels: category.items.clone(), accent: Accent::nth(i) }
                        }
                    }
                }
            }
        }
    }
}
