//! Working style principles.

use dioxus::prelude::*;
use portfolio_ui::{Accent, IconGlyph};

use super::RegionTitle;
use crate::context::use_portfolio;

#[component]
pub fn HowIWorkSection() -> Element {
    let portfolio = use_portfolio();
    let principles = portfolio.read().how_i_work.clone();

    rsx! {
        section { id: "how", class: "page-section",
            RegionTitle {
                section: "how".to_string(),
                kicker: "WORKING STYLE".to_string(),
                title: "How I build".to_string(),
                desc: "Fast delivery with guardrails: reliability, performance and scalable foundations.".to_string(),
                accent: Accent::Red,
            }

            div { class: "principle-grid",
                for principle in principles.iter() {
                    div { key: "{principle.title}", class: "principle-card",
                        div { class: "principle-icon", IconGlyph { kind: principle.icon, size: 24 } }
                        h3 { "{principle.title}" }
                        p { "{principle.body}" }
                    }
                }
            }
        }
    }
}
