//! Featured projects. Rendered, and navigable, only when there is
//! something to feature.

use dioxus::prelude::*;
use portfolio_core::FEATURED_SECTION;
use portfolio_ui::Accent;

use super::projects::find_project;
use super::{ProjectCard, ProjectModal, RegionTitle};
use crate::context::use_portfolio;

#[component]
pub fn FeaturedProjects() -> Element {
    let portfolio = use_portfolio();
    let mut selected: Signal<Option<String>> = use_signal(|| None);

    let data = portfolio.read();
    let featured = data.featured_projects();
    if featured.is_empty() {
        return rsx! {};
    }
    let open = find_project(&featured, selected.read().as_deref());

    rsx! {
        section { id: FEATURED_SECTION, class: "page-section",
            RegionTitle {
                section: FEATURED_SECTION.to_string(),
                kicker: "FEATURED WORK".to_string(),
                title: "Featured Projects".to_string(),
                desc: "High-impact projects delivering scalable solutions for government and enterprise platforms.".to_string(),
                accent: Accent::Green,
            }

            div { class: "project-grid featured",
                for project in featured.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: (*project).clone(),
                        featured: true,
                        on_open: move |id| selected.set(Some(id)),
                    }
                }
            }

            ProjectModal {
                project: open,
                on_close: move |_| selected.set(None),
            }
        }
    }
}
