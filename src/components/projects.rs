//! Projects grid and the shared project detail modal.

use dioxus::prelude::*;
use portfolio_core::Project;
use portfolio_ui::{Accent, ButtonVariant, LinkButton, Modal, PillRow};

use super::RegionTitle;
use crate::context::use_portfolio;

/// Properties for the ProjectCard component
#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Featured cards show the impact figures up front
    #[props(default)]
    pub featured: bool,
    pub on_open: EventHandler<String>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = &props.project;
    let id = project.id.clone();
    let on_open = props.on_open;
    let class = if props.featured {
        "project-card featured"
    } else {
        "project-card"
    };

    rsx! {
        article { class: "{class}",
            div { class: "project-card-header",
                h3 { class: "project-name", "{project.name}" }
                PillRow { labels: project.tags.clone(), accent: Accent::Purple }
            }
            p { class: "project-summary", "{project.summary}" }

            if props.featured && !project.impact.is_empty() {
                dl { class: "impact-grid",
                    for item in project.impact.iter() {
                        div { class: "impact-item",
                            dt { "{item.label}" }
                            dd { "{item.value}" }
                        }
                    }
                }
            }

            PillRow { labels: project.stack.clone() }

            button {
                class: ButtonVariant::Ghost.class(),
                r#type: "button",
                onclick: move |_| on_open.call(id.clone()),
                "View details"
            }
        }
    }
}

/// Properties for the ProjectModal component
#[derive(Props, Clone, PartialEq)]
pub struct ProjectModalProps {
    /// Project to show; closed when `None`
    pub project: Option<Project>,
    pub on_close: EventHandler<()>,
}

/// Detail dialog: highlights, impact, metrics, ownership, proof and links
#[component]
pub fn ProjectModal(props: ProjectModalProps) -> Element {
    let Some(project) = props.project.clone() else {
        return rsx! {};
    };
    let on_close = props.on_close;
    let metrics = project.metrics.clone().unwrap_or_default();
    let ownership = project.ownership.clone().unwrap_or_default();
    let proof = project.proof.clone().unwrap_or_default();

    rsx! {
        Modal {
            open: true,
            title: project.name.clone(),
            on_close: move |_| on_close.call(()),

            p { class: "modal-lead", "{project.summary}" }

            if !project.highlights.is_empty() {
                DetailList { heading: "Highlights", items: project.highlights.clone() }
            }

            if !project.impact.is_empty() || !metrics.is_empty() {
                div { class: "modal-block",
                    h4 { "Impact" }
                    dl { class: "impact-grid",
                        for item in project.impact.iter().chain(metrics.iter()) {
                            div { class: "impact-item",
                                dt { "{item.label}" }
                                dd { "{item.value}" }
                            }
                        }
                    }
                }
            }

            if !ownership.is_empty() {
                DetailList { heading: "What I owned", items: ownership }
            }
            if !proof.is_empty() {
                DetailList { heading: "Proof", items: proof }
            }

            div { class: "modal-block",
                h4 { "Stack" }
                PillRow { labels: project.stack.clone() }
            }

            if !project.links.is_empty() {
                div { class: "modal-links",
                    for link in project.links.iter() {
                        LinkButton {
                            key: "{link.href}",
                            href: link.href.clone(),
                            variant: ButtonVariant::Neon,
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailList(heading: &'static str, items: Vec<String>) -> Element {
    rsx! {
        div { class: "modal-block",
            h4 { "{heading}" }
            ul { class: "detail-list",
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        }
    }
}

/// Find a project by id in a slice of candidates
pub(crate) fn find_project(projects: &[&Project], id: Option<&str>) -> Option<Project> {
    let id = id?;
    projects.iter().find(|p| p.id == id).map(|p| (*p).clone())
}

/// Every non-featured project
#[component]
pub fn Projects() -> Element {
    let portfolio = use_portfolio();
    let mut selected: Signal<Option<String>> = use_signal(|| None);

    let data = portfolio.read();
    let projects = data.regular_projects();
    let open = find_project(&projects, selected.read().as_deref());

    rsx! {
        section { id: "projects", class: "page-section",
            RegionTitle {
                section: "projects".to_string(),
                kicker: "SELECTED WORK".to_string(),
                title: "Projects".to_string(),
                desc: "Selected work across government, enterprise and fintech platforms.".to_string(),
                accent: Accent::Purple,
            }

            if projects.is_empty() {
                p { class: "empty-state", "Projects are on their way." }
            } else {
                div { class: "project-grid",
                    for project in projects.iter() {
                        ProjectCard {
                            key: "{project.id}",
                            project: (*project).clone(),
                            on_open: move |id| selected.set(Some(id)),
                        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_uppercase(),
            ..Project::default()
        }
    }

    #[test]
    fn test_find_project() {
        let a = project("a");
        let b = project("b");
        let all = vec![&a, &b];
        assert_eq!(find_project(&all, Some("b")).map(|p| p.name), Some("B".to_string()));
        assert!(find_project(&all, Some("c")).is_none());
        assert!(find_project(&all, None).is_none());
    }
}
