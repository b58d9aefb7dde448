//! Navigation Header Component
//!
//! Desktop: sticky header with brand, section links and profile actions
//! Mobile: brand and menu toggle (links move into MobileMenu)

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{ButtonVariant, LinkButton};

use super::{navigate_to, MobileMenu, ProfileAvatar, ProfileCardModal};
use crate::context::{use_page_state, use_portfolio, use_runtime};

/// Link text for a section id
pub fn nav_label(section: &str) -> &'static str {
    match section {
        "featured-projects" => "Featured",
        "projects" => "Projects",
        "experience" => "Experience",
        "skills" => "Skills",
        "how" => "How I Work",
        "theme" => "Theme",
        "contact" => "Contact",
        _ => "Section",
    }
}

/// Navigation Header component
///
/// - Left: avatar (opens the profile card), name and status
/// - Center: one link per configured section, the active one highlighted
/// - Right: LinkedIn and resume
#[component]
pub fn NavHeader() -> Element {
    let mut page = use_page_state();
    let portfolio = use_portfolio();

    let sections: Vec<SectionId> = portfolio.read().sections().iter().cloned().collect();
    let profile = portfolio.read().profile.clone();
    let active = page.read().active.clone();
    let menu_open = page.read().menu_open;
    let profile_open = page.read().profile_open;
    let name = if profile.name.is_empty() {
        "Portfolio".to_string()
    } else {
        profile.name.clone()
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-inner",
                button {
                    class: "nav-menu-toggle",
                    r#type: "button",
                    "aria-label": "Open menu",
                    onclick: move |_| page.write().menu_open = true,
                    "\u{2630}"
                }

                a { class: "nav-brand", href: "#top", "aria-label": "Go to top",
                    button {
                        class: "nav-avatar",
                        r#type: "button",
                        "aria-label": "View profile",
                        onclick: move |evt| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            page.write().profile_open = true;
                        },
                        ProfileAvatar { name: name.clone(), photo_url: profile.photo_url.clone() }
                    }
                    div {
                        div { class: "nav-brand-name", "{name}" }
                        if !profile.status.is_empty() {
                            div { class: "nav-brand-status", "{profile.status}" }
                        }
                    }
                }

                nav { class: "nav-links",
                    for section in sections.iter() {
                        NavLink {
                            key: "{section}",
                            section: section.clone(),
                            active: active.as_ref() == Some(section),
                        }
                    }
                }

                div { class: "nav-actions",
                    if !profile.linkedin.is_empty() {
                        LinkButton {
                            href: profile.linkedin.clone(),
                            variant: ButtonVariant::Ghost,
                            "LinkedIn"
                        }
                    }
                    if !profile.resume_url.is_empty() {
                        LinkButton {
                            href: profile.resume_url.clone(),
                            variant: ButtonVariant::Primary,
                            "Resume"
                        }
                    }
                }
            }
        }

        MobileMenu {
            open: menu_open,
            sections: sections.clone(),
            active: active.clone(),
            on_close: move |_| page.write().menu_open = false,
            on_profile: move |_| {
                let mut state = page.write();
                state.menu_open = false;
                state.profile_open = true;
            },
        }

        ProfileCardModal {
            open: profile_open,
            profile: profile.clone(),
            on_close: move |_| page.write().profile_open = false,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub section: SectionId,
    pub active: bool,
    /// Extra class for the mobile variant
    #[props(default)]
    pub class: Option<String>,
    /// Called after navigation, e.g. to close the mobile menu
    #[props(default)]
    pub on_navigate: Option<EventHandler<()>>,
}

/// One section link; clicking it locks the section and scrolls to it
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let runtime = use_runtime();
    let page = use_page_state();

    let base = props.class.clone().unwrap_or_else(|| "nav-link".to_string());
    let class = if props.active {
        format!("{} active", base)
    } else {
        base
    };
    let section = props.section.clone();
    let on_navigate = props.on_navigate;

    rsx! {
        a {
            class: "{class}",
            href: "{props.section.fragment()}",
            "aria-current": if props.active { "true" },
            onclick: move |evt| {
                evt.prevent_default();
                navigate_to(&runtime, page, &section);
                if let Some(handler) = &on_navigate {
                    handler.call(());
                }
            },
            "{nav_label(props.section.as_str())}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_labels() {
        assert_eq!(nav_label("how"), "How I Work");
        assert_eq!(nav_label("featured-projects"), "Featured");
        assert_eq!(nav_label("blog"), "Section");
    }
}
