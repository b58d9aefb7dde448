//! Mobile Menu Component
//!
//! Slide-in section list for narrow viewports (< 768px).

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::CloseButton;

use super::nav_header::NavLink;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub sections: Vec<SectionId>,
    /// Current active section
    pub active: Option<SectionId>,
    pub on_close: EventHandler<()>,
    /// Open the profile card
    pub on_profile: EventHandler<()>,
}

/// Mobile slide-in menu
///
/// Replaces the header links on narrow screens. Closes on backdrop click,
/// the close button or after a link is followed.
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_profile = props.on_profile;

    rsx! {
        div {
            class: "mobile-menu-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside { class: "mobile-menu", role: "dialog", "aria-label": "Menu",
            div { class: "mobile-menu-header",
                span { class: "mobile-menu-title", "Navigate" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }
            button {
                class: "mobile-menu-profile",
                r#type: "button",
                onclick: move |_| on_profile.call(()),
                "View profile"
            }
            nav { class: "mobile-menu-links",
                for section in props.sections.iter() {
                    NavLink {
                        key: "{section}",
                        section: section.clone(),
                        active: props.active.as_ref() == Some(section),
                        class: "mobile-menu-link".to_string(),
                        on_navigate: move |_| on_close.call(()),
                    }
                }
            }
        }
    }
}
