//! Page sections and overlays for the portfolio.
//!
//! Presentational atoms come from `portfolio-ui`; everything here reads the
//! runtime and content contexts.

mod contact;
mod easter_eggs;
mod experience;
mod featured;
mod hero;
mod how_i_work;
mod mobile_menu;
mod nav_header;
mod profile_card;
mod projects;
mod region_title;
mod skills;
mod theme_validation;

pub use contact::Contact;
pub use easter_eggs::EasterEggs;
pub use experience::Experience;
pub use featured::FeaturedProjects;
pub use hero::Hero;
pub use how_i_work::HowIWorkSection;
pub use mobile_menu::MobileMenu;
pub use nav_header::{nav_label, NavHeader};
pub use profile_card::{ProfileAvatar, ProfileCardModal};
pub use projects::{ProjectCard, ProjectModal, Projects};
pub use region_title::RegionTitle;
pub use skills::Skills;
pub use theme_validation::ThemeValidation;

use dioxus::prelude::*;
use portfolio_core::{ClickInput, Modifiers as ClickModifiers, SectionId};

use crate::bridge;
use crate::context::{apply_events, now, with_runtime, PageState, SharedRuntime};

/// Feed a click on a registered target to the recognizers
pub fn gesture_click(
    runtime: &SharedRuntime,
    page: Signal<PageState>,
    target: &str,
    evt: &MouseEvent,
) {
    let held = evt.modifiers();
    let input = ClickInput::on(target).with_modifiers(ClickModifiers {
        alt: held.contains(Modifiers::ALT),
        ctrl: held.contains(Modifiers::CONTROL),
        shift: held.contains(Modifiers::SHIFT),
        meta: held.contains(Modifiers::META),
    });

    if let Some(outcome) = with_runtime(runtime, |rt| rt.click(&input, now())) {
        if outcome.prevent_default {
            evt.prevent_default();
            evt.stop_propagation();
        }
        apply_events(page, outcome.events);
    }
}

/// Nav link activation: lock the section, push the fragment, scroll
pub fn navigate_to(runtime: &SharedRuntime, page: Signal<PageState>, section: &SectionId) {
    match with_runtime(runtime, |rt| rt.navigate(section.as_str(), now())) {
        Some(Ok(events)) => {
            apply_events(page, events);
            bridge::scroll_to(section);
        }
        Some(Err(e)) => tracing::warn!("Navigation to {} rejected: {}", section, e),
        None => {}
    }
}
