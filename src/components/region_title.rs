//! Section title registered as an Alt-click region.

use dioxus::prelude::*;
use portfolio_core::TargetId;
use portfolio_ui::{Accent, SectionTitle};

use super::gesture_click;
use crate::context::{use_page_state, use_runtime, with_runtime};

/// Element id of a section's title region
pub fn region_id(section: &str) -> String {
    format!("{}-title", section)
}

/// Element id of the hero heading region
pub const HERO_REGION: &str = "hero-title";

/// Register `region` as a modifier-click region for the component's lifetime
pub fn use_modifier_region(region: &str) {
    let runtime = use_runtime();

    use_hook({
        let runtime = runtime.clone();
        let region = region.to_string();
        move || {
            with_runtime(&runtime, |rt| rt.register_modifier_region(TargetId::new(region)));
        }
    });

    use_drop({
        let region = region.to_string();
        move || {
            with_runtime(&runtime, |rt| rt.unregister_modifier_region(&TargetId::new(region)));
        }
    });
}

#[derive(Props, Clone, PartialEq)]
pub struct RegionTitleProps {
    /// Section the title belongs to
    pub section: String,
    pub kicker: String,
    pub title: String,
    #[props(default)]
    pub desc: Option<String>,
    #[props(default)]
    pub accent: Accent,
}

/// [`SectionTitle`] whose heading is a modifier-click region while mounted
#[component]
pub fn RegionTitle(props: RegionTitleProps) -> Element {
    let runtime = use_runtime();
    let page = use_page_state();
    let region = region_id(&props.section);

    use_modifier_region(&region);

    let target = region.clone();

    rsx! {
        SectionTitle {
            kicker: props.kicker.clone(),
            title: props.title.clone(),
            desc: props.desc.clone(),
            accent: props.accent,
            region_id: region,
            onclick: move |evt: MouseEvent| gesture_click(&runtime, page, &target, &evt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_id() {
        assert_eq!(region_id("projects"), "projects-title");
    }

    #[test]
    fn test_hero_region_is_distinct_from_section_regions() {
        for section in portfolio_core::page_sections(true).iter() {
            assert_ne!(region_id(section.as_str()), HERO_REGION);
        }
    }
}
