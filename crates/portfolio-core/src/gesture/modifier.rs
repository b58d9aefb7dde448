//! Modifier-click region recognizer.

use super::{ClickInput, Disposition, GestureState, TargetId};

/// Alt/Option click inside any registered region triggers immediately.
///
/// Stateless per click. The host must dispatch clicks to this recognizer
/// before the clicked element handles them, and prevent the default action
/// when [`Disposition::consumes`] says so.
#[derive(Debug, Default)]
pub struct ModifierClick {
    regions: Vec<TargetId>,
}

impl ModifierClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_region(&mut self, region: TargetId) {
        if !self.regions.contains(&region) {
            tracing::debug!(%region, "modifier-click region registered");
            self.regions.push(region);
        }
    }

    pub fn unregister_region(&mut self, region: &TargetId) {
        self.regions.retain(|r| r != region);
    }

    pub fn regions(&self) -> &[TargetId] {
        &self.regions
    }

    pub fn state(&self) -> GestureState {
        GestureState::Idle
    }

    pub fn click(&self, input: &ClickInput) -> Disposition {
        if !input.modifiers.alt {
            return Disposition::Ignored;
        }
        match self.regions.iter().find(|r| input.within(r)) {
            Some(region) => {
                tracing::info!(%region, "modifier click triggered");
                Disposition::Triggered
            }
            None => Disposition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Modifiers;

    fn recognizer() -> ModifierClick {
        let mut m = ModifierClick::new();
        m.register_region(TargetId::new("hero-heading"));
        m.register_region(TargetId::new("experience-title"));
        m
    }

    #[test]
    fn test_alt_click_in_region_triggers() {
        let m = recognizer();
        let click = ClickInput {
            path: vec![TargetId::new("kicker"), TargetId::new("experience-title")],
            modifiers: Modifiers::ALT,
        };
        assert_eq!(m.click(&click), Disposition::Triggered);
    }

    #[test]
    fn test_plain_click_ignored() {
        let m = recognizer();
        assert_eq!(m.click(&ClickInput::on("hero-heading")), Disposition::Ignored);
    }

    #[test]
    fn test_alt_click_outside_regions_ignored() {
        let m = recognizer();
        let click = ClickInput::on("contact").with_modifiers(Modifiers::ALT);
        assert_eq!(m.click(&click), Disposition::Ignored);
    }

    #[test]
    fn test_unregistered_region_no_longer_matches() {
        let mut m = recognizer();
        m.unregister_region(&TargetId::new("hero-heading"));
        let click = ClickInput::on("hero-heading").with_modifiers(Modifiers::ALT);
        assert_eq!(m.click(&click), Disposition::Ignored);
        assert_eq!(m.regions().len(), 1);
    }

    #[test]
    fn test_duplicate_registration_is_idempotent() {
        let mut m = recognizer();
        m.register_region(TargetId::new("hero-heading"));
        assert_eq!(m.regions().len(), 2);
    }
}
