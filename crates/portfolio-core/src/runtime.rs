//! Page runtime: every stateful subsystem behind one handle.
//!
//! The host owns a single [`PortfolioRuntime`] per mounted page. DOM events
//! go in through [`key`](PortfolioRuntime::key),
//! [`click`](PortfolioRuntime::click) and
//! [`visibility`](PortfolioRuntime::visibility); the host then sleeps until
//! [`next_deadline`](PortfolioRuntime::next_deadline) and calls
//! [`advance`](PortfolioRuntime::advance). Each call returns the
//! [`RuntimeEvent`]s the presentation layer renders.

use crate::config::PortfolioConfig;
use crate::error::CoreResult;
use crate::gesture::{
    ClickBurst, ClickInput, Disposition, GestureKind, GestureState, KeyInput, KeySequence,
    ModifierClick, RevealPhase, TargetId,
};
use crate::hints::{default_hints, FlagStore, HintEvent, HintId, HintScheduler};
use crate::navigation::{Lock, LockOrigin, NavigationCoordinator, NavigationEvent};
use crate::section::{SectionId, SectionList};
use crate::time::Timestamp;
use crate::visibility::{VisibilityObserver, VisibilitySample};

/// Something the presentation layer reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Active section, lock or release change
    Navigation(NavigationEvent),
    /// Push `#section` to history without reloading
    PushFragment(SectionId),
    /// A recognizer completed; `target` is the region or marker it fired on
    GestureTriggered {
        kind: GestureKind,
        target: Option<TargetId>,
    },
    /// The key sequence reveal entered a new phase
    Reveal(RevealPhase),
    Hint(HintEvent),
}

/// Result of feeding one DOM input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// Call `preventDefault`/`stopPropagation` on the event
    pub prevent_default: bool,
    pub events: Vec<RuntimeEvent>,
}

/// Observer, coordinator, recognizers and hints for one page
pub struct PortfolioRuntime {
    config: PortfolioConfig,
    observer: VisibilityObserver,
    navigation: NavigationCoordinator,
    sequence: KeySequence,
    burst: ClickBurst,
    modifier: ModifierClick,
    hints: HintScheduler,
    store: Box<dyn FlagStore>,
}

impl std::fmt::Debug for PortfolioRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioRuntime")
            .field("active", &self.navigation.active())
            .field("lock", &self.navigation.lock())
            .field("sequence", &self.sequence.state())
            .field("burst", &self.burst.state())
            .finish_non_exhaustive()
    }
}

impl PortfolioRuntime {
    /// Build a runtime over `sections`. Fails only on invalid configuration.
    pub fn new(
        config: PortfolioConfig,
        sections: SectionList,
        store: Box<dyn FlagStore>,
    ) -> CoreResult<Self> {
        config.validate()?;
        let sequence = KeySequence::new(&config.sequence)?;
        Ok(Self {
            observer: VisibilityObserver::new(sections.clone()),
            navigation: NavigationCoordinator::new(sections, &config.navigation),
            sequence,
            burst: ClickBurst::new(&config.burst),
            modifier: ModifierClick::new(),
            hints: HintScheduler::new(default_hints(&config.hints)),
            store,
            config,
        })
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.navigation.active()
    }

    pub fn lock(&self) -> Option<&Lock> {
        self.navigation.lock()
    }

    pub fn sections(&self) -> &SectionList {
        self.navigation.sections()
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.sequence.phase()
    }

    pub fn sequence_state(&self) -> GestureState {
        self.sequence.state()
    }

    pub fn burst_state(&self) -> GestureState {
        self.burst.state()
    }

    pub fn hint_visible(&self, id: HintId) -> bool {
        self.hints.is_visible(id)
    }

    /// Start the hint delays
    pub fn mount(&mut self, now: Timestamp) {
        self.hints.mount(now, &*self.store);
        tracing::debug!(sections = self.sections().len(), "runtime mounted");
    }

    /// Viewport width changed
    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.sequence
            .set_mobile(width_px < self.config.mobile_breakpoint_px);
    }

    pub fn register_burst_target(&mut self, target: TargetId) {
        self.burst.register_target(target);
    }

    pub fn unregister_burst_target(&mut self, target: &TargetId) {
        self.burst.unregister_target(target);
    }

    pub fn register_modifier_region(&mut self, region: TargetId) {
        self.modifier.register_region(region);
    }

    pub fn unregister_modifier_region(&mut self, region: &TargetId) {
        self.modifier.unregister_region(region);
    }

    /// One keydown
    pub fn key(&mut self, input: &KeyInput, now: Timestamp) -> InputOutcome {
        let mut events = self.advance(now);
        // typing into a form leaves the tooltip up
        if !input.from_editable {
            events.extend(self.hints.dismiss_on_key().into_iter().map(RuntimeEvent::Hint));
        }

        let disposition = self.sequence.key(input, now);
        if disposition.is_triggered() {
            events.push(RuntimeEvent::GestureTriggered {
                kind: GestureKind::KeySequence,
                target: None,
            });
            events.push(RuntimeEvent::Reveal(self.sequence.phase()));
            events.extend(self.gesture_discovered(GestureKind::KeySequence));
        }
        InputOutcome {
            prevent_default: disposition.consumes(GestureKind::KeySequence),
            events,
        }
    }

    /// One click, with the registered targets along its path
    pub fn click(&mut self, input: &ClickInput, now: Timestamp) -> InputOutcome {
        let mut events = self.advance(now);

        let disposition = self.modifier.click(input);
        if disposition.is_triggered() {
            // innermost registered region wins
            let region = input
                .path
                .iter()
                .find(|t| self.modifier.regions().contains(t))
                .cloned();
            events.push(RuntimeEvent::GestureTriggered {
                kind: GestureKind::ModifierClick,
                target: region,
            });
            events.extend(self.gesture_discovered(GestureKind::ModifierClick));
            return InputOutcome {
                prevent_default: true,
                events,
            };
        }

        let disposition = self.burst.click(input, now);
        if disposition == Disposition::Triggered {
            events.push(RuntimeEvent::GestureTriggered {
                kind: GestureKind::ClickBurst,
                target: self.burst.target().cloned(),
            });
            events.extend(self.gesture_discovered(GestureKind::ClickBurst));
        }
        InputOutcome {
            prevent_default: disposition.consumes(GestureKind::ClickBurst),
            events,
        }
    }

    /// A batch of intersection samples
    pub fn visibility<I>(&mut self, samples: I, now: Timestamp) -> Vec<RuntimeEvent>
    where
        I: IntoIterator<Item = VisibilitySample>,
    {
        let mut events = self.advance(now);
        if let Some(section) = self.observer.report(samples) {
            let nav = self.navigation.on_scroll_report(&section, now);
            events.extend(nav.into_iter().map(RuntimeEvent::Navigation));
        }
        events
    }

    /// Nav link click
    pub fn navigate(&mut self, section: &str, now: Timestamp) -> CoreResult<Vec<RuntimeEvent>> {
        let section = SectionId::new(section)?;
        let mut events = self.advance(now);
        let nav = self.navigation.set_manual(&section, now)?;
        events.extend(self.navigation_events(nav));
        Ok(events)
    }

    /// URL fragment on first mount; later calls do nothing
    pub fn init_from_url(&mut self, fragment: Option<&str>, now: Timestamp) -> Vec<RuntimeEvent> {
        let nav = self.navigation.init_from_url(fragment, now);
        self.navigation_events(nav)
    }

    /// The configured section list changed
    pub fn set_sections(&mut self, sections: SectionList) -> Vec<RuntimeEvent> {
        self.observer.observe(sections.clone());
        self.navigation
            .set_sections(sections)
            .into_iter()
            .map(RuntimeEvent::Navigation)
            .collect()
    }

    /// Fire every timer due at `now`
    pub fn advance(&mut self, now: Timestamp) -> Vec<RuntimeEvent> {
        let mut events: Vec<RuntimeEvent> = self
            .navigation
            .advance(now)
            .into_iter()
            .map(RuntimeEvent::Navigation)
            .collect();

        events.extend(self.sequence.advance(now).into_iter().map(RuntimeEvent::Reveal));
        self.burst.advance(now);

        let sequence = &self.sequence;
        let burst = &self.burst;
        let hints = self.hints.advance(now, &mut *self.store, |kind| match kind {
            GestureKind::KeySequence => sequence.state() != GestureState::Idle,
            GestureKind::ClickBurst => burst.state() != GestureState::Idle,
            GestureKind::ModifierClick => false,
        });
        events.extend(hints.into_iter().map(RuntimeEvent::Hint));
        events
    }

    /// Earliest pending deadline across every subsystem
    pub fn next_deadline(&self) -> Option<Timestamp> {
        [
            self.navigation.next_deadline(),
            self.sequence.next_deadline(),
            self.burst.next_deadline(),
            self.hints.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Unmount: clear every timer and partial match
    pub fn teardown(&mut self) {
        self.navigation.teardown();
        self.sequence.reset();
        self.burst.reset();
        self.hints.teardown();
        tracing::debug!("runtime torn down");
    }

    fn gesture_discovered(&mut self, kind: GestureKind) -> Vec<RuntimeEvent> {
        self.hints
            .note_gesture(kind)
            .into_iter()
            .map(RuntimeEvent::Hint)
            .collect()
    }

    fn navigation_events(&self, nav: Vec<NavigationEvent>) -> Vec<RuntimeEvent> {
        let mut events = Vec::with_capacity(nav.len() + 1);
        for event in nav {
            let push = match &event {
                NavigationEvent::LockAcquired(lock) if lock.origin == LockOrigin::Manual => {
                    Some(lock.section.clone())
                }
                _ => None,
            };
            events.push(RuntimeEvent::Navigation(event));
            if let Some(section) = push {
                events.push(RuntimeEvent::PushFragment(section));
            }
        }
        events
    }
}
