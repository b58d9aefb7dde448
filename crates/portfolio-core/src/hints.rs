//! Ephemeral Hint Scheduler
//!
//! One-shot hints that appear after a delay, unless the user already found
//! the feature they point at or saw the hint before in the same storage
//! scope.
//!
//! Two policies coexist on purpose:
//! - console hints use a durable or session flag and never repeat in scope
//! - the tooltip hint is de-duplicated per session only, so it returns in a
//!   new session

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use crate::config::HintConfig;
use crate::error::{CoreResult, PortfolioError};
use crate::gesture::GestureKind;
use crate::time::{Scheduler, Timestamp};

/// Storage scope of a hint flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintScope {
    /// Survives the browser session (`localStorage`)
    Durable,
    /// Lives as long as the tab session (`sessionStorage`)
    Session,
}

/// When a hint is allowed to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintGate {
    Always,
    /// Suppressed once the gesture triggered, and while it is mid-match
    UntilDiscovered(GestureKind),
}

/// How the host presents a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStyle {
    /// Logged once to the developer console
    Console,
    /// Floating tooltip, hidden again after a while
    Tooltip,
}

/// The built-in hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintId {
    ConsoleWelcome,
    SequenceConsole,
    SequenceTooltip,
}

impl HintId {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintId::ConsoleWelcome => "console-welcome",
            HintId::SequenceConsole => "sequence-console",
            HintId::SequenceTooltip => "sequence-tooltip",
        }
    }

    /// Text shown for this hint, one entry per console line
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            HintId::ConsoleWelcome => &[
                "Welcome to the OASIS Portfolio",
                "There are hidden easter eggs waiting to be discovered...",
                "Hints: Try typing the theme word, Alt+Click headings, or triple-click the timeline dot",
            ],
            HintId::SequenceConsole => &[
                "Easter Egg Hint",
                "Try typing a special word that represents this portfolio's theme...",
            ],
            HintId::SequenceTooltip => &["Try typing the theme word..."],
        }
    }
}

impl fmt::Display for HintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one hint
#[derive(Debug, Clone, PartialEq)]
pub struct HintSpec {
    pub id: HintId,
    pub style: HintStyle,
    /// Presence key in browser storage
    pub storage_key: &'static str,
    pub scope: HintScope,
    /// Delay after mount
    pub delay: Duration,
    /// Auto-hide after this long; `None` for console hints
    pub display_for: Option<Duration>,
    pub gate: HintGate,
    /// Any keystroke hides it
    pub dismiss_on_key: bool,
}

/// The portfolio's hints with delays from `config`
pub fn default_hints(config: &HintConfig) -> Vec<HintSpec> {
    vec![
        HintSpec {
            id: HintId::ConsoleWelcome,
            style: HintStyle::Console,
            storage_key: "console-welcome-shown",
            scope: HintScope::Session,
            delay: Duration::from_millis(config.welcome_delay_ms),
            display_for: None,
            gate: HintGate::Always,
            dismiss_on_key: false,
        },
        HintSpec {
            id: HintId::SequenceConsole,
            style: HintStyle::Console,
            storage_key: "konami-hint-shown",
            scope: HintScope::Durable,
            delay: Duration::from_millis(config.console_hint_delay_ms),
            display_for: None,
            gate: HintGate::Always,
            dismiss_on_key: false,
        },
        HintSpec {
            id: HintId::SequenceTooltip,
            style: HintStyle::Tooltip,
            storage_key: "sequence-tooltip-shown",
            scope: HintScope::Session,
            delay: Duration::from_millis(config.tooltip_delay_ms),
            display_for: Some(Duration::from_millis(config.tooltip_visible_ms)),
            gate: HintGate::UntilDiscovered(GestureKind::KeySequence),
            dismiss_on_key: true,
        },
    ]
}

/// Presence flags in browser storage.
///
/// Implementations may fail (private browsing, quota); the scheduler logs
/// and carries on.
pub trait FlagStore {
    fn is_set(&self, scope: HintScope, key: &str) -> CoreResult<bool>;
    fn set(&mut self, scope: HintScope, key: &str) -> CoreResult<()>;
}

/// In-memory flag store for tests and non-browser hosts
#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    durable: HashSet<String>,
    session: HashSet<String>,
    unavailable: bool,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Simulate a new browser session: session flags are gone
    pub fn end_session(&mut self) {
        self.session.clear();
    }

    fn scope(&self, scope: HintScope) -> &HashSet<String> {
        match scope {
            HintScope::Durable => &self.durable,
            HintScope::Session => &self.session,
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn is_set(&self, scope: HintScope, key: &str) -> CoreResult<bool> {
        if self.unavailable {
            return Err(PortfolioError::StorageUnavailable(key.to_string()));
        }
        Ok(self.scope(scope).contains(key))
    }

    fn set(&mut self, scope: HintScope, key: &str) -> CoreResult<()> {
        if self.unavailable {
            return Err(PortfolioError::StorageUnavailable(key.to_string()));
        }
        let flags = match scope {
            HintScope::Durable => &mut self.durable,
            HintScope::Session => &mut self.session,
        };
        flags.insert(key.to_string());
        Ok(())
    }
}

/// Visibility change for the host to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintEvent {
    Show(HintId),
    Hide(HintId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintStatus {
    Pending,
    Visible,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintTimer {
    Due(HintId),
    Expire(HintId),
}

/// Schedules hints relative to mount time
#[derive(Debug)]
pub struct HintScheduler {
    specs: Vec<HintSpec>,
    status: HashMap<HintId, HintStatus>,
    discovered: HashSet<GestureKind>,
    timers: Scheduler<HintTimer>,
}

impl HintScheduler {
    pub fn new(specs: Vec<HintSpec>) -> Self {
        Self {
            specs,
            status: HashMap::new(),
            discovered: HashSet::new(),
            timers: Scheduler::new(),
        }
    }

    pub fn spec(&self, id: HintId) -> Option<&HintSpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    pub fn is_visible(&self, id: HintId) -> bool {
        self.status.get(&id) == Some(&HintStatus::Visible)
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timers.next_deadline()
    }

    /// Start the delays. Hints already flagged in scope are skipped.
    pub fn mount(&mut self, now: Timestamp, store: &dyn FlagStore) {
        self.timers.clear();
        self.status.clear();
        for spec in &self.specs {
            if flag_is_set(store, spec) {
                self.status.insert(spec.id, HintStatus::Done);
                continue;
            }
            self.status.insert(spec.id, HintStatus::Pending);
            self.timers.schedule(HintTimer::Due(spec.id), now + spec.delay);
        }
    }

    /// Fire due hints.
    ///
    /// `gesture_busy` reports whether a recognizer is currently mid-match;
    /// gated hints wait out that moment by being dropped for this mount.
    pub fn advance<F>(
        &mut self,
        now: Timestamp,
        store: &mut dyn FlagStore,
        gesture_busy: F,
    ) -> Vec<HintEvent>
    where
        F: Fn(GestureKind) -> bool,
    {
        let mut events = Vec::new();
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                HintTimer::Due(id) => {
                    if let Some(event) = self.show(id, now, store, &gesture_busy) {
                        events.push(event);
                    }
                }
                HintTimer::Expire(id) => {
                    if self.is_visible(id) {
                        self.status.insert(id, HintStatus::Done);
                        events.push(HintEvent::Hide(id));
                    }
                }
            }
        }
        events
    }

    /// A recognizer triggered: silence the hints pointing at it
    pub fn note_gesture(&mut self, kind: GestureKind) -> Vec<HintEvent> {
        self.discovered.insert(kind);
        let gated: Vec<HintId> = self
            .specs
            .iter()
            .filter(|s| s.gate == HintGate::UntilDiscovered(kind))
            .map(|s| s.id)
            .collect();
        gated
            .into_iter()
            .filter_map(|id| self.finish(id))
            .collect()
    }

    /// The user started typing
    pub fn dismiss_on_key(&mut self) -> Vec<HintEvent> {
        let dismissable: Vec<HintId> = self
            .specs
            .iter()
            .filter(|s| s.dismiss_on_key && self.is_visible(s.id))
            .map(|s| s.id)
            .collect();
        dismissable
            .into_iter()
            .filter_map(|id| self.finish(id))
            .collect()
    }

    /// Unmount: no hint fires after this
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.status.clear();
    }

    fn show<F>(
        &mut self,
        id: HintId,
        now: Timestamp,
        store: &mut dyn FlagStore,
        gesture_busy: &F,
    ) -> Option<HintEvent>
    where
        F: Fn(GestureKind) -> bool,
    {
        if self.status.get(&id) != Some(&HintStatus::Pending) {
            return None;
        }
        let spec = self.spec(id)?.clone();
        self.status.insert(id, HintStatus::Done);

        if let HintGate::UntilDiscovered(kind) = spec.gate {
            if self.discovered.contains(&kind) || gesture_busy(kind) {
                tracing::debug!(hint = %id, gesture = %kind, "hint silenced by gesture activity");
                return None;
            }
        }
        // another tab may have shown it since mount
        if flag_is_set(store, &spec) {
            return None;
        }
        if let Err(e) = store.set(spec.scope, spec.storage_key) {
            tracing::warn!(hint = %id, error = %e, "could not persist hint flag");
        }

        if let Some(display_for) = spec.display_for {
            self.status.insert(id, HintStatus::Visible);
            self.timers.schedule(HintTimer::Expire(id), now + display_for);
        }
        tracing::debug!(hint = %id, "hint shown");
        Some(HintEvent::Show(id))
    }

    /// Cancel a pending or visible hint. Returns `Hide` if it was on screen.
    fn finish(&mut self, id: HintId) -> Option<HintEvent> {
        let status = self.status.insert(id, HintStatus::Done);
        self.timers.cancel(HintTimer::Due(id));
        self.timers.cancel(HintTimer::Expire(id));
        (status == Some(HintStatus::Visible)).then_some(HintEvent::Hide(id))
    }
}

fn flag_is_set(store: &dyn FlagStore, spec: &HintSpec) -> bool {
    match store.is_set(spec.scope, spec.storage_key) {
        Ok(set) => set,
        Err(e) => {
            tracing::warn!(hint = %spec.id, error = %e, "hint flag unreadable, assuming unset");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> HintScheduler {
        HintScheduler::new(default_hints(&HintConfig::default()))
    }

    fn idle(_: GestureKind) -> bool {
        false
    }

    #[test]
    fn test_hints_fire_after_delays() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);

        assert!(hints.advance(Timestamp(1_499), &mut store, idle).is_empty());
        assert_eq!(
            hints.advance(Timestamp(1_500), &mut store, idle),
            vec![HintEvent::Show(HintId::ConsoleWelcome)]
        );
        assert_eq!(
            hints.advance(Timestamp(30_000), &mut store, idle),
            vec![HintEvent::Show(HintId::SequenceConsole)]
        );
        assert_eq!(
            hints.advance(Timestamp(60_000), &mut store, idle),
            vec![HintEvent::Show(HintId::SequenceTooltip)]
        );
        assert!(hints.is_visible(HintId::SequenceTooltip));
        assert_eq!(
            hints.advance(Timestamp(70_000), &mut store, idle),
            vec![HintEvent::Hide(HintId::SequenceTooltip)]
        );
    }

    #[test]
    fn test_durable_flag_survives_remount_and_session() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        hints.advance(Timestamp(100_000), &mut store, idle);

        store.end_session();
        let mut remounted = scheduler();
        remounted.mount(Timestamp(0), &store);
        let events = remounted.advance(Timestamp(100_000), &mut store, idle);
        assert!(!events.contains(&HintEvent::Show(HintId::SequenceConsole)));
        // session-scoped hints come back in a new session
        assert!(events.contains(&HintEvent::Show(HintId::ConsoleWelcome)));
        assert!(events.contains(&HintEvent::Show(HintId::SequenceTooltip)));
    }

    #[test]
    fn test_session_flags_dedupe_within_session() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        hints.advance(Timestamp(100_000), &mut store, idle);

        let mut remounted = scheduler();
        remounted.mount(Timestamp(0), &store);
        assert!(remounted.advance(Timestamp(100_000), &mut store, idle).is_empty());
    }

    #[test]
    fn test_gesture_trigger_silences_tooltip() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        hints.note_gesture(GestureKind::KeySequence);

        let events = hints.advance(Timestamp(100_000), &mut store, idle);
        assert!(!events.contains(&HintEvent::Show(HintId::SequenceTooltip)));
        // console hints are not gated
        assert!(events.contains(&HintEvent::Show(HintId::SequenceConsole)));
    }

    #[test]
    fn test_busy_gesture_drops_tooltip() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        let events = hints.advance(Timestamp(60_000), &mut store, |k| {
            k == GestureKind::KeySequence
        });
        assert!(!events.contains(&HintEvent::Show(HintId::SequenceTooltip)));
        assert_eq!(hints.next_deadline(), None);
    }

    #[test]
    fn test_visible_tooltip_hidden_by_gesture_and_key() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        hints.advance(Timestamp(60_000), &mut store, idle);

        assert_eq!(
            hints.dismiss_on_key(),
            vec![HintEvent::Hide(HintId::SequenceTooltip)]
        );
        assert!(hints.dismiss_on_key().is_empty());
        assert!(hints.advance(Timestamp(80_000), &mut store, idle).is_empty());
    }

    #[test]
    fn test_storage_unavailable_degrades_silently() {
        let mut store = MemoryFlagStore::unavailable();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        let events = hints.advance(Timestamp(60_000), &mut store, idle);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_teardown_cancels_pending_hints() {
        let mut store = MemoryFlagStore::new();
        let mut hints = scheduler();
        hints.mount(Timestamp(0), &store);
        hints.teardown();
        assert_eq!(hints.next_deadline(), None);
        assert!(hints.advance(Timestamp(100_000), &mut store, idle).is_empty());
    }
}
