//! Runtime context provider for the portfolio page.
//!
//! Provides the [`PortfolioRuntime`] and the rendered [`PageState`] to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let runtime = use_runtime();
//! let page = use_page_state();
//!
//! let events = with_runtime(&runtime, |rt| rt.navigate("skills", now()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    GestureKind, HintEvent, HintId, NavigationEvent, PortfolioData, PortfolioRuntime,
    RevealPhase, RuntimeEvent, SectionId, SectionList, Timestamp,
};

use crate::bridge;

/// Shared runtime type for context.
///
/// The page is single threaded, so a `RefCell` is enough. `None` until the
/// runtime has been built on mount.
pub type SharedRuntime = Rc<RefCell<Option<PortfolioRuntime>>>;

/// Everything the view renders that comes out of the runtime
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub active: Option<SectionId>,
    pub reveal: RevealPhase,
    /// Architecture panel opened by Alt-click on a section title
    pub system_mode: bool,
    /// Timeline deep dive opened by a click burst on the timeline marker
    pub deep_dive: bool,
    pub tooltip_visible: bool,
    pub menu_open: bool,
    /// Profile card opened from the header
    pub profile_open: bool,
}

/// Current wall clock as a runtime timestamp
pub fn now() -> Timestamp {
    Timestamp(chrono::Utc::now().timestamp_millis().max(0) as u64)
}

/// Hook to access the runtime from context.
pub fn use_runtime() -> SharedRuntime {
    use_context::<SharedRuntime>()
}

/// Hook to access the rendered page state.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to access the loaded content.
pub fn use_portfolio() -> Signal<PortfolioData> {
    use_context::<Signal<PortfolioData>>()
}

/// Run `f` against the runtime, if it is built.
///
/// Returns `None` before mount or if the runtime is already borrowed
/// (a re-entrant event handler).
pub fn with_runtime<R>(
    runtime: &SharedRuntime,
    f: impl FnOnce(&mut PortfolioRuntime) -> R,
) -> Option<R> {
    let mut guard = match runtime.try_borrow_mut() {
        Ok(guard) => guard,
        Err(_) => {
            tracing::warn!("Runtime busy, dropping input");
            return None;
        }
    };
    guard.as_mut().map(f)
}

/// Settle the page once content has resolved.
///
/// Installs the sections of the final content (if it replaced the static
/// fallback) and only then applies the URL fragment, so a deep link to a
/// section that only exists in remote content is honoured.
pub fn content_ready(
    rt: &mut PortfolioRuntime,
    sections: Option<SectionList>,
    fragment: Option<&str>,
    now: Timestamp,
) -> Vec<RuntimeEvent> {
    let mut events = match sections {
        Some(sections) => rt.set_sections(sections),
        None => Vec::new(),
    };
    events.extend(rt.init_from_url(fragment, now));
    events
}

/// Render runtime events into the page state and perform their side effects.
pub fn apply_events(mut page: Signal<PageState>, events: Vec<RuntimeEvent>) {
    if events.is_empty() {
        return;
    }

    let mut state = page.peek().clone();
    for event in events {
        tracing::debug!(?event, "runtime event");
        match event {
            RuntimeEvent::Navigation(NavigationEvent::ActiveChanged { to, .. }) => {
                state.active = to;
            }
            RuntimeEvent::Navigation(NavigationEvent::LockReleased { section, reason }) => {
                tracing::debug!(%section, %reason, "navigation lock released");
            }
            RuntimeEvent::Navigation(NavigationEvent::LockAcquired(_)) => {}
            RuntimeEvent::PushFragment(section) => bridge::push_fragment(&section),
            RuntimeEvent::GestureTriggered { kind, target } => {
                tracing::info!(%kind, target = ?target, "hidden feature found");
                match kind {
                    GestureKind::ModifierClick => state.system_mode = true,
                    GestureKind::ClickBurst => state.deep_dive = true,
                    GestureKind::KeySequence => {}
                }
            }
            RuntimeEvent::Reveal(phase) => state.reveal = phase,
            RuntimeEvent::Hint(HintEvent::Show(id)) => match id {
                HintId::SequenceTooltip => state.tooltip_visible = true,
                HintId::ConsoleWelcome | HintId::SequenceConsole => {
                    for line in id.lines() {
                        tracing::info!("{}", line);
                    }
                }
            },
            RuntimeEvent::Hint(HintEvent::Hide(id)) => {
                if id == HintId::SequenceTooltip {
                    state.tooltip_visible = false;
                }
            }
        }
    }

    if *page.peek() != state {
        page.set(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{
        load_portfolio, page_sections, LockOrigin, MemoryFlagStore, PortfolioConfig,
        StaticSource, FEATURED_SECTION,
    };

    fn static_runtime() -> PortfolioRuntime {
        let sections = load_portfolio(&StaticSource).sections();
        let mut rt = PortfolioRuntime::new(
            PortfolioConfig::default(),
            sections,
            Box::new(MemoryFlagStore::new()),
        )
        .unwrap();
        rt.mount(Timestamp(0));
        rt
    }

    #[test]
    fn test_deep_link_waits_for_remote_sections() {
        let mut rt = static_runtime();
        assert!(rt.sections().find(FEATURED_SECTION).is_none());

        let events = content_ready(
            &mut rt,
            Some(page_sections(true)),
            Some("#featured-projects"),
            Timestamp(800),
        );

        assert_eq!(rt.active_section().map(|s| s.as_str()), Some(FEATURED_SECTION));
        assert_eq!(rt.lock().map(|l| l.origin), Some(LockOrigin::DeepLink));
        assert!(events.iter().any(|e| matches!(
            e,
            RuntimeEvent::Navigation(NavigationEvent::ActiveChanged { to: Some(to), .. })
                if to.as_str() == FEATURED_SECTION
        )));
    }

    #[test]
    fn test_deep_link_with_static_content() {
        let mut rt = static_runtime();
        content_ready(&mut rt, None, Some("#skills"), Timestamp(10));
        assert_eq!(rt.active_section().map(|s| s.as_str()), Some("skills"));
    }

    #[test]
    fn test_deep_link_to_unknown_section_is_ignored() {
        let mut rt = static_runtime();
        let events = content_ready(&mut rt, None, Some("#blog"), Timestamp(10));
        assert!(events.is_empty());
        assert!(rt.active_section().is_none());
    }
}
