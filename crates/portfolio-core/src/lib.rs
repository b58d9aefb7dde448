//! Portfolio Core Library
//!
//! Section navigation, hidden-feature gesture recognizers, one-time hints and
//! the content contract behind the portfolio single-page site.
//!
//! ## Overview
//!
//! The page is a long scroll of sections with a sticky navigation bar. This
//! crate owns every piece of state that is not pure presentation:
//!
//! - **Visibility**: which configured section is most visible in the
//!   activation band
//! - **Navigation**: one authoritative active section, reconciling scroll,
//!   nav-link clicks and URL deep links through a temporary lock
//! - **Gestures**: a typed code word, a triple click on a marker element and
//!   Alt-click regions, each a small state machine with its own timers
//! - **Hints**: delayed one-time hints, persisted through a [`FlagStore`]
//! - **Content**: the CMS record shape, its normalization and static fallback
//!
//! ## Time
//!
//! Nothing in here reads a clock. Every call takes the current
//! [`Timestamp`] and every delay is a deadline in a [`Scheduler`]; the host
//! sleeps until [`PortfolioRuntime::next_deadline`] and calls
//! [`PortfolioRuntime::advance`].
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{
//!     load_portfolio, KeyInput, MemoryFlagStore, PortfolioConfig, PortfolioRuntime,
//!     StaticSource, Timestamp,
//! };
//!
//! let data = load_portfolio(&StaticSource);
//! let mut runtime = PortfolioRuntime::new(
//!     PortfolioConfig::default(),
//!     data.sections(),
//!     Box::new(MemoryFlagStore::new()),
//! )
//! .unwrap();
//!
//! runtime.mount(Timestamp(0));
//! runtime.init_from_url(Some("#skills"), Timestamp(0));
//! assert_eq!(runtime.active_section().map(|s| s.as_str()), Some("skills"));
//!
//! for (i, key) in ["o", "a", "s", "i", "s"].into_iter().enumerate() {
//!     runtime.key(&KeyInput::new(key), Timestamp(100 * i as u64));
//! }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod gesture;
pub mod hints;
pub mod icon;
pub mod navigation;
pub mod runtime;
pub mod section;
pub mod time;
pub mod visibility;

// Re-exports
pub use config::{BurstConfig, HintConfig, NavigationConfig, PortfolioConfig, SequenceConfig};
pub use content::{
    load_portfolio, CmsDump, ContentReport, ContentSource, HowIWork, JsonSource, Phone,
    PortfolioData, Profile, Project, SkillCategory, StaticSource, WorkExperience,
};
pub use error::{CoreResult, PortfolioError};
pub use gesture::{
    ClickBurst, ClickInput, Disposition, GestureKind, GestureState, KeyInput, KeySequence,
    ModifierClick, Modifiers, RevealPhase, TargetId,
};
pub use hints::{
    FlagStore, HintEvent, HintGate, HintId, HintScheduler, HintScope, HintSpec, HintStyle,
    MemoryFlagStore,
};
pub use icon::IconKind;
pub use navigation::{
    Lock, LockOrigin, NavigationCoordinator, NavigationEvent, NavigationIntent, ReleaseReason,
};
pub use runtime::{InputOutcome, PortfolioRuntime, RuntimeEvent};
pub use section::{page_sections, SectionId, SectionList, BASE_SECTIONS, FEATURED_SECTION};
pub use time::{Scheduler, Timestamp};
pub use visibility::{ViewportBand, VisibilityObserver, VisibilitySample};
