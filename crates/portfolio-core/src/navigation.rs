//! Navigation State Coordinator
//!
//! Reconciles three sources of "which section is active" into one value:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Scroll(section)    from the visibility observer, continuous     │
//! │  Manual(section)    nav link click: set + lock immediately       │
//! │  DeepLink(section)  URL fragment on first mount: set + lock,     │
//! │                     released unconditionally after a timeout     │
//! │                                                                  │
//! │  A held lock always wins over scroll reports. A manual lock is   │
//! │  released once scroll has agreed with it for the settle delay.   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::time::Duration;

use crate::config::NavigationConfig;
use crate::error::{CoreResult, PortfolioError};
use crate::section::{SectionId, SectionList};
use crate::time::{Scheduler, Timestamp};

/// Where a lock came from; decides how it is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOrigin {
    /// User clicked a nav link: released by settle confirmation
    Manual,
    /// URL fragment on load: released by timeout
    DeepLink,
}

/// Coordinator state forcing the active section to a fixed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    pub section: SectionId,
    pub origin: LockOrigin,
}

/// Why a lock ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// Scroll agreed with the lock for the whole settle delay
    Settled,
    /// Deep-link timeout elapsed
    Timeout,
    /// Locked section was removed from the configuration
    SectionRemoved,
}

impl fmt::Display for ReleaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseReason::Settled => write!(f, "settled"),
            ReleaseReason::Timeout => write!(f, "timeout"),
            ReleaseReason::SectionRemoved => write!(f, "section removed"),
        }
    }
}

/// Input to the coordinator
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationIntent {
    /// Visibility observer reported a most-visible section
    Scroll { section: SectionId, ratio: f64 },
    /// User navigated via a link
    Manual(SectionId),
    /// URL fragment selected a section on load
    DeepLink(SectionId),
}

/// Observable effects of a coordinator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The active section changed
    ActiveChanged {
        from: Option<SectionId>,
        to: Option<SectionId>,
    },
    /// A lock was taken; manual locks also ask the host to push the fragment
    LockAcquired(Lock),
    /// A lock ended
    LockReleased {
        section: SectionId,
        reason: ReleaseReason,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTimer {
    Settle,
    DeepLinkRelease,
}

/// Owns the authoritative active section
#[derive(Debug)]
pub struct NavigationCoordinator {
    sections: SectionList,
    active: Option<SectionId>,
    lock: Option<Lock>,
    /// Latest scroll report, regardless of lock state
    last_report: Option<SectionId>,
    /// Latest scroll report received while the current lock was held
    report_while_locked: Option<SectionId>,
    timers: Scheduler<NavTimer>,
    url_consumed: bool,
    settle: Duration,
    deep_link_release: Duration,
}

impl NavigationCoordinator {
    pub fn new(sections: SectionList, config: &NavigationConfig) -> Self {
        Self {
            sections,
            active: None,
            lock: None,
            last_report: None,
            report_while_locked: None,
            timers: Scheduler::new(),
            url_consumed: false,
            settle: config.settle(),
            deep_link_release: config.deep_link_release(),
        }
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn lock(&self) -> Option<&Lock> {
        self.lock.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// Earliest pending release check
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timers.next_deadline()
    }

    /// Whether a settle confirmation is currently running
    pub fn is_settling(&self) -> bool {
        self.timers.is_pending(NavTimer::Settle)
    }

    /// Dispatch an intent to the matching operation
    pub fn apply(
        &mut self,
        intent: NavigationIntent,
        now: Timestamp,
    ) -> CoreResult<Vec<NavigationEvent>> {
        match intent {
            NavigationIntent::Scroll { section, ratio } => {
                tracing::trace!(%section, ratio, "scroll intent");
                Ok(self.on_scroll_report(&section, now))
            }
            NavigationIntent::Manual(section) => self.set_manual(&section, now),
            NavigationIntent::DeepLink(section) => self.deep_link(&section, now),
        }
    }

    /// User-initiated navigation: activate `section` now and lock it.
    ///
    /// Supersedes any existing lock and cancels a pending settle or
    /// deep-link release.
    pub fn set_manual(
        &mut self,
        section: &SectionId,
        now: Timestamp,
    ) -> CoreResult<Vec<NavigationEvent>> {
        let section = self.configured(section)?;
        let mut events = Vec::new();

        self.timers.clear();
        self.acquire(section.clone(), LockOrigin::Manual, &mut events);

        // Already the most visible section: the confirmation starts right away
        if self.last_report.as_ref() == Some(&section) {
            self.timers.schedule(NavTimer::Settle, now + self.settle);
        }

        tracing::debug!(%section, "manual navigation locked");
        Ok(events)
    }

    /// Scroll-driven report from the visibility observer
    pub fn on_scroll_report(&mut self, section: &SectionId, now: Timestamp) -> Vec<NavigationEvent> {
        let mut events = Vec::new();
        let Ok(section) = self.configured(section) else {
            tracing::debug!(%section, "ignoring scroll report for unknown section");
            return events;
        };
        self.last_report = Some(section.clone());

        let Some(lock) = &self.lock else {
            self.set_active(Some(section), &mut events);
            return events;
        };

        self.report_while_locked = Some(section.clone());
        if lock.origin == LockOrigin::DeepLink {
            return events;
        }

        if lock.section == section {
            if !self.timers.is_pending(NavTimer::Settle) {
                self.timers.schedule(NavTimer::Settle, now + self.settle);
                tracing::trace!(%section, "settle confirmation started");
            }
        } else if self.timers.cancel(NavTimer::Settle) {
            tracing::trace!(locked = %lock.section, %section, "settle interrupted");
        }
        events
    }

    /// Read the URL fragment on first mount.
    ///
    /// Only the first call has any effect. A fragment naming a configured
    /// section behaves like [`set_manual`](Self::set_manual) except that the
    /// lock is released by a fixed timeout instead of settle confirmation.
    pub fn init_from_url(&mut self, fragment: Option<&str>, now: Timestamp) -> Vec<NavigationEvent> {
        if self.url_consumed {
            return Vec::new();
        }
        self.url_consumed = true;

        let Some(section) = fragment.and_then(SectionId::from_fragment) else {
            return Vec::new();
        };
        match self.deep_link(&section, now) {
            Ok(events) => events,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring URL fragment");
                Vec::new()
            }
        }
    }

    /// Lock `section` with a timeout release
    pub fn deep_link(
        &mut self,
        section: &SectionId,
        now: Timestamp,
    ) -> CoreResult<Vec<NavigationEvent>> {
        let section = self.configured(section)?;
        let mut events = Vec::new();

        self.timers.clear();
        self.acquire(section.clone(), LockOrigin::DeepLink, &mut events);
        self.timers
            .schedule(NavTimer::DeepLinkRelease, now + self.deep_link_release);

        tracing::debug!(%section, "deep link locked");
        Ok(events)
    }

    /// Fire due release checks
    pub fn advance(&mut self, now: Timestamp) -> Vec<NavigationEvent> {
        let mut events = Vec::new();
        for timer in self.timers.drain_due(now) {
            let Some(lock) = &self.lock else {
                continue;
            };
            match (timer, lock.origin) {
                (NavTimer::Settle, LockOrigin::Manual) => {
                    if self.last_report.as_ref() == Some(&lock.section) {
                        self.release(ReleaseReason::Settled, &mut events);
                    }
                }
                (NavTimer::DeepLinkRelease, LockOrigin::DeepLink) => {
                    self.release(ReleaseReason::Timeout, &mut events);
                }
                _ => {}
            }
        }
        events
    }

    /// Replace the configured section list.
    ///
    /// A lock on a removed section expires instead of pinning a value that can
    /// no longer be reached.
    pub fn set_sections(&mut self, sections: SectionList) -> Vec<NavigationEvent> {
        let mut events = Vec::new();
        self.sections = sections;

        let retain = |id: &mut Option<SectionId>, sections: &SectionList| {
            if id.as_ref().is_some_and(|s| !sections.contains(s)) {
                *id = None;
            }
        };
        retain(&mut self.last_report, &self.sections);
        retain(&mut self.report_while_locked, &self.sections);

        if let Some(lock) = &self.lock {
            if !self.sections.contains(&lock.section) {
                self.release(ReleaseReason::SectionRemoved, &mut events);
            }
        }
        if let Some(active) = &self.active {
            if !self.sections.contains(active) {
                let fallback = self.last_report.clone();
                self.set_active(fallback, &mut events);
            }
        }
        events
    }

    /// Drop the lock and every pending timer (component unmount)
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.lock = None;
        self.report_while_locked = None;
    }

    fn configured(&self, section: &SectionId) -> CoreResult<SectionId> {
        if self.sections.contains(section) {
            Ok(section.clone())
        } else {
            Err(PortfolioError::UnknownSection(section.to_string()))
        }
    }

    fn acquire(&mut self, section: SectionId, origin: LockOrigin, events: &mut Vec<NavigationEvent>) {
        self.report_while_locked = None;
        self.set_active(Some(section.clone()), events);
        let lock = Lock { section, origin };
        self.lock = Some(lock.clone());
        events.push(NavigationEvent::LockAcquired(lock));
    }

    fn release(&mut self, reason: ReleaseReason, events: &mut Vec<NavigationEvent>) {
        let Some(lock) = self.lock.take() else {
            return;
        };
        self.timers.clear();
        tracing::debug!(section = %lock.section, %reason, "lock released");
        events.push(NavigationEvent::LockReleased {
            section: lock.section,
            reason,
        });

        // Scroll reports suppressed by the lock take effect now
        if let Some(pending) = self.report_while_locked.take() {
            self.set_active(Some(pending), events);
        }
    }

    fn set_active(&mut self, to: Option<SectionId>, events: &mut Vec<NavigationEvent>) {
        if self.active == to {
            return;
        }
        let from = std::mem::replace(&mut self.active, to.clone());
        events.push(NavigationEvent::ActiveChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::page_sections;

    fn id(s: &str) -> SectionId {
        SectionId::new(s).unwrap()
    }

    fn coordinator() -> NavigationCoordinator {
        NavigationCoordinator::new(page_sections(true), &NavigationConfig::default())
    }

    fn ms(v: u64) -> Timestamp {
        Timestamp::from_millis(v)
    }

    #[test]
    fn test_starts_empty() {
        let nav = coordinator();
        assert_eq!(nav.active(), None);
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_scroll_drives_active_without_lock() {
        let mut nav = coordinator();
        let events = nav.on_scroll_report(&id("skills"), ms(0));
        assert_eq!(
            events,
            vec![NavigationEvent::ActiveChanged {
                from: None,
                to: Some(id("skills"))
            }]
        );
        assert_eq!(nav.active(), Some(&id("skills")));
    }

    #[test]
    fn test_manual_locks_against_other_reports() {
        let mut nav = coordinator();
        nav.set_manual(&id("contact"), ms(0)).unwrap();
        assert_eq!(nav.active(), Some(&id("contact")));

        nav.on_scroll_report(&id("projects"), ms(100));
        nav.on_scroll_report(&id("skills"), ms(200));
        nav.advance(ms(10_000));
        assert_eq!(nav.active(), Some(&id("contact")));
        assert!(nav.is_locked());
    }

    #[test]
    fn test_settle_releases_lock() {
        let mut nav = coordinator();
        nav.set_manual(&id("contact"), ms(0)).unwrap();
        nav.on_scroll_report(&id("how"), ms(300));
        nav.on_scroll_report(&id("contact"), ms(600));
        assert!(nav.is_settling());

        assert!(nav.advance(ms(2_000)).is_empty());
        let events = nav.advance(ms(2_100));
        assert!(events.contains(&NavigationEvent::LockReleased {
            section: id("contact"),
            reason: ReleaseReason::Settled
        }));
        assert!(!nav.is_locked());

        nav.on_scroll_report(&id("how"), ms(2_200));
        assert_eq!(nav.active(), Some(&id("how")));
    }

    #[test]
    fn test_settle_interrupted_by_other_report() {
        let mut nav = coordinator();
        nav.set_manual(&id("contact"), ms(0)).unwrap();
        nav.on_scroll_report(&id("contact"), ms(100));
        nav.on_scroll_report(&id("theme"), ms(800));
        assert!(!nav.is_settling());

        nav.advance(ms(5_000));
        assert!(nav.is_locked());
        assert_eq!(nav.active(), Some(&id("contact")));
    }

    #[test]
    fn test_repeated_matching_reports_keep_timer_running() {
        let mut nav = coordinator();
        nav.set_manual(&id("skills"), ms(0)).unwrap();
        nav.on_scroll_report(&id("skills"), ms(100));
        nav.on_scroll_report(&id("skills"), ms(1_000));
        // deadline is from the first matching report
        nav.advance(ms(1_600));
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_new_manual_overrides_pending_settle() {
        let mut nav = coordinator();
        nav.set_manual(&id("skills"), ms(0)).unwrap();
        nav.on_scroll_report(&id("skills"), ms(100));
        nav.set_manual(&id("contact"), ms(1_000)).unwrap();

        nav.advance(ms(1_700));
        assert_eq!(nav.lock().map(|l| &l.section), Some(&id("contact")));
        assert_eq!(nav.active(), Some(&id("contact")));
    }

    #[test]
    fn test_manual_on_already_visible_section_settles() {
        let mut nav = coordinator();
        nav.on_scroll_report(&id("experience"), ms(0));
        nav.set_manual(&id("experience"), ms(100)).unwrap();
        nav.advance(ms(1_600));
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_manual_unknown_section_is_rejected() {
        let mut nav = coordinator();
        let err = nav.set_manual(&id("blog"), ms(0)).unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownSection(_)));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_deep_link_releases_after_timeout() {
        let mut nav = coordinator();
        nav.init_from_url(Some("#experience"), ms(0));
        assert_eq!(nav.active(), Some(&id("experience")));
        assert_eq!(nav.lock().unwrap().origin, LockOrigin::DeepLink);

        nav.advance(ms(2_999));
        assert!(nav.is_locked());
        let events = nav.advance(ms(3_000));
        assert!(events.contains(&NavigationEvent::LockReleased {
            section: id("experience"),
            reason: ReleaseReason::Timeout
        }));

        nav.on_scroll_report(&id("skills"), ms(3_100));
        assert_eq!(nav.active(), Some(&id("skills")));
    }

    #[test]
    fn test_deep_link_adopts_report_received_while_locked() {
        let mut nav = coordinator();
        nav.init_from_url(Some("#experience"), ms(0));
        nav.on_scroll_report(&id("skills"), ms(500));
        assert_eq!(nav.active(), Some(&id("experience")));

        nav.advance(ms(3_000));
        assert_eq!(nav.active(), Some(&id("skills")));
    }

    #[test]
    fn test_init_from_url_only_once() {
        let mut nav = coordinator();
        assert!(nav.init_from_url(Some("#nope"), ms(0)).is_empty());
        assert!(nav.init_from_url(Some("#skills"), ms(10)).is_empty());
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_removed_lock_section_expires() {
        let mut nav = coordinator();
        nav.on_scroll_report(&id("projects"), ms(0));
        nav.set_manual(&id("featured-projects"), ms(10)).unwrap();

        let events = nav.set_sections(page_sections(false));
        assert!(events.contains(&NavigationEvent::LockReleased {
            section: id("featured-projects"),
            reason: ReleaseReason::SectionRemoved
        }));
        assert!(!nav.is_locked());
        assert_eq!(nav.active(), Some(&id("projects")));
    }

    #[test]
    fn test_empty_section_list_clears_everything() {
        let mut nav = coordinator();
        nav.set_manual(&id("skills"), ms(0)).unwrap();
        nav.set_sections(SectionList::new());
        assert!(!nav.is_locked());
        assert_eq!(nav.active(), None);
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_teardown_clears_timers() {
        let mut nav = coordinator();
        nav.init_from_url(Some("#skills"), ms(0));
        nav.teardown();
        assert_eq!(nav.next_deadline(), None);
        assert!(nav.advance(ms(10_000)).is_empty());
    }
}
