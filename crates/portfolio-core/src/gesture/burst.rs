//! Multi-click burst recognizer.

use std::time::Duration;

use super::{ClickInput, Disposition, GestureState, TargetId};
use crate::config::BurstConfig;
use crate::time::{window_expiry, Scheduler, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BurstTimer {
    Gap,
}

/// Counts clicks on one registered target.
///
/// Each qualifying click restarts the window; a gap longer than the window
/// drops the count. Reaching the threshold triggers once and zeroes the
/// count in the same step.
#[derive(Debug)]
pub struct ClickBurst {
    target: Option<TargetId>,
    count: u32,
    threshold: u32,
    window: Duration,
    timers: Scheduler<BurstTimer>,
}

impl ClickBurst {
    pub fn new(config: &BurstConfig) -> Self {
        Self {
            target: None,
            count: 0,
            threshold: config.clicks.max(1),
            window: Duration::from_millis(config.window_ms),
            timers: Scheduler::new(),
        }
    }

    /// The marker element mounted
    pub fn register_target(&mut self, target: TargetId) {
        tracing::debug!(%target, "burst target registered");
        self.target = Some(target);
        self.reset();
    }

    /// The marker element unmounted; a different element is ignored
    pub fn unregister_target(&mut self, target: &TargetId) {
        if self.target.as_ref() == Some(target) {
            self.target = None;
            self.reset();
        }
    }

    pub fn target(&self) -> Option<&TargetId> {
        self.target.as_ref()
    }

    pub fn state(&self) -> GestureState {
        match self.count {
            0 => GestureState::Idle,
            n => GestureState::Matching(n as usize),
        }
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timers.next_deadline()
    }

    pub fn click(&mut self, input: &ClickInput, now: Timestamp) -> Disposition {
        self.advance(now);

        let Some(target) = &self.target else {
            return Disposition::Ignored;
        };
        if !input.within(target) {
            return Disposition::Ignored;
        }

        self.count += 1;
        if self.count >= self.threshold {
            tracing::info!(marker = %target, clicks = self.count, "click burst triggered");
            self.reset();
            return Disposition::Triggered;
        }
        self.timers
            .schedule(BurstTimer::Gap, window_expiry(now, self.window));
        Disposition::Progressed
    }

    /// Expire the count when the window lapsed. Returns whether it did.
    pub fn advance(&mut self, now: Timestamp) -> bool {
        let mut expired = false;
        while let Some(BurstTimer::Gap) = self.timers.pop_due(now) {
            if self.count > 0 {
                tracing::trace!(count = self.count, "click burst window lapsed");
                self.count = 0;
                expired = true;
            }
        }
        expired
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.timers.clear();
    }
}
