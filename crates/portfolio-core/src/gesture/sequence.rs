//! Keystroke sequence recognizer and its reveal phases.

use std::time::Duration;

use super::{Disposition, GestureState, KeyInput};
use crate::config::SequenceConfig;
use crate::error::{CoreResult, PortfolioError};
use crate::time::{window_expiry, Scheduler, Timestamp};

/// Phases after the code word is typed.
///
/// `Idle → Breaking → MessageShown → Cooldown → Idle`; mobile viewports skip
/// `Breaking`. Matching is suspended in every phase but `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    /// Full-screen breaking animation (desktop only)
    Breaking,
    /// Success message visible
    MessageShown,
    /// Message hidden, recognizer not yet re-armed
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeqTimer {
    /// Partial match expires
    Timeout,
    /// Next reveal phase
    Phase,
}

/// Keys that never break a partial match on their own
const MODIFIER_KEYS: [&str; 6] = ["Shift", "Control", "Alt", "Meta", "CapsLock", "AltGraph"];

/// Detects a typed code word.
#[derive(Debug)]
pub struct KeySequence {
    pattern: Vec<char>,
    progress: usize,
    phase: RevealPhase,
    triggered_at: Option<Timestamp>,
    mobile: bool,
    timers: Scheduler<SeqTimer>,
    timeout: Duration,
    breaking: Duration,
    message_until: Duration,
    cooldown_until: Duration,
}

impl KeySequence {
    pub fn new(config: &SequenceConfig) -> CoreResult<Self> {
        let pattern: Vec<char> = config
            .word
            .trim()
            .chars()
            .flat_map(char::to_lowercase)
            .collect();
        if pattern.is_empty() {
            return Err(PortfolioError::InvalidPattern(
                "key sequence must not be empty".to_string(),
            ));
        }
        Ok(Self {
            pattern,
            progress: 0,
            phase: RevealPhase::Idle,
            triggered_at: None,
            mobile: false,
            timers: Scheduler::new(),
            timeout: Duration::from_millis(config.timeout_ms),
            breaking: Duration::from_millis(config.breaking_ms),
            message_until: Duration::from_millis(config.message_until_ms),
            cooldown_until: Duration::from_millis(config.cooldown_until_ms),
        })
    }

    pub fn state(&self) -> GestureState {
        if self.phase != RevealPhase::Idle {
            GestureState::Triggered
        } else if self.progress > 0 {
            GestureState::Matching(self.progress)
        } else {
            GestureState::Idle
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Viewport classification, updated on resize
    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timers.next_deadline()
    }

    /// Feed one keydown.
    ///
    /// A key that breaks a partial match is tested again against the first
    /// pattern element, so `o a o a s i s` still completes.
    pub fn key(&mut self, input: &KeyInput, now: Timestamp) -> Disposition {
        self.advance(now);

        if input.from_editable || self.phase != RevealPhase::Idle {
            return Disposition::Ignored;
        }
        if MODIFIER_KEYS.contains(&input.key.as_str()) {
            return Disposition::Ignored;
        }

        let key = input.char();
        if key == Some(self.pattern[self.progress]) {
            self.progress += 1;
            if self.progress == self.pattern.len() {
                self.trigger(now);
                return Disposition::Triggered;
            }
            self.timers
                .schedule(SeqTimer::Timeout, window_expiry(now, self.timeout));
            return Disposition::Progressed;
        }

        let was_matching = self.progress > 0;
        self.clear_progress();

        if key == Some(self.pattern[0]) {
            self.progress = 1;
            if self.progress == self.pattern.len() {
                self.trigger(now);
                return Disposition::Triggered;
            }
            self.timers
                .schedule(SeqTimer::Timeout, window_expiry(now, self.timeout));
            return Disposition::Progressed;
        }

        if was_matching {
            Disposition::Reset
        } else {
            Disposition::Ignored
        }
    }

    /// Fire due timers. Returns the reveal phases entered, in order.
    pub fn advance(&mut self, now: Timestamp) -> Vec<RevealPhase> {
        let mut entered = Vec::new();
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                SeqTimer::Timeout => {
                    if self.phase == RevealPhase::Idle && self.progress > 0 {
                        tracing::trace!(progress = self.progress, "key sequence timed out");
                        self.progress = 0;
                    }
                }
                SeqTimer::Phase => {
                    if let Some(phase) = self.next_phase() {
                        entered.push(phase);
                    }
                }
            }
        }
        entered
    }

    /// Return to idle and cancel every pending timer
    pub fn reset(&mut self) {
        self.timers.clear();
        self.progress = 0;
        self.phase = RevealPhase::Idle;
        self.triggered_at = None;
    }

    fn clear_progress(&mut self) {
        self.progress = 0;
        self.timers.cancel(SeqTimer::Timeout);
    }

    fn trigger(&mut self, now: Timestamp) {
        self.timers.clear();
        self.progress = 0;
        self.triggered_at = Some(now);
        if self.mobile {
            self.phase = RevealPhase::MessageShown;
            self.timers.schedule(SeqTimer::Phase, now + self.message_until);
        } else {
            self.phase = RevealPhase::Breaking;
            self.timers.schedule(SeqTimer::Phase, now + self.breaking);
        }
        tracing::info!(mobile = self.mobile, "key sequence triggered");
    }

    fn next_phase(&mut self) -> Option<RevealPhase> {
        let start = self.triggered_at?;
        let next = match self.phase {
            RevealPhase::Idle => return None,
            RevealPhase::Breaking => {
                self.timers
                    .schedule(SeqTimer::Phase, start + self.message_until);
                RevealPhase::MessageShown
            }
            RevealPhase::MessageShown => {
                self.timers
                    .schedule(SeqTimer::Phase, start + self.cooldown_until);
                RevealPhase::Cooldown
            }
            RevealPhase::Cooldown => {
                self.triggered_at = None;
                RevealPhase::Idle
            }
        };
        self.phase = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> KeySequence {
        KeySequence::new(&SequenceConfig::default()).unwrap()
    }

    fn type_word(seq: &mut KeySequence, word: &str, start: u64, step: u64) -> Vec<Disposition> {
        word.chars()
            .enumerate()
            .map(|(i, c)| {
                seq.key(
                    &KeyInput::new(c.to_string()),
                    Timestamp(start + i as u64 * step),
                )
            })
            .collect()
    }

    #[test]
    fn test_rejects_empty_word() {
        let config = SequenceConfig {
            word: String::new(),
            ..SequenceConfig::default()
        };
        assert!(KeySequence::new(&config).is_err());
    }

    #[test]
    fn test_exact_sequence_triggers_once() {
        let mut seq = recognizer();
        let out = type_word(&mut seq, "oasis", 0, 200);
        assert_eq!(out.iter().filter(|d| d.is_triggered()).count(), 1);
        assert_eq!(seq.state(), GestureState::Triggered);
        assert_eq!(seq.phase(), RevealPhase::Breaking);

        // typing again during the reveal does nothing
        let again = type_word(&mut seq, "oasis", 1_000, 10);
        assert!(again.iter().all(|d| *d == Disposition::Ignored));
    }

    #[test]
    fn test_uppercase_keys_match() {
        let mut seq = recognizer();
        let out = type_word(&mut seq, "OASIS", 0, 100);
        assert_eq!(out.last(), Some(&Disposition::Triggered));
    }

    #[test]
    fn test_gap_longer_than_timeout_resets() {
        let mut seq = recognizer();
        type_word(&mut seq, "oas", 0, 100);
        assert_eq!(seq.state(), GestureState::Matching(3));

        let d = seq.key(&KeyInput::new("i"), Timestamp(200 + 3_001));
        assert_eq!(d, Disposition::Ignored);
        assert_eq!(seq.state(), GestureState::Idle);
    }

    #[test]
    fn test_gap_equal_to_timeout_still_matches() {
        let mut seq = recognizer();
        let out = type_word(&mut seq, "oasis", 0, 3_000);
        assert_eq!(out.last(), Some(&Disposition::Triggered));
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut seq = recognizer();
        type_word(&mut seq, "oa", 0, 100);
        assert_eq!(seq.key(&KeyInput::new("x"), Timestamp(300)), Disposition::Reset);
        assert_eq!(seq.state(), GestureState::Idle);
    }

    #[test]
    fn test_breaking_key_restarts_match() {
        let mut seq = recognizer();
        type_word(&mut seq, "oas", 0, 100);
        // 'o' breaks the pattern at position 3 but begins a new match
        assert_eq!(seq.key(&KeyInput::new("o"), Timestamp(400)), Disposition::Progressed);
        assert_eq!(seq.state(), GestureState::Matching(1));

        let out = type_word(&mut seq, "asis", 500, 100);
        assert_eq!(out.last(), Some(&Disposition::Triggered));
    }

    #[test]
    fn test_editable_targets_ignored() {
        let mut seq = recognizer();
        type_word(&mut seq, "oa", 0, 100);
        assert_eq!(seq.key(&KeyInput::editable("x"), Timestamp(300)), Disposition::Ignored);
        assert_eq!(seq.state(), GestureState::Matching(2));
    }

    #[test]
    fn test_modifier_keys_do_not_break_match() {
        let mut seq = recognizer();
        type_word(&mut seq, "oa", 0, 100);
        assert_eq!(seq.key(&KeyInput::new("Shift"), Timestamp(300)), Disposition::Ignored);
        assert_eq!(seq.state(), GestureState::Matching(2));
    }

    #[test]
    fn test_named_key_breaks_match() {
        let mut seq = recognizer();
        type_word(&mut seq, "oa", 0, 100);
        assert_eq!(seq.key(&KeyInput::new("Enter"), Timestamp(300)), Disposition::Reset);
    }

    #[test]
    fn test_desktop_reveal_phases() {
        let mut seq = recognizer();
        type_word(&mut seq, "oasis", 0, 100);
        let t = 400;
        assert!(seq.advance(Timestamp(t + 1_499)).is_empty());
        assert_eq!(seq.advance(Timestamp(t + 1_500)), vec![RevealPhase::MessageShown]);
        assert_eq!(seq.advance(Timestamp(t + 6_500)), vec![RevealPhase::Cooldown]);
        assert_eq!(seq.advance(Timestamp(t + 7_000)), vec![RevealPhase::Idle]);
        assert_eq!(seq.state(), GestureState::Idle);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_mobile_skips_breaking() {
        let mut seq = recognizer();
        seq.set_mobile(true);
        type_word(&mut seq, "oasis", 0, 100);
        assert_eq!(seq.phase(), RevealPhase::MessageShown);
        assert_eq!(
            seq.advance(Timestamp(400 + 7_000)),
            vec![RevealPhase::Cooldown, RevealPhase::Idle]
        );
    }

    #[test]
    fn test_rearms_after_cooldown() {
        let mut seq = recognizer();
        type_word(&mut seq, "oasis", 0, 100);
        seq.advance(Timestamp(10_000));
        let out = type_word(&mut seq, "oasis", 10_000, 100);
        assert_eq!(out.last(), Some(&Disposition::Triggered));
    }

    #[test]
    fn test_reset_clears_timers() {
        let mut seq = recognizer();
        type_word(&mut seq, "oa", 0, 100);
        assert!(seq.next_deadline().is_some());
        seq.reset();
        assert_eq!(seq.next_deadline(), None);
        assert_eq!(seq.state(), GestureState::Idle);
    }
}
