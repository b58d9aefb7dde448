//! Property-based tests for the navigation lock and the gesture recognizers
//!
//! Uses proptest to drive arbitrary interleavings of inputs and timings.

use proptest::prelude::*;
use portfolio_core::{
    page_sections, BurstConfig, ClickBurst, ClickInput, Disposition, KeyInput, KeySequence,
    NavigationConfig, NavigationCoordinator, SectionId, SequenceConfig, TargetId, Timestamp,
    VisibilityObserver, VisibilitySample,
};

// ============================================================================
// Strategy Generators
// ============================================================================

const SECTIONS: [&str; 6] = ["projects", "experience", "skills", "how", "theme", "contact"];

fn section(index: usize) -> SectionId {
    SectionId::new(SECTIONS[index % SECTIONS.len()]).unwrap()
}

/// Scroll report (section index) after a delay in ms
fn reports_strategy(max: usize) -> impl Strategy<Value = Vec<(usize, u64)>> {
    prop::collection::vec((0..SECTIONS.len(), 0..5_000u64), 0..max)
}

/// Single printable keys, mostly letters
fn noise_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(|c| c.to_string()),
        1 => Just("Shift".to_string()),
        1 => Just("Enter".to_string()),
        1 => prop::char::range('A', 'Z').prop_map(|c| c.to_string()),
    ]
}

fn coordinator() -> NavigationCoordinator {
    NavigationCoordinator::new(page_sections(false), &NavigationConfig::default())
}

fn sequence() -> KeySequence {
    KeySequence::new(&SequenceConfig::default()).unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// While locked on A, reports of other sections never move the active section
    #[test]
    fn manual_lock_wins_over_other_reports(
        target in 0..SECTIONS.len(),
        reports in reports_strategy(40),
    ) {
        let mut nav = coordinator();
        let locked = section(target);
        nav.set_manual(&locked, Timestamp(0)).unwrap();

        let mut now = 0;
        for (index, delay) in reports {
            now += delay;
            let reported = section(index);
            if reported == locked {
                continue;
            }
            nav.on_scroll_report(&reported, Timestamp(now));
            nav.advance(Timestamp(now));
            prop_assert_eq!(nav.active(), Some(&locked));
            prop_assert!(nav.is_locked());
        }
    }

    /// A report agreeing with the lock for the settle delay releases it
    #[test]
    fn agreeing_report_releases_after_settle(
        target in 0..SECTIONS.len(),
        before in reports_strategy(10),
        after in 0..SECTIONS.len(),
    ) {
        let mut nav = coordinator();
        let locked = section(target);
        nav.set_manual(&locked, Timestamp(0)).unwrap();

        let mut now = 0;
        for (index, delay) in before {
            now += delay;
            let reported = section(index);
            if reported != locked {
                nav.on_scroll_report(&reported, Timestamp(now));
            }
        }
        nav.on_scroll_report(&locked, Timestamp(now));
        nav.advance(Timestamp(now + 1_499));
        prop_assert!(nav.is_locked());
        nav.advance(Timestamp(now + 1_500));
        prop_assert!(!nav.is_locked());

        let next = section(after);
        nav.on_scroll_report(&next, Timestamp(now + 1_600));
        prop_assert_eq!(nav.active(), Some(&next));
    }

    /// A later manual navigation always supersedes the current lock
    #[test]
    fn manual_navigation_supersedes(first in 0..SECTIONS.len(), second in 0..SECTIONS.len()) {
        let mut nav = coordinator();
        let (first, second) = (section(first), section(second));
        nav.set_manual(&first, Timestamp(0)).unwrap();
        nav.on_scroll_report(&first, Timestamp(10));
        nav.set_manual(&second, Timestamp(20)).unwrap();
        prop_assert_eq!(nav.active(), Some(&second));
        prop_assert_eq!(nav.lock().map(|l| &l.section), Some(&second));
    }

    /// The code word typed with every gap inside the window triggers once
    #[test]
    fn exact_word_within_window_triggers_once(gaps in prop::collection::vec(0..=3_000u64, 4)) {
        let mut seq = sequence();
        let mut now = 0;
        let mut triggers = 0;
        for (i, c) in "oasis".chars().enumerate() {
            if i > 0 {
                now += gaps[i - 1];
            }
            if seq.key(&KeyInput::new(c.to_string()), Timestamp(now)).is_triggered() {
                triggers += 1;
            }
        }
        prop_assert_eq!(triggers, 1);
    }

    /// One gap longer than the window anywhere prevents the trigger
    #[test]
    fn gap_beyond_window_never_triggers(
        gaps in prop::collection::vec(0..=3_000u64, 4),
        slow in 0..4usize,
        extra in 1..10_000u64,
    ) {
        let mut seq = sequence();
        let mut now = 0;
        for (i, c) in "oasis".chars().enumerate() {
            if i > 0 {
                now += if i - 1 == slow { 3_000 + extra } else { gaps[i - 1] };
            }
            let outcome = seq.key(&KeyInput::new(c.to_string()), Timestamp(now));
            prop_assert!(!outcome.is_triggered());
        }
    }

    /// Arbitrary key noise never leaves progress beyond the pattern
    #[test]
    fn noise_keeps_progress_in_bounds(keys in prop::collection::vec(noise_key_strategy(), 0..200)) {
        let mut seq = sequence();
        for (i, key) in keys.into_iter().enumerate() {
            seq.key(&KeyInput::new(key), Timestamp(i as u64 * 50));
            prop_assert!(seq.state().progress() < seq.pattern_len());
        }
    }

    /// Clicks inside the window trigger once per threshold reached
    #[test]
    fn burst_triggers_once_per_three_clicks(
        gaps in prop::collection::vec(0..=1_000u64, 1..30),
    ) {
        let mut burst = ClickBurst::new(&BurstConfig::default());
        burst.register_target(TargetId::new("timeline-dot"));
        let click = ClickInput::on("timeline-dot");

        let mut now = 0;
        let mut triggers = 0;
        let clicks = gaps.len();
        for gap in gaps {
            now += gap;
            if burst.click(&click, Timestamp(now)) == Disposition::Triggered {
                triggers += 1;
            }
        }
        prop_assert_eq!(triggers, clicks / 3);
    }

    /// Clicks separated by more than the window never trigger
    #[test]
    fn slow_clicks_never_trigger(gaps in prop::collection::vec(1_001..5_000u64, 1..20)) {
        let mut burst = ClickBurst::new(&BurstConfig::default());
        burst.register_target(TargetId::new("timeline-dot"));
        let click = ClickInput::on("timeline-dot");

        let mut now = 0;
        for gap in gaps {
            now += gap;
            prop_assert_ne!(burst.click(&click, Timestamp(now)), Disposition::Triggered);
        }
    }

    /// Equal ratios resolve to the earliest configured section, whatever the report order
    #[test]
    fn visibility_tie_prefers_registration_order(
        a in 0..SECTIONS.len(),
        b in 0..SECTIONS.len(),
        ratio in 0.01..1.0f64,
        reversed in any::<bool>(),
    ) {
        prop_assume!(a != b);
        let mut observer = VisibilityObserver::new(page_sections(false));
        let mut samples = vec![
            VisibilitySample::new(section(a), ratio, true),
            VisibilitySample::new(section(b), ratio, true),
        ];
        if reversed {
            samples.reverse();
        }
        observer.report(samples);
        let earliest = section(a.min(b));
        prop_assert_eq!(observer.current(), Some(&earliest));
    }
}
