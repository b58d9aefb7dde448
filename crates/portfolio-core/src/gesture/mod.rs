//! Gesture recognizers for the hidden features.
//!
//! Three independent recognizers share one state shape:
//!
//! ```text
//! Idle ──match──▶ Matching(progress) ──complete──▶ Triggered ──▶ Idle
//!   ▲                   │ wrong input / deadline
//!   └───────────────────┘
//! ```
//!
//! - [`KeySequence`]: a typed code word, with a phased reveal afterwards
//! - [`ClickBurst`]: N clicks on one registered target within a rolling window
//! - [`ModifierClick`]: Alt/Option click inside a registered region
//!
//! Targets are registered by the presentational layer when their element
//! mounts and deregistered on unmount. A recognizer with no registered target
//! stays idle; it never searches for one.

mod burst;
mod modifier;
mod sequence;

pub use burst::ClickBurst;
pub use modifier::ModifierClick;
pub use sequence::{KeySequence, RevealPhase};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which recognizer an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    KeySequence,
    ClickBurst,
    ModifierClick,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureKind::KeySequence => write!(f, "key sequence"),
            GestureKind::ClickBurst => write!(f, "click burst"),
            GestureKind::ModifierClick => write!(f, "modifier click"),
        }
    }
}

/// Progress of a recognizer against its pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Number of pattern elements matched so far
    Matching(usize),
    /// Pattern complete; further input is ignored until re-armed
    Triggered,
}

impl GestureState {
    pub fn progress(&self) -> usize {
        match self {
            GestureState::Matching(n) => *n,
            _ => 0,
        }
    }
}

/// What a recognizer did with one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Input is not relevant to this recognizer
    Ignored,
    /// Input advanced a partial match
    Progressed,
    /// Input broke a partial match
    Reset,
    /// Input completed the pattern
    Triggered,
}

impl Disposition {
    /// Whether the host should prevent the default action of the event
    pub fn consumes(&self, kind: GestureKind) -> bool {
        match kind {
            // keystrokes are never swallowed
            GestureKind::KeySequence => false,
            GestureKind::ClickBurst => !matches!(self, Disposition::Ignored),
            GestureKind::ModifierClick => matches!(self, Disposition::Triggered),
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self, Disposition::Triggered)
    }
}

/// Handle for a registered DOM element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Modifier keys held during an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        shift: false,
        meta: false,
    };

    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ctrl: false,
        shift: false,
        meta: false,
    };
}

/// A keydown as seen by the recognizers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    /// `KeyboardEvent.key`
    pub key: String,
    /// Target was an input, textarea or contenteditable element
    #[serde(default)]
    pub from_editable: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            from_editable: false,
        }
    }

    pub fn editable(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            from_editable: true,
        }
    }

    /// The key as a single lowercase character, if it is one
    pub fn char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        c.to_lowercase().next()
    }
}

/// A click as seen by the recognizers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickInput {
    /// Registered targets under the pointer, innermost first.
    /// Empty when the click hit nothing registered.
    #[serde(default)]
    pub path: Vec<TargetId>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl ClickInput {
    pub fn on(target: impl Into<TargetId>) -> Self {
        Self {
            path: vec![target.into()],
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Innermost registered target
    pub fn target(&self) -> Option<&TargetId> {
        self.path.first()
    }

    pub fn within(&self, target: &TargetId) -> bool {
        self.path.iter().any(|t| t == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_char_lowercases_single_chars() {
        assert_eq!(KeyInput::new("O").char(), Some('o'));
        assert_eq!(KeyInput::new("s").char(), Some('s'));
        assert_eq!(KeyInput::new("Shift").char(), None);
        assert_eq!(KeyInput::new("").char(), None);
    }

    #[test]
    fn test_click_within_path() {
        let click = ClickInput {
            path: vec![TargetId::new("hero-name"), TargetId::new("hero")],
            modifiers: Modifiers::ALT,
        };
        assert_eq!(click.target(), Some(&TargetId::new("hero-name")));
        assert!(click.within(&TargetId::new("hero")));
        assert!(!click.within(&TargetId::new("timeline-dot")));
    }

    #[test]
    fn test_disposition_consumes() {
        assert!(!Disposition::Triggered.consumes(GestureKind::KeySequence));
        assert!(Disposition::Progressed.consumes(GestureKind::ClickBurst));
        assert!(!Disposition::Ignored.consumes(GestureKind::ClickBurst));
        assert!(Disposition::Triggered.consumes(GestureKind::ModifierClick));
        assert!(!Disposition::Ignored.consumes(GestureKind::ModifierClick));
    }

    #[test]
    fn test_state_progress() {
        assert_eq!(GestureState::Matching(3).progress(), 3);
        assert_eq!(GestureState::Triggered.progress(), 0);
        assert_eq!(GestureState::default(), GestureState::Idle);
    }
}
