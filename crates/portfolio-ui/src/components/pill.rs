//! Pill Components
//!
//! Small rounded tags for stacks, skills and project labels.

use dioxus::prelude::*;

/// Accent color shared by pills, kickers and badges
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Accent {
    #[default]
    Cyan,
    Green,
    Purple,
    Orange,
    Red,
    Blue,
}

impl Accent {
    /// Returns the CSS modifier class for this accent
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
            Accent::Red => "accent-red",
            Accent::Blue => "accent-blue",
        }
    }

    /// Cycle through accents by index, for lists without a fixed color
    pub fn nth(index: usize) -> Self {
        const CYCLE: [Accent; 6] = [
            Accent::Cyan,
            Accent::Purple,
            Accent::Green,
            Accent::Orange,
            Accent::Blue,
            Accent::Red,
        ];
        CYCLE[index % CYCLE.len()]
    }
}

/// Properties for the Pill component
#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    #[props(default)]
    pub accent: Accent,
    pub children: Element,
}

/// A single rounded tag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Pill { accent: Accent::Green, "Rust" }
/// }
/// ```
#[component]
pub fn Pill(props: PillProps) -> Element {
    rsx! {
        span { class: "pill {props.accent.class()}",
            span { class: "pill-glow" }
            span { class: "pill-label", {props.children} }
        }
    }
}

/// Properties for the PillRow component
#[derive(Clone, PartialEq, Props)]
pub struct PillRowProps {
    pub labels: Vec<String>,
    /// Fixed accent; cycles through accents when `None`
    #[props(default)]
    pub accent: Option<Accent>,
}

/// A wrapping row of pills. Renders nothing for an empty list.
#[component]
pub fn PillRow(props: PillRowProps) -> Element {
    if props.labels.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "pill-row",
            for (i, label) in props.labels.iter().enumerate() {
                Pill {
                    key: "{i}-{label}",
                    accent: props.accent.unwrap_or(Accent::nth(i)),
                    "{label}"
                }
            }
        }
    }
}
