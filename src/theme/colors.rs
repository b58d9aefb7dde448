//! Color constants for the neon OASIS palette.
//!
//! Mirrors the custom properties at the top of the global stylesheet.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const ZINC_950: &str = "#09090b";
pub const ZINC_900: &str = "#18181b";
pub const PANEL: &str = "rgba(24, 24, 27, 0.6)";
pub const BORDER: &str = "rgba(255, 255, 255, 0.1)";

// === ACCENTS (one per pill/kicker variant) ===
pub const CYAN: &str = "#67e8f9";
pub const GREEN: &str = "#86efac";
pub const PURPLE: &str = "#d8b4fe";
pub const ORANGE: &str = "#fdba74";
pub const RED: &str = "#fca5a5";
pub const BLUE: &str = "#93c5fd";
pub const FUCHSIA: &str = "#f0abfc";

// === GLOWS ===
pub const CYAN_GLOW: &str = "rgba(56, 189, 248, 0.3)";
pub const PURPLE_GLOW: &str = "rgba(168, 85, 247, 0.3)";
pub const ORANGE_GLOW: &str = "rgba(251, 146, 60, 0.4)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.5)";

/// Accent color for a pill/kicker accent class
pub fn accent_color(class: &str) -> &'static str {
    match class {
        "accent-green" => GREEN,
        "accent-purple" => PURPLE,
        "accent-orange" => ORANGE,
        "accent-red" => RED,
        "accent-blue" => BLUE,
        _ => CYAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_ui::Accent;

    #[test]
    fn test_every_accent_has_a_color() {
        for i in 0..6 {
            let class = Accent::nth(i).class();
            let color = accent_color(class);
            if class != "accent-cyan" {
                assert_ne!(color, CYAN, "{} fell back to cyan", class);
            }
        }
    }

    #[test]
    fn test_stylesheet_defines_palette() {
        let css = crate::theme::GLOBAL_STYLES;
        for color in [CYAN, GREEN, PURPLE, ORANGE, RED, BLUE] {
            assert!(css.contains(color), "missing {}", color);
        }
    }
}
