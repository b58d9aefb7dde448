//! Timing and threshold configuration.
//!
//! Every delay used by the navigation coordinator, the gesture recognizers
//! and the hint scheduler lives here. Values are milliseconds on the wire so
//! a config file stays readable:
//!
//! ```json
//! { "navigation": { "settle_ms": 1500, "deep_link_release_ms": 3000 } }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, PortfolioError};

/// Navigation coordinator timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Continuous scroll agreement required before a manual lock releases
    pub settle_ms: u64,
    /// Unconditional release for locks acquired from a URL fragment
    pub deep_link_release_ms: u64,
    /// Activation band, fraction of viewport height cut from the top
    pub band_top: f64,
    /// Activation band, fraction of viewport height cut from the bottom
    pub band_bottom: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            settle_ms: 1_500,
            deep_link_release_ms: 3_000,
            band_top: 0.35,
            band_bottom: 0.55,
        }
    }
}

impl NavigationConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn deep_link_release(&self) -> Duration {
        Duration::from_millis(self.deep_link_release_ms)
    }
}

/// Keystroke sequence recognizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Lowercase code word, one key per character
    pub word: String,
    /// Maximum gap between two matching keys
    pub timeout_ms: u64,
    /// Breaking animation length (desktop only)
    pub breaking_ms: u64,
    /// When the message hides, measured from the trigger
    pub message_until_ms: u64,
    /// When the recognizer re-arms, measured from the trigger
    pub cooldown_until_ms: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            word: "oasis".to_string(),
            timeout_ms: 3_000,
            breaking_ms: 1_500,
            message_until_ms: 6_500,
            cooldown_until_ms: 7_000,
        }
    }
}

/// Click burst recognizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub clicks: u32,
    /// Maximum gap between two qualifying clicks
    pub window_ms: u64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            clicks: 3,
            window_ms: 1_000,
        }
    }
}

/// Hint delays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    pub welcome_delay_ms: u64,
    pub console_hint_delay_ms: u64,
    pub tooltip_delay_ms: u64,
    pub tooltip_visible_ms: u64,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            welcome_delay_ms: 1_500,
            console_hint_delay_ms: 30_000,
            tooltip_delay_ms: 60_000,
            tooltip_visible_ms: 10_000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub navigation: NavigationConfig,
    pub sequence: SequenceConfig,
    pub burst: BurstConfig,
    pub hints: HintConfig,
    /// Viewport width below which the breaking animation is skipped
    pub mobile_breakpoint_px: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            sequence: SequenceConfig::default(),
            burst: BurstConfig::default(),
            hints: HintConfig::default(),
            mobile_breakpoint_px: 768,
        }
    }
}

impl PortfolioConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a recognizer unusable
    pub fn validate(&self) -> CoreResult<()> {
        if self.sequence.word.trim().is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "sequence.word must not be empty".to_string(),
            ));
        }
        if self.burst.clicks == 0 {
            return Err(PortfolioError::InvalidConfig(
                "burst.clicks must be at least 1".to_string(),
            ));
        }
        if self.sequence.message_until_ms > self.sequence.cooldown_until_ms {
            return Err(PortfolioError::InvalidConfig(
                "sequence.message_until_ms must not exceed cooldown_until_ms".to_string(),
            ));
        }
        let band = &self.navigation;
        if !(0.0..1.0).contains(&band.band_top)
            || !(0.0..1.0).contains(&band.band_bottom)
            || band.band_top + band.band_bottom >= 1.0
        {
            return Err(PortfolioError::InvalidConfig(format!(
                "activation band {}/{} leaves no visible area",
                band.band_top, band.band_bottom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_timings() {
        let config = PortfolioConfig::default();
        assert_eq!(config.navigation.settle(), Duration::from_millis(1_500));
        assert_eq!(config.navigation.deep_link_release(), Duration::from_secs(3));
        assert_eq!(config.sequence.word, "oasis");
        assert_eq!(config.burst.clicks, 3);
        assert_eq!(config.hints.tooltip_delay_ms, 60_000);
        assert_eq!(config.mobile_breakpoint_px, 768);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PortfolioConfig::from_json(r#"{ "navigation": { "settle_ms": 900 } }"#).unwrap();
        assert_eq!(config.navigation.settle_ms, 900);
        assert_eq!(config.navigation.deep_link_release_ms, 3_000);
        assert_eq!(config.burst, BurstConfig::default());
    }

    #[test]
    fn test_rejects_empty_word() {
        let err = PortfolioConfig::from_json(r#"{ "sequence": { "word": "  " } }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_closed_band() {
        let mut config = PortfolioConfig::default();
        config.navigation.band_top = 0.6;
        config.navigation.band_bottom = 0.5;
        assert!(config.validate().is_err());
    }
}
