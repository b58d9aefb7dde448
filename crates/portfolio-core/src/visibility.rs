//! Visibility Observer: which configured section is most visible.
//!
//! Hosts feed intersection samples (ratios from an IntersectionObserver, or
//! ratios computed with [`ViewportBand::intersection`] from element boxes).
//! The observer keeps the latest sample per section and reports a new winner
//! only when it changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;
use crate::section::{SectionId, SectionList};

/// Vertical activation window inside the viewport.
///
/// Insets are fractions of the viewport height; the defaults keep the band
/// between 35% and 45% from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_inset: 0.35,
            bottom_inset: 0.55,
        }
    }
}

impl ViewportBand {
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            top_inset: config.band_top,
            bottom_inset: config.band_bottom,
        }
    }

    /// Band edges in viewport pixels
    pub fn edges(&self, viewport_height: f64) -> (f64, f64) {
        let top = viewport_height * self.top_inset;
        let bottom = viewport_height - viewport_height * self.bottom_inset;
        (top, bottom)
    }

    /// Intersection of an element box (viewport coordinates) with the band.
    ///
    /// Like an IntersectionObserver ratio, the result is the visible share of
    /// the element itself, so it is `None` when the element misses the band.
    pub fn intersection(&self, top: f64, bottom: f64, viewport_height: f64) -> Option<f64> {
        let height = bottom - top;
        if !(height > 0.0) || !(viewport_height > 0.0) {
            return None;
        }
        let (band_top, band_bottom) = self.edges(viewport_height);
        let overlap = bottom.min(band_bottom) - top.max(band_top);
        if overlap <= 0.0 {
            return None;
        }
        Some((overlap / height).clamp(0.0, 1.0))
    }
}

/// One intersection observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySample {
    pub section: SectionId,
    pub ratio: f64,
    #[serde(default = "default_intersecting")]
    pub intersecting: bool,
}

fn default_intersecting() -> bool {
    true
}

impl VisibilitySample {
    pub fn new(section: SectionId, ratio: f64, intersecting: bool) -> Self {
        Self {
            section,
            ratio,
            intersecting,
        }
    }

    /// Sample from a computed band intersection
    pub fn from_intersection(section: SectionId, intersection: Option<f64>) -> Self {
        match intersection {
            Some(ratio) => Self::new(section, ratio, true),
            None => Self::new(section, 0.0, false),
        }
    }
}

/// Tracks the most visible section among those intersecting the band
#[derive(Debug, Default)]
pub struct VisibilityObserver {
    sections: SectionList,
    samples: HashMap<SectionId, (f64, bool)>,
    current: Option<SectionId>,
}

impl VisibilityObserver {
    pub fn new(sections: SectionList) -> Self {
        Self {
            sections,
            samples: HashMap::new(),
            current: None,
        }
    }

    /// Re-subscribe to a new section list.
    ///
    /// Samples for sections that disappeared are dropped. The last reported
    /// section is kept only if it is still configured.
    pub fn observe(&mut self, sections: SectionList) {
        self.samples.retain(|id, _| sections.contains(id));
        if let Some(current) = &self.current {
            if !sections.contains(current) {
                self.current = None;
            }
        }
        tracing::debug!(count = sections.len(), "visibility observer re-subscribed");
        self.sections = sections;
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// Last reported most-visible section
    pub fn current(&self) -> Option<&SectionId> {
        self.current.as_ref()
    }

    /// Record a batch of samples.
    ///
    /// Returns the new most-visible section when it changed. When nothing
    /// intersects the band the previous value is retained.
    pub fn report<I>(&mut self, samples: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = VisibilitySample>,
    {
        for sample in samples {
            if !self.sections.contains(&sample.section) {
                continue;
            }
            let ratio = if sample.ratio.is_finite() { sample.ratio } else { 0.0 };
            self.samples.insert(sample.section, (ratio, sample.intersecting));
        }

        let best = self.most_visible()?;
        if self.current.as_ref() == Some(&best) {
            return None;
        }
        self.current = Some(best.clone());
        Some(best)
    }

    /// Highest ratio among intersecting sections; earliest registered wins ties
    pub fn most_visible(&self) -> Option<SectionId> {
        let mut best: Option<(&SectionId, f64)> = None;
        for id in &self.sections {
            let Some(&(ratio, intersecting)) = self.samples.get(id) else {
                continue;
            };
            if !intersecting {
                continue;
            }
            // strict comparison keeps the earlier registration on ties
            if best.map_or(true, |(_, r)| ratio > r) {
                best = Some((id, ratio));
            }
        }
        best.map(|(id, _)| id.clone())
    }
}
