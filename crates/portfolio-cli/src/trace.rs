//! Scripted input traces.
//!
//! A trace is a JSON document of timestamped DOM inputs. Replaying it feeds
//! each step to a [`PortfolioRuntime`] and fires every timer that falls due
//! in between, so the output is exactly what the page would have rendered.
//!
//! ```json
//! {
//!   "burst_targets": ["timeline-dot"],
//!   "steps": [
//!     { "type": "url", "at": 0, "fragment": "#skills" },
//!     { "type": "key", "at": 100, "key": "o" },
//!     { "type": "click", "at": 200, "path": ["timeline-dot"] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use portfolio_core::{
    page_sections, ClickInput, KeyInput, MemoryFlagStore, Modifiers, NavigationEvent,
    PortfolioConfig, PortfolioRuntime, RuntimeEvent, SectionList, TargetId, Timestamp,
    VisibilitySample,
};
use serde::Deserialize;

/// Upper bound on timers fired while draining, in case of a misbehaving config
const MAX_DRAIN: usize = 10_000;

/// One input at a point in time
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// URL fragment present on load
    Url {
        at: u64,
        #[serde(default)]
        fragment: Option<String>,
    },
    Key {
        at: u64,
        key: String,
        /// Typed into an input or textarea
        #[serde(default)]
        editable: bool,
    },
    Click {
        at: u64,
        #[serde(default)]
        path: Vec<TargetId>,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Visibility {
        at: u64,
        samples: Vec<VisibilitySample>,
    },
    /// Nav link click
    Navigate { at: u64, section: String },
    Resize { at: u64, width: u32 },
    /// Just let time pass
    Advance { at: u64 },
}

impl Step {
    pub fn at(&self) -> Timestamp {
        let ms = match self {
            Step::Url { at, .. }
            | Step::Key { at, .. }
            | Step::Click { at, .. }
            | Step::Visibility { at, .. }
            | Step::Navigate { at, .. }
            | Step::Resize { at, .. }
            | Step::Advance { at } => *at,
        };
        Timestamp(ms)
    }
}

/// A full trace document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Trace {
    /// Section ids; the standard page sections when omitted
    pub sections: Option<Vec<String>>,
    /// Include the featured section in the standard list
    pub featured: bool,
    pub burst_targets: Vec<String>,
    pub modifier_regions: Vec<String>,
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Trace = serde_json::from_str(json).context("Invalid trace document")?;
        Ok(trace)
    }

    pub fn section_list(&self) -> SectionList {
        match &self.sections {
            Some(ids) => SectionList::parse(ids.iter().map(String::as_str)),
            None => page_sections(self.featured),
        }
    }
}

/// One line of replay output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLine {
    pub at: Timestamp,
    pub text: String,
}

/// Replay options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Keep firing timers after the last step until none remain
    pub drain: bool,
    /// Also report inputs whose default action was prevented
    pub show_prevented: bool,
}

/// Run a trace through a fresh runtime mounted at t=0
pub fn replay(
    trace: &Trace,
    config: PortfolioConfig,
    options: ReplayOptions,
) -> Result<Vec<ReplayLine>> {
    let mut runtime = PortfolioRuntime::new(
        config,
        trace.section_list(),
        Box::new(MemoryFlagStore::new()),
    )?;
    for target in &trace.burst_targets {
        runtime.register_burst_target(TargetId::new(target.as_str()));
    }
    for region in &trace.modifier_regions {
        runtime.register_modifier_region(TargetId::new(region.as_str()));
    }
    runtime.mount(Timestamp(0));

    let mut lines = Vec::new();
    let mut clock = Timestamp(0);

    for step in &trace.steps {
        let at = step.at();
        if at < clock {
            anyhow::bail!("Trace steps must be in time order ({}ms after {}ms)", at.0, clock.0);
        }
        fire_due(&mut runtime, at, &mut lines);
        clock = at;

        let (prevented, events) = apply_step(&mut runtime, step)?;
        if prevented && options.show_prevented {
            lines.push(ReplayLine {
                at,
                text: "input: default prevented".to_string(),
            });
        }
        record(&mut lines, at, events);
    }

    if options.drain {
        for _ in 0..MAX_DRAIN {
            let Some(deadline) = runtime.next_deadline() else {
                break;
            };
            let events = runtime.advance(deadline);
            record(&mut lines, deadline, events);
        }
    }

    runtime.teardown();
    tracing::debug!(lines = lines.len(), "replay finished");
    Ok(lines)
}

/// Fire timers one deadline at a time so each event carries its own time
fn fire_due(runtime: &mut PortfolioRuntime, until: Timestamp, lines: &mut Vec<ReplayLine>) {
    while let Some(deadline) = runtime.next_deadline() {
        if deadline > until {
            break;
        }
        let events = runtime.advance(deadline);
        record(lines, deadline, events);
    }
}

fn apply_step(runtime: &mut PortfolioRuntime, step: &Step) -> Result<(bool, Vec<RuntimeEvent>)> {
    let now = step.at();
    let result = match step {
        Step::Url { fragment, .. } => (false, runtime.init_from_url(fragment.as_deref(), now)),
        Step::Key { key, editable, .. } => {
            let input = if *editable {
                KeyInput::editable(key.as_str())
            } else {
                KeyInput::new(key.as_str())
            };
            let outcome = runtime.key(&input, now);
            (outcome.prevent_default, outcome.events)
        }
        Step::Click {
            path, modifiers, ..
        } => {
            let input = ClickInput {
                path: path.clone(),
                modifiers: *modifiers,
            };
            let outcome = runtime.click(&input, now);
            (outcome.prevent_default, outcome.events)
        }
        Step::Visibility { samples, .. } => (false, runtime.visibility(samples.clone(), now)),
        Step::Navigate { section, .. } => (
            false,
            runtime
                .navigate(section, now)
                .with_context(|| format!("Navigation to {:?} at {}ms", section, now.0))?,
        ),
        Step::Resize { width, .. } => {
            runtime.set_viewport_width(*width);
            (false, Vec::new())
        }
        Step::Advance { .. } => (false, runtime.advance(now)),
    };
    Ok(result)
}

fn record(lines: &mut Vec<ReplayLine>, at: Timestamp, events: Vec<RuntimeEvent>) {
    lines.extend(events.iter().map(|event| ReplayLine {
        at,
        text: describe(event),
    }));
}

/// Human-readable form of one runtime event
pub fn describe(event: &RuntimeEvent) -> String {
    match event {
        RuntimeEvent::Navigation(NavigationEvent::ActiveChanged { from, to }) => format!(
            "active: {} -> {}",
            from.as_ref().map_or("-", |s| s.as_str()),
            to.as_ref().map_or("-", |s| s.as_str())
        ),
        RuntimeEvent::Navigation(NavigationEvent::LockAcquired(lock)) => {
            format!("lock: {} ({:?})", lock.section, lock.origin)
        }
        RuntimeEvent::Navigation(NavigationEvent::LockReleased { section, reason }) => {
            format!("release: {} ({})", section, reason)
        }
        RuntimeEvent::PushFragment(section) => format!("push: {}", section.fragment()),
        RuntimeEvent::GestureTriggered { kind, target } => match target {
            Some(target) => format!("gesture: {} on {}", kind, target),
            None => format!("gesture: {}", kind),
        },
        RuntimeEvent::Reveal(phase) => format!("reveal: {:?}", phase),
        RuntimeEvent::Hint(portfolio_core::HintEvent::Show(id)) => format!("hint shown: {}", id),
        RuntimeEvent::Hint(portfolio_core::HintEvent::Hide(id)) => format!("hint hidden: {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> Vec<String> {
        let trace = Trace::from_json(json).unwrap();
        replay(&trace, PortfolioConfig::default(), ReplayOptions::default())
            .unwrap()
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    #[test]
    fn test_step_parsing() {
        let step: Step =
            serde_json::from_str(r#"{"type":"key","at":5,"key":"o"}"#).unwrap();
        assert_eq!(
            step,
            Step::Key {
                at: 5,
                key: "o".to_string(),
                editable: false
            }
        );
        assert_eq!(step.at(), Timestamp(5));
    }

    #[test]
    fn test_deep_link_replay() {
        let lines = run(
            r##"{"steps":[{"type":"url","at":0,"fragment":"#skills"},{"type":"advance","at":3500}]}"##,
        );
        assert!(lines.contains(&"active: - -> skills".to_string()));
        assert!(lines.contains(&"release: skills (timeout)".to_string()));
    }

    #[test]
    fn test_manual_navigation_pushes_fragment() {
        let lines = run(r#"{"steps":[{"type":"navigate","at":10,"section":"contact"}]}"#);
        assert!(lines.contains(&"push: #contact".to_string()));
    }

    #[test]
    fn test_out_of_order_steps_rejected() {
        let trace = Trace::from_json(
            r#"{"steps":[{"type":"advance","at":10},{"type":"advance","at":5}]}"#,
        )
        .unwrap();
        assert!(replay(&trace, PortfolioConfig::default(), ReplayOptions::default()).is_err());
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let trace =
            Trace::from_json(r#"{"steps":[{"type":"navigate","at":0,"section":"blog"}]}"#)
                .unwrap();
        assert!(replay(&trace, PortfolioConfig::default(), ReplayOptions::default()).is_err());
    }

    #[test]
    fn test_drain_fires_remaining_hints() {
        let trace = Trace::from_json(r#"{"steps":[]}"#).unwrap();
        let lines = replay(
            &trace,
            PortfolioConfig::default(),
            ReplayOptions {
                drain: true,
                show_prevented: false,
            },
        )
        .unwrap();
        assert!(lines.iter().any(|l| l.text.starts_with("hint shown")));
        assert!(lines.windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn test_custom_sections() {
        let trace = Trace::from_json(r#"{"sections":["a","b","a"]}"#).unwrap();
        assert_eq!(trace.section_list().len(), 2);
    }
}
