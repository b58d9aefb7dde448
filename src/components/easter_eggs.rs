//! Hidden-feature overlays.
//!
//! Nothing in here decides when to show; the runtime does. These components
//! only render what [`PageState`](crate::context::PageState) says:
//! - the code-word reveal (breaking screen, then a message)
//! - the architecture panel opened by Alt-click on a section title
//! - the timeline deep dive opened by a triple click on the first node
//! - the one-time hint tooltip

use dioxus::prelude::*;
use portfolio_core::RevealPhase;
use portfolio_ui::{CloseButton, Modal};

use crate::context::{use_page_state, use_portfolio};

/// All overlays, mounted once at the page root
#[component]
pub fn EasterEggs() -> Element {
    rsx! {
        SequenceReveal {}
        SystemMode {}
        TimelineDeepDive {}
        HintTooltip {}
    }
}

#[component]
fn SequenceReveal() -> Element {
    let page = use_page_state();
    let phase = page.read().reveal;

    match phase {
        RevealPhase::Breaking => rsx! {
            div { class: "reveal-breaking", "aria-hidden": "true",
                div { class: "reveal-scanlines" }
                div { class: "reveal-glitch", "ENTERING THE OASIS" }
            }
        },
        RevealPhase::MessageShown => rsx! {
            div { class: "reveal-message", role: "status",
                div { class: "reveal-message-title", "You found the OASIS." }
                p { "Curiosity is the first skill on the list. Thanks for exploring." }
            }
        },
        RevealPhase::Idle | RevealPhase::Cooldown => rsx! {},
    }
}

struct Target {
    label: &'static str,
    value: &'static str,
    measured: &'static str,
}

static PERFORMANCE_TARGETS: [Target; 3] = [
    Target { label: "LCP", value: "< 2.5s", measured: "2.1s" },
    Target { label: "FID", value: "< 100ms", measured: "45ms" },
    Target { label: "CLS", value: "< 0.1", measured: "0.05" },
];

static PRINCIPLES: [(&str, &str); 4] = [
    (
        "Foundations First",
        "Scalable, maintainable architecture from the ground up. Typed, component-driven design.",
    ),
    (
        "Security by Default",
        "Zero-trust approach. Input validation, XSS prevention, secure authentication patterns.",
    ),
    (
        "Performance Critical",
        "Optimize for Core Web Vitals. Code splitting, lazy loading, minimal bundle size.",
    ),
    (
        "Accessibility Matters",
        "WCAG 2.1 AA. Keyboard navigation, screen reader support, semantic HTML.",
    ),
];

static STACK: [(&str, &str); 3] = [
    ("Frontend", "Component library, typed state, server rendering where it pays."),
    ("Content", "Headless CMS behind a normalizing contract with a static fallback."),
    ("Deployment & Monitoring", "CI pipelines, preview builds, error and performance monitoring."),
];

#[component]
fn SystemMode() -> Element {
    let mut page = use_page_state();
    let open = page.read().system_mode;

    rsx! {
        Modal {
            open,
            title: "System Architecture Mode".to_string(),
            kicker: "Design principles, performance targets, and architecture decisions".to_string(),
            class: "system-mode".to_string(),
            on_close: move |_| page.write().system_mode = false,

            div { class: "modal-block",
                h4 { "Performance Targets" }
                div { class: "target-grid",
                    for target in PERFORMANCE_TARGETS.iter() {
                        div { key: "{target.label}", class: "target-card",
                            div { class: "target-label", "{target.label}" }
                            div { class: "target-value", "{target.measured}" }
                            div { class: "target-budget", "Target {target.value}" }
                        }
                    }
                }
            }

            div { class: "modal-block",
                h4 { "Design Principles" }
                div { class: "principle-grid",
                    for (title, body) in PRINCIPLES.iter() {
                        div { key: "{title}", class: "principle-card",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            div { class: "modal-block",
                h4 { "Architecture Stack" }
                for (layer, body) in STACK.iter() {
                    div { key: "{layer}", class: "stack-row",
                        div { class: "stack-layer", "{layer}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

static CONSTRAINTS: [&str; 4] = [
    "Tight deadlines requiring rapid iteration while keeping quality high",
    "Small team and competing priorities",
    "Legacy system integration with outdated APIs and technical debt",
    "Balancing feature velocity with long-term maintainability",
];

static TRADE_OFFS: [(&str, &str); 3] = [
    (
        "Speed vs. Perfection",
        "Iterative delivery over big upfront design: value shipped early, refactoring planned.",
    ),
    (
        "Custom vs. Off-the-shelf",
        "Custom where requirements demanded it, existing libraries for common patterns.",
    ),
    (
        "Technical Debt vs. Clean Architecture",
        "Some debt accepted for delivery, with the discipline to pay it down.",
    ),
];

static LESSONS: [(&str, &str); 3] = [
    ("Earlier Testing Strategy", "Invest in test infrastructure before the first feature lands."),
    ("Design System Thinking", "Start with a component library mindset instead of consolidating later."),
    ("Performance Budget from Start", "Measure early so optimization never needs its own sprint."),
];

/// "Title @ Company" for the most recent experience
fn deep_dive_subtitle(title: Option<(&str, &str)>) -> String {
    match title {
        Some((role, company)) => format!("{} @ {}", role, company),
        None => "Deep dive reflection".to_string(),
    }
}

#[component]
fn TimelineDeepDive() -> Element {
    let mut page = use_page_state();
    let portfolio = use_portfolio();
    let open = page.read().deep_dive;

    let subtitle = {
        let data = portfolio.read();
        deep_dive_subtitle(
            data.work_experiences
                .first()
                .map(|e| (e.title.as_str(), e.company.as_str())),
        )
    };

    rsx! {
        Modal {
            open,
            title: "Why This Project Mattered".to_string(),
            kicker: subtitle,
            class: "deep-dive".to_string(),
            on_close: move |_| page.write().deep_dive = false,

            div { class: "modal-block",
                h4 { "Constraints" }
                ul { class: "detail-list",
                    for item in CONSTRAINTS.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }
            }

            div { class: "modal-block",
                h4 { "Trade-offs" }
                for (decision, detail) in TRADE_OFFS.iter() {
                    div { key: "{decision}", class: "stack-row",
                        div { class: "stack-layer", "{decision}" }
                        p { "{detail}" }
                    }
                }
            }

            div { class: "modal-block",
                h4 { "What I'd do differently" }
                for (lesson, reflection) in LESSONS.iter() {
                    div { key: "{lesson}", class: "stack-row",
                        div { class: "stack-layer", "{lesson}" }
                        p { "{reflection}" }
                    }
                }
            }
        }
    }
}

#[component]
fn HintTooltip() -> Element {
    let mut page = use_page_state();

    if !page.read().tooltip_visible {
        return rsx! {};
    }

    rsx! {
        div { class: "hint-tooltip", role: "status",
            span { class: "hint-tooltip-text", "Try typing the theme word..." }
            CloseButton { onclick: move |_| page.write().tooltip_visible = false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_dive_subtitle() {
        assert_eq!(
            deep_dive_subtitle(Some(("Senior Engineer", "Acme"))),
            "Senior Engineer @ Acme"
        );
        assert_eq!(deep_dive_subtitle(None), "Deep dive reflection");
    }
}
