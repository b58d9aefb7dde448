//! Hero header: who, where, and how to reach them.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Accent, ButtonVariant, Pill};

use super::region_title::{use_modifier_region, HERO_REGION};
use super::{gesture_click, navigate_to};
use crate::bridge;
use crate::context::{use_page_state, use_portfolio, use_runtime};

/// How long the "Copied!" confirmation stays up
const COPIED_MS: u64 = 1200;

struct FocusCard {
    title: &'static str,
    headline: &'static str,
    detail: &'static str,
    accent: Accent,
}

static FOCUS_CARDS: [FocusCard; 4] = [
    FocusCard {
        title: "Primary",
        headline: "React \u{2022} Next.js \u{2022} TypeScript \u{2022} Node.js",
        detail: "Designing scalable component systems, high-performance UIs, and SEO-ready SSR applications.",
        accent: Accent::Cyan,
    },
    FocusCard {
        title: "Mobile",
        headline: "React Native \u{2022} Android (Java)",
        detail: "Building secure mobile experiences with biometric auth, native integrations, and reliable store releases.",
        accent: Accent::Green,
    },
    FocusCard {
        title: "State & Data",
        headline: "Redux Toolkit \u{2022} Zustand",
        detail: "Clear separation of client and server state with predictable, maintainable data flows.",
        accent: Accent::Purple,
    },
    FocusCard {
        title: "Quality",
        headline: "Jest \u{2022} React Testing Library \u{2022} CI/CD",
        detail: "Strong testing culture, automated pipelines, and confidence in production releases.",
        accent: Accent::Orange,
    },
];

/// Label for the n-th phone copy button
fn phone_label(index: usize) -> String {
    if index == 0 {
        "phone".to_string()
    } else {
        format!("phone {}", index + 1)
    }
}

#[component]
pub fn Hero() -> Element {
    let runtime = use_runtime();
    let page = use_page_state();
    let portfolio = use_portfolio();
    use_modifier_region(HERO_REGION);
    let title_runtime = runtime.clone();

    let profile = portfolio.read().profile.clone();
    let phones: Vec<String> = profile.phone.numbers().into_iter().map(String::from).collect();

    rsx! {
        header { id: "top", class: "hero",
            div { class: "hero-glow" }
            div { class: "hero-grid",
                div { class: "hero-intro",
                    div { class: "hero-kicker", "WELCOME TO THE OASIS" }
                    h1 {
                        id: HERO_REGION,
                        class: "hero-title",
                        onclick: move |evt: MouseEvent| {
                            gesture_click(&title_runtime, page, HERO_REGION, &evt)
                        },
                        "Building scalable, secure, high-performance "
                        span { class: "hero-title-accent", "web & mobile experiences" }
                    }
                    p { class: "hero-summary", "{profile.title}" }

                    div { class: "pill-row",
                        if !profile.location.is_empty() {
                            Pill { accent: Accent::Cyan, "{profile.location}" }
                        }
                        if !profile.status.is_empty() {
                            Pill { accent: Accent::Green, "{profile.status}" }
                        }
                        Pill { accent: Accent::Red, "Enterprise-Grade" }
                        Pill { accent: Accent::Blue, "Scalable Systems" }
                        Pill { accent: Accent::Purple, "Security-Focused" }
                        Pill { accent: Accent::Orange, "Performance-driven" }
                    }

                    div { class: "hero-actions",
                        a {
                            class: ButtonVariant::Neon.class(),
                            href: "#contact",
                            "aria-label": "Go to contact",
                            onclick: move |evt| {
                                evt.prevent_default();
                                if let Ok(contact) = SectionId::new("contact") {
                                    navigate_to(&runtime, page, &contact);
                                }
                            },
                            "Contact"
                        }
                        if !profile.email.is_empty() {
                            CopyButton { value: profile.email.clone(), label: "email".to_string() }
                        }
                        for (i, phone) in phones.iter().enumerate() {
                            CopyButton { key: "{i}", value: phone.clone(), label: phone_label(i) }
                        }
                    }
                }

                div { class: "hero-focus",
                    for card in FOCUS_CARDS.iter() {
                        div { class: "focus-card {card.accent.class()}",
                            div { class: "focus-card-title", "{card.title}" }
                            div { class: "focus-card-headline", "{card.headline}" }
                            p { class: "focus-card-detail", "{card.detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// Ghost button that copies a value and confirms briefly
#[component]
pub fn CopyButton(value: String, label: String) -> Element {
    let mut copied = use_signal(|| false);

    let class = if copied() {
        format!("{} copied", ButtonVariant::Ghost.class())
    } else {
        ButtonVariant::Ghost.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "Copy {label}",
            onclick: move |_| {
                let value = value.clone();
                spawn(async move {
                    if bridge::copy_text(&value).await {
                        copied.set(true);
                        gloo::timers::future::sleep(Duration::from_millis(COPIED_MS)).await;
                        copied.set(false);
                    }
                });
            },
            if copied() { "Copied!" } else { "Copy {label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_labels() {
        assert_eq!(phone_label(0), "phone");
        assert_eq!(phone_label(1), "phone 2");
    }
}
