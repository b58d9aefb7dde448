//! "Why the OASIS theme" section: pick a character, read the pitch.

use dioxus::prelude::*;
use portfolio_ui::Accent;

use super::RegionTitle;

struct Character {
    id: &'static str,
    name: &'static str,
    accent: Accent,
    message: &'static str,
    pillar: &'static str,
    detail: &'static str,
}

static CHARACTERS: [Character; 5] = [
    Character {
        id: "halliday",
        name: "James Halliday",
        accent: Accent::Cyan,
        message: "Digital spaces where people can be whoever they want to be. That is the kind of experience worth building.",
        pillar: "Virtual Reality & Innovation",
        detail: "Immersive digital experiences that push boundaries, built on solid engineering.",
    },
    Character {
        id: "parzival",
        name: "Parzival",
        accent: Accent::Green,
        message: "Every interaction should feel like an adventure: functional first, then transformative.",
        pillar: "Gaming & Interactive Experiences",
        detail: "Interactive effects, motion and user-centric patterns that make technology feel magical.",
    },
    Character {
        id: "art3mis",
        name: "Art3mis",
        accent: Accent::Purple,
        message: "Seamless performance is essential. Every part of an app is tuned for speed and reliability.",
        pillar: "Performance & Optimization",
        detail: "Efficient rendering and smooth animation so every interaction feels instant.",
    },
    Character {
        id: "aech",
        name: "Aech",
        accent: Accent::Orange,
        message: "Creative problem-solving under pressure separates great engineers from good ones.",
        pillar: "Creative Problem Solving",
        detail: "Complex challenges met with inventive solutions, balanced with technical rigor.",
    },
    Character {
        id: "shoto",
        name: "Shoto",
        accent: Accent::Red,
        message: "The best technology feels like magic but works reliably in reality.",
        pillar: "Future-Forward Technology",
        detail: "Current frameworks and patterns, production-ready today and ready for tomorrow.",
    },
];

fn character(id: &str) -> Option<&'static Character> {
    CHARACTERS.iter().find(|c| c.id == id)
}

#[component]
pub fn ThemeValidation() -> Element {
    let mut selected: Signal<Option<&'static str>> = use_signal(|| None);
    let current = selected().and_then(character);

    rsx! {
        section { id: "theme", class: "page-section",
            RegionTitle {
                section: "theme".to_string(),
                kicker: "THEME VALIDATION".to_string(),
                title: "Why the OASIS?".to_string(),
                desc: "Pick a character to see how the theme maps to the way I work.".to_string(),
                accent: Accent::Blue,
            }

            div { class: "character-row",
                for c in CHARACTERS.iter() {
                    button {
                        key: "{c.id}",
                        class: if selected() == Some(c.id) { "character-chip {c.accent.class()} active" } else { "character-chip {c.accent.class()}" },
                        r#type: "button",
                        onclick: move |_| {
                            let next = if selected() == Some(c.id) { None } else { Some(c.id) };
                            selected.set(next);
                        },
                        "{c.name}"
                    }
                }
            }

            if let Some(c) = current {
                div { class: "character-card {c.accent.class()}",
                    p { class: "character-message", "{c.message}" }
                    h3 { "{c.pillar}" }
                    p { "{c.detail}" }
                }
            } else {
                p { class: "empty-state", "Select a character." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lookup() {
        assert_eq!(character("aech").map(|c| c.name), Some("Aech"));
        assert!(character("sorrento").is_none());
    }

    #[test]
    fn test_character_ids_unique() {
        for (i, a) in CHARACTERS.iter().enumerate() {
            for b in CHARACTERS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
