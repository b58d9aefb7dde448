//! Contact cards: email, phone numbers and LinkedIn.

use dioxus::prelude::*;
use portfolio_ui::{Accent, ButtonVariant, LinkButton};

use super::hero::CopyButton;
use super::RegionTitle;
use crate::context::use_portfolio;

const MAIL_SUBJECT: &str = "Opportunity - Frontend / Full-Stack / Mobile";

/// `mailto:` link with a prefilled subject
pub fn mailto(email: &str, subject: &str) -> String {
    let encoded: String = subject
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => c.to_string(),
            other => {
                let mut buf = [0u8; 4];
                other
                    .encode_utf8(&mut buf)
                    .bytes()
                    .map(|b| format!("%{:02X}", b))
                    .collect()
            }
        })
        .collect();
    format!("mailto:{}?subject={}", email, encoded)
}

/// `tel:` link with whitespace removed
pub fn tel(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let profile = portfolio.read().profile.clone();
    let phones: Vec<String> = profile.phone.numbers().into_iter().map(String::from).collect();

    rsx! {
        section { id: "contact", class: "page-section",
            RegionTitle {
                section: "contact".to_string(),
                kicker: "LET'S CONNECT".to_string(),
                title: "Contact".to_string(),
                desc: "Fastest way: email or LinkedIn.".to_string(),
                accent: Accent::Purple,
            }

            div { class: "contact-grid",
                div { class: "contact-card accent-cyan",
                    div { class: "contact-label", "Email" }
                    div { class: "contact-value", "{profile.email}" }
                    if !profile.email.is_empty() {
                        div { class: "contact-actions",
                            LinkButton {
                                href: mailto(&profile.email, MAIL_SUBJECT),
                                variant: ButtonVariant::Neon,
                                "Email me"
                            }
                            CopyButton { value: profile.email.clone(), label: "email".to_string() }
                        }
                    }
                }

                div { class: "contact-card accent-green",
                    div { class: "contact-label", "Phone" }
                    for phone in phones.iter() {
                        div { key: "{phone}", class: "contact-value", "{phone}" }
                    }
                    div { class: "contact-actions",
                        for (i, phone) in phones.iter().enumerate() {
                            LinkButton {
                                key: "call-{i}",
                                href: tel(phone),
                                variant: ButtonVariant::Ghost,
                                if i == 0 { "Call" } else { "Call {i + 1}" }
                            }
                        }
                        if !profile.linkedin.is_empty() {
                            LinkButton {
                                href: profile.linkedin.clone(),
                                variant: ButtonVariant::Ghost,
                                "LinkedIn"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject() {
        assert_eq!(
            mailto("me@example.com", "Hi there / you"),
            "mailto:me@example.com?subject=Hi%20there%20%2F%20you"
        );
    }

    #[test]
    fn test_tel_strips_spaces() {
        assert_eq!(tel("+971 50 123 4567"), "tel:+971501234567");
    }
}
