//! Button Components
//!
//! Link-styled buttons for calls to action:
//! - Primary: filled cyan gradient, glow on hover
//! - Ghost: transparent with a subtle border
//! - Neon: purple-accented, for hidden-feature surfaces

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main call to action
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
    /// Easter egg surfaces
    Neon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Neon => "btn-neon",
        }
    }
}

/// Whether a link leaves the page
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("mailto:")
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    /// Click handler; called before the browser follows the link
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor styled as a button. External links open in a new tab.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: profile.resume_url.clone(),
///         variant: ButtonVariant::Primary,
///         "Download CV"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let base_class = props.variant.class();
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base_class, extra),
        _ => base_class.to_string(),
    };
    let external = is_external(&props.href);

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: if external { "_blank" },
            rel: if external { "noopener noreferrer" },
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, menu, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Neon.class(), "btn-neon");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn external_links() {
        assert!(is_external("https://linkedin.com/in/someone"));
        assert!(is_external("mailto:me@example.com"));
        assert!(!is_external("#contact"));
        assert!(!is_external("/resume.pdf"));
    }
}
