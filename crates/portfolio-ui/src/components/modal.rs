//! Modal Component
//!
//! Fullscreen overlay dialog for project details and hidden panels.
//! Closes on backdrop click, the close button or Escape.

use dioxus::prelude::*;

use super::CloseButton;

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    /// Small label above the title
    #[props(default = "Project Details".to_string())]
    pub kicker: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Optional additional CSS classes on the dialog panel
    #[props(default)]
    pub class: Option<String>,
}

/// Overlay dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Modal {
///         open: open(),
///         title: project.name.clone(),
///         on_close: move |_| open.set(false),
///         p { "{project.summary}" }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let panel_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal-panel {}", extra),
        _ => "modal-panel".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    // focus so Escape reaches the overlay
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header-bar" }
                div { class: "modal-header",
                    div {
                        div { class: "modal-kicker", "{props.kicker}" }
                        div { class: "modal-title", "{props.title}" }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                div { class: "modal-body", {props.children} }
            }
        }
    }
}
