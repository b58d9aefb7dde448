//! DOM interop through `document::eval`.
//!
//! The browser side lives in one listener script: a window `keydown`
//! listener, a `resize` listener and an `IntersectionObserver` over the
//! section elements. Each posts a [`DomMessage`] back through
//! `dioxus.send`. Everything else here is a one-shot script (fragment,
//! history, scrolling).

use dioxus::prelude::*;
use portfolio_core::{KeyInput, SectionId, SectionList, ViewportBand, VisibilitySample};
use serde::Deserialize;

/// Height of the sticky header subtracted when scrolling to a section
pub const HEADER_OFFSET_PX: u32 = 100;

/// One message from the listener script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomMessage {
    Key(KeyInput),
    Resize { width: u32 },
    Visibility { samples: Vec<VisibilitySample> },
}

/// `rootMargin` that shrinks the viewport to the activation band
pub fn root_margin(band: &ViewportBand) -> String {
    format!(
        "-{}% 0px -{}% 0px",
        (band.top_inset * 100.0).round(),
        (band.bottom_inset * 100.0).round()
    )
}

fn listener_script(band: &ViewportBand, sections: &str) -> String {
    format!(
        r#"
const state = window.__portfolio = window.__portfolio || {{}};
if (state.dispose) state.dispose();
const send = (msg) => dioxus.send(msg);
const editable = (el) => !!el && (el.isContentEditable || ["INPUT", "TEXTAREA", "SELECT"].includes(el.tagName));
const onKey = (e) => send({{ type: "key", key: e.key, from_editable: editable(e.target) }});
const onResize = () => send({{ type: "resize", width: Math.round(window.innerWidth) }});
let observer = null;
state.observe = (ids) => {{
  if (observer) observer.disconnect();
  observer = new IntersectionObserver((entries) => {{
    send({{
      type: "visibility",
      samples: entries.map((e) => ({{ section: e.target.id, ratio: e.intersectionRatio, intersecting: e.isIntersecting }})),
    }});
  }}, {{ rootMargin: "{margin}", threshold: [0, 0.1, 0.25, 0.5, 0.75, 1] }});
  ids.forEach((id) => {{
    const el = document.getElementById(id);
    if (el) observer.observe(el);
  }});
}};
state.observe(state.pending || {sections});
state.pending = null;
window.addEventListener("keydown", onKey);
window.addEventListener("resize", onResize);
onResize();
await new Promise((resolve) => {{
  state.dispose = () => {{
    window.removeEventListener("keydown", onKey);
    window.removeEventListener("resize", onResize);
    if (observer) observer.disconnect();
    state.dispose = null;
    state.observe = null;
    resolve();
  }};
}});
"#,
        margin = root_margin(band),
        sections = sections
    )
}

fn section_ids(sections: &SectionList) -> String {
    let ids: Vec<&str> = sections.iter().map(|s| s.as_str()).collect();
    serde_json::to_string(&ids).unwrap_or_else(|e| {
        tracing::warn!("Failed to encode section ids: {}", e);
        "[]".to_string()
    })
}

/// Install the listeners and start observing `sections`.
/// Poll the returned handle with [`next_message`].
pub fn listen(band: &ViewportBand, sections: &SectionList) -> document::Eval {
    document::eval(&listener_script(band, &section_ids(sections)))
}

/// Next message from the listener script; `None` once the channel closes
pub async fn next_message(listeners: &mut document::Eval) -> Option<DomMessage> {
    match listeners.recv::<DomMessage>().await {
        Ok(msg) => Some(msg),
        Err(e) => {
            tracing::debug!("Listener channel closed: {:?}", e);
            None
        }
    }
}

/// Point the observer at the current section elements.
///
/// Before [`listen`] has run the ids are parked on `window.__portfolio` and
/// picked up when the listener script starts.
pub fn observe_sections(sections: &SectionList) {
    document::eval(&observe_script(&section_ids(sections)));
}

fn observe_script(ids: &str) -> String {
    format!(
        "const state = window.__portfolio = window.__portfolio || {{}}; \
         if (state.observe) state.observe({ids}); else state.pending = {ids};",
        ids = ids
    )
}

/// Wait until the browser has laid out the current render
pub async fn next_frame() {
    let script = "await new Promise((r) => requestAnimationFrame(() => requestAnimationFrame(r))); return true;";
    if let Err(e) = document::eval(script).join::<bool>().await {
        tracing::debug!("Animation frame wait failed: {:?}", e);
    }
}

/// Remove every listener installed by [`listen`]
pub fn dispose() {
    document::eval("if (window.__portfolio && window.__portfolio.dispose) window.__portfolio.dispose();");
}

/// `location.hash` at load time
pub async fn read_fragment() -> Option<String> {
    match document::eval("return window.location.hash;").join::<String>().await {
        Ok(hash) if !hash.is_empty() => Some(hash),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Failed to read location hash: {:?}", e);
            None
        }
    }
}

/// Add `#section` to history without reloading or jumping
pub fn push_fragment(section: &SectionId) {
    if let Some(fragment) = quoted(&section.fragment()) {
        document::eval(&format!("history.pushState(null, '', {});", fragment));
    }
}

/// Smooth scroll so the section sits just below the sticky header
pub fn scroll_to(section: &SectionId) {
    if let Some(id) = quoted(section.as_str()) {
        document::eval(&format!(
            "const el = document.getElementById({}); \
             if (el) window.scrollTo({{ top: el.getBoundingClientRect().top + window.scrollY - {}, behavior: 'smooth' }});",
            id, HEADER_OFFSET_PX
        ));
    }
}

/// Write `text` to the clipboard; `false` when the browser refuses
pub async fn copy_text(text: &str) -> bool {
    let Some(arg) = quoted(text) else {
        return false;
    };
    let script = format!(
        "try {{ await navigator.clipboard.writeText({}); return true; }} catch (e) {{ return false; }}",
        arg
    );
    match document::eval(&script).join::<bool>().await {
        Ok(copied) => copied,
        Err(e) => {
            tracing::debug!("Clipboard write failed: {:?}", e);
            false
        }
    }
}

fn quoted(arg: &str) -> Option<String> {
    match serde_json::to_string(arg) {
        Ok(quoted) => Some(quoted),
        Err(e) => {
            tracing::warn!("Failed to encode script argument: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_matches_band() {
        let band = ViewportBand::default();
        let margin = root_margin(&band);
        assert!(margin.starts_with('-'));
        assert!(margin.ends_with("% 0px"));
        assert_eq!(margin.matches('%').count(), 2);
    }

    #[test]
    fn test_key_message() {
        let msg: DomMessage =
            serde_json::from_str(r#"{"type":"key","key":"o","from_editable":false}"#).unwrap();
        assert_eq!(msg, DomMessage::Key(KeyInput::new("o")));
    }

    #[test]
    fn test_visibility_message() {
        let msg: DomMessage = serde_json::from_str(
            r#"{"type":"visibility","samples":[{"section":"skills","ratio":0.5,"intersecting":true}]}"#,
        )
        .unwrap();
        match msg {
            DomMessage::Visibility { samples } => {
                assert_eq!(samples.len(), 1);
                assert_eq!(samples[0].section.as_str(), "skills");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_resize_message() {
        let msg: DomMessage = serde_json::from_str(r#"{"type":"resize","width":375}"#).unwrap();
        assert_eq!(msg, DomMessage::Resize { width: 375 });
    }

    #[test]
    fn test_listener_script_embeds_margin() {
        let band = ViewportBand::default();
        let script = listener_script(&band, "[]");
        assert!(script.contains(&root_margin(&band)));
        assert!(script.contains("dioxus.send"));
    }

    #[test]
    fn test_listener_script_observes_initial_sections() {
        let sections = SectionList::parse(["projects", "contact"]);
        let ids = section_ids(&sections);
        assert_eq!(ids, r#"["projects","contact"]"#);

        let script = listener_script(&ViewportBand::default(), &ids);
        let observe = script
            .find(r#"state.observe(state.pending || ["projects","contact"])"#)
            .expect("initial observe call");
        let listeners = script.find("addEventListener").expect("listeners");
        assert!(observe < listeners);
    }

    #[test]
    fn test_observe_before_listen_parks_ids() {
        let script = observe_script(r#"["skills"]"#);
        assert!(script.contains(r#"state.pending = ["skills"]"#));
        assert!(script.contains(r#"state.observe(["skills"])"#));
    }
}
