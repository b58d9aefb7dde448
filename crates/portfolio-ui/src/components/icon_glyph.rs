//! Icon Glyph Component
//!
//! Stroke icons for the closed [`IconKind`] set, drawn as inline SVG on a
//! 24x24 grid.

use dioxus::prelude::*;
use portfolio_core::IconKind;

/// SVG path data for an icon
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Code2 => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
        IconKind::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        IconKind::Server => &[
            "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
            "M6 6h.01",
            "M6 18h.01",
        ],
        IconKind::Wrench => &[
            "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
        ],
        IconKind::Layers => &[
            "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
            "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
            "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
        ],
        IconKind::ShieldCheck => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"],
        IconKind::Rocket => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
            "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
            "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
        ],
    }
}

/// Properties for the IconGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    pub kind: IconKind,
    /// Rendered size in pixels
    #[props(default = 20)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let class = props.class.clone().unwrap_or_else(|| "icon".to_string());

    rsx! {
        svg {
            class: "{class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            "data-icon": "{props.kind}",
            for d in icon_paths(props.kind) {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        for kind in IconKind::ALL {
            assert!(!icon_paths(kind).is_empty(), "{kind} has no paths");
        }
    }

    #[test]
    fn fallback_icon_is_code() {
        let unknown = IconKind::from_name("not-an-icon");
        assert_eq!(icon_paths(unknown), icon_paths(IconKind::Code2));
    }
}
