//! Portfolio UI Components
//!
//! Dioxus presentational atoms for the portfolio site, in its neon-on-void
//! arcade aesthetic.
//!
//! ## Design Philosophy
//!
//! Components hold no navigation or gesture state. They render what the
//! runtime in `portfolio-core` decides and forward DOM events back up:
//! - **Cyan**: links, kickers, interactive elements
//! - **Purple / Fuchsia**: glow accents and gradients
//! - **Green**: availability and success states
//! - **Zinc-950**: background darkness

pub mod components;

pub use components::*;
