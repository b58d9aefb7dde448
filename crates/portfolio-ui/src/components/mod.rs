//! Reusable UI atoms
//!
//! All components use the neon arcade aesthetic with:
//! - Space Grotesk for headings
//! - JetBrains Mono for kickers and code
//! - Accent colors chosen per section through [`Accent`]

mod button;
mod icon_glyph;
mod modal;
mod pill;
mod section_title;

pub use button::*;
pub use icon_glyph::*;
pub use modal::*;
pub use pill::*;
pub use section_title::*;
