//! Neon OASIS theme: palette constants and the global stylesheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
