//! Bitmap font re-export from the shared `flux-types::bitmap_font` module.
//!
//! All glyph data and lookup lives in the shared crate so every backend
//! renders identical text.

pub use flux_types::bitmap_font::*;
