//! Foundation types and traits for FluxOS.
//!
//! This crate contains the platform-agnostic core types shared by all FluxOS
//! crates: colors, input events, backend trait definitions, configuration,
//! error types, and the bitmap font.

pub mod backend;
pub mod bitmap_font;
pub mod config;
pub mod error;
pub mod input;
