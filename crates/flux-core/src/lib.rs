//! FluxOS core shell.
//!
//! Platform-agnostic simulated-phone shell: the gesture interpreter, screen
//! router, dynamic island, notification shade, home grid, dock, widget
//! board, toast banner, and the built-in app screens. Components hold plain
//! state and synchronize named SDI objects each frame; all drawing goes
//! through the backend traits in `flux-types`.

// Re-exports from flux-types (foundation types and traits).
pub use flux_types::backend;
pub use flux_types::bitmap_font;
pub use flux_types::config;
pub use flux_types::error;
pub use flux_types::input;

pub use flux_sdi as sdi;

pub mod apps;
pub mod dock;
pub mod gesture;
pub mod homegrid;
pub mod island;
pub mod screen;
pub mod shade;
pub mod system;
pub mod theme;
pub mod toast;
pub mod wallpaper;
pub mod widgets;
