//! Runtime configuration.
//!
//! Loaded from an optional `flux.toml` at startup; every field has a
//! default so a missing or partial file still yields a usable config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxConfig {
    /// Window title for desktop backends.
    pub window_title: String,
    /// Viewport width in pixels (phone-shaped portrait frame).
    pub screen_width: u32,
    /// Viewport height in pixels.
    pub screen_height: u32,
    /// Vertical distance a swipe must travel to count (pixels).
    pub swipe_threshold: i32,
    /// A shade-opening swipe must start within this many pixels of the top.
    pub swipe_edge_region: i32,
    /// Hold duration before a long-press fires (milliseconds).
    pub long_press_ms: u64,
    /// How long a confirmation toast stays visible (milliseconds).
    pub toast_ttl_ms: u64,
}

impl Default for FluxConfig {
    fn default() -> Self {
        Self {
            window_title: "FluxOS".to_string(),
            screen_width: 390,
            screen_height: 844,
            swipe_threshold: 100,
            swipe_edge_region: 100,
            long_press_ms: 800,
            toast_ttl_ms: 1800,
        }
    }
}

impl FluxConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// is missing or malformed (a warning is logged for the latter).
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            },
        }
    }
}
