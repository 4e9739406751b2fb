//! The built-in app screens and their state managers.
//!
//! Every full-screen app shares the same chrome: a large title on the left
//! and a round close button in the top-right corner.

pub mod catalogue;
pub mod devices;
pub mod hub;
pub mod multitask;
pub mod placeholder;
pub mod settings;
pub mod tasks;

pub use catalogue::{AppEntry, default_apps};

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::theme;

/// Whether a tap hits the shared close button.
pub fn hit_close(x: i32, y: i32) -> bool {
    x >= theme::APP_CLOSE_X
        && x < theme::APP_CLOSE_X + theme::APP_CLOSE_SIZE as i32
        && y >= theme::APP_CLOSE_Y
        && y < theme::APP_CLOSE_Y + theme::APP_CLOSE_SIZE as i32
}

/// Draw the title row and close button for an app screen.
pub fn draw_chrome(sdi: &mut SdiRegistry, prefix: &str, title: &str) {
    let title_name = format!("{prefix}_title");
    let close_name = format!("{prefix}_close");
    let close_x_name = format!("{prefix}_close_x");

    ensure_text(
        sdi,
        &title_name,
        theme::CONTENT_X,
        theme::APP_TITLE_Y,
        theme::FONT_LARGE,
        theme::TEXT_PRIMARY,
    );
    if let Ok(obj) = sdi.get_mut(&title_name) {
        obj.text = Some(title.to_string());
    }

    ensure_rounded_fill(
        sdi,
        &close_name,
        theme::APP_CLOSE_X,
        theme::APP_CLOSE_Y,
        theme::APP_CLOSE_SIZE,
        theme::APP_CLOSE_SIZE,
        theme::CARD_BG,
        (theme::APP_CLOSE_SIZE / 2) as u16,
    );
    ensure_text(
        sdi,
        &close_x_name,
        theme::APP_CLOSE_X + (theme::APP_CLOSE_SIZE as i32 - theme::char_w(theme::FONT_SMALL)) / 2,
        theme::APP_CLOSE_Y + (theme::APP_CLOSE_SIZE as i32 - theme::FONT_SMALL as i32) / 2,
        theme::FONT_SMALL,
        theme::TEXT_PRIMARY,
    );
    if let Ok(obj) = sdi.get_mut(&close_x_name) {
        obj.text = Some("x".to_string());
    }
}

/// Hide the chrome drawn by [`draw_chrome`].
pub fn hide_chrome(sdi: &mut SdiRegistry, prefix: &str) {
    hide_objects(
        sdi,
        &[
            &format!("{prefix}_title"),
            &format!("{prefix}_close"),
            &format!("{prefix}_close_x"),
        ],
    );
}
