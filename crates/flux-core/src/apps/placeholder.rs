//! Generic "coming soon" view for apps without an implementation.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::screen::Screen;
use crate::theme;

const BACK_Y: i32 = 460;
const BACK_W: u32 = 160;
const BACK_H: u32 = 40;

fn back_rect() -> (i32, i32, u32, u32) {
    (
        (theme::SCREEN_W as i32 - BACK_W as i32) / 2,
        BACK_Y,
        BACK_W,
        BACK_H,
    )
}

/// Whether a tap hits the back-to-home button.
pub fn hit_test(x: i32, y: i32) -> bool {
    let (bx, by, bw, bh) = back_rect();
    x >= bx && x < bx + bw as i32 && y >= by && y < by + bh as i32
}

/// Synchronize SDI objects for the placeholder view of `screen`.
pub fn update_sdi(sdi: &mut SdiRegistry, screen: Screen) {
    // Package glyph stand-in.
    ensure_rounded_fill(
        sdi,
        "ph_icon",
        (theme::SCREEN_W as i32 - 64) / 2,
        280,
        64,
        64,
        theme::CARD_BG,
        16,
    );

    let title = screen.label();
    let tw = theme::text_w(title, theme::FONT_MEDIUM);
    ensure_text(
        sdi,
        "ph_title",
        (theme::SCREEN_W as i32 - tw) / 2,
        368,
        theme::FONT_MEDIUM,
        theme::TEXT_PRIMARY,
    );
    if let Ok(obj) = sdi.get_mut("ph_title") {
        obj.text = Some(title.to_string());
    }

    let hint = "This app is coming soon";
    let tw = theme::text_w(hint, theme::FONT_SMALL);
    ensure_text(
        sdi,
        "ph_hint",
        (theme::SCREEN_W as i32 - tw) / 2,
        400,
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    );
    if let Ok(obj) = sdi.get_mut("ph_hint") {
        obj.text = Some(hint.to_string());
    }

    let (bx, by, bw, bh) = back_rect();
    ensure_rounded_fill(sdi, "ph_back", bx, by, bw, bh, theme::ACCENT, 20);
    let label = "Back to Home";
    let tw = theme::text_w(label, theme::FONT_SMALL);
    ensure_text(
        sdi,
        "ph_back_label",
        bx + (bw as i32 - tw) / 2,
        by + (bh as i32 - theme::FONT_SMALL as i32) / 2,
        theme::FONT_SMALL,
        theme::TEXT_PRIMARY,
    );
    if let Ok(obj) = sdi.get_mut("ph_back_label") {
        obj.text = Some(label.to_string());
    }
}

/// Hide the placeholder view.
pub fn hide_sdi(sdi: &mut SdiRegistry) {
    hide_objects(sdi, &["ph_icon", "ph_title", "ph_hint", "ph_back", "ph_back_label"]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_button_hit() {
        let (bx, by, _, _) = back_rect();
        assert!(hit_test(bx + 5, by + 5));
        assert!(!hit_test(bx - 5, by));
        assert!(!hit_test(0, 0));
    }

    #[test]
    fn update_sdi_shows_screen_label() {
        let mut sdi = SdiRegistry::new();
        update_sdi(&mut sdi, Screen::Camera);
        assert_eq!(sdi.get("ph_title").unwrap().text.as_deref(), Some("Camera"));
        update_sdi(&mut sdi, Screen::Gallery);
        assert_eq!(sdi.get("ph_title").unwrap().text.as_deref(), Some("Gallery"));
    }

    #[test]
    fn hide_sdi_hides_all() {
        let mut sdi = SdiRegistry::new();
        update_sdi(&mut sdi, Screen::Phone);
        hide_sdi(&mut sdi);
        assert!(!sdi.get("ph_title").unwrap().visible);
        assert!(!sdi.get("ph_back").unwrap().visible);
    }
}
