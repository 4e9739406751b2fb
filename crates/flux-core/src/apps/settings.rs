//! Settings panel.
//!
//! Toggle rows for wifi and bluetooth, stepper rows for brightness and
//! volume, and an inert notifications row. The panel itself is stateless;
//! it renders and hit-tests against [`SystemToggles`].

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::apps::{draw_chrome, hide_chrome, hit_close};
use crate::system::SystemToggles;
use crate::theme;

/// Action produced by a tap on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleWifi,
    ToggleBluetooth,
    BrightnessDown,
    BrightnessUp,
    VolumeDown,
    VolumeUp,
    Close,
}

/// Level-row step applied per tap.
pub const LEVEL_STEP: i16 = 10;

const ROW_COUNT: usize = 5;
const ROW_LABELS: [&str; ROW_COUNT] =
    ["Wi-Fi", "Bluetooth", "Brightness", "Volume", "Notifications"];

/// Stateless settings panel layout.
#[derive(Debug, Default)]
pub struct SettingsPanel;

impl SettingsPanel {
    fn row_rect(i: usize) -> (i32, i32, u32, u32) {
        let y = theme::CONTENT_Y + i as i32 * (theme::ROW_H as i32 + theme::ROW_GAP);
        (theme::CONTENT_X, y, theme::CONTENT_W, theme::ROW_H)
    }

    /// Toggle-switch rect on a toggle row.
    fn switch_rect(i: usize) -> (i32, i32, u32, u32) {
        let (x, y, w, h) = Self::row_rect(i);
        (x + w as i32 - 60, y + (h as i32 - 24) / 2, 44, 24)
    }

    /// Minus/plus zones on a stepper row.
    fn stepper_rects(i: usize) -> ((i32, i32, u32, u32), (i32, i32, u32, u32)) {
        let (x, y, w, h) = Self::row_rect(i);
        let by = y + (h as i32 - 28) / 2;
        (
            (x + w as i32 - 120, by, 28, 28),
            (x + w as i32 - 40, by, 28, 28),
        )
    }

    /// Hit-test a tap on the settings screen.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<SettingsAction> {
        if hit_close(x, y) {
            return Some(SettingsAction::Close);
        }
        let inside = |(rx, ry, rw, rh): (i32, i32, u32, u32)| {
            x >= rx && x < rx + rw as i32 && y >= ry && y < ry + rh as i32
        };
        if inside(Self::switch_rect(0)) {
            return Some(SettingsAction::ToggleWifi);
        }
        if inside(Self::switch_rect(1)) {
            return Some(SettingsAction::ToggleBluetooth);
        }
        let (minus, plus) = Self::stepper_rects(2);
        if inside(minus) {
            return Some(SettingsAction::BrightnessDown);
        }
        if inside(plus) {
            return Some(SettingsAction::BrightnessUp);
        }
        let (minus, plus) = Self::stepper_rects(3);
        if inside(minus) {
            return Some(SettingsAction::VolumeDown);
        }
        if inside(plus) {
            return Some(SettingsAction::VolumeUp);
        }
        None
    }

    /// Synchronize SDI objects for the settings screen.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry, toggles: &SystemToggles) {
        draw_chrome(sdi, "settings", "Settings");

        for (i, label) in ROW_LABELS.iter().enumerate() {
            let (x, y, w, h) = Self::row_rect(i);
            let row_name = format!("set_row_{i}");
            let label_name = format!("set_label_{i}");

            ensure_rounded_fill(sdi, &row_name, x, y, w, h, theme::CARD_BG, 10);
            ensure_text(
                sdi,
                &label_name,
                x + 16,
                y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut(&label_name) {
                obj.text = Some((*label).to_string());
            }
        }

        // Toggle switches.
        for (i, on) in [(0usize, toggles.wifi), (1, toggles.bluetooth)] {
            let (sx, sy, sw, sh) = Self::switch_rect(i);
            let track_name = format!("set_switch_{i}");
            let thumb_name = format!("set_thumb_{i}");
            ensure_rounded_fill(
                sdi,
                &track_name,
                sx,
                sy,
                sw,
                sh,
                if on { theme::ACCENT } else { theme::CARD_STROKE },
                (sh / 2) as u16,
            );
            let thumb_x = if on { sx + sw as i32 - 22 } else { sx + 2 };
            ensure_rounded_fill(sdi, &thumb_name, thumb_x, sy + 2, 20, 20, theme::TEXT_PRIMARY, 10);
        }

        // Stepper rows with the live value between minus and plus.
        for (i, value) in [(2usize, toggles.brightness()), (3, toggles.volume())] {
            let (minus, plus) = Self::stepper_rects(i);
            let minus_name = format!("set_minus_{i}");
            let plus_name = format!("set_plus_{i}");
            let value_name = format!("set_value_{i}");

            for (name, (bx, by, bw, bh), glyph) in
                [(&minus_name, minus, "-"), (&plus_name, plus, "+")]
            {
                ensure_rounded_fill(sdi, name, bx, by, bw, bh, theme::ACCENT.with_alpha(60), 8);
                let glyph_label = format!("{name}_glyph");
                ensure_text(
                    sdi,
                    &glyph_label,
                    bx + (bw as i32 - theme::char_w(theme::FONT_SMALL)) / 2,
                    by + (bh as i32 - theme::FONT_SMALL as i32) / 2,
                    theme::FONT_SMALL,
                    theme::TEXT_PRIMARY,
                );
                if let Ok(obj) = sdi.get_mut(&glyph_label) {
                    obj.text = Some(glyph.to_string());
                }
            }

            let text = format!("{value}");
            let tw = theme::text_w(&text, theme::FONT_SMALL);
            let (mx, my, mw, _) = minus;
            let (px, _, _, _) = plus;
            let span = px - (mx + mw as i32);
            ensure_text(
                sdi,
                &value_name,
                mx + mw as i32 + (span - tw) / 2,
                my + 10,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut(&value_name) {
                obj.text = Some(text);
            }
        }

        // Notifications row chevron (inert).
        let (x, y, w, h) = Self::row_rect(4);
        ensure_text(
            sdi,
            "set_chevron",
            x + w as i32 - 24,
            y + (h as i32 - theme::FONT_SMALL as i32) / 2,
            theme::FONT_SMALL,
            theme::TEXT_MUTED,
        );
        if let Ok(obj) = sdi.get_mut("set_chevron") {
            obj.text = Some(">".to_string());
        }
    }

    /// Hide all settings screen SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_chrome(sdi, "settings");
        for i in 0..ROW_COUNT {
            hide_objects(sdi, &[&format!("set_row_{i}"), &format!("set_label_{i}")]);
        }
        for i in 0..2 {
            hide_objects(sdi, &[&format!("set_switch_{i}"), &format!("set_thumb_{i}")]);
        }
        for i in 2..4 {
            hide_objects(
                sdi,
                &[
                    &format!("set_minus_{i}"),
                    &format!("set_minus_{i}_glyph"),
                    &format!("set_plus_{i}"),
                    &format!("set_plus_{i}_glyph"),
                    &format!("set_value_{i}"),
                ],
            );
        }
        hide_objects(sdi, &["set_chevron"]);
    }
}
