//! Notification shade -- the pull-down panel over the top of the screen.
//!
//! Opened and closed by the gesture interpreter. Shows two quick-toggle
//! cards (wifi, bluetooth) and a static notification list.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::system::SystemToggles;
use crate::theme;

/// A shade notification entry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub icon: String,
    pub title: String,
    pub body: String,
}

/// Action produced by a tap inside the open shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeAction {
    ToggleWifi,
    ToggleBluetooth,
}

/// Runtime state for the notification shade.
#[derive(Debug)]
pub struct ShadeState {
    pub open: bool,
    notifications: Vec<Notification>,
}

impl ShadeState {
    pub fn new() -> Self {
        Self {
            open: false,
            notifications: vec![Notification {
                icon: "Message".to_string(),
                title: "New Message".to_string(),
                body: "FluxConnect sync completed".to_string(),
            }],
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        log::debug!("shade opened");
    }

    pub fn close(&mut self) {
        self.open = false;
        log::debug!("shade closed");
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Quick-card rects: (x, y, w, h) for wifi and bluetooth.
    fn card_rect(index: usize) -> (i32, i32, u32, u32) {
        let x = theme::SHADE_PAD
            + index as i32 * (theme::QUICK_CARD_W as i32 + theme::SHADE_PAD);
        (x, theme::QUICK_CARD_Y, theme::QUICK_CARD_W, theme::QUICK_CARD_H)
    }

    /// Hit-test a tap while the shade is open.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ShadeAction> {
        if !self.open {
            return None;
        }
        for (i, action) in [ShadeAction::ToggleWifi, ShadeAction::ToggleBluetooth]
            .into_iter()
            .enumerate()
        {
            let (cx, cy, cw, ch) = Self::card_rect(i);
            if x >= cx && x < cx + cw as i32 && y >= cy && y < cy + ch as i32 {
                return Some(action);
            }
        }
        None
    }

    /// Whether a point falls anywhere inside the open shade panel (used to
    /// consume taps that hit neither card).
    pub fn hit_test_panel(&self, _x: i32, y: i32) -> bool {
        self.open && y < theme::SHADE_H as i32
    }

    /// Synchronize SDI objects to reflect the shade state.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry, toggles: &SystemToggles) {
        if !self.open {
            self.hide_sdi(sdi);
            return;
        }

        // Frosted panel over the top of the screen.
        if !sdi.contains("shade_panel") {
            let obj = sdi.create("shade_panel");
            obj.overlay = true;
            obj.z = theme::Z_SHADE;
        }
        if let Ok(obj) = sdi.get_mut("shade_panel") {
            obj.x = 0;
            obj.y = 0;
            obj.w = theme::SCREEN_W;
            obj.h = theme::SHADE_H;
            obj.gradient_top = Some(Color::rgba(24, 24, 38, 245));
            obj.gradient_bottom = Some(Color::rgba(24, 24, 38, 210));
            obj.border_radius = Some(0);
            obj.visible = true;
        }

        // Quick-toggle cards.
        let cards = [("Wi-Fi", toggles.wifi), ("Bluetooth", toggles.bluetooth)];
        for (i, (label, on)) in cards.into_iter().enumerate() {
            let (cx, cy, cw, ch) = Self::card_rect(i);
            let card_name = format!("shade_card_{i}");
            let icon_name = format!("shade_card_icon_{i}");
            let label_name = format!("shade_card_label_{i}");
            let state_name = format!("shade_card_state_{i}");

            ensure_rounded_fill(sdi, &card_name, cx, cy, cw, ch, theme::CARD_BG, 12);
            if let Ok(obj) = sdi.get_mut(&card_name) {
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 1;
                obj.stroke_width = Some(1);
                obj.stroke_color = Some(if on {
                    theme::ACCENT
                } else {
                    theme::CARD_STROKE
                });
            }

            // Status dot, accent when on.
            ensure_rounded_fill(
                sdi,
                &icon_name,
                cx + 12,
                cy + 12,
                12,
                12,
                if on { theme::ACCENT } else { theme::TEXT_MUTED },
                6,
            );
            if let Ok(obj) = sdi.get_mut(&icon_name) {
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 2;
            }

            ensure_text(
                sdi,
                &label_name,
                cx + 12,
                cy + ch as i32 - 22,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut(&label_name) {
                obj.text = Some(label.to_string());
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 2;
            }

            ensure_text(
                sdi,
                &state_name,
                cx + cw as i32 - 36,
                cy + 14,
                theme::FONT_SMALL,
                if on { theme::ACCENT } else { theme::TEXT_MUTED },
            );
            if let Ok(obj) = sdi.get_mut(&state_name) {
                obj.text = Some(if on { "On" } else { "Off" }.to_string());
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 2;
            }
        }

        // Notification cards.
        for (i, notif) in self.notifications.iter().enumerate() {
            let ny = theme::NOTIF_CARD_Y + i as i32 * (theme::NOTIF_CARD_H as i32 + 8);
            let card_name = format!("shade_notif_{i}");
            let title_name = format!("shade_notif_title_{i}");
            let body_name = format!("shade_notif_body_{i}");

            ensure_rounded_fill(
                sdi,
                &card_name,
                theme::SHADE_PAD,
                ny,
                theme::SCREEN_W - 2 * theme::SHADE_PAD as u32,
                theme::NOTIF_CARD_H,
                theme::CARD_BG,
                12,
            );
            if let Ok(obj) = sdi.get_mut(&card_name) {
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 1;
            }

            ensure_text(
                sdi,
                &title_name,
                theme::SHADE_PAD + 14,
                ny + 14,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut(&title_name) {
                obj.text = Some(notif.title.clone());
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 2;
            }
            ensure_text(
                sdi,
                &body_name,
                theme::SHADE_PAD + 14,
                ny + 34,
                theme::FONT_SMALL,
                theme::TEXT_MUTED,
            );
            if let Ok(obj) = sdi.get_mut(&body_name) {
                obj.text = Some(notif.body.clone());
                obj.overlay = true;
                obj.z = theme::Z_SHADE + 2;
            }
        }
    }

    /// Hide all shade SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_objects(sdi, &["shade_panel"]);
        for i in 0..2 {
            hide_objects(
                sdi,
                &[
                    &format!("shade_card_{i}"),
                    &format!("shade_card_icon_{i}"),
                    &format!("shade_card_label_{i}"),
                    &format!("shade_card_state_{i}"),
                ],
            );
        }
        for i in 0..self.notifications.len() {
            hide_objects(
                sdi,
                &[
                    &format!("shade_notif_{i}"),
                    &format!("shade_notif_title_{i}"),
                    &format!("shade_notif_body_{i}"),
                ],
            );
        }
    }
}

impl Default for ShadeState {
    fn default() -> Self {
        Self::new()
    }
}
