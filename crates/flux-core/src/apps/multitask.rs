//! Multitask -- the open-app switcher.
//!
//! Opening an app screen registers it here (idempotent); closing removes it
//! without touching the current screen. The switcher renders one card per
//! open app with a focus area and a close button.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::apps::{draw_chrome, hide_chrome, hit_close};
use crate::screen::Screen;
use crate::theme;

/// One entry in the open-apps list.
#[derive(Debug, Clone)]
pub struct OpenApp {
    pub screen: Screen,
    pub name: String,
    pub icon: String,
    pub color: Color,
}

/// Action produced by a tap on the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultitaskAction {
    /// Bring an open app to the front.
    Focus(Screen),
    /// Remove an app from the open list.
    CloseApp(Screen),
    /// Leave the switcher.
    Close,
}

/// How many cards the switcher lays out.
const MAX_CARDS: usize = 5;
const CARD_H: u32 = 96;

/// The open-apps list.
#[derive(Debug, Default)]
pub struct OpenApps {
    entries: Vec<OpenApp>,
}

impl OpenApps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[OpenApp] {
        &self.entries
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.entries.iter().any(|a| a.screen == screen)
    }

    /// Register an app as open. Already-open screens are not duplicated;
    /// returns whether an entry was inserted.
    pub fn open(&mut self, app: OpenApp) -> bool {
        if self.contains(app.screen) {
            return false;
        }
        log::debug!("app opened: {}", app.name);
        self.entries.push(app);
        true
    }

    /// Remove an app from the open list. Unknown screens are a no-op;
    /// returns whether an entry was removed.
    pub fn close(&mut self, screen: Screen) -> bool {
        let before = self.entries.len();
        self.entries.retain(|a| a.screen != screen);
        before != self.entries.len()
    }

    fn card_rect(i: usize) -> (i32, i32, u32, u32) {
        let y = theme::CONTENT_Y + i as i32 * (CARD_H as i32 + theme::ROW_GAP);
        (theme::CONTENT_X, y, theme::CONTENT_W, CARD_H)
    }

    /// Hit-test a tap on the switcher screen.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<MultitaskAction> {
        if hit_close(x, y) {
            return Some(MultitaskAction::Close);
        }
        for (i, app) in self.entries.iter().take(MAX_CARDS).enumerate() {
            let (cx, cy, cw, ch) = Self::card_rect(i);
            if x < cx || x >= cx + cw as i32 || y < cy || y >= cy + ch as i32 {
                continue;
            }
            // Close button in the card's top-right corner.
            let bx = cx + cw as i32 - 28;
            if x >= bx && y < cy + 24 {
                return Some(MultitaskAction::CloseApp(app.screen));
            }
            return Some(MultitaskAction::Focus(app.screen));
        }
        None
    }

    /// Synchronize SDI objects for the switcher screen.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry) {
        draw_chrome(sdi, "multitask", "Multitask");

        for i in 0..MAX_CARDS {
            let card_name = format!("mt_card_{i}");
            let accent_name = format!("mt_accent_{i}");
            let name_name = format!("mt_name_{i}");
            let close_name = format!("mt_close_{i}");

            match self.entries.get(i) {
                Some(app) => {
                    let (x, y, w, h) = Self::card_rect(i);
                    ensure_rounded_fill(sdi, &card_name, x, y, w, h, theme::CARD_BG, 12);
                    // Accent chip echoing the app icon color.
                    ensure_rounded_fill(sdi, &accent_name, x + 12, y + 32, 40, 40, app.color, 10);
                    ensure_text(sdi, &name_name, x + 12, y + 12, theme::FONT_SMALL, theme::TEXT_PRIMARY);
                    if let Ok(obj) = sdi.get_mut(&name_name) {
                        obj.text = Some(app.name.clone());
                    }
                    ensure_text(
                        sdi,
                        &close_name,
                        x + w as i32 - 20,
                        y + 10,
                        theme::FONT_SMALL,
                        theme::TEXT_MUTED,
                    );
                    if let Ok(obj) = sdi.get_mut(&close_name) {
                        obj.text = Some("x".to_string());
                    }
                },
                None => {
                    hide_objects(sdi, &[&card_name, &accent_name, &name_name, &close_name]);
                },
            }
        }

        // Empty-state hint.
        if !sdi.contains("mt_empty") {
            sdi.create("mt_empty");
        }
        if let Ok(obj) = sdi.get_mut("mt_empty") {
            if self.entries.is_empty() {
                obj.x = theme::CONTENT_X;
                obj.y = theme::CONTENT_Y + 20;
                obj.font_size = theme::FONT_SMALL;
                obj.text_color = theme::TEXT_MUTED;
                obj.text = Some("No open apps".to_string());
                obj.visible = true;
            } else {
                obj.visible = false;
            }
        }
    }

    /// Hide all switcher SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_chrome(sdi, "multitask");
        for i in 0..MAX_CARDS {
            hide_objects(
                sdi,
                &[
                    &format!("mt_card_{i}"),
                    &format!("mt_accent_{i}"),
                    &format!("mt_name_{i}"),
                    &format!("mt_close_{i}"),
                ],
            );
        }
        hide_objects(sdi, &["mt_empty"]);
    }
}
