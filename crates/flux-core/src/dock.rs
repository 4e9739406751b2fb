//! Dock -- the pinned launcher row at the bottom of the frame.
//!
//! Always visible on every screen; holds the first four catalogue apps.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::apps::{AppEntry, catalogue};
use crate::screen::Screen;
use crate::theme;

/// Stateless dock layout over the catalogue's dock slice.
#[derive(Debug, Default)]
pub struct Dock;

impl Dock {
    /// Icon origin for dock slot `i`.
    fn slot_origin(i: usize) -> (i32, i32) {
        let slot_w = theme::SCREEN_W as i32 / theme::DOCK_SLOTS as i32;
        let x = i as i32 * slot_w + (slot_w - theme::ICON_SIZE as i32) / 2;
        let y = theme::DOCK_Y + (theme::DOCK_H as i32 - theme::ICON_SIZE as i32) / 2;
        (x, y)
    }

    /// Which app a tap on the dock lands on, if any.
    pub fn hit_test(&self, x: i32, y: i32, apps: &[AppEntry]) -> Option<Screen> {
        if y < theme::DOCK_Y {
            return None;
        }
        let slot_w = theme::SCREEN_W as i32 / theme::DOCK_SLOTS as i32;
        let idx = (x / slot_w) as usize;
        catalogue::dock_apps(apps).get(idx).map(|a| a.screen)
    }

    /// Synchronize SDI objects for the dock bar and icons.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry, apps: &[AppEntry]) {
        if !sdi.contains("dock_bar") {
            let obj = sdi.create("dock_bar");
            obj.overlay = true;
            obj.z = theme::Z_DOCK;
        }
        if let Ok(obj) = sdi.get_mut("dock_bar") {
            obj.x = 0;
            obj.y = theme::DOCK_Y;
            obj.w = theme::SCREEN_W;
            obj.h = theme::DOCK_H;
            obj.color = Color::rgba(18, 18, 30, 200);
            obj.visible = true;
        }

        for i in 0..theme::DOCK_SLOTS {
            let tile_name = format!("dock_tile_{i}");
            let glyph_name = format!("dock_glyph_{i}");
            match catalogue::dock_apps(apps).get(i) {
                Some(app) => {
                    let (x, y) = Self::slot_origin(i);
                    ensure_rounded_fill(
                        sdi,
                        &tile_name,
                        x,
                        y,
                        theme::ICON_SIZE,
                        theme::ICON_SIZE,
                        app.color,
                        theme::ICON_RADIUS,
                    );
                    if let Ok(obj) = sdi.get_mut(&tile_name) {
                        obj.overlay = true;
                        obj.z = theme::Z_DOCK + 1;
                    }
                    let initial: String =
                        app.icon.chars().take(1).collect::<String>().to_uppercase();
                    let gx = x + (theme::ICON_SIZE as i32 - theme::char_w(theme::FONT_MEDIUM)) / 2;
                    let gy = y + (theme::ICON_SIZE as i32 - theme::FONT_MEDIUM as i32) / 2;
                    ensure_text(sdi, &glyph_name, gx, gy, theme::FONT_MEDIUM, theme::TEXT_PRIMARY);
                    if let Ok(obj) = sdi.get_mut(&glyph_name) {
                        obj.text = Some(initial);
                        obj.overlay = true;
                        obj.z = theme::Z_DOCK + 2;
                    }
                },
                None => {
                    hide_objects(sdi, &[&tile_name, &glyph_name]);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::default_apps;

    #[test]
    fn taps_above_dock_miss() {
        let dock = Dock;
        let apps = default_apps();
        assert_eq!(dock.hit_test(50, theme::DOCK_Y - 1, &apps), None);
    }

    #[test]
    fn each_slot_maps_to_dock_app() {
        let dock = Dock;
        let apps = default_apps();
        let slot_w = theme::SCREEN_W as i32 / theme::DOCK_SLOTS as i32;
        let y = theme::DOCK_Y + 10;
        assert_eq!(dock.hit_test(slot_w / 2, y, &apps), Some(Screen::Phone));
        assert_eq!(dock.hit_test(slot_w + slot_w / 2, y, &apps), Some(Screen::Camera));
        assert_eq!(
            dock.hit_test(3 * slot_w + slot_w / 2, y, &apps),
            Some(Screen::Settings)
        );
    }

    #[test]
    fn update_sdi_creates_bar_and_tiles() {
        let dock = Dock;
        let mut sdi = SdiRegistry::new();
        dock.update_sdi(&mut sdi, &default_apps());
        assert!(sdi.contains("dock_bar"));
        assert!(sdi.contains("dock_tile_3"));
        assert!(sdi.get("dock_bar").unwrap().overlay);
    }
}
