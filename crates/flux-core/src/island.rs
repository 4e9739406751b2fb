//! Dynamic island -- the lozenge at the top of the frame.
//!
//! Collapsed it is a black pill with a green activity dot; tapping it
//! expands a now-playing card with three transport glyphs (visual only).

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::theme;

const TRANSPORT_GLYPHS: [&str; 3] = ["<<", ">", ">>"];

/// Runtime state for the dynamic island.
#[derive(Debug, Default)]
pub struct DynamicIslandState {
    pub expanded: bool,
}

impl DynamicIslandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        log::debug!("island expanded: {}", self.expanded);
    }

    /// Current bounding box (x, y, w, h).
    pub fn rect(&self) -> (i32, i32, u32, u32) {
        let (w, h) = if self.expanded {
            (theme::ISLAND_EXPANDED_W, theme::ISLAND_EXPANDED_H)
        } else {
            (theme::ISLAND_W, theme::ISLAND_H)
        };
        let x = (theme::SCREEN_W as i32 - w as i32) / 2;
        (x, theme::ISLAND_Y, w, h)
    }

    /// Whether a tap lands on the island.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let (ix, iy, w, h) = self.rect();
        x >= ix && x < ix + w as i32 && y >= iy && y < iy + h as i32
    }

    /// Synchronize SDI objects to reflect the island state.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry) {
        let (x, y, w, h) = self.rect();

        if !sdi.contains("island_body") {
            let obj = sdi.create("island_body");
            obj.overlay = true;
            obj.z = theme::Z_ISLAND;
        }
        if let Ok(obj) = sdi.get_mut("island_body") {
            obj.x = x;
            obj.y = y;
            obj.w = w;
            obj.h = h;
            obj.color = Color::BLACK;
            obj.border_radius = Some(if self.expanded { 24 } else { (h / 2) as u16 });
            obj.visible = true;
        }

        if self.expanded {
            hide_objects(sdi, &["island_dot"]);

            // Album bubble.
            ensure_rounded_fill(sdi, "island_art", x + 16, y + 16, 40, 40, theme::ACCENT, 20);
            if let Ok(obj) = sdi.get_mut("island_art") {
                obj.overlay = true;
                obj.z = theme::Z_ISLAND + 1;
            }

            ensure_text(
                sdi,
                "island_title",
                x + 68,
                y + 20,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut("island_title") {
                obj.text = Some("Now Playing".to_string());
                obj.overlay = true;
                obj.z = theme::Z_ISLAND + 1;
            }
            ensure_text(
                sdi,
                "island_track",
                x + 68,
                y + 36,
                theme::FONT_SMALL,
                theme::TEXT_MUTED,
            );
            if let Ok(obj) = sdi.get_mut("island_track") {
                obj.text = Some("FluxOS Theme".to_string());
                obj.overlay = true;
                obj.z = theme::Z_ISLAND + 1;
            }

            // Transport row.
            for (i, glyph) in TRANSPORT_GLYPHS.iter().enumerate() {
                let name = format!("island_btn_{i}");
                let bx = x + 48 + i as i32 * 56;
                ensure_text(sdi, &name, bx, y + 84, theme::FONT_MEDIUM, theme::TEXT_PRIMARY);
                if let Ok(obj) = sdi.get_mut(&name) {
                    obj.text = Some((*glyph).to_string());
                    obj.overlay = true;
                    obj.z = theme::Z_ISLAND + 1;
                }
            }
        } else {
            // Activity dot centered in the pill.
            ensure_rounded_fill(
                sdi,
                "island_dot",
                x + w as i32 / 2 - 4,
                y + h as i32 / 2 - 4,
                8,
                8,
                Color::rgb(34, 197, 94),
                4,
            );
            if let Ok(obj) = sdi.get_mut("island_dot") {
                obj.overlay = true;
                obj.z = theme::Z_ISLAND + 1;
            }
            hide_objects(
                sdi,
                &[
                    "island_art",
                    "island_title",
                    "island_track",
                    "island_btn_0",
                    "island_btn_1",
                    "island_btn_2",
                ],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut island = DynamicIslandState::new();
        assert!(!island.expanded);
        island.toggle();
        assert!(island.expanded);
        island.toggle();
        assert!(!island.expanded);
    }

    #[test]
    fn collapsed_rect_is_centered_pill() {
        let island = DynamicIslandState::new();
        let (x, y, w, h) = island.rect();
        assert_eq!(w, theme::ISLAND_W);
        assert_eq!(h, theme::ISLAND_H);
        assert_eq!(y, theme::ISLAND_Y);
        assert_eq!(x, (theme::SCREEN_W as i32 - w as i32) / 2);
    }

    #[test]
    fn expanded_rect_grows() {
        let mut island = DynamicIslandState::new();
        island.toggle();
        let (_, _, w, h) = island.rect();
        assert_eq!(w, theme::ISLAND_EXPANDED_W);
        assert_eq!(h, theme::ISLAND_EXPANDED_H);
    }

    #[test]
    fn hit_test_inside_and_outside() {
        let island = DynamicIslandState::new();
        let (x, y, w, h) = island.rect();
        assert!(island.hit_test(x + w as i32 / 2, y + h as i32 / 2));
        assert!(!island.hit_test(x - 1, y));
        assert!(!island.hit_test(x, y + h as i32));
    }

    #[test]
    fn update_sdi_collapsed_objects() {
        let island = DynamicIslandState::new();
        let mut sdi = SdiRegistry::new();
        island.update_sdi(&mut sdi);
        assert!(sdi.contains("island_body"));
        assert!(sdi.contains("island_dot"));
        assert!(sdi.get("island_body").unwrap().overlay);
    }

    #[test]
    fn update_sdi_expanded_hides_dot() {
        let mut island = DynamicIslandState::new();
        let mut sdi = SdiRegistry::new();
        island.update_sdi(&mut sdi);
        island.toggle();
        island.update_sdi(&mut sdi);
        assert!(!sdi.get("island_dot").unwrap().visible);
        assert!(sdi.get("island_title").unwrap().visible);
        assert!(sdi.contains("island_btn_2"));
    }
}
