//! Home screen icon grid.
//!
//! A 4-column grid over the app catalogue. Icons are accent-colored rounded
//! tiles with the app's initial and a label underneath. Tapping an icon
//! navigates to the app's screen.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::apps::AppEntry;
use crate::screen::Screen;
use crate::theme;

/// Maximum icons the grid lays out (two rows).
pub const MAX_GRID_ICONS: usize = 8;

/// Stateless layout for the home grid; the catalogue is passed in.
#[derive(Debug, Default)]
pub struct HomeGrid;

impl HomeGrid {
    /// Cell origin for grid slot `i`.
    fn cell_origin(i: usize) -> (i32, i32) {
        let col = (i % theme::GRID_COLS) as i32;
        let row = (i / theme::GRID_COLS) as i32;
        (
            theme::GRID_X + col * theme::CELL_W as i32,
            theme::GRID_Y + row * theme::CELL_H as i32,
        )
    }

    /// Which app a tap lands on, if any.
    pub fn hit_test(&self, x: i32, y: i32, apps: &[AppEntry]) -> Option<Screen> {
        let gx = x - theme::GRID_X;
        let gy = y - theme::GRID_Y;
        if gx < 0 || gy < 0 {
            return None;
        }
        let col = gx as usize / theme::CELL_W as usize;
        let row = gy as usize / theme::CELL_H as usize;
        if col >= theme::GRID_COLS {
            return None;
        }
        let idx = row * theme::GRID_COLS + col;
        apps.get(idx).filter(|_| idx < MAX_GRID_ICONS).map(|a| a.screen)
    }

    /// Synchronize SDI objects for the grid.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry, apps: &[AppEntry]) {
        for i in 0..MAX_GRID_ICONS {
            let tile_name = format!("grid_tile_{i}");
            let glyph_name = format!("grid_glyph_{i}");
            let label_name = format!("grid_label_{i}");

            match apps.get(i) {
                Some(app) => {
                    let (cx, cy) = Self::cell_origin(i);
                    let ix = cx + (theme::CELL_W as i32 - theme::ICON_SIZE as i32) / 2;

                    ensure_rounded_fill(
                        sdi,
                        &tile_name,
                        ix,
                        cy,
                        theme::ICON_SIZE,
                        theme::ICON_SIZE,
                        app.color,
                        theme::ICON_RADIUS,
                    );

                    // App initial centered on the tile.
                    let initial: String =
                        app.icon.chars().take(1).collect::<String>().to_uppercase();
                    let gx = ix + (theme::ICON_SIZE as i32 - theme::char_w(theme::FONT_MEDIUM)) / 2;
                    let gy = cy + (theme::ICON_SIZE as i32 - theme::FONT_MEDIUM as i32) / 2;
                    ensure_text(sdi, &glyph_name, gx, gy, theme::FONT_MEDIUM, theme::TEXT_PRIMARY);
                    if let Ok(obj) = sdi.get_mut(&glyph_name) {
                        obj.text = Some(initial);
                    }

                    // Label centered under the tile.
                    let tw = theme::text_w(&app.name, theme::FONT_SMALL);
                    let lx = cx + (theme::CELL_W as i32 - tw) / 2;
                    let ly = cy + theme::ICON_SIZE as i32 + theme::ICON_LABEL_PAD;
                    ensure_text(sdi, &label_name, lx, ly, theme::FONT_SMALL, theme::TEXT_PRIMARY);
                    if let Ok(obj) = sdi.get_mut(&label_name) {
                        obj.text = Some(app.name.clone());
                    }
                },
                None => {
                    hide_objects(sdi, &[&tile_name, &glyph_name, &label_name]);
                },
            }
        }
    }

    /// Hide all grid SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        for i in 0..MAX_GRID_ICONS {
            hide_objects(
                sdi,
                &[
                    &format!("grid_tile_{i}"),
                    &format!("grid_glyph_{i}"),
                    &format!("grid_label_{i}"),
                ],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::default_apps;

    #[test]
    fn hit_first_icon() {
        let grid = HomeGrid;
        let apps = default_apps();
        let (cx, cy) = HomeGrid::cell_origin(0);
        assert_eq!(grid.hit_test(cx + 10, cy + 10, &apps), Some(Screen::Phone));
    }

    #[test]
    fn hit_second_row() {
        let grid = HomeGrid;
        let apps = default_apps();
        let (cx, cy) = HomeGrid::cell_origin(5);
        assert_eq!(grid.hit_test(cx + 10, cy + 10, &apps), Some(Screen::Tasks));
    }

    #[test]
    fn miss_left_of_grid() {
        let grid = HomeGrid;
        let apps = default_apps();
        assert_eq!(grid.hit_test(theme::GRID_X - 5, theme::GRID_Y + 5, &apps), None);
    }

    #[test]
    fn miss_past_last_column() {
        let grid = HomeGrid;
        let apps = default_apps();
        let x = theme::GRID_X + theme::GRID_COLS as i32 * theme::CELL_W as i32 + 1;
        assert_eq!(grid.hit_test(x, theme::GRID_Y + 5, &apps), None);
    }

    #[test]
    fn empty_catalogue_never_hits() {
        let grid = HomeGrid;
        let (cx, cy) = HomeGrid::cell_origin(0);
        assert_eq!(grid.hit_test(cx + 10, cy + 10, &[]), None);
    }

    #[test]
    fn update_sdi_creates_tiles_and_labels() {
        let grid = HomeGrid;
        let apps = default_apps();
        let mut sdi = SdiRegistry::new();
        grid.update_sdi(&mut sdi, &apps);
        assert!(sdi.contains("grid_tile_0"));
        assert!(sdi.contains("grid_label_7"));
        assert_eq!(
            sdi.get("grid_label_0").unwrap().text.as_deref(),
            Some("Phone")
        );
    }

    #[test]
    fn update_sdi_hides_unused_slots() {
        let grid = HomeGrid;
        let apps = default_apps()[..3].to_vec();
        let mut sdi = SdiRegistry::new();
        grid.update_sdi(&mut sdi, &default_apps());
        grid.update_sdi(&mut sdi, &apps);
        assert!(sdi.get("grid_tile_0").unwrap().visible);
        assert!(!sdi.get("grid_tile_5").unwrap().visible);
    }

    #[test]
    fn hide_sdi_hides_all() {
        let grid = HomeGrid;
        let mut sdi = SdiRegistry::new();
        grid.update_sdi(&mut sdi, &default_apps());
        grid.hide_sdi(&mut sdi);
        assert!(!sdi.get("grid_tile_0").unwrap().visible);
        assert!(!sdi.get("grid_glyph_7").unwrap().visible);
    }
}
