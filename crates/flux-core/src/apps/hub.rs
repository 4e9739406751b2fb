//! Flux Hub -- the app catalogue with search.
//!
//! A search field filters the catalogue by case-insensitive substring;
//! below it a category badge row (visual only) and the filtered icon grid.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::apps::AppEntry;
use crate::apps::{draw_chrome, hide_chrome, hit_close};
use crate::screen::Screen;
use crate::theme;

const CATEGORIES: [&str; 4] = ["All", "Productivity", "Creative", "System"];

/// Grid geometry below the search and category rows.
const HUB_GRID_Y: i32 = 260;
const MAX_HUB_ICONS: usize = 8;

/// Action produced by a tap on the hub screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubAction {
    Open(Screen),
    Close,
}

/// Runtime state for the hub: the search query.
#[derive(Debug, Default)]
pub struct HubState {
    query: String,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Append a typed character to the query.
    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Delete the last character of the query.
    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Clear the query (leaving the screen).
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Catalogue entries matching the query, case-insensitively.
    pub fn filtered<'a>(&self, apps: &'a [AppEntry]) -> Vec<&'a AppEntry> {
        let needle = self.query.to_lowercase();
        apps.iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn cell_origin(i: usize) -> (i32, i32) {
        let col = (i % theme::GRID_COLS) as i32;
        let row = (i / theme::GRID_COLS) as i32;
        (
            theme::GRID_X + col * theme::CELL_W as i32,
            HUB_GRID_Y + row * theme::CELL_H as i32,
        )
    }

    /// Hit-test a tap on the hub screen against the filtered grid.
    pub fn hit_test(&self, x: i32, y: i32, apps: &[AppEntry]) -> Option<HubAction> {
        if hit_close(x, y) {
            return Some(HubAction::Close);
        }
        let gx = x - theme::GRID_X;
        let gy = y - HUB_GRID_Y;
        if gx < 0 || gy < 0 {
            return None;
        }
        let col = gx as usize / theme::CELL_W as usize;
        let row = gy as usize / theme::CELL_H as usize;
        if col >= theme::GRID_COLS {
            return None;
        }
        let idx = row * theme::GRID_COLS + col;
        self.filtered(apps)
            .get(idx)
            .filter(|_| idx < MAX_HUB_ICONS)
            .map(|a| HubAction::Open(a.screen))
    }

    /// Synchronize SDI objects for the hub screen.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry, apps: &[AppEntry]) {
        draw_chrome(sdi, "hub", "Flux Hub");

        // Search field.
        ensure_rounded_fill(
            sdi,
            "hub_search",
            theme::CONTENT_X,
            theme::CONTENT_Y,
            theme::CONTENT_W,
            40,
            theme::CARD_BG,
            20,
        );
        if let Ok(obj) = sdi.get_mut("hub_search") {
            obj.stroke_width = Some(1);
            obj.stroke_color = Some(theme::CARD_STROKE);
        }
        ensure_text(
            sdi,
            "hub_query",
            theme::CONTENT_X + 16,
            theme::CONTENT_Y + 16,
            theme::FONT_SMALL,
            if self.query.is_empty() {
                theme::TEXT_MUTED
            } else {
                theme::TEXT_PRIMARY
            },
        );
        if let Ok(obj) = sdi.get_mut("hub_query") {
            obj.text = Some(if self.query.is_empty() {
                "Search apps...".to_string()
            } else {
                self.query.clone()
            });
        }

        // Category badges (visual only).
        let mut bx = theme::CONTENT_X;
        for (i, cat) in CATEGORIES.iter().enumerate() {
            let badge_name = format!("hub_cat_{i}");
            let label_name = format!("hub_cat_label_{i}");
            let bw = theme::text_w(cat, theme::FONT_SMALL) as u32 + 20;
            ensure_rounded_fill(sdi, &badge_name, bx, theme::CONTENT_Y + 56, bw, 26, theme::CARD_BG, 13);
            ensure_text(
                sdi,
                &label_name,
                bx + 10,
                theme::CONTENT_Y + 56 + 9,
                theme::FONT_SMALL,
                if i == 0 { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED },
            );
            if let Ok(obj) = sdi.get_mut(&label_name) {
                obj.text = Some((*cat).to_string());
            }
            bx += bw as i32 + 8;
        }

        // Filtered grid.
        let filtered = self.filtered(apps);
        for i in 0..MAX_HUB_ICONS {
            let tile_name = format!("hub_tile_{i}");
            let glyph_name = format!("hub_glyph_{i}");
            let label_name = format!("hub_label_{i}");
            match filtered.get(i) {
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
                    let initial: String =
                        app.icon.chars().take(1).collect::<String>().to_uppercase();
                    ensure_text(
                        sdi,
                        &glyph_name,
                        ix + (theme::ICON_SIZE as i32 - theme::char_w(theme::FONT_MEDIUM)) / 2,
                        cy + (theme::ICON_SIZE as i32 - theme::FONT_MEDIUM as i32) / 2,
                        theme::FONT_MEDIUM,
                        theme::TEXT_PRIMARY,
                    );
                    if let Ok(obj) = sdi.get_mut(&glyph_name) {
                        obj.text = Some(initial);
                    }
                    let tw = theme::text_w(&app.name, theme::FONT_SMALL);
                    ensure_text(
                        sdi,
                        &label_name,
                        cx + (theme::CELL_W as i32 - tw) / 2,
                        cy + theme::ICON_SIZE as i32 + theme::ICON_LABEL_PAD,
                        theme::FONT_SMALL,
                        theme::TEXT_PRIMARY,
                    );
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

    /// Hide all hub screen SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_chrome(sdi, "hub");
        hide_objects(sdi, &["hub_search", "hub_query"]);
        for i in 0..CATEGORIES.len() {
            hide_objects(sdi, &[&format!("hub_cat_{i}"), &format!("hub_cat_label_{i}")]);
        }
        for i in 0..MAX_HUB_ICONS {
            hide_objects(
                sdi,
                &[
                    &format!("hub_tile_{i}"),
                    &format!("hub_glyph_{i}"),
                    &format!("hub_label_{i}"),
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
    fn empty_query_matches_all() {
        let hub = HubState::new();
        assert_eq!(hub.filtered(&default_apps()).len(), 8);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut hub = HubState::new();
        for ch in "FLUX".chars() {
            hub.push_char(ch);
        }
        let apps = default_apps();
        let names: Vec<&str> = hub.filtered(&apps).iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Flux Hub", "FluxConnect"]);
    }

    #[test]
    fn backspace_widens_filter() {
        let mut hub = HubState::new();
        hub.push_char('z');
        assert!(hub.filtered(&default_apps()).is_empty());
        hub.backspace();
        assert_eq!(hub.filtered(&default_apps()).len(), 8);
    }

    #[test]
    fn clear_resets_query() {
        let mut hub = HubState::new();
        hub.push_char('a');
        hub.clear();
        assert_eq!(hub.query(), "");
    }

    #[test]
    fn hit_test_follows_filtered_order() {
        let mut hub = HubState::new();
        for ch in "flow".chars() {
            hub.push_char(ch);
        }
        let apps = default_apps();
        // Only TaskFlow matches, so slot 0 opens it.
        let (cx, cy) = HubState::cell_origin(0);
        assert_eq!(
            hub.hit_test(cx + 20, cy + 20, &apps),
            Some(HubAction::Open(Screen::Tasks))
        );
        // Slot 1 is empty under this filter.
        let (cx, cy) = HubState::cell_origin(1);
        assert_eq!(hub.hit_test(cx + 20, cy + 20, &apps), None);
    }

    #[test]
    fn hit_test_close() {
        let hub = HubState::new();
        assert_eq!(
            hub.hit_test(theme::APP_CLOSE_X + 5, theme::APP_CLOSE_Y + 5, &default_apps()),
            Some(HubAction::Close)
        );
    }

    #[test]
    fn update_sdi_placeholder_and_query_text() {
        let mut hub = HubState::new();
        let apps = default_apps();
        let mut sdi = SdiRegistry::new();
        hub.update_sdi(&mut sdi, &apps);
        assert_eq!(
            sdi.get("hub_query").unwrap().text.as_deref(),
            Some("Search apps...")
        );
        hub.push_char('c');
        hub.update_sdi(&mut sdi, &apps);
        assert_eq!(sdi.get("hub_query").unwrap().text.as_deref(), Some("c"));
    }

    #[test]
    fn update_sdi_hides_filtered_out_tiles() {
        let mut hub = HubState::new();
        let apps = default_apps();
        let mut sdi = SdiRegistry::new();
        hub.update_sdi(&mut sdi, &apps);
        assert!(sdi.get("hub_tile_7").unwrap().visible);
        for ch in "phone".chars() {
            hub.push_char(ch);
        }
        hub.update_sdi(&mut sdi, &apps);
        assert!(sdi.get("hub_tile_0").unwrap().visible);
        assert!(!sdi.get("hub_tile_1").unwrap().visible);
    }
}
