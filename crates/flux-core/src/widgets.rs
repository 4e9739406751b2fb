//! Home-screen widget board.
//!
//! Widgets live in a strip between the island and the icon grid. Long-press
//! enters customize mode, which shows a remove button per widget, a row of
//! add chips (one per widget kind), and a Done chip. Position is assigned at
//! append time and never reordered.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::theme;

/// Widget kinds the board can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Clock,
    Weather,
    Tasks,
    Music,
}

impl WidgetKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Weather => "Weather",
            Self::Tasks => "Tasks",
            Self::Music => "Music",
        }
    }

    pub const ALL: &[WidgetKind] = &[
        WidgetKind::Clock,
        WidgetKind::Weather,
        WidgetKind::Tasks,
        WidgetKind::Music,
    ];
}

/// One placed widget.
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: String,
    pub kind: WidgetKind,
    pub title: String,
    pub position: usize,
}

/// Action produced by a tap on the board while customizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    Add(WidgetKind),
    Remove(String),
    Done,
}

/// How many widget cards the strip can display.
const MAX_CARDS: usize = 2;

/// Runtime state for the widget board.
#[derive(Debug)]
pub struct WidgetBoard {
    widgets: Vec<Widget>,
    next_id: u32,
    pub customize: bool,
}

impl WidgetBoard {
    pub fn new() -> Self {
        let mut board = Self {
            widgets: Vec::new(),
            next_id: 1,
            customize: false,
        };
        board.add(WidgetKind::Clock);
        board
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Append a widget of `kind`; position equals the current list length.
    pub fn add(&mut self, kind: WidgetKind) -> &Widget {
        let id = format!("w{}", self.next_id);
        self.next_id += 1;
        let position = self.widgets.len();
        self.widgets.push(Widget {
            id,
            kind,
            title: kind.label().to_string(),
            position,
        });
        log::debug!("widget added: {} at {position}", kind.label());
        self.widgets.last().expect("pushed just above")
    }

    /// Remove by id; unknown ids are a no-op. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id != id);
        before != self.widgets.len()
    }

    pub fn enter_customize(&mut self) {
        self.customize = true;
        log::debug!("customize mode entered");
    }

    pub fn exit_customize(&mut self) {
        self.customize = false;
    }

    /// Card rect for display slot `i` (x, y, w, h).
    fn card_rect(i: usize) -> (i32, i32, u32, u32) {
        let x = theme::GRID_X + i as i32 * (theme::WIDGET_CARD_W as i32 + 16);
        (x, theme::WIDGET_Y, theme::WIDGET_CARD_W, theme::WIDGET_CARD_H)
    }

    /// Add-chip rect for kind index `i`.
    fn chip_rect(i: usize) -> (i32, i32, u32, u32) {
        let chip_w = 64u32;
        let x = theme::GRID_X + i as i32 * (chip_w as i32 + 8);
        (x, theme::WIDGET_CHIP_Y, chip_w, theme::WIDGET_CHIP_H)
    }

    /// Done-chip rect, after the add chips.
    fn done_rect() -> (i32, i32, u32, u32) {
        Self::chip_rect(WidgetKind::ALL.len())
    }

    /// Hit-test a tap while in customize mode. Outside customize mode the
    /// board consumes nothing.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<WidgetAction> {
        if !self.customize {
            return None;
        }
        // Remove buttons: top-right corner of each visible card.
        for (i, widget) in self.widgets.iter().take(MAX_CARDS).enumerate() {
            let (cx, cy, cw, _) = Self::card_rect(i);
            let rx = cx + cw as i32 - 24;
            if x >= rx && x < rx + 20 && y >= cy + 4 && y < cy + 24 {
                return Some(WidgetAction::Remove(widget.id.clone()));
            }
        }
        // Add chips.
        for (i, kind) in WidgetKind::ALL.iter().enumerate() {
            let (cx, cy, cw, ch) = Self::chip_rect(i);
            if x >= cx && x < cx + cw as i32 && y >= cy && y < cy + ch as i32 {
                return Some(WidgetAction::Add(*kind));
            }
        }
        let (dx, dy, dw, dh) = Self::done_rect();
        if x >= dx && x < dx + dw as i32 && y >= dy && y < dy + dh as i32 {
            return Some(WidgetAction::Done);
        }
        None
    }

    /// Synchronize SDI objects for the strip (home screen only).
    pub fn update_sdi(&self, sdi: &mut SdiRegistry) {
        for i in 0..MAX_CARDS {
            let card_name = format!("widget_card_{i}");
            let title_name = format!("widget_title_{i}");
            let remove_name = format!("widget_remove_{i}");

            match self.widgets.get(i) {
                Some(widget) => {
                    let (x, y, w, h) = Self::card_rect(i);
                    ensure_rounded_fill(sdi, &card_name, x, y, w, h, theme::CARD_BG, 12);
                    ensure_text(
                        sdi,
                        &title_name,
                        x + 12,
                        y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                        theme::FONT_SMALL,
                        theme::TEXT_PRIMARY,
                    );
                    if let Ok(obj) = sdi.get_mut(&title_name) {
                        obj.text = Some(widget.title.clone());
                    }
                    if self.customize {
                        ensure_text(
                            sdi,
                            &remove_name,
                            x + w as i32 - 20,
                            y + 8,
                            theme::FONT_SMALL,
                            Color::rgb(239, 68, 68),
                        );
                        if let Ok(obj) = sdi.get_mut(&remove_name) {
                            obj.text = Some("x".to_string());
                        }
                    } else {
                        hide_objects(sdi, &[&remove_name]);
                    }
                },
                None => {
                    hide_objects(sdi, &[&card_name, &title_name, &remove_name]);
                },
            }
        }

        // Add chips + Done chip while customizing.
        if self.customize {
            for (i, kind) in WidgetKind::ALL.iter().enumerate() {
                let (x, y, w, h) = Self::chip_rect(i);
                let chip_name = format!("widget_chip_{i}");
                let label_name = format!("widget_chip_label_{i}");
                ensure_rounded_fill(sdi, &chip_name, x, y, w, h, theme::ACCENT.with_alpha(60), 14);
                if let Ok(obj) = sdi.get_mut(&chip_name) {
                    obj.stroke_width = Some(1);
                    obj.stroke_color = Some(theme::ACCENT);
                }
                let tw = theme::text_w(kind.label(), theme::FONT_SMALL);
                ensure_text(
                    sdi,
                    &label_name,
                    x + (w as i32 - tw) / 2,
                    y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                    theme::FONT_SMALL,
                    theme::TEXT_PRIMARY,
                );
                if let Ok(obj) = sdi.get_mut(&label_name) {
                    obj.text = Some(kind.label().to_string());
                }
            }
            let (x, y, w, h) = Self::done_rect();
            ensure_rounded_fill(sdi, "widget_done", x, y, w, h, theme::ACCENT, 14);
            let tw = theme::text_w("Done", theme::FONT_SMALL);
            ensure_text(
                sdi,
                "widget_done_label",
                x + (w as i32 - tw) / 2,
                y + (h as i32 - theme::FONT_SMALL as i32) / 2,
                theme::FONT_SMALL,
                theme::TEXT_PRIMARY,
            );
            if let Ok(obj) = sdi.get_mut("widget_done_label") {
                obj.text = Some("Done".to_string());
            }
        } else {
            self.hide_chips(sdi);
        }
    }

    fn hide_chips(&self, sdi: &mut SdiRegistry) {
        for i in 0..WidgetKind::ALL.len() {
            hide_objects(
                sdi,
                &[&format!("widget_chip_{i}"), &format!("widget_chip_label_{i}")],
            );
        }
        hide_objects(sdi, &["widget_done", "widget_done_label"]);
    }

    /// Hide all board SDI objects (leaving the home screen).
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        for i in 0..MAX_CARDS {
            hide_objects(
                sdi,
                &[
                    &format!("widget_card_{i}"),
                    &format!("widget_title_{i}"),
                    &format!("widget_remove_{i}"),
                ],
            );
        }
        self.hide_chips(sdi);
    }
}

impl Default for WidgetBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_clock_widget() {
        let board = WidgetBoard::new();
        assert_eq!(board.widgets().len(), 1);
        assert_eq!(board.widgets()[0].kind, WidgetKind::Clock);
        assert_eq!(board.widgets()[0].position, 0);
    }

    #[test]
    fn add_assigns_incrementing_position_and_fresh_id() {
        let mut board = WidgetBoard::new();
        let id1 = board.add(WidgetKind::Weather).id.clone();
        let id2 = board.add(WidgetKind::Music).id.clone();
        assert_ne!(id1, id2);
        assert_eq!(board.widgets()[1].position, 1);
        assert_eq!(board.widgets()[2].position, 2);
        assert_eq!(board.widgets()[2].title, "Music");
    }

    #[test]
    fn remove_by_id() {
        let mut board = WidgetBoard::new();
        let id = board.add(WidgetKind::Weather).id.clone();
        assert!(board.remove(&id));
        assert_eq!(board.widgets().len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut board = WidgetBoard::new();
        assert!(!board.remove("w999"));
        assert_eq!(board.widgets().len(), 1);
    }

    #[test]
    fn position_not_reassigned_after_remove() {
        let mut board = WidgetBoard::new();
        let first = board.widgets()[0].id.clone();
        board.add(WidgetKind::Weather);
        board.remove(&first);
        // The survivor keeps its original append position.
        assert_eq!(board.widgets()[0].position, 1);
        // And the next add picks up the current length.
        board.add(WidgetKind::Tasks);
        assert_eq!(board.widgets()[1].position, 1);
    }

    #[test]
    fn customize_mode_gates_hit_test() {
        let board = WidgetBoard::new();
        let (x, y, _, _) = WidgetBoard::chip_rect(0);
        assert_eq!(board.hit_test(x + 2, y + 2), None);
    }

    #[test]
    fn add_chip_hit() {
        let mut board = WidgetBoard::new();
        board.enter_customize();
        let (x, y, _, _) = WidgetBoard::chip_rect(1);
        assert_eq!(
            board.hit_test(x + 2, y + 2),
            Some(WidgetAction::Add(WidgetKind::Weather))
        );
    }

    #[test]
    fn done_chip_hit() {
        let mut board = WidgetBoard::new();
        board.enter_customize();
        let (x, y, _, _) = WidgetBoard::done_rect();
        assert_eq!(board.hit_test(x + 2, y + 2), Some(WidgetAction::Done));
    }

    #[test]
    fn remove_button_hit() {
        let mut board = WidgetBoard::new();
        board.enter_customize();
        let id = board.widgets()[0].id.clone();
        let (cx, cy, cw, _) = WidgetBoard::card_rect(0);
        assert_eq!(
            board.hit_test(cx + cw as i32 - 20, cy + 10),
            Some(WidgetAction::Remove(id))
        );
    }

    #[test]
    fn update_sdi_shows_chips_only_in_customize() {
        let mut board = WidgetBoard::new();
        let mut sdi = SdiRegistry::new();
        board.update_sdi(&mut sdi);
        assert!(!sdi.contains("widget_chip_0"));
        board.enter_customize();
        board.update_sdi(&mut sdi);
        assert!(sdi.get("widget_chip_0").unwrap().visible);
        assert!(sdi.get("widget_done").unwrap().visible);
        board.exit_customize();
        board.update_sdi(&mut sdi);
        assert!(!sdi.get("widget_chip_0").unwrap().visible);
    }
}
