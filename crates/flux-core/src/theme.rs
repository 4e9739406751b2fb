//! Layout constants for the phone-shaped 390x844 viewport.
//!
//! Z-order bands: wallpaper at the bottom, screen content around 0, then
//! the dock, shade, island, and toast as overlays stacked in that order.

use flux_types::backend::Color;

/// Viewport width in pixels.
pub const SCREEN_W: u32 = 390;
/// Viewport height in pixels.
pub const SCREEN_H: u32 = 844;

// -- Fonts (multiples of the 8px bitmap cell) --------------------------------

pub const FONT_SMALL: u16 = 8;
pub const FONT_MEDIUM: u16 = 16;
pub const FONT_LARGE: u16 = 24;

/// Advance width of one glyph at `font_size` (integer-scaled 8px cells).
pub const fn char_w(font_size: u16) -> i32 {
    ((if font_size >= 8 { font_size / 8 } else { 1 }) * 8) as i32
}

/// Pixel width of a label at `font_size`.
pub fn text_w(text: &str, font_size: u16) -> i32 {
    text.len() as i32 * char_w(font_size)
}

// -- Z bands -----------------------------------------------------------------

pub const Z_WALLPAPER: i32 = -100;
pub const Z_DOCK: i32 = 900;
pub const Z_SHADE: i32 = 940;
pub const Z_ISLAND: i32 = 960;
pub const Z_TOAST: i32 = 990;

// -- Dynamic island ----------------------------------------------------------

pub const ISLAND_Y: i32 = 24;
pub const ISLAND_W: u32 = 128;
pub const ISLAND_H: u32 = 32;
pub const ISLAND_EXPANDED_W: u32 = 256;
pub const ISLAND_EXPANDED_H: u32 = 128;

// -- Notification shade ------------------------------------------------------

pub const SHADE_H: u32 = 340;
pub const SHADE_PAD: i32 = 16;
pub const QUICK_CARD_W: u32 = 171;
pub const QUICK_CARD_H: u32 = 72;
pub const QUICK_CARD_Y: i32 = 96;
pub const NOTIF_CARD_H: u32 = 64;
pub const NOTIF_CARD_Y: i32 = 184;

// -- App screen chrome -------------------------------------------------------

/// Top of an app screen's title row (clears the island).
pub const APP_TITLE_Y: i32 = 72;
/// Close button square, top-right.
pub const APP_CLOSE_X: i32 = 334;
pub const APP_CLOSE_Y: i32 = 68;
pub const APP_CLOSE_SIZE: u32 = 32;
/// Left edge and width for app screen content.
pub const CONTENT_X: i32 = 24;
pub const CONTENT_W: u32 = 342;
/// Top of the first content row.
pub const CONTENT_Y: i32 = 120;
pub const ROW_H: u32 = 72;
pub const ROW_GAP: i32 = 12;

// -- Home grid ---------------------------------------------------------------

pub const GRID_COLS: usize = 4;
pub const GRID_X: i32 = 24;
pub const GRID_Y: i32 = 220;
pub const CELL_W: u32 = 85;
pub const CELL_H: u32 = 96;
pub const ICON_SIZE: u32 = 56;
pub const ICON_RADIUS: u16 = 16;
pub const ICON_LABEL_PAD: i32 = 6;

// -- Widget strip (home screen, between island and grid) ---------------------

pub const WIDGET_Y: i32 = 80;
pub const WIDGET_CARD_W: u32 = 171;
pub const WIDGET_CARD_H: u32 = 56;
pub const WIDGET_CHIP_Y: i32 = 148;
pub const WIDGET_CHIP_H: u32 = 28;

// -- Dock --------------------------------------------------------------------

pub const DOCK_H: u32 = 88;
pub const DOCK_Y: i32 = (SCREEN_H - DOCK_H) as i32;
pub const DOCK_SLOTS: usize = 4;

// -- Toast -------------------------------------------------------------------

pub const TOAST_Y: i32 = DOCK_Y - 56;
pub const TOAST_H: u32 = 36;

// -- Shared colors -----------------------------------------------------------

pub const BG_COLOR: Color = Color::rgb(10, 10, 18);
pub const CARD_BG: Color = Color::rgba(30, 30, 46, 230);
pub const CARD_STROKE: Color = Color::rgba(255, 255, 255, 28);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_MUTED: Color = Color::rgb(150, 150, 165);
pub const ACCENT: Color = Color::rgb(99, 102, 241);
