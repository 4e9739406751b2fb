//! Convenience helpers for the create-if-missing-then-update SDI idiom.

use flux_types::backend::Color;

use crate::SdiRegistry;

/// Ensure a text object exists at the given position with the given font and
/// color. The caller sets `text` afterwards.
pub fn ensure_text(sdi: &mut SdiRegistry, name: &str, x: i32, y: i32, font_size: u16, color: Color) {
    if !sdi.contains(name) {
        sdi.create(name);
    }
    if let Ok(obj) = sdi.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.w = 0;
        obj.h = 0;
        obj.font_size = font_size;
        obj.text_color = color;
        obj.color = Color::TRANSPARENT;
        obj.visible = true;
    }
}

/// Ensure a thin filled rect (separator line / border segment).
pub fn ensure_border(sdi: &mut SdiRegistry, name: &str, x: i32, y: i32, w: u32, h: u32, color: Color) {
    if !sdi.contains(name) {
        sdi.create(name);
    }
    if let Ok(obj) = sdi.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.w = w;
        obj.h = h;
        obj.color = color;
        obj.text = None;
        obj.visible = true;
    }
}

/// Ensure a pill-shaped object (fully rounded ends) with fill and stroke.
#[allow(clippy::too_many_arguments)]
pub fn ensure_pill(
    sdi: &mut SdiRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    fill: Color,
    stroke: Color,
) {
    if !sdi.contains(name) {
        sdi.create(name);
    }
    if let Ok(obj) = sdi.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.w = w;
        obj.h = h;
        obj.color = fill;
        obj.border_radius = Some((h / 2) as u16);
        obj.stroke_width = Some(1);
        obj.stroke_color = Some(stroke);
        obj.text = None;
        obj.visible = true;
    }
}

/// Ensure a rounded filled rect with the given corner radius.
#[allow(clippy::too_many_arguments)]
pub fn ensure_rounded_fill(
    sdi: &mut SdiRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
    radius: u16,
) {
    if !sdi.contains(name) {
        sdi.create(name);
    }
    if let Ok(obj) = sdi.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.w = w;
        obj.h = h;
        obj.color = color;
        obj.border_radius = Some(radius);
        obj.stroke_width = None;
        obj.stroke_color = None;
        obj.text = None;
        obj.visible = true;
    }
}

/// Hide a set of objects by name. Missing names are skipped.
pub fn hide_objects(sdi: &mut SdiRegistry, names: &[&str]) {
    for name in names {
        if let Ok(obj) = sdi.get_mut(name) {
            obj.visible = false;
        }
    }
}
