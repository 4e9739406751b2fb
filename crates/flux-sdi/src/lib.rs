//! Simple Display Interface -- the FluxOS retained scene graph.
//!
//! UI components create named `SdiObject`s once and mutate them every frame
//! to reflect their state; `SdiRegistry::draw` then paints the whole scene
//! through a `DisplayBackend`. Objects are plain records: position, size,
//! fill, optional rounded corners / stroke / gradient / text / texture.
//!
//! Draw order is overlay flag first (overlays paint above everything else),
//! then z, then name for determinism.

pub mod helpers;

use std::collections::HashMap;

use flux_types::backend::{Color, DisplayBackend, TextureId};
use flux_types::error::{FluxError, Result};

/// A single named display object.
#[derive(Debug, Clone)]
pub struct SdiObject {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// Z-order within the overlay/non-overlay band.
    pub z: i32,
    pub visible: bool,
    /// Overlays draw above all non-overlay objects regardless of z.
    pub overlay: bool,
    /// Fill color. Fully transparent fills are skipped.
    pub color: Color,
    /// Rounded-corner radius for the fill and stroke.
    pub border_radius: Option<u16>,
    pub stroke_width: Option<u16>,
    pub stroke_color: Option<Color>,
    /// Vertical gradient; both ends must be set to take effect.
    pub gradient_top: Option<Color>,
    pub gradient_bottom: Option<Color>,
    pub text: Option<String>,
    pub text_color: Color,
    pub font_size: u16,
    pub texture: Option<TextureId>,
}

impl Default for SdiObject {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            z: 0,
            visible: true,
            overlay: false,
            color: Color::TRANSPARENT,
            border_radius: None,
            stroke_width: None,
            stroke_color: None,
            gradient_top: None,
            gradient_bottom: None,
            text: None,
            text_color: Color::WHITE,
            font_size: 8,
            texture: None,
        }
    }
}

/// Registry of named display objects.
#[derive(Debug, Default)]
pub struct SdiRegistry {
    objects: HashMap<String, SdiObject>,
}

impl SdiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object under `name` (resetting any existing one) and return
    /// a mutable reference for initialization.
    pub fn create(&mut self, name: &str) -> &mut SdiObject {
        log::trace!("sdi create: {name}");
        self.objects
            .insert(name.to_string(), SdiObject::default());
        self.objects
            .get_mut(name)
            .expect("object inserted just above")
    }

    /// Whether an object with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&SdiObject> {
        self.objects
            .get(name)
            .ok_or_else(|| FluxError::Sdi(format!("object not found: {name}")))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SdiObject> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| FluxError::Sdi(format!("object not found: {name}")))
    }

    /// Remove an object entirely. Missing names are a no-op.
    pub fn remove(&mut self, name: &str) {
        self.objects.remove(name);
    }

    /// Number of registered objects (visible or not).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Paint all visible objects through the backend.
    pub fn draw(&self, backend: &mut dyn DisplayBackend) -> Result<()> {
        let mut order: Vec<(&String, &SdiObject)> =
            self.objects.iter().filter(|(_, o)| o.visible).collect();
        order.sort_by(|(an, a), (bn, b)| {
            (a.overlay, a.z, an.as_str()).cmp(&(b.overlay, b.z, bn.as_str()))
        });
        for (_, obj) in order {
            Self::draw_object(obj, backend)?;
        }
        Ok(())
    }

    fn draw_object(obj: &SdiObject, backend: &mut dyn DisplayBackend) -> Result<()> {
        if let Some(tex) = obj.texture {
            backend.blit(tex, obj.x, obj.y, obj.w, obj.h)?;
        } else if obj.w > 0 && obj.h > 0 {
            let radius = obj.border_radius.unwrap_or(0);
            match (obj.gradient_top, obj.gradient_bottom) {
                (Some(top), Some(bottom)) => {
                    backend
                        .fill_rounded_rect_gradient_v(obj.x, obj.y, obj.w, obj.h, radius, top, bottom)?;
                },
                _ if obj.color.a > 0 => {
                    backend.fill_rounded_rect(obj.x, obj.y, obj.w, obj.h, radius, obj.color)?;
                },
                _ => {},
            }
            if let (Some(sw), Some(sc)) = (obj.stroke_width, obj.stroke_color) {
                backend.stroke_rounded_rect(obj.x, obj.y, obj.w, obj.h, radius, sw, sc)?;
            }
        }
        if let Some(ref text) = obj.text {
            backend.draw_text(text, obj.x, obj.y, obj.font_size, obj.text_color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_contains() {
        let mut sdi = SdiRegistry::new();
        assert!(!sdi.contains("a"));
        sdi.create("a");
        assert!(sdi.contains("a"));
        assert_eq!(sdi.len(), 1);
    }

    #[test]
    fn create_resets_existing() {
        let mut sdi = SdiRegistry::new();
        sdi.create("a").x = 50;
        let obj = sdi.create("a");
        assert_eq!(obj.x, 0);
    }

    #[test]
    fn get_missing_is_error() {
        let sdi = SdiRegistry::new();
        assert!(sdi.get("nope").is_err());
    }

    #[test]
    fn get_mut_updates() {
        let mut sdi = SdiRegistry::new();
        sdi.create("a");
        sdi.get_mut("a").unwrap().visible = false;
        assert!(!sdi.get("a").unwrap().visible);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut sdi = SdiRegistry::new();
        sdi.remove("nope");
        assert!(sdi.is_empty());
    }

    #[test]
    fn default_object_is_visible_and_transparent() {
        let obj = SdiObject::default();
        assert!(obj.visible);
        assert_eq!(obj.color, Color::TRANSPARENT);
        assert!(!obj.overlay);
    }

    /// Backend that records the draw sequence as object signatures.
    struct OrderBackend {
        fills: Vec<(i32, i32)>,
        texts: Vec<String>,
    }

    impl DisplayBackend for OrderBackend {
        fn init(&mut self, _w: u32, _h: u32) -> Result<()> {
            Ok(())
        }
        fn clear(&mut self, _color: Color) -> Result<()> {
            Ok(())
        }
        fn blit(&mut self, _tex: TextureId, x: i32, y: i32, _w: u32, _h: u32) -> Result<()> {
            self.fills.push((x, y));
            Ok(())
        }
        fn fill_rect(&mut self, x: i32, y: i32, _w: u32, _h: u32, _color: Color) -> Result<()> {
            self.fills.push((x, y));
            Ok(())
        }
        fn draw_text(
            &mut self,
            text: &str,
            _x: i32,
            _y: i32,
            _font_size: u16,
            _color: Color,
        ) -> Result<()> {
            self.texts.push(text.to_string());
            Ok(())
        }
        fn swap_buffers(&mut self) -> Result<()> {
            Ok(())
        }
        fn load_texture(&mut self, _w: u32, _h: u32, _data: &[u8]) -> Result<TextureId> {
            Ok(TextureId(1))
        }
        fn destroy_texture(&mut self, _tex: TextureId) -> Result<()> {
            Ok(())
        }
        fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
            text.len() as u32 * 8
        }
        fn shutdown(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn filled(sdi: &mut SdiRegistry, name: &str, x: i32, z: i32, overlay: bool) {
        let obj = sdi.create(name);
        obj.x = x;
        obj.w = 10;
        obj.h = 10;
        obj.z = z;
        obj.overlay = overlay;
        obj.color = Color::WHITE;
    }

    #[test]
    fn draw_respects_z_order() {
        let mut sdi = SdiRegistry::new();
        filled(&mut sdi, "front", 2, 10, false);
        filled(&mut sdi, "back", 1, 0, false);
        let mut be = OrderBackend {
            fills: Vec::new(),
            texts: Vec::new(),
        };
        sdi.draw(&mut be).unwrap();
        assert_eq!(be.fills, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn overlays_draw_after_high_z_content() {
        let mut sdi = SdiRegistry::new();
        filled(&mut sdi, "overlay", 3, -5, true);
        filled(&mut sdi, "content", 4, 999, false);
        let mut be = OrderBackend {
            fills: Vec::new(),
            texts: Vec::new(),
        };
        sdi.draw(&mut be).unwrap();
        assert_eq!(be.fills, vec![(4, 0), (3, 0)]);
    }

    #[test]
    fn invisible_objects_are_skipped() {
        let mut sdi = SdiRegistry::new();
        filled(&mut sdi, "hidden", 1, 0, false);
        sdi.get_mut("hidden").unwrap().visible = false;
        let mut be = OrderBackend {
            fills: Vec::new(),
            texts: Vec::new(),
        };
        sdi.draw(&mut be).unwrap();
        assert!(be.fills.is_empty());
    }

    #[test]
    fn text_objects_draw_text() {
        let mut sdi = SdiRegistry::new();
        let obj = sdi.create("label");
        obj.text = Some("hello".to_string());
        let mut be = OrderBackend {
            fills: Vec::new(),
            texts: Vec::new(),
        };
        sdi.draw(&mut be).unwrap();
        assert_eq!(be.texts, vec!["hello".to_string()]);
        assert!(be.fills.is_empty());
    }

    #[test]
    fn transparent_fill_without_text_draws_nothing() {
        let mut sdi = SdiRegistry::new();
        let obj = sdi.create("ghost");
        obj.w = 10;
        obj.h = 10;
        let mut be = OrderBackend {
            fills: Vec::new(),
            texts: Vec::new(),
        };
        sdi.draw(&mut be).unwrap();
        assert!(be.fills.is_empty());
        assert!(be.texts.is_empty());
    }
}
