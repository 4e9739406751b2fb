//! SDL2 backend for FluxOS.
//!
//! Implements `DisplayBackend` and `InputBackend` using SDL2. Rounded-rect
//! corners are rasterized with midpoint-circle horizontal spans; gradients
//! are drawn scanline by scanline; text uses the shared 8x8 bitmap font
//! scaled by integer factors.

mod font;

use std::collections::HashMap;

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use flux_types::backend::{Color, DisplayBackend, InputBackend, TextureId};
use flux_types::error::{FluxError, Result};
use flux_types::input::{Button, InputEvent};

/// SDL2 rendering and input backend.
///
/// # Safety
///
/// `textures` is declared before `texture_creator` so that Rust's drop order
/// (declaration order) destroys all textures before the creator they borrow
/// from. The `Texture<'static>` lifetime is erased via transmute in
/// `load_texture()` -- this is sound because the `TextureCreator` always
/// outlives the textures.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    textures: HashMap<u64, Texture<'static>>,
    texture_creator: TextureCreator<WindowContext>,
    next_texture_id: u64,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| FluxError::Backend(e.to_string()))?;
        let video = sdl.video().map_err(|e| FluxError::Backend(e.to_string()))?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| FluxError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| FluxError::Backend(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl
            .event_pump()
            .map_err(|e| FluxError::Backend(e.to_string()))?;

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            textures: HashMap::new(),
            texture_creator,
            next_texture_id: 1,
        })
    }

    /// Set the SDL draw color with the matching blend mode.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }
}

impl DisplayBackend for SdlBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
        self.canvas.clear();
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let texture = self
            .textures
            .get(&tex.0)
            .ok_or_else(|| FluxError::Backend(format!("texture not found: {}", tex.0)))?;
        self.canvas
            .copy(texture, None, Rect::new(x, y, w, h))
            .map_err(|e| FluxError::Backend(e.to_string()))?;
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(|e| FluxError::Backend(e.to_string()))?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = if font_size >= 8 {
            (font_size / 8) as i32
        } else {
            1
        };
        let glyph_w = (font::GLYPH_WIDTH as i32) * scale;
        self.set_color(color);

        let mut cx = x;
        for ch in text.chars() {
            let glyph_data = font::glyph(ch);
            for row in 0..8i32 {
                let bits = glyph_data[row as usize];
                for col in 0..8i32 {
                    if bits & (0x80 >> col) != 0 {
                        let px = cx + col * scale;
                        let py = y + row * scale;
                        if scale == 1 {
                            let _ = self.canvas.draw_point(Point::new(px, py));
                        } else {
                            let _ = self
                                .canvas
                                .fill_rect(Rect::new(px, py, scale as u32, scale as u32));
                        }
                    }
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId> {
        let expected = (width * height * 4) as usize;
        if rgba_data.len() != expected {
            return Err(FluxError::Backend(format!(
                "texture data size mismatch: expected {expected}, got {}",
                rgba_data.len()
            )));
        }

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| FluxError::Backend(e.to_string()))?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer[..expected].copy_from_slice(rgba_data);
            })
            .map_err(|e| FluxError::Backend(e.to_string()))?;

        texture.set_blend_mode(sdl2::render::BlendMode::Blend);

        // SAFETY: The texture borrows from self.texture_creator which lives in
        // the same struct. `textures` is declared before `texture_creator`, so
        // Rust drops textures first. The erased lifetime is therefore always
        // valid.
        let texture: Texture<'static> = unsafe { std::mem::transmute(texture) };

        let id = self.next_texture_id;
        self.next_texture_id += 1;
        self.textures.insert(id, texture);
        Ok(TextureId(id))
    }

    fn destroy_texture(&mut self, tex: TextureId) -> Result<()> {
        self.textures.remove(&tex.0);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let scale = if font_size >= 8 {
            (font_size / 8) as u32
        } else {
            1
        };
        text.len() as u32 * font::GLYPH_WIDTH * scale
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Extended primitives
    // -------------------------------------------------------------------

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        let r = (radius as u32).min(w / 2).min(h / 2) as i32;
        self.set_color(color);

        // Center body rect.
        let _ = self
            .canvas
            .fill_rect(Rect::new(x, y + r, w, h - r as u32 * 2));
        // Top strip.
        let _ = self
            .canvas
            .fill_rect(Rect::new(x + r, y, w - r as u32 * 2, r as u32));
        // Bottom strip.
        let _ = self.canvas.fill_rect(Rect::new(
            x + r,
            y + h as i32 - r,
            w - r as u32 * 2,
            r as u32,
        ));

        // Corner fills using midpoint circle horizontal spans.
        let mut cx = 0i32;
        let mut cy = r;
        let mut d = 1 - r;
        while cx <= cy {
            let _ = self.canvas.draw_line(
                Point::new(x + r - cy, y + r - cx),
                Point::new(x + w as i32 - 1 - r + cy, y + r - cx),
            );
            if cx != cy {
                let _ = self.canvas.draw_line(
                    Point::new(x + r - cx, y + r - cy),
                    Point::new(x + w as i32 - 1 - r + cx, y + r - cy),
                );
            }
            if cx != 0 {
                let _ = self.canvas.draw_line(
                    Point::new(x + r - cy, y + h as i32 - 1 - r + cx),
                    Point::new(x + w as i32 - 1 - r + cy, y + h as i32 - 1 - r + cx),
                );
            }
            let _ = self.canvas.draw_line(
                Point::new(x + r - cx, y + h as i32 - 1 - r + cy),
                Point::new(x + w as i32 - 1 - r + cx, y + h as i32 - 1 - r + cy),
            );

            cx += 1;
            if d < 0 {
                d += 2 * cx + 1;
            } else {
                cy -= 1;
                d += 2 * (cx - cy) + 1;
            }
        }
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if stroke_width == 1 {
            let _ = self.canvas.draw_rect(Rect::new(x, y, w, h));
        } else {
            let sw = stroke_width as u32;
            let _ = self.canvas.fill_rect(Rect::new(x, y, w, sw));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x, y + h as i32 - sw as i32, w, sw));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x, y + sw as i32, sw, h.saturating_sub(sw * 2)));
            let _ = self.canvas.fill_rect(Rect::new(
                x + w as i32 - sw as i32,
                y + sw as i32,
                sw,
                h.saturating_sub(sw * 2),
            ));
        }
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.stroke_rect(x, y, w, h, stroke_width, color);
        }
        let r = (radius as i32).min(w as i32 / 2).min(h as i32 / 2);
        self.set_color(color);

        let sw = (stroke_width as i32).max(1);
        for t in 0..sw {
            // Edges.
            let _ = self.canvas.draw_line(
                Point::new(x + r, y + t),
                Point::new(x + w as i32 - 1 - r, y + t),
            );
            let _ = self.canvas.draw_line(
                Point::new(x + r, y + h as i32 - 1 - t),
                Point::new(x + w as i32 - 1 - r, y + h as i32 - 1 - t),
            );
            let _ = self.canvas.draw_line(
                Point::new(x + t, y + r),
                Point::new(x + t, y + h as i32 - 1 - r),
            );
            let _ = self.canvas.draw_line(
                Point::new(x + w as i32 - 1 - t, y + r),
                Point::new(x + w as i32 - 1 - t, y + h as i32 - 1 - r),
            );

            // Corner arcs via midpoint circle.
            let cr = r - t;
            if cr <= 0 {
                continue;
            }
            let mut cx = 0i32;
            let mut cy = cr;
            let mut d = 1 - cr;
            while cx <= cy {
                for (px, py) in [
                    (x + r - cy, y + r - cx),
                    (x + r - cx, y + r - cy),
                    (x + w as i32 - 1 - r + cy, y + r - cx),
                    (x + w as i32 - 1 - r + cx, y + r - cy),
                    (x + r - cy, y + h as i32 - 1 - r + cx),
                    (x + r - cx, y + h as i32 - 1 - r + cy),
                    (x + w as i32 - 1 - r + cy, y + h as i32 - 1 - r + cx),
                    (x + w as i32 - 1 - r + cx, y + h as i32 - 1 - r + cy),
                ] {
                    let _ = self.canvas.draw_point(Point::new(px, py));
                }
                cx += 1;
                if d < 0 {
                    d += 2 * cx + 1;
                } else {
                    cy -= 1;
                    d += 2 * (cx - cy) + 1;
                }
            }
        }
        Ok(())
    }

    fn fill_rect_gradient_v(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        top_color: Color,
        bottom_color: Color,
    ) -> Result<()> {
        let h_max = h.saturating_sub(1).max(1);
        for dy in 0..h as i32 {
            let color = lerp_color(top_color, bottom_color, dy as u32, h_max);
            self.set_color(color);
            let _ = self.canvas.fill_rect(Rect::new(x, y + dy, w, 1));
        }
        Ok(())
    }

    fn fill_rounded_rect_gradient_v(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        top_color: Color,
        bottom_color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.fill_rect_gradient_v(x, y, w, h, top_color, bottom_color);
        }
        let r = (radius as i32).min(w as i32 / 2).min(h as i32 / 2);
        let h_max = (h as i32 - 1).max(1);

        // Scanline by scanline, clipping to the rounded shape.
        for dy in 0..h as i32 {
            let color = lerp_color(top_color, bottom_color, dy as u32, h_max as u32);
            self.set_color(color);

            let inset = if dy < r {
                let ry = r - dy;
                r - isqrt((r * r - ry * ry).max(0))
            } else if dy >= h as i32 - r {
                let ry = dy - (h as i32 - 1 - r);
                r - isqrt((r * r - ry * ry).max(0))
            } else {
                0
            };

            let lx = x + inset;
            let rx = x + w as i32 - 1 - inset;
            if lx <= rx {
                let _ = self
                    .canvas
                    .fill_rect(Rect::new(lx, y + dy, (rx - lx + 1) as u32, 1));
            }
        }
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = map_sdl_event(event) {
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a FluxOS input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key_down(key),
        Event::KeyUp {
            keycode: Some(key), ..
        } => map_key_up(key),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::CursorMove { x, y }),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerDown { x, y }),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::PointerUp { x, y }),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusGained,
            ..
        } => Some(InputEvent::FocusGained),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusLost,
            ..
        } => Some(InputEvent::FocusLost),
        Event::TextInput { text, .. } => text.chars().next().map(InputEvent::TextInput),
        _ => None,
    }
}

fn map_key_down(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Up => Some(InputEvent::ButtonPress(Button::Up)),
        Keycode::Down => Some(InputEvent::ButtonPress(Button::Down)),
        Keycode::Left => Some(InputEvent::ButtonPress(Button::Left)),
        Keycode::Right => Some(InputEvent::ButtonPress(Button::Right)),
        Keycode::Return => Some(InputEvent::ButtonPress(Button::Confirm)),
        Keycode::Escape => Some(InputEvent::ButtonPress(Button::Cancel)),
        Keycode::F1 => Some(InputEvent::ButtonPress(Button::Home)),
        Keycode::F2 => Some(InputEvent::ButtonPress(Button::Overview)),
        Keycode::Backspace => Some(InputEvent::Backspace),
        _ => None,
    }
}

fn map_key_up(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Up => Some(InputEvent::ButtonRelease(Button::Up)),
        Keycode::Down => Some(InputEvent::ButtonRelease(Button::Down)),
        Keycode::Left => Some(InputEvent::ButtonRelease(Button::Left)),
        Keycode::Right => Some(InputEvent::ButtonRelease(Button::Right)),
        Keycode::Return => Some(InputEvent::ButtonRelease(Button::Confirm)),
        Keycode::Escape => Some(InputEvent::ButtonRelease(Button::Cancel)),
        Keycode::F1 => Some(InputEvent::ButtonRelease(Button::Home)),
        Keycode::F2 => Some(InputEvent::ButtonRelease(Button::Overview)),
        _ => None,
    }
}

/// Linear interpolation between two colors.
fn lerp_color(a: Color, b: Color, num: u32, den: u32) -> Color {
    if den == 0 {
        return a;
    }
    let inv = den - num;
    Color::rgba(
        ((a.r as u32 * inv + b.r as u32 * num + den / 2) / den) as u8,
        ((a.g as u32 * inv + b.g as u32 * num + den / 2) / den) as u8,
        ((a.b as u32 * inv + b.b as u32 * num + den / 2) / den) as u8,
        ((a.a as u32 * inv + b.a as u32 * num + den / 2) / den) as u8,
    )
}

/// Integer square root (floor).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = (n as f32).sqrt() as i32;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}
