//! Procedural wallpaper -- a vertical gradient RGBA buffer loaded once as a
//! texture at startup.

/// Generate a `w`x`h` RGBA wallpaper: deep navy fading into violet with a
/// slight horizontal tint shift.
pub fn generate(w: u32, h: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    let h_max = h.saturating_sub(1).max(1);
    let w_max = w.saturating_sub(1).max(1);
    for y in 0..h {
        let t = y as u32 * 255 / h_max;
        for x in 0..w {
            let s = x as u32 * 40 / w_max;
            let r = (12 + t * 30 / 255 + s / 4) as u8;
            let g = (10 + t * 12 / 255) as u8;
            let b = (24 + t * 60 / 255 + s / 2) as u8;
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_matches_dimensions() {
        let data = generate(390, 844);
        assert_eq!(data.len(), 390 * 844 * 4);
    }

    #[test]
    fn fully_opaque() {
        let data = generate(16, 16);
        assert!(data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn gradient_darkens_top() {
        let data = generate(8, 64);
        let top_b = data[2];
        let bottom_b = data[(8 * 63 * 4 + 2) as usize];
        assert!(bottom_b > top_b);
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        assert_eq!(generate(1, 1).len(), 4);
        assert!(generate(0, 0).is_empty());
    }
}
