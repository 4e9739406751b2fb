//! System toggle state: wifi, bluetooth, brightness, volume.
//!
//! The four values are independent; nothing couples them. Brightness and
//! volume are 0-100 and clamp at the ends.

/// Connectivity and level toggles shown in the shade and settings panel.
#[derive(Debug, Clone)]
pub struct SystemToggles {
    pub wifi: bool,
    pub bluetooth: bool,
    brightness: u8,
    volume: u8,
}

impl SystemToggles {
    pub fn new() -> Self {
        Self {
            wifi: true,
            bluetooth: false,
            brightness: 80,
            volume: 60,
        }
    }

    /// Flip wifi; returns the new value.
    pub fn toggle_wifi(&mut self) -> bool {
        self.wifi = !self.wifi;
        self.wifi
    }

    /// Flip bluetooth; returns the new value.
    pub fn toggle_bluetooth(&mut self) -> bool {
        self.bluetooth = !self.bluetooth;
        self.bluetooth
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Adjust brightness by `delta`, clamped to 0..=100.
    pub fn adjust_brightness(&mut self, delta: i16) {
        self.brightness = clamp_level(self.brightness, delta);
    }

    /// Adjust volume by `delta`, clamped to 0..=100.
    pub fn adjust_volume(&mut self, delta: i16) {
        self.volume = clamp_level(self.volume, delta);
    }
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_level(current: u8, delta: i16) -> u8 {
    (current as i16 + delta).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let t = SystemToggles::new();
        assert!(t.wifi);
        assert!(!t.bluetooth);
        assert_eq!(t.brightness(), 80);
        assert_eq!(t.volume(), 60);
    }

    #[test]
    fn toggles_flip_and_report() {
        let mut t = SystemToggles::new();
        assert!(!t.toggle_wifi());
        assert!(t.toggle_wifi());
        assert!(t.toggle_bluetooth());
        assert!(!t.toggle_bluetooth());
    }

    #[test]
    fn toggles_are_independent() {
        let mut t = SystemToggles::new();
        t.toggle_wifi();
        assert!(!t.bluetooth);
        assert_eq!(t.brightness(), 80);
    }

    #[test]
    fn brightness_clamps_high() {
        let mut t = SystemToggles::new();
        t.adjust_brightness(1000);
        assert_eq!(t.brightness(), 100);
    }

    #[test]
    fn volume_clamps_low() {
        let mut t = SystemToggles::new();
        t.adjust_volume(-1000);
        assert_eq!(t.volume(), 0);
    }

    #[test]
    fn small_steps_accumulate() {
        let mut t = SystemToggles::new();
        t.adjust_volume(10);
        t.adjust_volume(10);
        assert_eq!(t.volume(), 80);
        t.adjust_volume(-5);
        assert_eq!(t.volume(), 75);
    }
}
