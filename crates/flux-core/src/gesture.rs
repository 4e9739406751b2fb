//! Gesture interpreter -- turns raw pointer sequences into discrete events.
//!
//! Three gestures exist: swipe-down-from-the-top-edge opens the notification
//! shade, swipe-up closes it while open, and a held press fires a long-press
//! (customize mode). A single threshold decides each swipe; there is no
//! hysteresis, multi-touch, or velocity tracking.
//!
//! The recognizer never reads a clock itself -- callers pass a millisecond
//! timestamp into `pointer_down` and `poll`, which keeps every transition
//! deterministic under test.

use flux_types::config::FluxConfig;

/// Gesture thresholds, usually derived from [`FluxConfig`].
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Vertical distance a swipe must travel (pixels).
    pub swipe_threshold: i32,
    /// A shade-opening swipe must start within this many pixels of the top.
    pub edge_region: i32,
    /// Hold duration before a long-press fires (milliseconds).
    pub long_press_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 100,
            edge_region: 100,
            long_press_ms: 800,
        }
    }
}

impl From<&FluxConfig> for GestureConfig {
    fn from(cfg: &FluxConfig) -> Self {
        Self {
            swipe_threshold: cfg.swipe_threshold,
            edge_region: cfg.swipe_edge_region,
            long_press_ms: cfg.long_press_ms,
        }
    }
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Swipe down from the top edge: open the notification shade.
    OpenShade,
    /// Swipe up while the shade is open: close it.
    CloseShade,
    /// Press held past the delay: enter customize mode.
    LongPress,
}

/// Tracks one pointer sequence at a time.
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    /// Position of the active pointer-down, if any.
    touch_start: Option<(i32, i32)>,
    /// Armed long-press deadline in milliseconds.
    long_press_deadline: Option<u64>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            touch_start: None,
            long_press_deadline: None,
        }
    }

    /// Begin a pointer sequence: remember the start position and arm the
    /// long-press timer.
    pub fn pointer_down(&mut self, x: i32, y: i32, now_ms: u64) {
        self.touch_start = Some((x, y));
        self.long_press_deadline = Some(now_ms + self.config.long_press_ms);
    }

    /// End a pointer sequence. Cancels any armed long-press and returns the
    /// swipe event the sequence produced, if any. `shade_open` gates the
    /// close-swipe.
    pub fn pointer_up(&mut self, _x: i32, y: i32, shade_open: bool) -> Option<GestureEvent> {
        self.long_press_deadline = None;
        let (_, start_y) = self.touch_start.take()?;
        let diff = y - start_y;
        if diff > self.config.swipe_threshold && start_y < self.config.edge_region {
            Some(GestureEvent::OpenShade)
        } else if diff < -self.config.swipe_threshold && shade_open {
            Some(GestureEvent::CloseShade)
        } else {
            None
        }
    }

    /// Check the long-press timer. Returns `LongPress` exactly once when the
    /// deadline passes; disarms afterwards.
    pub fn poll(&mut self, now_ms: u64) -> Option<GestureEvent> {
        match self.long_press_deadline {
            Some(deadline) if now_ms >= deadline => {
                self.long_press_deadline = None;
                Some(GestureEvent::LongPress)
            },
            _ => None,
        }
    }

    /// Abort the active sequence (pointer left the surface, focus lost).
    pub fn cancel(&mut self) {
        self.touch_start = None;
        self.long_press_deadline = None;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn edge_swipe_down_opens_shade() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 10, 0);
        assert_eq!(g.pointer_up(200, 150, false), Some(GestureEvent::OpenShade));
    }

    #[test]
    fn swipe_from_mid_screen_never_opens() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 500, 0);
        assert_eq!(g.pointer_up(200, 800, false), None);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 10, 0);
        assert_eq!(g.pointer_up(200, 100, false), None);
    }

    #[test]
    fn exact_threshold_is_not_enough() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 10, 0);
        // diff == 100 is not > 100.
        assert_eq!(g.pointer_up(200, 110, false), None);
    }

    #[test]
    fn swipe_up_closes_open_shade() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 300, 0);
        assert_eq!(g.pointer_up(200, 150, true), Some(GestureEvent::CloseShade));
    }

    #[test]
    fn swipe_up_with_shade_closed_is_ignored() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(200, 300, 0);
        assert_eq!(g.pointer_up(200, 150, false), None);
    }

    #[test]
    fn long_press_fires_at_deadline() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(100, 400, 1000);
        assert_eq!(g.poll(1799), None);
        assert_eq!(g.poll(1800), Some(GestureEvent::LongPress));
        // Fires exactly once.
        assert_eq!(g.poll(5000), None);
    }

    #[test]
    fn release_before_deadline_cancels_long_press() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(100, 400, 1000);
        g.pointer_up(100, 400, false);
        assert_eq!(g.poll(1800), None);
    }

    #[test]
    fn cancel_aborts_everything() {
        let mut g = GestureRecognizer::default();
        g.pointer_down(10, 10, 0);
        g.cancel();
        assert_eq!(g.poll(10_000), None);
        assert_eq!(g.pointer_up(10, 500, false), None);
    }

    #[test]
    fn up_without_down_is_noop() {
        let mut g = GestureRecognizer::default();
        assert_eq!(g.pointer_up(0, 500, true), None);
    }

    #[test]
    fn custom_thresholds_respected() {
        let mut g = GestureRecognizer::new(GestureConfig {
            swipe_threshold: 20,
            edge_region: 50,
            long_press_ms: 100,
        });
        g.pointer_down(0, 40, 0);
        assert_eq!(g.pointer_up(0, 70, false), Some(GestureEvent::OpenShade));
        g.pointer_down(0, 40, 0);
        assert_eq!(g.poll(100), Some(GestureEvent::LongPress));
    }

    proptest! {
        /// A swipe that starts below the edge region can never open the
        /// shade, no matter how far it travels.
        #[test]
        fn deep_start_never_opens(start_y in 100i32..2000, end_y in -2000i32..2000) {
            let mut g = GestureRecognizer::default();
            g.pointer_down(0, start_y, 0);
            prop_assert_ne!(g.pointer_up(0, end_y, false), Some(GestureEvent::OpenShade));
        }

        /// With the shade closed, the only possible gesture from an edge
        /// start is OpenShade.
        #[test]
        fn closed_shade_only_opens(start_y in 0i32..100, end_y in -2000i32..2000) {
            let mut g = GestureRecognizer::default();
            g.pointer_down(0, start_y, 0);
            let out = g.pointer_up(0, end_y, false);
            prop_assert!(out.is_none() || out == Some(GestureEvent::OpenShade));
        }
    }
}
