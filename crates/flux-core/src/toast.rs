//! Toast banner -- fire-and-forget confirmation messages.
//!
//! Single slot: a new toast replaces whatever is showing. Expiry is checked
//! against the caller-supplied clock during the per-frame SDI sync.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};

use crate::theme;

/// Runtime state for the toast banner.
#[derive(Debug)]
pub struct ToastState {
    current: Option<(String, u64)>,
    ttl_ms: u64,
}

impl ToastState {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            current: None,
            ttl_ms,
        }
    }

    /// Show a toast, replacing any active one.
    pub fn show(&mut self, text: impl Into<String>, now_ms: u64) {
        let text = text.into();
        log::info!("toast: {text}");
        self.current = Some((text, now_ms + self.ttl_ms));
    }

    /// The active toast text, if not yet expired.
    pub fn active(&self, now_ms: u64) -> Option<&str> {
        match &self.current {
            Some((text, deadline)) if now_ms < *deadline => Some(text),
            _ => None,
        }
    }

    /// Synchronize SDI objects; drops the toast once expired.
    pub fn update_sdi(&mut self, sdi: &mut SdiRegistry, now_ms: u64) {
        if let Some((_, deadline)) = self.current
            && now_ms >= deadline
        {
            self.current = None;
        }
        match &self.current {
            Some((text, _)) => {
                let tw = theme::text_w(text, theme::FONT_SMALL);
                let w = (tw + 32) as u32;
                let x = (theme::SCREEN_W as i32 - w as i32) / 2;
                ensure_rounded_fill(
                    sdi,
                    "toast_body",
                    x,
                    theme::TOAST_Y,
                    w,
                    theme::TOAST_H,
                    theme::CARD_BG,
                    (theme::TOAST_H / 2) as u16,
                );
                if let Ok(obj) = sdi.get_mut("toast_body") {
                    obj.overlay = true;
                    obj.z = theme::Z_TOAST;
                    obj.stroke_width = Some(1);
                    obj.stroke_color = Some(theme::CARD_STROKE);
                }
                ensure_text(
                    sdi,
                    "toast_text",
                    x + 16,
                    theme::TOAST_Y + (theme::TOAST_H as i32 - theme::FONT_SMALL as i32) / 2,
                    theme::FONT_SMALL,
                    theme::TEXT_PRIMARY,
                );
                if let Ok(obj) = sdi.get_mut("toast_text") {
                    obj.text = Some(text.clone());
                    obj.overlay = true;
                    obj.z = theme::Z_TOAST + 1;
                }
            },
            None => {
                hide_objects(sdi, &["toast_body", "toast_text"]);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        let toast = ToastState::new(1800);
        assert_eq!(toast.active(0), None);
    }

    #[test]
    fn active_until_ttl() {
        let mut toast = ToastState::new(1800);
        toast.show("Task added", 1000);
        assert_eq!(toast.active(1000), Some("Task added"));
        assert_eq!(toast.active(2799), Some("Task added"));
        assert_eq!(toast.active(2800), None);
    }

    #[test]
    fn newer_toast_replaces_older() {
        let mut toast = ToastState::new(1800);
        toast.show("first", 0);
        toast.show("second", 100);
        assert_eq!(toast.active(200), Some("second"));
    }

    #[test]
    fn update_sdi_shows_then_expires() {
        let mut toast = ToastState::new(500);
        let mut sdi = SdiRegistry::new();
        toast.show("Connected", 0);
        toast.update_sdi(&mut sdi, 100);
        assert!(sdi.get("toast_body").unwrap().visible);
        assert_eq!(
            sdi.get("toast_text").unwrap().text.as_deref(),
            Some("Connected")
        );
        toast.update_sdi(&mut sdi, 500);
        assert!(!sdi.get("toast_body").unwrap().visible);
        assert_eq!(toast.active(500), None);
    }
}
