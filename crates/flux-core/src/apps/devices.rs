//! FluxConnect -- the device pairing screen.
//!
//! Connect moves a device from Available to Connected and stamps its
//! last-seen label with the "now" sentinel; disconnect reverts to Available.
//! Offline devices are terminal: no transition reaches or leaves Offline
//! through the UI.

use flux_sdi::SdiRegistry;
use flux_sdi::helpers::{ensure_rounded_fill, ensure_text, hide_objects};
use flux_types::backend::Color;

use crate::apps::{draw_chrome, hide_chrome, hit_close};
use crate::theme;

/// Sentinel last-seen label applied on connect.
pub const LAST_SEEN_NOW: &str = "now";

/// Pairing status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Connected,
    Available,
    Offline,
}

impl DeviceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Available => "Available",
            Self::Offline => "Offline",
        }
    }
}

/// One paired or discoverable device.
#[derive(Debug, Clone)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub status: DeviceStatus,
    pub battery: Option<u8>,
    pub last_seen: Option<String>,
}

/// Action produced by a tap on the device screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevicesAction {
    Connect(String),
    Disconnect(String),
    Close,
}

/// Runtime state for the device list.
#[derive(Debug)]
pub struct DeviceList {
    devices: Vec<Device>,
}

impl DeviceList {
    pub fn new() -> Self {
        Self {
            devices: vec![
                Device {
                    id: "macbook".to_string(),
                    name: "MacBook Pro".to_string(),
                    icon: "Laptop".to_string(),
                    status: DeviceStatus::Connected,
                    battery: Some(82),
                    last_seen: Some(LAST_SEEN_NOW.to_string()),
                },
                Device {
                    id: "ipad".to_string(),
                    name: "iPad Air".to_string(),
                    icon: "Tablet".to_string(),
                    status: DeviceStatus::Available,
                    battery: Some(54),
                    last_seen: Some("2 min ago".to_string()),
                },
                Device {
                    id: "desktop".to_string(),
                    name: "Work Desktop".to_string(),
                    icon: "Monitor".to_string(),
                    status: DeviceStatus::Offline,
                    battery: None,
                    last_seen: Some("3 days ago".to_string()),
                },
            ],
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Available -> Connected, refreshing last-seen. Anything else
    /// (unknown id, already connected, offline) is a silent no-op.
    pub fn connect(&mut self, id: &str) -> bool {
        match self.devices.iter_mut().find(|d| d.id == id) {
            Some(dev) if dev.status == DeviceStatus::Available => {
                dev.status = DeviceStatus::Connected;
                dev.last_seen = Some(LAST_SEEN_NOW.to_string());
                log::info!("device connected: {}", dev.name);
                true
            },
            _ => false,
        }
    }

    /// Connected -> Available. Anything else is a silent no-op.
    pub fn disconnect(&mut self, id: &str) -> bool {
        match self.devices.iter_mut().find(|d| d.id == id) {
            Some(dev) if dev.status == DeviceStatus::Connected => {
                dev.status = DeviceStatus::Available;
                log::info!("device disconnected: {}", dev.name);
                true
            },
            _ => false,
        }
    }

    fn row_rect(i: usize) -> (i32, i32, u32, u32) {
        let y = theme::CONTENT_Y + i as i32 * (theme::ROW_H as i32 + theme::ROW_GAP);
        (theme::CONTENT_X, y, theme::CONTENT_W, theme::ROW_H)
    }

    /// Action-button rect for row `i` (right side of the card).
    fn button_rect(i: usize) -> (i32, i32, u32, u32) {
        let (x, y, w, h) = Self::row_rect(i);
        (x + w as i32 - 104, y + (h as i32 - 28) / 2, 92, 28)
    }

    /// Hit-test a tap on the device screen.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<DevicesAction> {
        if hit_close(x, y) {
            return Some(DevicesAction::Close);
        }
        for (i, dev) in self.devices.iter().enumerate() {
            let (bx, by, bw, bh) = Self::button_rect(i);
            if x >= bx && x < bx + bw as i32 && y >= by && y < by + bh as i32 {
                return match dev.status {
                    DeviceStatus::Available => Some(DevicesAction::Connect(dev.id.clone())),
                    DeviceStatus::Connected => Some(DevicesAction::Disconnect(dev.id.clone())),
                    DeviceStatus::Offline => None,
                };
            }
        }
        None
    }

    /// Synchronize SDI objects for the device screen.
    pub fn update_sdi(&self, sdi: &mut SdiRegistry) {
        draw_chrome(sdi, "connect", "FluxConnect");

        for (i, dev) in self.devices.iter().enumerate() {
            let (x, y, w, h) = Self::row_rect(i);
            let row_name = format!("dev_row_{i}");
            let dot_name = format!("dev_dot_{i}");
            let name_name = format!("dev_name_{i}");
            let status_name = format!("dev_status_{i}");
            let btn_name = format!("dev_btn_{i}");
            let btn_label_name = format!("dev_btn_label_{i}");

            ensure_rounded_fill(sdi, &row_name, x, y, w, h, theme::CARD_BG, 10);

            // Presence dot: green while reachable, gray when offline.
            let online = dev.status != DeviceStatus::Offline;
            ensure_rounded_fill(
                sdi,
                &dot_name,
                x + 14,
                y + (h as i32 - 8) / 2,
                8,
                8,
                if online {
                    Color::rgb(34, 197, 94)
                } else {
                    theme::TEXT_MUTED
                },
                4,
            );

            ensure_text(sdi, &name_name, x + 36, y + 14, theme::FONT_SMALL, theme::TEXT_PRIMARY);
            if let Ok(obj) = sdi.get_mut(&name_name) {
                obj.text = Some(dev.name.clone());
            }

            // Status line: "Connected - 82% - now".
            let mut status = dev.status.label().to_string();
            if let Some(pct) = dev.battery {
                status.push_str(&format!(" - {pct}%"));
            }
            if let Some(ref seen) = dev.last_seen {
                status.push_str(&format!(" - {seen}"));
            }
            ensure_text(sdi, &status_name, x + 36, y + 38, theme::FONT_SMALL, theme::TEXT_MUTED);
            if let Ok(obj) = sdi.get_mut(&status_name) {
                obj.text = Some(status);
            }

            // Action button for reachable devices.
            match dev.status {
                DeviceStatus::Offline => {
                    hide_objects(sdi, &[&btn_name, &btn_label_name]);
                },
                status => {
                    let (bx, by, bw, bh) = Self::button_rect(i);
                    let (label, fill) = if status == DeviceStatus::Connected {
                        ("Disconnect", theme::CARD_STROKE)
                    } else {
                        ("Connect", theme::ACCENT)
                    };
                    ensure_rounded_fill(sdi, &btn_name, bx, by, bw, bh, fill, 14);
                    let tw = theme::text_w(label, theme::FONT_SMALL);
                    ensure_text(
                        sdi,
                        &btn_label_name,
                        bx + (bw as i32 - tw) / 2,
                        by + (bh as i32 - theme::FONT_SMALL as i32) / 2,
                        theme::FONT_SMALL,
                        theme::TEXT_PRIMARY,
                    );
                    if let Ok(obj) = sdi.get_mut(&btn_label_name) {
                        obj.text = Some(label.to_string());
                    }
                },
            }
        }
    }

    /// Hide all device screen SDI objects.
    pub fn hide_sdi(&self, sdi: &mut SdiRegistry) {
        hide_chrome(sdi, "connect");
        for i in 0..self.devices.len() {
            hide_objects(
                sdi,
                &[
                    &format!("dev_row_{i}"),
                    &format!("dev_dot_{i}"),
                    &format!("dev_name_{i}"),
                    &format!("dev_status_{i}"),
                    &format!("dev_btn_{i}"),
                    &format!("dev_btn_label_{i}"),
                ],
            );
        }
    }
}

impl Default for DeviceList {
    fn default() -> Self {
        Self::new()
    }
}
