//! Static app catalogue.
//!
//! The home grid, dock, hub, and multitask view all draw from this list.
//! The first four entries form the dock.

use flux_types::backend::Color;

use crate::screen::Screen;

/// One installed app.
#[derive(Debug, Clone)]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    /// Icon tag; rendered as the tag's first letter on the accent tile.
    pub icon: String,
    pub color: Color,
    pub screen: Screen,
}

impl AppEntry {
    fn new(id: &str, name: &str, icon: &str, color: Color, screen: Screen) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color,
            screen,
        }
    }
}

/// The built-in catalogue, in home-grid order.
pub fn default_apps() -> Vec<AppEntry> {
    vec![
        AppEntry::new("phone", "Phone", "Phone", Color::rgb(34, 197, 94), Screen::Phone),
        AppEntry::new("camera", "Camera", "Camera", Color::rgb(55, 65, 81), Screen::Camera),
        AppEntry::new("gallery", "Gallery", "Image", Color::rgb(168, 85, 247), Screen::Gallery),
        AppEntry::new("settings", "Settings", "Gear", Color::rgb(75, 85, 99), Screen::Settings),
        AppEntry::new("fluxhub", "Flux Hub", "Grid", Color::rgb(99, 102, 241), Screen::Hub),
        AppEntry::new("taskflow", "TaskFlow", "Check", Color::rgb(59, 130, 246), Screen::Tasks),
        AppEntry::new(
            "fluxconnect",
            "FluxConnect",
            "Laptop",
            Color::rgb(6, 182, 212),
            Screen::Connect,
        ),
        AppEntry::new(
            "multitask",
            "Multitask",
            "Square",
            Color::rgb(249, 115, 22),
            Screen::Multitask,
        ),
    ]
}

/// The dock shows the first four catalogue entries.
pub fn dock_apps(apps: &[AppEntry]) -> &[AppEntry] {
    &apps[..apps.len().min(4)]
}

/// Look up an entry by target screen.
pub fn entry_for_screen(apps: &[AppEntry], screen: Screen) -> Option<&AppEntry> {
    apps.iter().find(|a| a.screen == screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_eight_apps() {
        assert_eq!(default_apps().len(), 8);
    }

    #[test]
    fn ids_are_unique() {
        use std::collections::HashSet;
        let apps = default_apps();
        let ids: HashSet<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), apps.len());
    }

    #[test]
    fn dock_is_first_four() {
        let apps = default_apps();
        let dock = dock_apps(&apps);
        assert_eq!(dock.len(), 4);
        assert_eq!(dock[0].id, "phone");
        assert_eq!(dock[3].id, "settings");
    }

    #[test]
    fn dock_of_short_catalogue() {
        let apps = default_apps()[..2].to_vec();
        assert_eq!(dock_apps(&apps).len(), 2);
    }

    #[test]
    fn entry_lookup_by_screen() {
        let apps = default_apps();
        assert_eq!(entry_for_screen(&apps, Screen::Tasks).unwrap().id, "taskflow");
        assert!(entry_for_screen(&apps, Screen::Home).is_none());
    }
}
