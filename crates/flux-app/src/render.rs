use flux_core::apps::placeholder;
use flux_core::screen::Screen;
use flux_core::sdi::SdiRegistry;

use crate::app_state::AppState;

/// Update the SDI scene graph for the current frame.
///
/// Controls which UI elements are visible and positioned. The actual
/// rendering (`backend.clear`, `sdi.draw`, `swap_buffers`) stays in main.rs
/// since it needs `&mut backend`.
pub fn update_sdi(state: &mut AppState, sdi: &mut SdiRegistry, now_ms: u64) {
    hide_inactive_screens(state, sdi);

    match state.screen {
        Screen::Home => {
            state.home_grid.update_sdi(sdi, &state.catalogue);
            state.widgets.update_sdi(sdi);
        },
        Screen::Hub => state.hub.update_sdi(sdi, &state.catalogue),
        Screen::Tasks => state.tasks.update_sdi(sdi),
        Screen::Connect => state.devices.update_sdi(sdi),
        Screen::Multitask => state.open_apps.update_sdi(sdi),
        Screen::Settings => state.settings.update_sdi(sdi, &state.toggles),
        Screen::Camera | Screen::Gallery | Screen::Phone => {
            placeholder::update_sdi(sdi, state.screen);
        },
    }

    // Overlays: dock and island on every screen, shade and toast on top.
    state.dock.update_sdi(sdi, &state.catalogue);
    state.island.update_sdi(sdi);
    state.shade.update_sdi(sdi, &state.toggles);
    state.toasts.update_sdi(sdi, now_ms);

    // Wallpaper stays visible at the lowest z.
    if let Ok(obj) = sdi.get_mut("wallpaper") {
        obj.visible = true;
    }
}

/// Hide every screen's objects except the active one's.
fn hide_inactive_screens(state: &AppState, sdi: &mut SdiRegistry) {
    if state.screen != Screen::Home {
        state.home_grid.hide_sdi(sdi);
        state.widgets.hide_sdi(sdi);
    }
    if state.screen != Screen::Hub {
        state.hub.hide_sdi(sdi);
    }
    if state.screen != Screen::Tasks {
        state.tasks.hide_sdi(sdi);
    }
    if state.screen != Screen::Connect {
        state.devices.hide_sdi(sdi);
    }
    if state.screen != Screen::Multitask {
        state.open_apps.hide_sdi(sdi);
    }
    if state.screen != Screen::Settings {
        state.settings.hide_sdi(sdi);
    }
    if !state.screen.is_placeholder() {
        placeholder::hide_sdi(sdi);
    }
}

#[cfg(test)]
mod tests {
    use flux_core::config::FluxConfig;

    use super::*;

    #[test]
    fn home_frame_creates_grid_dock_island() {
        let mut state = AppState::new(FluxConfig::default());
        let mut sdi = SdiRegistry::new();
        update_sdi(&mut state, &mut sdi, 0);
        assert!(sdi.get("grid_tile_0").unwrap().visible);
        assert!(sdi.get("dock_bar").unwrap().visible);
        assert!(sdi.get("island_body").unwrap().visible);
        assert!(sdi.get("widget_card_0").unwrap().visible);
    }

    #[test]
    fn switching_screens_hides_previous() {
        let mut state = AppState::new(FluxConfig::default());
        let mut sdi = SdiRegistry::new();
        update_sdi(&mut state, &mut sdi, 0);
        state.open_screen(Screen::Tasks);
        update_sdi(&mut state, &mut sdi, 0);
        assert!(!sdi.get("grid_tile_0").unwrap().visible);
        assert!(sdi.get("task_row_0").unwrap().visible);
        // Dock stays pinned.
        assert!(sdi.get("dock_bar").unwrap().visible);
    }

    #[test]
    fn placeholder_screen_renders_hint() {
        let mut state = AppState::new(FluxConfig::default());
        let mut sdi = SdiRegistry::new();
        state.open_screen(Screen::Camera);
        update_sdi(&mut state, &mut sdi, 0);
        assert_eq!(sdi.get("ph_title").unwrap().text.as_deref(), Some("Camera"));
        state.go_home();
        update_sdi(&mut state, &mut sdi, 0);
        assert!(!sdi.get("ph_title").unwrap().visible);
    }

    #[test]
    fn open_shade_draws_over_home() {
        let mut state = AppState::new(FluxConfig::default());
        let mut sdi = SdiRegistry::new();
        state.shade.open();
        update_sdi(&mut state, &mut sdi, 0);
        assert!(sdi.get("shade_panel").unwrap().visible);
        assert!(sdi.get("shade_panel").unwrap().overlay);
    }
}
