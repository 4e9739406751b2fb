use flux_core::apps::devices::DevicesAction;
use flux_core::apps::hub::HubAction;
use flux_core::apps::multitask::MultitaskAction;
use flux_core::apps::placeholder;
use flux_core::apps::settings::{LEVEL_STEP, SettingsAction};
use flux_core::apps::tasks::TasksAction;
use flux_core::gesture::GestureEvent;
use flux_core::input::{Button, InputEvent};
use flux_core::screen::Screen;
use flux_core::shade::ShadeAction;
use flux_core::widgets::WidgetAction;

use crate::app_state::AppState;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Handle one input event. `now_ms` feeds the gesture interpreter.
pub fn handle_event(event: &InputEvent, state: &mut AppState, now_ms: u64) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,

        InputEvent::FocusLost => {
            state.gestures.cancel();
        },

        InputEvent::PointerDown { x, y } => {
            state.gestures.pointer_down(*x, *y, now_ms);
        },

        InputEvent::PointerUp { x, y } => {
            match state.gestures.pointer_up(*x, *y, state.shade.open) {
                Some(gesture) => {
                    state.suppress_tap = false;
                    apply_gesture(gesture, state, now_ms);
                },
                None => {
                    if state.suppress_tap {
                        state.suppress_tap = false;
                    } else {
                        handle_tap(*x, *y, state, now_ms);
                    }
                },
            }
        },

        // Escape backs out one layer at a time; on a bare home screen it
        // quits.
        InputEvent::ButtonPress(Button::Cancel) => {
            if state.shade.open {
                state.shade.close();
            } else if state.widgets.customize {
                state.widgets.exit_customize();
            } else if state.screen != Screen::Home {
                state.go_home();
            } else {
                return InputResult::Quit;
            }
        },

        InputEvent::ButtonPress(Button::Home) => {
            state.shade.close();
            state.widgets.exit_customize();
            state.go_home();
        },

        InputEvent::ButtonPress(Button::Overview) => {
            state.shade.close();
            state.open_screen(Screen::Multitask);
        },

        // Hub search field editing.
        InputEvent::TextInput(ch) if state.screen == Screen::Hub && !state.shade.open => {
            state.hub.push_char(*ch);
        },
        InputEvent::Backspace if state.screen == Screen::Hub && !state.shade.open => {
            state.hub.backspace();
        },

        _ => {},
    }
    InputResult::Continue
}

/// Apply a recognized gesture (from a pointer-up or the long-press timer).
pub fn apply_gesture(gesture: GestureEvent, state: &mut AppState, now_ms: u64) {
    match gesture {
        GestureEvent::OpenShade => state.shade.open(),
        GestureEvent::CloseShade => state.shade.close(),
        GestureEvent::LongPress => {
            // The release that ends the hold must not count as a tap.
            state.suppress_tap = true;
            if state.screen == Screen::Home && !state.shade.open && !state.widgets.customize {
                state.widgets.enter_customize();
                state.toasts.show("Customize mode", now_ms);
            }
        },
    }
}

/// Dispatch a tap at (x, y) to whatever is on top at that point.
fn handle_tap(x: i32, y: i32, state: &mut AppState, now_ms: u64) {
    // Island sits above everything.
    if state.island.hit_test(x, y) {
        state.island.toggle();
        return;
    }

    // Open shade: quick cards, then the panel consumes the rest of its area.
    if state.shade.open {
        match state.shade.hit_test(x, y) {
            Some(ShadeAction::ToggleWifi) => {
                let on = state.toggles.toggle_wifi();
                state
                    .toasts
                    .show(if on { "Wi-Fi on" } else { "Wi-Fi off" }, now_ms);
                return;
            },
            Some(ShadeAction::ToggleBluetooth) => {
                let on = state.toggles.toggle_bluetooth();
                state
                    .toasts
                    .show(if on { "Bluetooth on" } else { "Bluetooth off" }, now_ms);
                return;
            },
            None => {
                if state.shade.hit_test_panel(x, y) {
                    return;
                }
            },
        }
    }

    // Dock is pinned on every screen.
    if let Some(screen) = state.dock.hit_test(x, y, &state.catalogue) {
        state.open_screen(screen);
        return;
    }

    match state.screen {
        Screen::Home => {
            if state.widgets.customize {
                // Customize mode owns the home surface until Done.
                match state.widgets.hit_test(x, y) {
                    Some(WidgetAction::Add(kind)) => {
                        state.widgets.add(kind);
                        state.toasts.show("Widget added", now_ms);
                    },
                    Some(WidgetAction::Remove(id)) => {
                        if state.widgets.remove(&id) {
                            state.toasts.show("Widget removed", now_ms);
                        }
                    },
                    Some(WidgetAction::Done) => state.widgets.exit_customize(),
                    None => {},
                }
                return;
            }
            if let Some(screen) = state.home_grid.hit_test(x, y, &state.catalogue) {
                state.open_screen(screen);
            }
        },

        Screen::Tasks => match state.tasks.hit_test(x, y) {
            Some(TasksAction::Toggle(id)) => {
                if state.tasks.toggle(&id) {
                    state.toasts.show("Task updated", now_ms);
                }
            },
            Some(TasksAction::Add) => {
                state.tasks.add_task();
                state.toasts.show("Task added", now_ms);
            },
            Some(TasksAction::Close) => state.go_home(),
            None => {},
        },

        Screen::Connect => match state.devices.hit_test(x, y) {
            Some(DevicesAction::Connect(id)) => {
                if state.devices.connect(&id) {
                    state.toasts.show("Device connected", now_ms);
                }
            },
            Some(DevicesAction::Disconnect(id)) => {
                if state.devices.disconnect(&id) {
                    state.toasts.show("Device disconnected", now_ms);
                }
            },
            Some(DevicesAction::Close) => state.go_home(),
            None => {},
        },

        Screen::Multitask => match state.open_apps.hit_test(x, y) {
            Some(MultitaskAction::Focus(screen)) => state.open_screen(screen),
            Some(MultitaskAction::CloseApp(screen)) => {
                if state.open_apps.close(screen) {
                    state.toasts.show("App closed", now_ms);
                }
            },
            Some(MultitaskAction::Close) => state.go_home(),
            None => {},
        },

        Screen::Settings => match state.settings.hit_test(x, y) {
            Some(SettingsAction::ToggleWifi) => {
                let on = state.toggles.toggle_wifi();
                state
                    .toasts
                    .show(if on { "Wi-Fi on" } else { "Wi-Fi off" }, now_ms);
            },
            Some(SettingsAction::ToggleBluetooth) => {
                let on = state.toggles.toggle_bluetooth();
                state
                    .toasts
                    .show(if on { "Bluetooth on" } else { "Bluetooth off" }, now_ms);
            },
            Some(SettingsAction::BrightnessDown) => state.toggles.adjust_brightness(-LEVEL_STEP),
            Some(SettingsAction::BrightnessUp) => state.toggles.adjust_brightness(LEVEL_STEP),
            Some(SettingsAction::VolumeDown) => state.toggles.adjust_volume(-LEVEL_STEP),
            Some(SettingsAction::VolumeUp) => state.toggles.adjust_volume(LEVEL_STEP),
            Some(SettingsAction::Close) => state.go_home(),
            None => {},
        },

        Screen::Hub => match state.hub.hit_test(x, y, &state.catalogue) {
            Some(HubAction::Open(screen)) => {
                state.hub.clear();
                state.open_screen(screen);
            },
            Some(HubAction::Close) => state.go_home(),
            None => {},
        },

        Screen::Camera | Screen::Gallery | Screen::Phone => {
            if placeholder::hit_test(x, y) {
                state.go_home();
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use flux_core::apps::devices::DeviceStatus;
    use flux_core::config::FluxConfig;
    use flux_core::theme;

    use super::*;

    fn state() -> AppState {
        AppState::new(FluxConfig::default())
    }

    fn tap(state: &mut AppState, x: i32, y: i32, now: u64) {
        handle_event(&InputEvent::PointerDown { x, y }, state, now);
        handle_event(&InputEvent::PointerUp { x, y }, state, now);
    }

    #[test]
    fn quit_event_quits() {
        let mut s = state();
        assert_eq!(handle_event(&InputEvent::Quit, &mut s, 0), InputResult::Quit);
    }

    #[test]
    fn edge_swipe_opens_and_closes_shade() {
        let mut s = state();
        handle_event(&InputEvent::PointerDown { x: 200, y: 10 }, &mut s, 0);
        handle_event(&InputEvent::PointerUp { x: 200, y: 150 }, &mut s, 50);
        assert!(s.shade.open);
        handle_event(&InputEvent::PointerDown { x: 200, y: 300 }, &mut s, 100);
        handle_event(&InputEvent::PointerUp { x: 200, y: 100 }, &mut s, 150);
        assert!(!s.shade.open);
    }

    #[test]
    fn deep_swipe_never_opens_shade() {
        let mut s = state();
        handle_event(&InputEvent::PointerDown { x: 200, y: 500 }, &mut s, 0);
        handle_event(&InputEvent::PointerUp { x: 200, y: 800 }, &mut s, 50);
        assert!(!s.shade.open);
    }

    #[test]
    fn long_press_on_home_enters_customize_and_swallows_tap() {
        let mut s = state();
        handle_event(&InputEvent::PointerDown { x: 200, y: 400 }, &mut s, 0);
        let gesture = s.gestures.poll(800).unwrap();
        apply_gesture(gesture, &mut s, 800);
        assert!(s.widgets.customize);
        // Releasing afterwards must not trigger a grid tap.
        handle_event(&InputEvent::PointerUp { x: 200, y: 400 }, &mut s, 810);
        assert_eq!(s.screen, Screen::Home);
        assert!(s.widgets.customize);
    }

    #[test]
    fn short_press_does_not_customize() {
        let mut s = state();
        handle_event(&InputEvent::PointerDown { x: 200, y: 400 }, &mut s, 0);
        handle_event(&InputEvent::PointerUp { x: 200, y: 400 }, &mut s, 300);
        assert!(s.gestures.poll(800).is_none());
        assert!(!s.widgets.customize);
    }

    #[test]
    fn island_tap_toggles_expansion() {
        let mut s = state();
        let (ix, iy, w, h) = s.island.rect();
        tap(&mut s, ix + w as i32 / 2, iy + h as i32 / 2, 0);
        assert!(s.island.expanded);
    }

    #[test]
    fn shade_wifi_card_toggles_and_toasts() {
        let mut s = state();
        s.shade.open();
        // First quick card.
        tap(
            &mut s,
            theme::SHADE_PAD + 10,
            theme::QUICK_CARD_Y + 10,
            0,
        );
        assert!(!s.toggles.wifi);
        assert_eq!(s.toasts.active(10), Some("Wi-Fi off"));
    }

    #[test]
    fn home_grid_tap_opens_app() {
        let mut s = state();
        tap(&mut s, theme::GRID_X + 10, theme::GRID_Y + 10, 0);
        assert_eq!(s.screen, Screen::Phone);
        assert!(s.open_apps.contains(Screen::Phone));
    }

    #[test]
    fn dock_tap_works_from_any_screen() {
        let mut s = state();
        s.open_screen(Screen::Tasks);
        let slot_w = theme::SCREEN_W as i32 / theme::DOCK_SLOTS as i32;
        tap(&mut s, 3 * slot_w + slot_w / 2, theme::DOCK_Y + 20, 0);
        assert_eq!(s.screen, Screen::Settings);
    }

    #[test]
    fn task_checkbox_tap_toggles() {
        let mut s = state();
        s.open_screen(Screen::Tasks);
        let was = s.tasks.tasks()[0].completed;
        tap(&mut s, theme::CONTENT_X + 20, theme::CONTENT_Y + 20, 0);
        assert_ne!(s.tasks.tasks()[0].completed, was);
        assert_eq!(s.toasts.active(10), Some("Task updated"));
    }

    #[test]
    fn device_connect_tap_updates_status() {
        let mut s = state();
        s.open_screen(Screen::Connect);
        // Second row's action button (iPad, Available).
        let row_y = theme::CONTENT_Y + (theme::ROW_H as i32 + theme::ROW_GAP);
        let bx = theme::CONTENT_X + theme::CONTENT_W as i32 - 104 + 5;
        let by = row_y + (theme::ROW_H as i32 - 28) / 2 + 5;
        tap(&mut s, bx, by, 0);
        assert_eq!(s.devices.devices()[1].status, DeviceStatus::Connected);
        assert_eq!(s.toasts.active(10), Some("Device connected"));
    }

    #[test]
    fn close_button_returns_home() {
        let mut s = state();
        s.open_screen(Screen::Settings);
        tap(&mut s, theme::APP_CLOSE_X + 5, theme::APP_CLOSE_Y + 5, 0);
        assert_eq!(s.screen, Screen::Home);
    }

    #[test]
    fn escape_backs_out_then_quits() {
        let mut s = state();
        s.open_screen(Screen::Tasks);
        assert_eq!(
            handle_event(&InputEvent::ButtonPress(Button::Cancel), &mut s, 0),
            InputResult::Continue
        );
        assert_eq!(s.screen, Screen::Home);
        assert_eq!(
            handle_event(&InputEvent::ButtonPress(Button::Cancel), &mut s, 0),
            InputResult::Quit
        );
    }

    #[test]
    fn escape_closes_shade_before_leaving_screen() {
        let mut s = state();
        s.open_screen(Screen::Tasks);
        s.shade.open();
        handle_event(&InputEvent::ButtonPress(Button::Cancel), &mut s, 0);
        assert!(!s.shade.open);
        assert_eq!(s.screen, Screen::Tasks);
    }

    #[test]
    fn hub_text_input_edits_query() {
        let mut s = state();
        s.open_screen(Screen::Hub);
        handle_event(&InputEvent::TextInput('f'), &mut s, 0);
        handle_event(&InputEvent::TextInput('x'), &mut s, 0);
        handle_event(&InputEvent::Backspace, &mut s, 0);
        assert_eq!(s.hub.query(), "f");
    }

    #[test]
    fn text_input_ignored_outside_hub() {
        let mut s = state();
        handle_event(&InputEvent::TextInput('f'), &mut s, 0);
        assert_eq!(s.hub.query(), "");
    }

    #[test]
    fn overview_button_opens_multitask() {
        let mut s = state();
        handle_event(&InputEvent::ButtonPress(Button::Overview), &mut s, 0);
        assert_eq!(s.screen, Screen::Multitask);
    }

    #[test]
    fn focus_lost_cancels_armed_long_press() {
        let mut s = state();
        handle_event(&InputEvent::PointerDown { x: 100, y: 400 }, &mut s, 0);
        handle_event(&InputEvent::FocusLost, &mut s, 100);
        assert!(s.gestures.poll(2000).is_none());
    }

    #[test]
    fn customize_done_chip_exits() {
        let mut s = state();
        s.widgets.enter_customize();
        // Done chip is the fifth chip in the row.
        let chip_x = theme::GRID_X + 4 * (64 + 8) + 5;
        tap(&mut s, chip_x, theme::WIDGET_CHIP_Y + 5, 0);
        assert!(!s.widgets.customize);
    }
}
