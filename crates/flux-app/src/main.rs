//! FluxOS desktop entry point.
//!
//! Simulated smartphone shell in a phone-shaped window: dynamic island,
//! pull-down notification shade (swipe down from the top edge), home grid,
//! widget strip (long-press to customize), dock, and the built-in apps.
//! Escape backs out / quits, F1 is the home button, F2 opens the switcher.

mod app_state;
mod input;
mod render;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use app_state::AppState;
use flux_backend_sdl::SdlBackend;
use flux_core::backend::{DisplayBackend, InputBackend};
use flux_core::config::FluxConfig;
use flux_core::sdi::SdiRegistry;
use flux_core::{theme, wallpaper};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, FLUX_CONFIG env var, or ./flux.toml.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FLUX_CONFIG").ok())
        .unwrap_or_else(|| "flux.toml".to_string());
    let config = FluxConfig::load_or_default(Path::new(&config_path));
    log::info!(
        "Starting FluxOS ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let mut state = AppState::new(config);
    let mut sdi = SdiRegistry::new();

    // -- Wallpaper: generate gradient and load as texture --
    let wp_tex = {
        let wp_data = wallpaper::generate(state.config.screen_width, state.config.screen_height);
        backend.load_texture(
            state.config.screen_width,
            state.config.screen_height,
            &wp_data,
        )?
    };
    {
        let obj = sdi.create("wallpaper");
        obj.w = state.config.screen_width;
        obj.h = state.config.screen_height;
        obj.z = theme::Z_WALLPAPER;
        obj.texture = Some(wp_tex);
    }
    log::info!("Wallpaper loaded");

    let start = Instant::now();

    'running: loop {
        let now_ms = start.elapsed().as_millis() as u64;

        for event in backend.poll_events() {
            if input::handle_event(&event, &mut state, now_ms) == input::InputResult::Quit {
                break 'running;
            }
        }

        // Long-press timer: a deferred one-shot, cancelled by pointer-up.
        if let Some(gesture) = state.gestures.poll(now_ms) {
            input::apply_gesture(gesture, &mut state, now_ms);
        }

        render::update_sdi(&mut state, &mut sdi, now_ms);

        backend.clear(theme::BG_COLOR)?;
        sdi.draw(&mut backend)?;
        backend.swap_buffers()?;
    }

    backend.destroy_texture(wp_tex)?;
    backend.shutdown()?;
    log::info!("FluxOS shut down cleanly");
    Ok(())
}
