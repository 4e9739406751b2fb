use flux_core::apps::catalogue::{self, AppEntry};
use flux_core::apps::devices::DeviceList;
use flux_core::apps::hub::HubState;
use flux_core::apps::multitask::{OpenApp, OpenApps};
use flux_core::apps::settings::SettingsPanel;
use flux_core::apps::tasks::TaskList;
use flux_core::config::FluxConfig;
use flux_core::dock::Dock;
use flux_core::gesture::{GestureConfig, GestureRecognizer};
use flux_core::homegrid::HomeGrid;
use flux_core::island::DynamicIslandState;
use flux_core::screen::Screen;
use flux_core::shade::ShadeState;
use flux_core::system::SystemToggles;
use flux_core::toast::ToastState;
use flux_core::widgets::WidgetBoard;

/// All mutable application state except the backend and the SDI registry
/// (which stay as separate locals in main() for borrow-splitting).
pub struct AppState {
    pub config: FluxConfig,
    pub screen: Screen,
    pub catalogue: Vec<AppEntry>,
    pub gestures: GestureRecognizer,
    pub island: DynamicIslandState,
    pub shade: ShadeState,
    pub toggles: SystemToggles,
    pub tasks: TaskList,
    pub devices: DeviceList,
    pub open_apps: OpenApps,
    pub widgets: WidgetBoard,
    pub hub: HubState,
    pub settings: SettingsPanel,
    pub home_grid: HomeGrid,
    pub dock: Dock,
    pub toasts: ToastState,
    /// Swallow the pointer-up that ends a long-press sequence.
    pub suppress_tap: bool,
}

impl AppState {
    pub fn new(config: FluxConfig) -> Self {
        let gestures = GestureRecognizer::new(GestureConfig::from(&config));
        let toasts = ToastState::new(config.toast_ttl_ms);
        Self {
            config,
            screen: Screen::Home,
            catalogue: catalogue::default_apps(),
            gestures,
            island: DynamicIslandState::new(),
            shade: ShadeState::new(),
            toggles: SystemToggles::new(),
            tasks: TaskList::new(),
            devices: DeviceList::new(),
            open_apps: OpenApps::new(),
            widgets: WidgetBoard::new(),
            hub: HubState::new(),
            settings: SettingsPanel,
            home_grid: HomeGrid,
            dock: Dock,
            toasts,
            suppress_tap: false,
        }
    }

    /// Navigate to a screen, registering it in the open-apps list.
    pub fn open_screen(&mut self, screen: Screen) {
        if screen != Screen::Home
            && let Some(entry) = catalogue::entry_for_screen(&self.catalogue, screen)
        {
            self.open_apps.open(OpenApp {
                screen,
                name: entry.name.clone(),
                icon: entry.icon.clone(),
                color: entry.color,
            });
        }
        log::info!("navigating to {}", screen.label());
        self.screen = screen;
    }

    /// Return to the home screen (the only way out of any sub-screen).
    pub fn go_home(&mut self) {
        self.hub.clear();
        self.screen = Screen::Home;
    }
}
