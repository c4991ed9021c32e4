//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Theme;
use tracing::error;

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::catalog::build_catalog;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{GalleryAppState, GalleryGlobalStore};

actions!(gallery, [Quit]);

/// Run the Gallery GUI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load persisted state; start fresh when the config is unreadable
        let state = GalleryAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load app state, using defaults");
            GalleryAppState::new()
        });
        let theme_mode = state.theme();
        let saved_bounds = state.bounds().copied();

        // A duplicate story id is an authoring mistake; fail loudly at startup.
        let catalog = Arc::new(build_catalog().expect("story catalog has duplicate ids"));

        let app_state = cx.new(|_| state);
        cx.set_global(GalleryGlobalStore::new(app_state, catalog));

        if let Some(mode) = theme_mode {
            Theme::change(mode, None, cx);
        }

        // Create main window
        let bounds = saved_bounds.unwrap_or_else(|| {
            Bounds::centered(
                None,
                gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Gallery-GUI")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(window, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
