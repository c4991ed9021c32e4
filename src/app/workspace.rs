//! Workspace - Main Shell
//!
//! The workspace holds the title bar, sidebar, story canvas, and scenario
//! panel, and owns the handlers for the settings actions dispatched from
//! the title bar menus.

use gpui::{Context, Entity, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Theme, ThemeMode, h_flex};

use crate::constants::CONTENT_MIN_WIDTH;
use crate::states::{
    FontSize, FontSizeAction, LocaleAction, ThemeAction, update_app_state_and_save,
};
use crate::states::GalleryGlobalStore;
use crate::views::{GallerySidebar, GalleryTitleBar, ScenarioPanel, StoryCanvas};

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<GalleryTitleBar>,
    sidebar: Entity<GallerySidebar>,
    canvas: Entity<StoryCanvas>,
    scenario_panel: Entity<ScenarioPanel>,
}

impl Workspace {
    /// Create the workspace and its child views
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| GalleryTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| GallerySidebar::new(window, cx));
        let canvas = cx.new(|cx| StoryCanvas::new(window, cx));
        let scenario_panel = cx.new(|cx| ScenarioPanel::new(window, cx));

        Self {
            title_bar,
            sidebar,
            canvas,
            scenario_panel,
        }
    }

    fn handle_theme_action(action: &ThemeAction, window: &mut Window, cx: &mut Context<Self>) {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };

        match mode {
            Some(mode) => Theme::change(mode, Some(window), cx),
            None => Theme::sync_system_appearance(Some(window), cx),
        }

        update_app_state_and_save(cx, "theme", move |state, _| {
            state.set_theme(mode);
        });
    }

    fn handle_locale_action(action: &LocaleAction, cx: &mut Context<Self>) {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_app_state_and_save(cx, "locale", move |state, _| {
            state.set_locale(locale.to_string());
        });
    }

    fn handle_font_size_action(action: &FontSizeAction, cx: &mut Context<Self>) {
        let font_size = match action {
            FontSizeAction::Large => FontSize::Large,
            FontSizeAction::Medium => FontSize::Medium,
            FontSizeAction::Small => FontSize::Small,
        };
        update_app_state_and_save(cx, "font_size", move |state, _| {
            state.set_font_size(Some(font_size));
        });
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Apply the configured font size before laying out children.
        let font_size = cx.global::<GalleryGlobalStore>().read(cx).font_size();
        if let Some(size) = font_size.to_pixels() {
            window.set_rem_size(px(size));
        }

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .on_action(cx.listener(|_this, action: &ThemeAction, window, cx| {
                Self::handle_theme_action(action, window, cx);
            }))
            .on_action(cx.listener(|_this, action: &LocaleAction, _window, cx| {
                Self::handle_locale_action(action, cx);
            }))
            .on_action(cx.listener(|_this, action: &FontSizeAction, _window, cx| {
                Self::handle_font_size_action(action, cx);
            }))
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .min_w(px(CONTENT_MIN_WIDTH))
                            .h_full()
                            .overflow_hidden()
                            .child(self.canvas.clone()),
                    )
                    .child(self.scenario_panel.clone()),
            )
    }
}
