//! Application State
//!
//! Global application state: selected story, theme, locale, font size, and
//! window bounds, persisted as TOML in the platform config dir.

use std::sync::Arc;

use gpui::{Action, App, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Font size options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Convert to pixel size (returns None for default/Medium)
    pub fn to_pixels(self) -> Option<f32> {
        match self {
            FontSize::Small => Some(14.0),
            FontSize::Medium => None, // Use system default
            FontSize::Large => Some(18.0),
        }
    }
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

/// Font size action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum FontSizeAction {
    Large,
    Medium,
    Small,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("gallery-gui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryAppState {
    /// Selected story identifier (None shows the welcome screen)
    selected_story: Option<String>,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    font_size: Option<FontSize>,
}

impl GalleryAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().map_or(true, |l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once("-") {
                state.locale = Some(lang.to_string());
            }
        }

        // Always start on the welcome screen
        state.selected_story = None;

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn selected_story(&self) -> Option<&str> {
        self.selected_story.as_deref()
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size.unwrap_or(FontSize::Medium)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn select_story(&mut self, id: Option<String>, cx: &mut Context<Self>) {
        if self.selected_story != id {
            self.selected_story = id;
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_font_size(&mut self, font_size: Option<FontSize>) {
        self.font_size = font_size;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GalleryGlobalStore>()`
#[derive(Clone)]
pub struct GalleryGlobalStore {
    app_state: Entity<GalleryAppState>,
    catalog: Arc<Catalog>,
}

impl GalleryGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<GalleryAppState>, catalog: Arc<Catalog>) -> Self {
        Self { app_state, catalog }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<GalleryAppState> {
        self.app_state.clone()
    }

    /// Get the story catalog
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Read the app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a GalleryAppState {
        self.app_state.read(cx)
    }

    /// Update the app state
    pub fn update<R>(
        &self,
        cx: &mut App,
        f: impl FnOnce(&mut GalleryAppState, &mut Context<GalleryAppState>) -> R,
    ) -> R {
        self.app_state.update(cx, f)
    }
}

impl Global for GalleryGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &GalleryAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &mut App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GalleryAppState, &App) + Send + 'static,
{
    let store = cx.global::<GalleryGlobalStore>().clone();

    let current_state = store.update(cx, |state, cx| {
        mutation(state, cx);
        state.clone()
    });

    // Persist to disk off the main thread
    cx.background_executor()
        .spawn(async move {
            if let Err(e) = save_app_state(&current_state) {
                error!(error = %e, action = action_name, "Failed to save state");
            } else {
                info!(action = action_name, "State saved successfully");
            }
        })
        .detach();

    cx.refresh_windows();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_toml() {
        let mut state = GalleryAppState::new();
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Dark));
        state.set_font_size(Some(FontSize::Large));

        let serialized = toml::to_string(&state).expect("serializes");
        let restored: GalleryAppState = toml::from_str(&serialized).expect("parses");

        assert_eq!(restored.locale(), "zh");
        assert_eq!(restored.theme(), Some(ThemeMode::Dark));
        assert_eq!(restored.font_size(), FontSize::Large);
    }

    #[test]
    fn unknown_theme_string_falls_back_to_system() {
        let state: GalleryAppState =
            toml::from_str("theme = \"sepia\"").expect("parses");
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn font_size_pixels() {
        assert_eq!(FontSize::Medium.to_pixels(), None);
        assert_eq!(FontSize::Large.to_pixels(), Some(18.0));
    }
}
