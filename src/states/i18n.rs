//! Internationalization Helpers
//!
//! Convenient functions for translating strings based on current locale.

use super::GalleryGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryGlobalStore>().read(cx).locale();
    t!(format!("sidebar.{key}"), locale = locale).into()
}

/// Get translated string from "canvas" namespace
pub fn i18n_canvas(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryGlobalStore>().read(cx).locale();
    t!(format!("canvas.{key}"), locale = locale).into()
}

/// Get translated string from "scenario" namespace
pub fn i18n_scenario(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryGlobalStore>().read(cx).locale();
    t!(format!("scenario.{key}"), locale = locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation "scenario.steps" = "{count} steps"
/// i18n_format(cx, "scenario.steps", &[("count", "4")])
/// // Returns "4 steps"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<GalleryGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
