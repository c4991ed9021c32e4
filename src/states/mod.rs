//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system. UI actions
//! mutate state entities, which notify observers; views re-render from the
//! notified state.

mod app;
mod i18n;

pub use app::*;
pub use i18n::*;
