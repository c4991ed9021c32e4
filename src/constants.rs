//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Content canvas minimum width
pub const CONTENT_MIN_WIDTH: f32 = 400.0;

/// Scenario panel width in pixels
pub const SCENARIO_PANEL_WIDTH: f32 = 320.0;

/// Height of the toolbar above the story canvas
pub const CANVAS_TOOLBAR_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
