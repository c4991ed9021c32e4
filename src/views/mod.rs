//! View Components
//!
//! UI components for the Gallery-GUI shell.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├──────────┬─────────────────────────────────┬────────────────┤
//! │          │                                 │                │
//! │ Sidebar  │             Canvas              │ Scenario Panel │
//! │ (240px)  │       (selected story)          │    (320px)     │
//! │          │                                 │                │
//! └──────────┴─────────────────────────────────┴────────────────┘
//! ```

mod canvas;
mod scenario_panel;
mod sidebar;
mod title_bar;

pub use canvas::*;
pub use scenario_panel::*;
pub use sidebar::*;
pub use title_bar::*;
