//! Theme - Palette and Typography
//!
//! Fixed palette for the showcased primitives. The shell (title bar,
//! sidebar, canvas chrome) follows the component library's active theme
//! instead; these colors style the widgets under review so their variants
//! stay stable across theme modes.

pub mod colors;
pub mod typography;

pub use colors::GalleryColors;
pub use typography::Typography;
