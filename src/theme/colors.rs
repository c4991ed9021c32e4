//! Colors - Gallery Palette

use gpui::{rgb, rgba, Rgba};

/// Gallery color palette - All colors are accessed via associated functions
pub struct GalleryColors;

impl GalleryColors {
    // Primary colors
    /// Primary accent - near-black
    pub fn primary() -> Rgba { rgb(0x18181b) }
    /// Text on primary surfaces
    pub fn primary_foreground() -> Rgba { rgb(0xfafafa) }
    /// Secondary surface - light gray
    pub fn secondary() -> Rgba { rgb(0xf4f4f5) }
    /// Text on secondary surfaces
    pub fn secondary_foreground() -> Rgba { rgb(0x18181b) }
    /// Destructive - red
    pub fn destructive() -> Rgba { rgb(0xdc2626) }
    /// Text on destructive surfaces
    pub fn destructive_foreground() -> Rgba { rgb(0xfafafa) }

    // Background colors
    /// Card and input background
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Muted surface (table headers, alternating rows)
    pub fn muted() -> Rgba { rgb(0xf9fafb) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Muted text (descriptions, placeholders)
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Hover colors
    /// Hover over primary surfaces
    pub fn primary_hover() -> Rgba { rgb(0x3f3f46) }
    /// Hover over secondary surfaces
    pub fn secondary_hover() -> Rgba { rgb(0xe4e4e7) }
    /// Hover over ghost/transparent surfaces
    pub fn ghost_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Control colors
    /// Checked checkbox/switch fill
    pub fn control_checked() -> Rgba { rgb(0x18181b) }
    /// Unchecked switch track
    pub fn track_unchecked() -> Rgba { rgb(0xd4d4d8) }
    /// Switch thumb
    pub fn thumb() -> Rgba { rgb(0xffffff) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }

    // Status colors
    /// Success - green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error/Danger - red
    pub fn danger() -> Rgba { rgb(0xef4444) }
}
