//! Badge Component

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// Badge variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Solid near-black badge
    #[default]
    Default,
    /// Gray badge
    Secondary,
    /// Red badge for error states
    Destructive,
    /// Bordered badge
    Outline,
}

/// A small status pill
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    /// Create a new badge
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Default,
        }
    }

    /// Set the badge variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg) = match self.variant {
            BadgeVariant::Default => (
                GalleryColors::primary(),
                GalleryColors::primary_foreground(),
            ),
            BadgeVariant::Secondary => (
                GalleryColors::secondary(),
                GalleryColors::secondary_foreground(),
            ),
            BadgeVariant::Destructive => (
                GalleryColors::destructive(),
                GalleryColors::destructive_foreground(),
            ),
            BadgeVariant::Outline => (GalleryColors::surface(), GalleryColors::text_primary()),
        };

        let mut badge = div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(bg)
            .text_color(fg)
            .text_size(px(12.0))
            .child(self.label);

        if self.variant == BadgeVariant::Outline {
            badge = badge.border_1().border_color(GalleryColors::border());
        }

        badge
    }
}
