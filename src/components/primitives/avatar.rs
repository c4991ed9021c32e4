//! Avatar Component

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// Avatar size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    /// Small avatar (24px)
    Small,
    /// Medium avatar (32px, default)
    #[default]
    Medium,
    /// Large avatar (48px)
    Large,
}

impl AvatarSize {
    fn diameter(self) -> f32 {
        match self {
            AvatarSize::Small => 24.0,
            AvatarSize::Medium => 32.0,
            AvatarSize::Large => 48.0,
        }
    }

    fn font_size(self) -> f32 {
        match self {
            AvatarSize::Small => 10.0,
            AvatarSize::Medium => 12.0,
            AvatarSize::Large => 16.0,
        }
    }
}

/// A circular avatar showing a user's initials
#[derive(IntoElement)]
pub struct Avatar {
    initials: SharedString,
    size: AvatarSize,
}

impl Avatar {
    /// Create a new avatar from initials
    pub fn new(initials: impl Into<SharedString>) -> Self {
        Self {
            initials: initials.into(),
            size: AvatarSize::Medium,
        }
    }

    /// Set the avatar size
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size(px(self.size.diameter()))
            .rounded_full()
            .bg(GalleryColors::secondary())
            .border_1()
            .border_color(GalleryColors::border())
            .flex()
            .items_center()
            .justify_center()
            .text_color(GalleryColors::text_secondary())
            .text_size(px(self.size.font_size()))
            .child(self.initials)
    }
}
