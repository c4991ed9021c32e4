//! Card Component

use gpui::{
    div, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// A bordered container with optional header, content, and footer regions
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    description: Option<SharedString>,
    content: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    width: Option<f32>,
}

impl Card {
    /// Create an empty card
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            content: Vec::new(),
            footer: Vec::new(),
            width: None,
        }
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header description
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an element to the content region
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.content.push(child.into_any_element());
        self
    }

    /// Append an element to the footer region
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set a fixed card width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_header = self.title.is_some() || self.description.is_some();
        let has_footer = !self.footer.is_empty();

        let mut card = div()
            .bg(GalleryColors::surface())
            .border_1()
            .border_color(GalleryColors::border())
            .rounded_lg()
            .flex()
            .flex_col();

        if let Some(width) = self.width {
            card = card.w(px(width));
        }

        if has_header {
            let mut header = div().px_6().pt_6().pb_2().flex().flex_col().gap_1();
            if let Some(title) = self.title {
                header = header.child(
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .text_color(GalleryColors::text_primary())
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(title),
                );
            }
            if let Some(description) = self.description {
                header = header.child(
                    div()
                        .text_sm()
                        .text_color(GalleryColors::text_secondary())
                        .child(description),
                );
            }
            card = card.child(header);
        }

        card = card.child(
            div()
                .px_6()
                .py_4()
                .flex()
                .flex_col()
                .gap_4()
                .children(self.content),
        );

        if has_footer {
            card = card.child(
                div()
                    .px_6()
                    .pb_6()
                    .pt_2()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(self.footer),
            );
        }

        card
    }
}
