//! Catalog Stories
//!
//! Each module defines one catalog page: a view rendering named variants of
//! a component, an entry descriptor for the registry, and, where the page
//! declares scripted interactions, its scenarios with their surface
//! projections.

pub mod blocks;
pub mod pages;
pub mod primitives;

use gpui::{div, px, Div, IntoElement, ParentElement, SharedString, Styled};

use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// Titled preview box for one named variant of a story page.
///
/// Variant titles must stay distinct within a page; they are the identifiers
/// a reviewer navigates by.
pub(crate) fn variant(title: impl Into<SharedString>, content: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(GalleryColors::text_secondary())
                .child(title.into()),
        )
        .child(
            div()
                .p_6()
                .border_1()
                .border_color(GalleryColors::border())
                .rounded_lg()
                .bg(GalleryColors::surface())
                .flex()
                .flex_wrap()
                .items_center()
                .gap_3()
                .child(content),
        )
}

/// Vertical list of variant boxes making up a story page body
pub(crate) fn page_body() -> Div {
    div().flex().flex_col().gap_6().p_6()
}
