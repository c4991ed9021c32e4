//! Site header block
//!
//! Application header composing logo, navigation, search input, and the
//! current user's avatar.

use gpui::{div, prelude::*, px, AnyView, App, Context, Entity, Render, Window};
use gpui_component::input::{Input, InputState};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::{Badge, BadgeVariant};
use crate::components::primitives::button::Button;
use crate::error::Result;
use crate::fixtures::mock_user;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the site header block
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "blocks/site-header",
        title: "Site Header",
        section: Section::Blocks,
        description: "Top navigation bar with search and user menu.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|cx| SiteHeaderStory::new(window, cx)).into())
}

const NAV_ITEMS: [&str; 3] = ["Dashboard", "Projects", "Team"];

struct SiteHeaderStory {
    search_state: Entity<InputState>,
}

impl SiteHeaderStory {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search_state = cx.new(|cx| InputState::new(window, cx).placeholder("Search..."));
        Self { search_state }
    }
}

impl Render for SiteHeaderStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let user = mock_user();

        let header = div()
            .w(px(860.0))
            .h(px(56.0))
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .bg(GalleryColors::surface())
            .border_1()
            .border_color(GalleryColors::border())
            .rounded_lg()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(GalleryColors::text_primary())
                            .child("Acme Inc."),
                    )
                    .children(NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                        Button::ghost(("nav", index), *item)
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().w(px(220.0)).child(Input::new(&self.search_state)))
                    .child(Badge::new(user.role.as_str()).variant(BadgeVariant::Outline))
                    .child(Avatar::new(user.initials())),
            );

        page_body().child(variant("Default", header))
    }
}
