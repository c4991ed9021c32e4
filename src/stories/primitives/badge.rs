//! Badge stories

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::badge::{Badge, BadgeVariant};
use crate::error::Result;
use crate::fixtures;
use crate::stories::{page_body, variant};

/// Catalog entry for the badge page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/badge",
        title: "Badge",
        section: Section::Primitives,
        description: "Small status pill for labels, counts, and states.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| BadgeStory).into())
}

struct BadgeStory;

impl Render for BadgeStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let roles = div().flex().items_center().gap_2().children(
            fixtures::mock_users()
                .iter()
                .map(|user| Badge::new(user.role.as_str()).variant(BadgeVariant::Secondary)),
        );

        page_body()
            .child(variant(
                "All variants",
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Badge::new("Default"))
                    .child(Badge::new("Secondary").variant(BadgeVariant::Secondary))
                    .child(Badge::new("Destructive").variant(BadgeVariant::Destructive))
                    .child(Badge::new("Outline").variant(BadgeVariant::Outline)),
            ))
            .child(variant("User roles", roles))
    }
}
