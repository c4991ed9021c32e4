//! Avatar stories

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::avatar::{Avatar, AvatarSize};
use crate::error::Result;
use crate::fixtures;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the avatar page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/avatar",
        title: "Avatar",
        section: Section::Primitives,
        description: "Circular user avatar showing initials.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| AvatarStory).into())
}

struct AvatarStory;

impl Render for AvatarStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let team = div().flex().items_center().gap_3().children(
            fixtures::mock_users().iter().map(|user| {
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Avatar::new(user.initials()))
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_primary())
                            .child(user.name),
                    )
            }),
        );

        page_body()
            .child(variant(
                "All sizes",
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Avatar::new("JD").size(AvatarSize::Small))
                    .child(Avatar::new("JD"))
                    .child(Avatar::new("JD").size(AvatarSize::Large)),
            ))
            .child(variant("Team", team))
    }
}
