//! Card stories

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::error::Result;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the card page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/card",
        title: "Card",
        section: Section::Primitives,
        description: "Bordered container with header, content, and footer regions.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| CardStory).into())
}

struct CardStory;

impl Render for CardStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page_body()
            .child(variant(
                "With header and footer",
                Card::new()
                    .width(380.0)
                    .title("Create project")
                    .description("Deploy your new project in one click.")
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_primary())
                            .child("Your project will be created in the default workspace."),
                    )
                    .footer(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(Button::outline("card-cancel", "Cancel"))
                            .child(Button::new("card-deploy", "Deploy")),
                    ),
            ))
            .child(variant(
                "Content only",
                Card::new().width(300.0).child(
                    div()
                        .text_sm()
                        .text_color(GalleryColors::text_secondary())
                        .child("A bare card without header or footer."),
                ),
            ))
    }
}
