//! Select stories

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::select::{Select, SelectOption};
use crate::error::Result;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the select page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/select",
        title: "Select",
        section: Section::Primitives,
        description: "Dropdown selection control shown in its closed states.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| SelectStory).into())
}

struct SelectStory;

fn fruit_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("cherry", "Cherry"),
        SelectOption::new("grape", "Grape"),
    ]
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("active", "Active"),
        SelectOption::new("inactive", "Inactive"),
        SelectOption::new("pending", "Pending"),
    ]
}

impl Render for SelectStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page_body()
            .child(variant(
                "Placeholder",
                Select::new("fruit")
                    .options(fruit_options())
                    .placeholder("Select a fruit"),
            ))
            .child(variant(
                "With label",
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_primary())
                            .child("Status"),
                    )
                    .child(
                        Select::new("status")
                            .options(status_options())
                            .selected("active"),
                    ),
            ))
            .child(variant(
                "Disabled",
                Select::new("disabled")
                    .options(status_options())
                    .disabled(true),
            ))
    }
}
