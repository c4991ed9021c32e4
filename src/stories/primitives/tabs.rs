//! Tabs stories

use gpui::{div, prelude::*, px, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::tabs::Tabs;
use crate::error::Result;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the tabs page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/tabs",
        title: "Tabs",
        section: Section::Primitives,
        description: "Horizontal tab bar switching between content panes.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| TabsStory::new()).into())
}

const PANES: [(&str, &str); 3] = [
    ("Overview", "Overview content goes here."),
    ("Analytics", "Analytics content goes here."),
    ("Reports", "Reports content goes here."),
];

struct TabsStory {
    active: usize,
}

impl TabsStory {
    fn new() -> Self {
        Self { active: 0 }
    }
}

impl Render for TabsStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let active = self.active.min(PANES.len() - 1);
        let (_, pane_text) = PANES[active];

        let mut bar = Tabs::new("demo-tabs").active(active).on_change(
            move |index, _window, cx| {
                entity.update(cx, |this, cx| {
                    this.active = index;
                    cx.notify();
                });
            },
        );
        for (label, _) in PANES {
            bar = bar.tab(label);
        }

        page_body().child(variant(
            "Default",
            div()
                .flex()
                .flex_col()
                .gap_2()
                .w(px(400.0))
                .child(bar)
                .child(
                    div()
                        .p_4()
                        .text_sm()
                        .text_color(GalleryColors::text_primary())
                        .child(pane_text),
                ),
        ))
    }
}
