//! Notification settings block
//!
//! Preference rows pairing a labeled description with a switch, driven by
//! the notification fixtures.

use gpui::{div, prelude::*, px, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::components::primitives::switch::Switch;
use crate::error::Result;
use crate::fixtures::notification_prefs;
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the notification settings block
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "blocks/settings-notifications",
        title: "Settings / Notifications",
        section: Section::Blocks,
        description: "Email notification preferences with per-row toggles.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| NotificationsStory::new()).into())
}

pub(crate) struct NotificationsStory {
    enabled: Vec<bool>,
}

impl NotificationsStory {
    pub(crate) fn new() -> Self {
        // Clone the fixture defaults; the fixture itself stays untouched.
        Self {
            enabled: notification_prefs().iter().map(|p| p.enabled).collect(),
        }
    }

    pub(crate) fn card(&self, cx: &mut Context<Self>) -> Card {
        let entity = cx.entity();

        let rows = div().flex().flex_col().gap_3().children(
            notification_prefs()
                .iter()
                .enumerate()
                .map(|(index, pref)| {
                    let entity = entity.clone();
                    let checked = self.enabled.get(index).copied().unwrap_or(pref.enabled);

                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .rounded_lg()
                        .border_1()
                        .border_color(GalleryColors::border())
                        .p_4()
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .gap_1()
                                .pr_4()
                                .child(
                                    div()
                                        .text_sm()
                                        .font_weight(gpui::FontWeight::MEDIUM)
                                        .text_color(GalleryColors::text_primary())
                                        .child(pref.title),
                                )
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(GalleryColors::text_secondary())
                                        .child(pref.description),
                                ),
                        )
                        .child(Switch::new(pref.id).checked(checked).on_change(
                            move |checked, _window, cx| {
                                entity.update(cx, |this, cx| {
                                    if let Some(slot) = this.enabled.get_mut(index) {
                                        *slot = checked;
                                    }
                                    cx.notify();
                                });
                            },
                        ))
                }),
        );

        Card::new()
            .width(560.0)
            .title("Email Notifications")
            .description("Choose which emails you want to receive.")
            .child(rows)
            .footer(
                div()
                    .flex()
                    .justify_end()
                    .child(Button::new("save-preferences", "Save Preferences")),
            )
    }
}

impl Render for NotificationsStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let card = self.card(cx);
        page_body().child(variant("Email notifications", div().w(px(600.0)).child(card)))
    }
}
