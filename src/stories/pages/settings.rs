//! Settings page
//!
//! Full settings page: section tabs switching between profile, notification,
//! and security panes.

use gpui::{div, prelude::*, px, AnyElement, AnyView, App, Context, Entity, Render, Window};
use gpui_component::input::{Input, InputState};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::components::primitives::switch::Switch;
use crate::components::primitives::tabs::Tabs;
use crate::error::Result;
use crate::fixtures::{mock_user, notification_prefs};
use crate::theme::colors::GalleryColors;
use crate::theme::typography::Typography;

/// Catalog entry for the settings page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "pages/settings",
        title: "Settings",
        section: Section::Pages,
        description: "Full settings page with tabbed profile, notification, and security panes.",
        layout: StoryLayout::Fullscreen,
        render,
        scenarios: None,
    }
}

fn render(window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|cx| SettingsPage::new(window, cx)).into())
}

const PANES: [&str; 3] = ["General", "Notifications", "Security"];

struct SettingsPage {
    active_pane: usize,
    name_state: Entity<InputState>,
    username_state: Entity<InputState>,
    email_state: Entity<InputState>,
    notifications: Vec<bool>,
    two_factor: bool,
}

impl SettingsPage {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let user = mock_user();
        let name_state = cx.new(|cx| InputState::new(window, cx).default_value(user.name));
        let username_state =
            cx.new(|cx| InputState::new(window, cx).default_value(user.id));
        let email_state = cx.new(|cx| InputState::new(window, cx).default_value(user.email));

        Self {
            active_pane: 0,
            name_state,
            username_state,
            email_state,
            notifications: notification_prefs().iter().map(|p| p.enabled).collect(),
            two_factor: true,
        }
    }

    fn field(label: &'static str, input: Input) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .child(label),
            )
            .child(input)
            .into_any_element()
    }

    fn general_pane(&self) -> AnyElement {
        Card::new()
            .width(560.0)
            .title("Profile")
            .description("Your public profile information.")
            .child(Self::field("Full Name", Input::new(&self.name_state)))
            .child(Self::field("Username", Input::new(&self.username_state)))
            .child(Self::field("Email", Input::new(&self.email_state)))
            .footer(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(Button::outline("settings-cancel", "Cancel"))
                    .child(Button::new("settings-save", "Save Changes")),
            )
            .into_any_element()
    }

    fn notifications_pane(&self, cx: &mut Context<Self>) -> AnyElement {
        let entity = cx.entity();
        let rows = div().flex().flex_col().gap_3().children(
            notification_prefs()
                .iter()
                .enumerate()
                .map(|(index, pref)| {
                    let entity = entity.clone();
                    let checked = self.notifications.get(index).copied().unwrap_or(false);
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_sm()
                                .text_color(GalleryColors::text_primary())
                                .child(pref.title),
                        )
                        .child(
                            Switch::new(("settings-notif", index)).checked(checked).on_change(
                                move |checked, _window, cx| {
                                    entity.update(cx, |this, cx| {
                                        if let Some(slot) = this.notifications.get_mut(index) {
                                            *slot = checked;
                                        }
                                        cx.notify();
                                    });
                                },
                            ),
                        )
                }),
        );

        Card::new()
            .width(560.0)
            .title("Notifications")
            .description("Choose which emails you want to receive.")
            .child(rows)
            .into_any_element()
    }

    fn security_pane(&self, cx: &mut Context<Self>) -> AnyElement {
        let entity = cx.entity();
        Card::new()
            .width(560.0)
            .title("Security")
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_secondary())
                            .child("Two-factor authentication"),
                    )
                    .child(
                        Switch::new("settings-two-factor")
                            .checked(self.two_factor)
                            .on_change(move |checked, _window, cx| {
                                entity.update(cx, |this, cx| {
                                    this.two_factor = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .footer(
                div()
                    .flex()
                    .justify_end()
                    .child(Button::destructive("settings-sign-out", "Sign Out Everywhere")),
            )
            .into_any_element()
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let active = self.active_pane.min(PANES.len() - 1);

        let mut tabs = Tabs::new("settings-tabs").active(active).on_change(
            move |index, _window, cx| {
                entity.update(cx, |this, cx| {
                    this.active_pane = index;
                    cx.notify();
                });
            },
        );
        for label in PANES {
            tabs = tabs.tab(label);
        }

        let pane = match active {
            0 => self.general_pane(),
            1 => self.notifications_pane(cx),
            _ => self.security_pane(cx),
        };

        div()
            .size_full()
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(GalleryColors::text_primary())
                    .child("Settings"),
            )
            .child(tabs)
            .child(pane)
    }
}
