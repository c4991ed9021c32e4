//! Security settings block
//!
//! Password change form, two-factor toggle, and the active sessions table.

use gpui::{div, prelude::*, AnyView, App, Context, Entity, IntoElement, Render, Window};
use gpui_component::input::{Input, InputState};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::badge::{Badge, BadgeVariant};
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::components::primitives::switch::Switch;
use crate::error::Result;
use crate::fixtures::{active_sessions, SessionRecord};
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the security settings block
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "blocks/settings-security",
        title: "Settings / Security",
        section: Section::Blocks,
        description: "Password change, two-factor toggle, and active sessions.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|cx| SecurityStory::new(window, cx)).into())
}

fn session_columns() -> Vec<Column<SessionRecord>> {
    vec![
        Column::new("device", "Device", |row: &SessionRecord| {
            if row.current {
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(row.device)
                    .child(Badge::new("Current").variant(BadgeVariant::Secondary))
                    .into_any_element()
            } else {
                div().child(row.device).into_any_element()
            }
        })
        .flex_width(Some(220.0)),
        Column::new("location", "Location", |row: &SessionRecord| {
            div().child(row.location).into_any_element()
        })
        .fixed_width(140.0),
        Column::new("last-active", "Last Active", |row: &SessionRecord| {
            div().child(row.last_active).into_any_element()
        })
        .fixed_width(120.0),
    ]
}

pub(crate) struct SecurityStory {
    current_password: Entity<InputState>,
    new_password: Entity<InputState>,
    two_factor: bool,
    sessions: Entity<DataTable<SessionRecord>>,
}

impl SecurityStory {
    pub(crate) fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let current_password =
            cx.new(|cx| InputState::new(window, cx).placeholder("Current password"));
        let new_password = cx.new(|cx| InputState::new(window, cx).placeholder("New password"));
        let sessions = data_table(session_columns(), active_sessions().to_vec(), cx);

        Self {
            current_password,
            new_password,
            two_factor: false,
            sessions,
        }
    }

    fn password_card(&self) -> Card {
        Card::new()
            .width(560.0)
            .title("Change Password")
            .description("Update your password to keep your account secure.")
            .child(Input::new(&self.current_password))
            .child(Input::new(&self.new_password))
            .footer(
                div()
                    .flex()
                    .justify_end()
                    .child(Button::new("update-password", "Update Password")),
            )
    }

    fn two_factor_card(&self, cx: &mut Context<Self>) -> Card {
        let entity = cx.entity();
        Card::new()
            .width(560.0)
            .title("Two-Factor Authentication")
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_secondary())
                            .child("Require a verification code when signing in."),
                    )
                    .child(
                        Switch::new("two-factor")
                            .checked(self.two_factor)
                            .on_change(move |checked, _window, cx| {
                                entity.update(cx, |this, cx| {
                                    this.two_factor = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
    }

    fn sessions_card(&self) -> Card {
        Card::new()
            .width(560.0)
            .title("Active Sessions")
            .description("Devices currently signed in to your account.")
            .child(self.sessions.clone())
            .footer(
                div()
                    .flex()
                    .justify_end()
                    .child(Button::destructive(
                        "sign-out-all",
                        "Sign Out All Other Sessions",
                    )),
            )
    }
}

impl Render for SecurityStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let two_factor = self.two_factor_card(cx);
        page_body()
            .child(variant("Change password", self.password_card()))
            .child(variant("Two-factor", two_factor))
            .child(variant("Active sessions", self.sessions_card()))
    }
}
