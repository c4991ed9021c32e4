//! Login form block
//!
//! Authentication block composing Card, Input, and Button primitives, with
//! the end-to-end form-fill interaction.

use gpui::{div, prelude::*, px, AnyView, App, Context, Entity, Render, Window};
use gpui_component::input::{Input, InputState};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::error::Result;
use crate::fixtures::mock_credentials;
use crate::interaction::{Locator, Node, Predicate, Role, Scenario, ScenarioError, Surface};
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the login form block
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "blocks/login-form",
        title: "Login Form",
        section: Section::Blocks,
        description: "Authentication block with email, password, and submit action.",
        layout: StoryLayout::Centered,
        render,
        scenarios: Some(scenarios),
    }
}

fn render(window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|cx| LoginFormStory::new(window, cx)).into())
}

struct LoginFormStory {
    email_state: Entity<InputState>,
    password_state: Entity<InputState>,
    filled_email: Entity<InputState>,
    filled_password: Entity<InputState>,
}

impl LoginFormStory {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let credentials = mock_credentials();
        let email_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let password_state = cx.new(|cx| InputState::new(window, cx).placeholder("Password"));
        let filled_email =
            cx.new(|cx| InputState::new(window, cx).default_value(credentials.email));
        let filled_password =
            cx.new(|cx| InputState::new(window, cx).default_value(credentials.password));

        Self {
            email_state,
            password_state,
            filled_email,
            filled_password,
        }
    }

    fn field(label: &'static str, input: Input) -> impl IntoElement {
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
    }

    fn sign_in_card(
        &self,
        id: &'static str,
        email: &Entity<InputState>,
        password: &Entity<InputState>,
    ) -> Card {
        Card::new()
            .width(380.0)
            .title("Sign In")
            .description("Enter your credentials to access your account.")
            .child(Self::field("Email", Input::new(email)))
            .child(Self::field("Password", Input::new(password)))
            .footer(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(Button::new(id, "Sign In"))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(GalleryColors::text_secondary())
                            .child("Don't have an account? Create one"),
                    ),
            )
    }
}

impl Render for LoginFormStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page_body()
            .child(variant(
                "Default",
                self.sign_in_card("sign-in", &self.email_state, &self.password_state),
            ))
            .child(variant(
                "Filled from fixtures",
                self.sign_in_card("sign-in-filled", &self.filled_email, &self.filled_password),
            ))
    }
}

/// Scripted interactions for the login form block
pub fn scenarios() -> Vec<Scenario> {
    vec![form_interaction()]
}

fn form_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(
        Node::text_input()
            .label("Email")
            .placeholder("you@example.com"),
    );
    surface.push(Node::text_input().label("Password").placeholder("Password"));
    surface.push(Node::button("Sign In"));
    Ok(surface)
}

fn form_interaction() -> Scenario {
    let credentials = mock_credentials();
    let email = || Locator::label("Email");
    let password = || Locator::label("Password");

    Scenario::new("filling the form leaves submit enabled", form_surface)
        .click(email())
        .type_text(email(), credentials.email)
        .assert(email(), Predicate::ValueEquals(credentials.email.into()))
        .click(password())
        .type_text(password(), credentials.password)
        .assert(
            password(),
            Predicate::ValueEquals(credentials.password.into()),
        )
        .assert(Locator::role(Role::Button), Predicate::IsEnabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::run_all;

    #[test]
    fn all_login_scenarios_pass() {
        for outcome in run_all(&scenarios()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.result);
        }
    }

    #[test]
    fn form_surface_has_two_fields_and_a_submit() {
        let surface = form_surface().expect("surface builds");
        assert_eq!(surface.len(), 3);
        assert!(surface.locate(&Locator::role(Role::Button)).is_ok());
    }
}
