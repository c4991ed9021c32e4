//! Input stories
//!
//! Showcases the component library's text input, including the scripted
//! typing interaction.

use gpui::{div, prelude::*, px, AnyView, App, Context, Entity, Render, Window};
use gpui_component::input::{Input, InputState};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::error::Result;
use crate::interaction::{Locator, Node, Predicate, Scenario, ScenarioError, Surface};
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the input page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/input",
        title: "Input",
        section: Section::Primitives,
        description: "Text input field with placeholder, value, and disabled states.",
        layout: StoryLayout::Padded,
        render,
        scenarios: Some(scenarios),
    }
}

fn render(window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|cx| InputStory::new(window, cx)).into())
}

struct InputStory {
    default_state: Entity<InputState>,
    email_state: Entity<InputState>,
    filled_state: Entity<InputState>,
    typing_state: Entity<InputState>,
}

impl InputStory {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let default_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("Enter text..."));
        let email_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let filled_state =
            cx.new(|cx| InputState::new(window, cx).default_value("Pre-filled content"));
        let typing_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("Type here..."));

        Self {
            default_state,
            email_state,
            filled_state,
            typing_state,
        }
    }

    fn labeled(label: &'static str, input: Input) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .w(px(300.0))
            .child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .child(label),
            )
            .child(input)
    }
}

impl Render for InputStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let typed = self.typing_state.read(cx).value().to_string();

        page_body()
            .child(variant(
                "Default",
                div().w(px(300.0)).child(Input::new(&self.default_state)),
            ))
            .child(variant(
                "With label",
                Self::labeled("Email", Input::new(&self.email_state)),
            ))
            .child(variant(
                "Pre-filled",
                div().w(px(300.0)).child(Input::new(&self.filled_state)),
            ))
            .child(variant(
                "Typing echo",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(300.0))
                    .child(Input::new(&self.typing_state).cleanable(true))
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_secondary())
                            .child(format!("Value: {typed}")),
                    ),
            ))
    }
}

/// Scripted interactions for the input page
pub fn scenarios() -> Vec<Scenario> {
    vec![typing_interaction()]
}

fn typing_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::text_input().placeholder("Type here..."));
    Ok(surface)
}

fn typing_interaction() -> Scenario {
    let target = || Locator::placeholder("Type here...");
    Scenario::new("typing fills the field in order", typing_surface)
        .assert(target(), Predicate::IsVisible)
        .click(target())
        .type_text(target(), "Hello, Storybook!")
        .assert(target(), Predicate::ValueEquals("Hello, Storybook!".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::run_all;

    #[test]
    fn all_input_scenarios_pass() {
        for outcome in run_all(&scenarios()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.result);
        }
    }

    #[test]
    fn typed_value_is_the_concatenation_of_the_characters() {
        let mut surface = typing_surface().expect("surface builds");
        let id = surface
            .locate(&Locator::placeholder("Type here..."))
            .expect("one input");
        surface.dispatch(
            id,
            &crate::interaction::InputEvent::TypeText("Hello, Storybook!".into()),
        );
        assert_eq!(surface.node(id).current_value(), "Hello, Storybook!");
    }
}
