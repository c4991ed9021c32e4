//! Button stories
//!
//! Variants, sizes, states, a stateful click counter, and the scripted
//! click / keyboard / disabled interactions.

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::error::Result;
use crate::interaction::{
    Key, Locator, Node, Predicate, Scenario, ScenarioError, Surface,
};
use crate::stories::{page_body, variant};

/// Catalog entry for the button page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/button",
        title: "Button",
        section: Section::Primitives,
        description: "Primary action element with multiple variants, sizes, and states.",
        layout: StoryLayout::Padded,
        render,
        scenarios: Some(scenarios),
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| ButtonStory::new()).into())
}

struct ButtonStory {
    count: usize,
}

impl ButtonStory {
    fn new() -> Self {
        Self { count: 0 }
    }
}

impl Render for ButtonStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let counter_label = format!("Clicked {} times", self.count);

        page_body()
            .child(variant(
                "All variants",
                div()
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .gap_2()
                    .child(Button::new("variant-default", "Default"))
                    .child(Button::secondary("variant-secondary", "Secondary"))
                    .child(Button::destructive("variant-destructive", "Delete"))
                    .child(Button::outline("variant-outline", "Outline"))
                    .child(Button::ghost("variant-ghost", "Ghost"))
                    .child(Button::link("variant-link", "Link")),
            ))
            .child(variant(
                "All sizes",
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Button::new("size-small", "Small").size(ButtonSize::Small))
                    .child(Button::new("size-medium", "Default"))
                    .child(Button::new("size-large", "Large").size(ButtonSize::Large)),
            ))
            .child(variant(
                "Disabled",
                Button::new("state-disabled", "Disabled").disabled(true),
            ))
            .child(variant(
                "Loading",
                Button::new("state-loading", "Submit").loading(true),
            ))
            .child(variant(
                "Counter",
                Button::new("counter", counter_label)
                    .variant(ButtonVariant::Secondary)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.count += 1;
                        cx.notify();
                    })),
            ))
    }
}

/// Scripted interactions for the button page
pub fn scenarios() -> Vec<Scenario> {
    vec![click_interaction(), keyboard_activation(), disabled_interaction()]
}

fn click_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::button("Click Me"));
    Ok(surface)
}

fn keyboard_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::button("Press Enter"));
    Ok(surface)
}

fn disabled_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::button("Can't Click").disabled(true));
    Ok(surface)
}

fn click_interaction() -> Scenario {
    let target = || Locator::label("Click Me");
    Scenario::new("click bumps the activation count", click_surface)
        .assert(target(), Predicate::IsVisible)
        .assert(target(), Predicate::ActivationCount(0))
        .click(target())
        .assert(target(), Predicate::ActivationCount(1))
}

fn keyboard_activation() -> Scenario {
    // Focus plus Enter must match a direct click's observable effect.
    let target = || Locator::label("Press Enter");
    Scenario::new("enter activates the focused button", keyboard_surface)
        .focus(target())
        .assert(target(), Predicate::IsFocused)
        .press(target(), Key::Enter)
        .assert(target(), Predicate::ActivationCount(1))
}

fn disabled_interaction() -> Scenario {
    let target = || Locator::label("Can't Click");
    Scenario::new("disabled button ignores clicks", disabled_surface)
        .assert(target(), Predicate::IsDisabled)
        .click(target())
        .assert(target(), Predicate::IsDisabled)
        .assert(target(), Predicate::ActivationCount(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::run_all;

    #[test]
    fn all_button_scenarios_pass() {
        for outcome in run_all(&scenarios()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.result);
        }
    }

    #[test]
    fn keyboard_and_click_paths_reach_the_same_count() {
        let clicked = click_interaction().run().expect("click path passes");
        let keyed = keyboard_activation().run().expect("keyboard path passes");
        // Both scenarios end with the counter asserted at exactly one.
        assert_eq!(clicked.steps_run, 4);
        assert_eq!(keyed.steps_run, 4);
    }
}
