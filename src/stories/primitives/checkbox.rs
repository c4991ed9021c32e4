//! Checkbox stories

use gpui::{div, prelude::*, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::checkbox::Checkbox;
use crate::error::Result;
use crate::interaction::{Locator, Node, Predicate, Role, Scenario, ScenarioError, Surface};
use crate::stories::{page_body, variant};

/// Catalog entry for the checkbox page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/checkbox",
        title: "Checkbox",
        section: Section::Primitives,
        description: "Binary choice control with label pairing and group composition.",
        layout: StoryLayout::Padded,
        render,
        scenarios: Some(scenarios),
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| CheckboxStory::new()).into())
}

struct CheckboxStory {
    accepted: bool,
    group: [bool; 3],
}

const GROUP_ITEMS: [&str; 3] = ["Email notifications", "SMS alerts", "Push notifications"];

impl CheckboxStory {
    fn new() -> Self {
        Self {
            accepted: false,
            group: [false; 3],
        }
    }
}

impl Render for CheckboxStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let toggle = Checkbox::new("toggle-me")
            .checked(self.accepted)
            .label("Accept terms and conditions")
            .on_change({
                let entity = entity.clone();
                move |checked, _window, cx| {
                    entity.update(cx, |this, cx| {
                        this.accepted = checked;
                        cx.notify();
                    });
                }
            });

        let group = div().flex().flex_col().gap_2().children(
            GROUP_ITEMS.iter().enumerate().map(|(index, item)| {
                let entity = entity.clone();
                Checkbox::new(("group", index))
                    .checked(self.group[index])
                    .label(*item)
                    .on_change(move |checked, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.group[index] = checked;
                            cx.notify();
                        });
                    })
            }),
        );

        page_body()
            .child(variant("With label", toggle))
            .child(variant("Checked", Checkbox::new("checked").checked(true).label("Checked")))
            .child(variant(
                "Disabled",
                Checkbox::new("disabled").disabled(true).label("Disabled"),
            ))
            .child(variant("Checkbox group", group))
    }
}

/// Scripted interactions for the checkbox page
pub fn scenarios() -> Vec<Scenario> {
    vec![toggle_interaction()]
}

fn toggle_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::checkbox("Toggle me"));
    Ok(surface)
}

fn toggle_interaction() -> Scenario {
    let target = || Locator::role(Role::Checkbox);
    Scenario::new("one click flips unchecked to checked", toggle_surface)
        .assert(target(), Predicate::IsUnchecked)
        .click(target())
        .assert(target(), Predicate::IsChecked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::run_all;

    #[test]
    fn all_checkbox_scenarios_pass() {
        for outcome in run_all(&scenarios()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.result);
        }
    }
}
