//! Switch stories

use gpui::{div, prelude::*, px, AnyView, App, Context, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::primitives::switch::{Switch, SwitchSize};
use crate::error::Result;
use crate::interaction::{Locator, Node, Predicate, Role, Scenario, ScenarioError, Surface};
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the switch page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/switch",
        title: "Switch",
        section: Section::Primitives,
        description: "Toggle control for on/off settings rows.",
        layout: StoryLayout::Padded,
        render,
        scenarios: Some(scenarios),
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(|_| SwitchStory::new()).into())
}

struct SwitchStory {
    airplane_mode: bool,
    marketing_emails: bool,
}

impl SwitchStory {
    fn new() -> Self {
        Self {
            airplane_mode: false,
            marketing_emails: false,
        }
    }
}

impl Render for SwitchStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let airplane = Switch::new("airplane-mode")
            .checked(self.airplane_mode)
            .label("Airplane Mode")
            .on_change({
                let entity = entity.clone();
                move |checked, _window, cx| {
                    entity.update(cx, |this, cx| {
                        this.airplane_mode = checked;
                        cx.notify();
                    });
                }
            });

        // Settings toggle row pattern used in preferences forms.
        let settings_row = div()
            .flex()
            .items_center()
            .justify_between()
            .w(px(350.0))
            .rounded_lg()
            .border_1()
            .border_color(GalleryColors::border())
            .p_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_primary())
                            .child("Marketing emails"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(GalleryColors::text_secondary())
                            .child("Receive emails about new products and features."),
                    ),
            )
            .child(
                Switch::new("marketing-emails")
                    .checked(self.marketing_emails)
                    .on_change(move |checked, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.marketing_emails = checked;
                            cx.notify();
                        });
                    }),
            );

        page_body()
            .child(variant("With label", airplane))
            .child(variant("Checked", Switch::new("checked").checked(true)))
            .child(variant("Small", Switch::new("small").size(SwitchSize::Small)))
            .child(variant("Disabled", Switch::new("disabled").disabled(true)))
            .child(variant("Settings row", settings_row))
    }
}

/// Scripted interactions for the switch page
pub fn scenarios() -> Vec<Scenario> {
    vec![toggle_interaction(), disabled_interaction()]
}

fn toggle_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::switch("Toggle me"));
    Ok(surface)
}

fn disabled_surface() -> std::result::Result<Surface, ScenarioError> {
    let mut surface = Surface::new();
    surface.push(Node::switch("Locked").disabled(true));
    Ok(surface)
}

fn toggle_interaction() -> Scenario {
    let target = || Locator::role(Role::Switch);
    Scenario::new("one click flips the switch on", toggle_surface)
        .assert(target(), Predicate::IsUnchecked)
        .click(target())
        .assert(target(), Predicate::IsChecked)
}

fn disabled_interaction() -> Scenario {
    let target = || Locator::role(Role::Switch);
    Scenario::new("disabled switch keeps its state", disabled_surface)
        .assert(target(), Predicate::IsDisabled)
        .click(target())
        .assert(target(), Predicate::IsUnchecked)
        .assert(target(), Predicate::IsDisabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::run_all;

    #[test]
    fn all_switch_scenarios_pass() {
        for outcome in run_all(&scenarios()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.result);
        }
    }
}
