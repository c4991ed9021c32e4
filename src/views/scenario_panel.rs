//! Scenario Panel
//!
//! Runs the selected story's scripted interactions and reports per-scenario
//! outcomes. Scenarios are isolated: a failure in one is listed alongside
//! the successes of the others.

use crate::assets::CustomIconName;
use crate::constants::SCENARIO_PANEL_WIDTH;
use crate::interaction::{ScenarioOutcome, run_all};
use crate::states::{GalleryAppState, GalleryGlobalStore, i18n_format, i18n_scenario};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    label::Label,
    v_flex,
};

/// Scenario panel component
pub struct ScenarioPanel {
    /// App state entity
    app_state: Entity<GalleryAppState>,
    /// Story the outcomes belong to
    ran_for: Option<String>,
    /// Latest run's outcomes
    outcomes: Vec<ScenarioOutcome>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl ScenarioPanel {
    /// Create a new scenario panel
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<GalleryGlobalStore>();
        let app_state = store.app_state();

        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&app_state, |this, model, cx| {
            // Stale outcomes are dropped when the selection changes.
            let selected = model.read(cx).selected_story().map(|s| s.to_string());
            if this.ran_for != selected {
                this.ran_for = None;
                this.outcomes.clear();
            }
            cx.notify();
        }));

        Self {
            app_state,
            ran_for: None,
            outcomes: Vec::new(),
            _subscriptions: subscriptions,
        }
    }

    fn run_scenarios(&mut self, id: &str, cx: &mut Context<Self>) {
        let store = cx.global::<GalleryGlobalStore>().clone();
        let Some(entry) = store.catalog().get(id) else {
            return;
        };

        let scenarios = entry.scenarios();
        tracing::info!(story = id, count = scenarios.len(), "Running scenarios");
        self.outcomes = run_all(&scenarios);
        self.ran_for = Some(id.to_string());
        cx.notify();
    }

    fn render_outcome(
        &self,
        index: usize,
        outcome: &ScenarioOutcome,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let (icon, color) = if outcome.passed() {
            (Icon::from(CustomIconName::CircleCheck), cx.theme().success)
        } else {
            (Icon::new(IconName::CircleX), cx.theme().danger)
        };

        let detail = match &outcome.result {
            Ok(report) => i18n_format(
                cx,
                "scenario.steps",
                &[("count", &report.steps_run.to_string())],
            )
            .to_string(),
            Err(e) => e.to_string(),
        };

        div()
            .id(("outcome", index))
            .w_full()
            .p_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(icon.size_4().text_color(color))
                            .child(Label::new(outcome.name).text_sm()),
                    )
                    .child(
                        Label::new(detail)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
    }
}

impl Render for ScenarioPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let secondary_bg = cx.theme().secondary;

        let selected = self
            .app_state
            .read(cx)
            .selected_story()
            .map(|s| s.to_string());

        let store = cx.global::<GalleryGlobalStore>().clone();
        let scenario_count = selected
            .as_deref()
            .and_then(|id| store.catalog().get(id))
            .map(|entry| entry.scenarios().len())
            .unwrap_or(0);

        let header = div()
            .w_full()
            .p_3()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(border_color)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Icon::from(CustomIconName::Flask)
                            .size_4()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(Label::new(i18n_scenario(cx, "title")).text_sm()),
            )
            .child(
                Button::new("run-scenarios")
                    .small()
                    .ghost()
                    .icon(Icon::from(CustomIconName::Play))
                    .tooltip(i18n_scenario(cx, "run"))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        let selected = this
                            .app_state
                            .read(cx)
                            .selected_story()
                            .map(|s| s.to_string());
                        if let Some(id) = selected {
                            this.run_scenarios(&id, cx);
                        }
                    })),
            );

        let body = if scenario_count == 0 {
            div()
                .p_3()
                .child(
                    Label::new(i18n_scenario(cx, "none_declared"))
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element()
        } else if self.outcomes.is_empty() {
            div()
                .p_3()
                .child(
                    Label::new(i18n_scenario(cx, "idle_hint"))
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element()
        } else {
            let passed = self.outcomes.iter().filter(|o| o.passed()).count();
            let summary = format!(
                "{passed}/{} {}",
                self.outcomes.len(),
                i18n_scenario(cx, "passed")
            );

            let mut list = v_flex().gap_2().p_3().child(
                Label::new(summary)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            );
            let outcomes = self.outcomes.clone();
            for (index, outcome) in outcomes.iter().enumerate() {
                list = list.child(self.render_outcome(index, outcome, cx));
            }
            list.into_any_element()
        };

        v_flex()
            .w(px(SCENARIO_PANEL_WIDTH))
            .h_full()
            .bg(secondary_bg)
            .border_l_1()
            .border_color(border_color)
            .child(header)
            .child(
                div()
                    .id("scenario-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(body),
            )
    }
}
