//! Scenario runner
//!
//! Interprets a scenario's step list against a freshly built surface. Steps
//! run strictly sequentially; the first failure aborts the remaining steps
//! of that scenario and is reported as a named error. Scenarios are isolated
//! from each other: each run builds its own surface, and a failure in one
//! never affects another.

use snafu::Snafu;

use super::step::{InputEvent, Key, Locator, Predicate, Step, StepAction};
use super::surface::Surface;

/// Why a scenario stopped before completing its step list
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ScenarioError {
    /// The surface builder could not construct the component tree
    #[snafu(display("render failure: {message}"))]
    RenderFailure { message: String },

    /// A locate step matched zero or more than one node
    #[snafu(display("element not found: {locator} matched {matched} element(s)"))]
    ElementNotFound { locator: Locator, matched: usize },

    /// An observed state did not match the expected predicate
    #[snafu(display("assertion failed at step {step}: expected {expected}, got {actual}"))]
    AssertionFailed {
        step: usize,
        expected: String,
        actual: String,
    },
}

/// Builds the isolated surface a scenario runs against
pub type SurfaceBuilder = fn() -> Result<Surface, ScenarioError>;

/// Summary of a completed scenario run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub steps_run: usize,
}

/// One scenario's result, kept alongside its name for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: Result<ScenarioReport, ScenarioError>,
}

impl ScenarioOutcome {
    /// Whether the scenario ran to completion
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// A scripted interaction: surface builder plus ordered steps
#[derive(Debug, Clone)]
pub struct Scenario {
    name: &'static str,
    build: SurfaceBuilder,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create an empty scenario over a surface builder
    pub fn new(name: &'static str, build: SurfaceBuilder) -> Self {
        Self {
            name,
            build,
            steps: Vec::new(),
        }
    }

    /// Scenario name shown in reports
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The scripted steps, in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Append a raw step
    pub fn step(mut self, target: Locator, action: StepAction) -> Self {
        self.steps.push(Step { target, action });
        self
    }

    /// Synthesize a click on the target
    pub fn click(self, target: Locator) -> Self {
        self.step(target, StepAction::Dispatch(InputEvent::Click))
    }

    /// Move keyboard focus to the target
    pub fn focus(self, target: Locator) -> Self {
        self.step(target, StepAction::Dispatch(InputEvent::Focus))
    }

    /// Press a named key on the target
    pub fn press(self, target: Locator, key: Key) -> Self {
        self.step(target, StepAction::Dispatch(InputEvent::KeyPress(key)))
    }

    /// Enter text into the target
    pub fn type_text(self, target: Locator, text: impl Into<String>) -> Self {
        self.step(target, StepAction::Dispatch(InputEvent::TypeText(text.into())))
    }

    /// Assert a predicate over the target
    pub fn assert(self, target: Locator, predicate: Predicate) -> Self {
        self.step(target, StepAction::Assert(predicate))
    }

    /// Build a fresh surface and run every step in order.
    ///
    /// Stops at the first failed locate or assertion; the error carries
    /// enough context for a human or CI log to identify the step.
    pub fn run(&self) -> Result<ScenarioReport, ScenarioError> {
        let mut surface = (self.build)()?;
        let mut steps_run = 0;

        for (index, step) in self.steps.iter().enumerate() {
            let id = surface
                .locate(&step.target)
                .map_err(|matched| ScenarioError::ElementNotFound {
                    locator: step.target.clone(),
                    matched,
                })?;

            match &step.action {
                StepAction::Dispatch(event) => surface.dispatch(id, event),
                StepAction::Assert(predicate) => {
                    surface.check(id, predicate).map_err(|mismatch| {
                        ScenarioError::AssertionFailed {
                            step: index,
                            expected: mismatch.expected,
                            actual: mismatch.actual,
                        }
                    })?;
                }
            }
            steps_run += 1;
        }

        Ok(ScenarioReport {
            name: self.name,
            steps_run,
        })
    }
}

/// Run each scenario in sequence, collecting per-scenario outcomes.
///
/// A failure aborts only its own scenario; the rest still run.
pub fn run_all(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| ScenarioOutcome {
            name: scenario.name(),
            result: scenario.run(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{Node, Role};

    fn toggle_surface() -> Result<Surface, ScenarioError> {
        let mut surface = Surface::new();
        surface.push(Node::checkbox("Toggle me"));
        Ok(surface)
    }

    fn broken_surface() -> Result<Surface, ScenarioError> {
        Err(ScenarioError::RenderFailure {
            message: "checkbox configuration rejected".into(),
        })
    }

    #[test]
    fn toggle_scenario_observes_state_after_the_click_and_not_before() {
        let report = Scenario::new("checkbox toggles on click", toggle_surface)
            .assert(Locator::role(Role::Checkbox), Predicate::IsUnchecked)
            .click(Locator::role(Role::Checkbox))
            .assert(Locator::role(Role::Checkbox), Predicate::IsChecked)
            .run()
            .expect("scenario passes");
        assert_eq!(report.steps_run, 3);
    }

    #[test]
    fn failed_assertion_reports_expected_vs_actual_and_step_index() {
        let error = Scenario::new("wrong expectation", toggle_surface)
            .click(Locator::role(Role::Checkbox))
            .assert(Locator::role(Role::Checkbox), Predicate::IsUnchecked)
            .run()
            .expect_err("assertion fails");

        match error {
            ScenarioError::AssertionFailed {
                step,
                expected,
                actual,
            } => {
                assert_eq!(step, 1);
                assert_eq!(expected, "unchecked");
                assert_eq!(actual, "checked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn locate_failure_aborts_remaining_steps() {
        let error = Scenario::new("locates a missing switch", toggle_surface)
            .click(Locator::role(Role::Switch))
            .click(Locator::role(Role::Checkbox))
            .run()
            .expect_err("locate fails");

        assert_eq!(
            error,
            ScenarioError::ElementNotFound {
                locator: Locator::role(Role::Switch),
                matched: 0,
            }
        );

        // The checkbox click never ran: a fresh run still sees it unchecked.
        Scenario::new("still unchecked", toggle_surface)
            .assert(Locator::role(Role::Checkbox), Predicate::IsUnchecked)
            .run()
            .expect("isolated state");
    }

    #[test]
    fn render_failure_is_scoped_to_its_own_scenario() {
        let scenarios = vec![
            Scenario::new("broken entry", broken_surface)
                .assert(Locator::role(Role::Checkbox), Predicate::IsVisible),
            Scenario::new("healthy entry", toggle_surface)
                .assert(Locator::role(Role::Checkbox), Predicate::IsUnchecked),
        ];

        let outcomes = run_all(&scenarios);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].passed());
        assert!(outcomes[1].passed());
        assert!(matches!(
            outcomes[0].result,
            Err(ScenarioError::RenderFailure { .. })
        ));
    }

    #[test]
    fn outcomes_keep_scenario_order() {
        let scenarios = vec![
            Scenario::new("first", toggle_surface),
            Scenario::new("second", toggle_surface),
        ];
        let names: Vec<_> = run_all(&scenarios).iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
