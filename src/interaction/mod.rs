//! Interaction Harness
//!
//! Deterministically simulates a user's interaction with a story's rendered
//! surface and verifies the resulting observable state.
//!
//! A [`Scenario`] is an ordered list of [`Step`]s interpreted by a single
//! sequential runner. Each step names a target ([`Locator`]) and either
//! dispatches a synthesized input event or asserts a predicate over the
//! located node. Steps execute strictly in order; every dispatched event
//! settles synchronously before the next step runs, so a later step always
//! observes the effects of earlier steps.
//!
//! Failure semantics:
//! - a locate that matches zero or more than one node aborts the scenario
//!   with [`ScenarioError::ElementNotFound`];
//! - a failed predicate aborts with [`ScenarioError::AssertionFailed`],
//!   reporting expected vs. actual;
//! - a surface builder that cannot construct the component tree aborts with
//!   [`ScenarioError::RenderFailure`].
//!
//! Failures are local to one scenario: every run builds a fresh [`Surface`],
//! and [`run_all`] keeps executing the remaining scenarios after a failure.
//! There are no retries and no timeouts; the surface model is synchronous.

mod runner;
mod step;
mod surface;

pub use runner::*;
pub use step::*;
pub use surface::*;
