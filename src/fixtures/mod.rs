//! Mock Fixture Store
//!
//! Stable, hand-authored example data consumed by catalog stories so visual
//! states are reproducible. Fixtures are immutable value objects exposed
//! through read-only accessors; a story that needs to vary fixture data
//! clones and overrides fields locally instead of mutating shared state.

mod invoices;
mod sessions;
mod users;

pub use invoices::*;
pub use sessions::*;
pub use users::*;
