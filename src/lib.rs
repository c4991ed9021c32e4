//! Gallery GUI Library
//!
//! A native component gallery: reusable interface primitives and composed
//! blocks rendered in isolation for visual review, plus a deterministic
//! interaction harness that scripts user input against each story's
//! rendered surface and verifies the resulting state.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod catalog;
pub mod components;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod helpers;
pub mod interaction;
pub mod states;
pub mod stories;
pub mod theme;
pub mod views;
