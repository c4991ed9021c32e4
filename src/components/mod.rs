//! Showcased Components
//!
//! The widgets the catalog renders in isolation. Each primitive takes an
//! explicit, enumerated configuration (variant, size, disabled, ...) rather
//! than an open property bag, so every recognized option is visible in its
//! type.

pub mod composite;
pub mod primitives;
