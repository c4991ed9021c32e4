//! Page story pages
//!
//! Full page compositions assembled from blocks.

pub mod settings;
