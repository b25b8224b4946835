//! Build configuration.

pub mod model;
