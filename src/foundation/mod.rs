//! Error taxonomy and small shared utilities.

pub mod error;
pub mod rng;
