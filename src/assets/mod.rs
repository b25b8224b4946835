//! Asset loading and SVG fragment preparation.
//!
//! Everything that touches the filesystem for inputs lives in [`store`]; the other modules
//! are pure text transforms over already-loaded fragments.

pub mod cursor;
pub mod prolog;
pub mod store;
