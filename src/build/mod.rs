//! Build pipeline: load, prepare, render, write.

pub mod pipeline;
