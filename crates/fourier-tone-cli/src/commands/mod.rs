//! CLI command implementations

pub mod pitch;
pub mod render;

mod reporting;
