//! CLI command implementations

pub mod json_output;
pub mod render;
pub mod sample;
pub mod stats;
pub mod table;
