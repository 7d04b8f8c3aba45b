//! Noisefield CLI library.
//!
//! Command implementations for the `noisefield` binary: sampling single
//! points, rendering field slices to PNG, and inspecting permutation tables.

pub mod commands;
