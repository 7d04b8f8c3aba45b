//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and prints exactly one of these envelopes
//! on stdout instead of coloured text.

use serde::{Deserialize, Serialize};

/// Output of `noisefield sample --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleOutput {
    pub seed: u64,
    pub dimensions: usize,
    pub coords: Vec<f64>,
    pub value: f64,
}

/// Output of `noisefield render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub dimensions: usize,
    pub seed: u64,
    pub octaves: u8,
    /// BLAKE3 hex digest of the written PNG
    pub hash: String,
}

/// Output of `noisefield table --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOutput {
    pub seed: u64,
    pub base: Vec<u8>,
    pub distinct: usize,
    pub bijection: bool,
}

/// Output of `noisefield stats --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsOutput {
    pub seed: u64,
    pub dimensions: usize,
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Serialize `value` as pretty JSON and print it.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}
