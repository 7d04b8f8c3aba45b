//! Sample command implementation
//!
//! Evaluates the field at a single point given on the command line.

use anyhow::Result;
use colored::Colorize;
use noisefield::SimplexNoise;
use std::process::ExitCode;

use super::json_output::{print_json, SampleOutput};

/// Evaluate `noise` at `coords`, choosing the evaluator by coordinate count.
///
/// One coordinate uses the 1D form `value(x, 0)`.
pub fn evaluate(noise: &SimplexNoise, coords: &[f64]) -> Result<f64> {
    match *coords {
        [x] => Ok(noise.value_1d(x)),
        [x, y] => Ok(noise.value_2d(x, y)),
        [x, y, z] => Ok(noise.value_3d(x, y, z)),
        [x, y, z, w] => Ok(noise.value_4d(x, y, z, w)),
        _ => anyhow::bail!("expected 1 to 4 coordinates, got {}", coords.len()),
    }
}

/// Run the sample command
///
/// # Arguments
/// * `seed` - Permutation seed (absent or 0 selects the reference table)
/// * `coords` - One to four coordinates
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(seed: Option<u64>, coords: &[f64], json_output: bool) -> Result<ExitCode> {
    let noise = SimplexNoise::new(seed);
    let value = evaluate(&noise, coords)?;

    if json_output {
        print_json(&SampleOutput {
            seed: seed.unwrap_or(0),
            dimensions: coords.len(),
            coords: coords.to_vec(),
            value,
        })?;
    } else {
        let joined = coords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} ({})", "Sampling:".cyan().bold(), joined);
        println!("{}", value);
    }

    Ok(ExitCode::SUCCESS)
}
