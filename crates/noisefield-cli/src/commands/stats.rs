//! Stats command implementation
//!
//! Samples the field at reproducible random points and reports the observed
//! range and mean.

use anyhow::Result;
use colored::Colorize;
use noisefield::{DeterministicRng, Dimensions, SimplexNoise};
use std::process::ExitCode;

use super::json_output::{print_json, StatsOutput};

/// Half-width of the sampled cube, [-EXTENT, EXTENT) on every axis.
const EXTENT: f64 = 256.0;

/// Sample `samples` points and summarize them.
///
/// Points come from a PCG32 stream seeded with `seed`, so the same
/// arguments always visit the same coordinates.
pub fn collect(seed: u64, dimensions: Dimensions, samples: usize) -> Result<StatsOutput> {
    if samples == 0 {
        anyhow::bail!("samples must be at least 1");
    }

    let noise = SimplexNoise::new(Some(seed));
    let mut rng = DeterministicRng::new(seed);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;

    for _ in 0..samples {
        let x = rng.gen_range(-EXTENT..EXTENT);
        let y = rng.gen_range(-EXTENT..EXTENT);
        let value = match dimensions {
            Dimensions::Two => noise.value_2d(x, y),
            Dimensions::Three => noise.value_3d(x, y, rng.gen_range(-EXTENT..EXTENT)),
            Dimensions::Four => {
                let z = rng.gen_range(-EXTENT..EXTENT);
                let w = rng.gen_range(-EXTENT..EXTENT);
                noise.value_4d(x, y, z, w)
            }
        };
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    Ok(StatsOutput {
        seed,
        dimensions: dimensions.count(),
        samples,
        min,
        max,
        mean: sum / samples as f64,
    })
}

/// Run the stats command
///
/// # Arguments
/// * `seed` - Permutation and sampling seed
/// * `dimensions` - Dimensionality of the sampled field
/// * `samples` - Number of points to evaluate
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(seed: u64, dimensions: Dimensions, samples: usize, json_output: bool) -> Result<ExitCode> {
    let stats = collect(seed, dimensions, samples)?;

    if json_output {
        print_json(&stats)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} samples of {}D noise (seed {})",
        "Sampled:".cyan().bold(),
        stats.samples,
        stats.dimensions,
        stats.seed
    );
    println!("  {} {:.6}", "min: ".dimmed(), stats.min);
    println!("  {} {:.6}", "max: ".dimmed(), stats.max);
    println!("  {} {:.6}", "mean:".dimmed(), stats.mean);

    Ok(ExitCode::SUCCESS)
}
