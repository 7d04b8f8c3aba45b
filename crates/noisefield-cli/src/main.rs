//! Noisefield CLI - sample, render and inspect simplex noise fields.

use clap::{Parser, Subcommand};
use noisefield::Dimensions;
use std::process::ExitCode;

use noisefield_cli::commands;
use noisefield_cli::commands::render::RenderOverrides;

/// Noisefield - deterministic simplex noise from the command line
#[derive(Parser)]
#[command(name = "noisefield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the field at a single point (1 to 4 coordinates)
    Sample {
        /// Permutation seed (0 or absent selects the reference table)
        #[arg(long)]
        seed: Option<u64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Coordinates; one value samples the x axis of the 2D field
        #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
        coords: Vec<f64>,
    },

    /// Render a field slice to a grayscale PNG
    Render {
        /// JSON settings file (fields not given use defaults)
        #[arg(short, long)]
        config: Option<String>,

        /// Permutation seed
        #[arg(long)]
        seed: Option<u64>,

        /// Field dimensionality
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
        dimensions: Option<u8>,

        /// World units per pixel
        #[arg(long)]
        frequency: Option<f64>,

        /// Number of fractal octaves
        #[arg(long)]
        octaves: Option<u8>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the base permutation table for a seed
    Table {
        /// Permutation seed (0 or absent selects the reference table)
        #[arg(long)]
        seed: Option<u64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Sample random points and report min, max and mean
    Stats {
        /// Permutation and sampling seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Field dimensionality
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=4))]
        dimensions: u8,

        /// Number of points to evaluate
        #[arg(long, default_value_t = 10_000)]
        samples: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Map a validated `--dimensions` value to the settings enum.
fn dimensions_arg(count: u8) -> anyhow::Result<Dimensions> {
    Dimensions::from_count(usize::from(count))
        .ok_or_else(|| anyhow::anyhow!("dimensions must be 2, 3 or 4, got {}", count))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sample { seed, json, coords } => commands::sample::run(seed, &coords, json),
        Commands::Render {
            config,
            seed,
            dimensions,
            frequency,
            octaves,
            width,
            height,
            out,
            json,
        } => dimensions.map(dimensions_arg).transpose().and_then(|dimensions| {
            let overrides = RenderOverrides {
                seed,
                dimensions,
                frequency,
                octaves,
                width,
                height,
            };
            commands::render::run(config.as_deref(), &overrides, &out, json)
        }),
        Commands::Table { seed, json } => commands::table::run(seed, json),
        Commands::Stats {
            seed,
            dimensions,
            samples,
            json,
        } => dimensions_arg(dimensions)
            .and_then(|dimensions| commands::stats::run(seed, dimensions, samples, json)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
