//! Render command implementation
//!
//! Rasterises a slice of the field to an 8-bit grayscale PNG. Settings come
//! from an optional JSON config file, then individual flags override fields.

use anyhow::{Context, Result};
use colored::Colorize;
use noisefield::png::PngConfig;
use noisefield::{render_field, save_png, Dimensions, FieldSettings};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, RenderOutput};

/// Command-line overrides applied on top of the loaded settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOverrides {
    pub seed: Option<u64>,
    pub dimensions: Option<Dimensions>,
    pub frequency: Option<f64>,
    pub octaves: Option<u8>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl RenderOverrides {
    fn apply(&self, settings: &mut FieldSettings) {
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(dimensions) = self.dimensions {
            settings.dimensions = dimensions;
        }
        if let Some(frequency) = self.frequency {
            settings.frequency = frequency;
        }
        if let Some(octaves) = self.octaves {
            settings.octaves = octaves;
        }
        if let Some(width) = self.width {
            settings.resolution[0] = width;
        }
        if let Some(height) = self.height {
            settings.resolution[1] = height;
        }
    }
}

/// Load settings from `config` (or defaults) and apply `overrides`.
pub fn load_settings(config: Option<&str>, overrides: &RenderOverrides) -> Result<FieldSettings> {
    let mut settings = match config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            serde_json::from_str::<FieldSettings>(&content)
                .with_context(|| format!("Failed to parse config: {}", path))?
        }
        None => FieldSettings::default(),
    };
    overrides.apply(&mut settings);
    settings
        .validate()
        .context("Invalid render settings")?;
    Ok(settings)
}

/// Render `settings` and write the PNG to `out`.
pub fn render_to_file(settings: &FieldSettings, out: &Path) -> Result<RenderOutput> {
    let buffer = render_field(settings).context("Failed to render field")?;
    let hash = save_png(&buffer, out, &PngConfig::default())
        .with_context(|| format!("Failed to write PNG: {}", out.display()))?;

    Ok(RenderOutput {
        path: out.display().to_string(),
        width: buffer.width,
        height: buffer.height,
        dimensions: settings.dimensions.count(),
        seed: settings.seed,
        octaves: settings.octaves,
        hash,
    })
}

/// Run the render command
///
/// # Arguments
/// * `config` - Optional path to a JSON settings file
/// * `overrides` - Per-field overrides from flags
/// * `out` - Output PNG path
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config: Option<&str>,
    overrides: &RenderOverrides,
    out: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let settings = load_settings(config, overrides)?;

    if !json_output {
        let [width, height] = settings.resolution;
        println!(
            "{} {}x{} {}D field (seed {}, {} octave(s))",
            "Rendering:".cyan().bold(),
            width,
            height,
            settings.dimensions.count(),
            settings.seed,
            settings.octaves
        );
    }

    let output = render_to_file(&settings, Path::new(out))?;

    if json_output {
        print_json(&output)?;
    } else {
        println!("{} Wrote {}", "SUCCESS".green().bold(), output.path);
        println!("  {} {}", "blake3:".dimmed(), output.hash);
    }

    Ok(ExitCode::SUCCESS)
}
