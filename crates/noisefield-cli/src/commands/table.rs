//! Table command implementation
//!
//! Prints the base permutation table a seed produces. Seeded tables are
//! filled by independent draws, so repeated values are expected.

use anyhow::Result;
use colored::Colorize;
use noisefield::SimplexNoise;
use std::process::ExitCode;

use super::json_output::{print_json, TableOutput};

const ROW_LEN: usize = 16;

/// Build the report for `seed` without printing it.
pub fn inspect(seed: Option<u64>) -> TableOutput {
    let noise = SimplexNoise::new(seed);
    let table = noise.permutation();
    TableOutput {
        seed: seed.unwrap_or(0),
        base: table.base().to_vec(),
        distinct: table.distinct_values(),
        bijection: table.is_bijection(),
    }
}

/// Run the table command
///
/// # Arguments
/// * `seed` - Permutation seed (absent or 0 selects the reference table)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(seed: Option<u64>, json_output: bool) -> Result<ExitCode> {
    let report = inspect(seed);

    if json_output {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    let label = if report.seed == 0 {
        "reference".to_string()
    } else {
        format!("seed {}", report.seed)
    };
    println!("{} {}", "Permutation table:".cyan().bold(), label);

    for row in report.base.chunks(ROW_LEN) {
        let line = row
            .iter()
            .map(|v| format!("{:>3}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", line);
    }

    let distinct = format!("{}/256 distinct values", report.distinct);
    if report.bijection {
        println!("{} {}", "Bijection:".green().bold(), distinct);
    } else {
        println!("{} {}", "Not a bijection:".yellow().bold(), distinct);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisefield::permutation::REFERENCE_PERMUTATION;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_report() {
        let report = inspect(None);
        assert_eq!(report.seed, 0);
        assert_eq!(report.base, REFERENCE_PERMUTATION.to_vec());
        assert_eq!(report.distinct, 256);
        assert!(report.bijection);
        assert_eq!(inspect(Some(0)), report);
    }

    #[test]
    fn test_seeded_report_repeats_values() {
        let report = inspect(Some(7));
        assert_eq!(report.base.len(), 256);
        assert!(report.distinct < 256);
        assert!(!report.bijection);
    }
}
