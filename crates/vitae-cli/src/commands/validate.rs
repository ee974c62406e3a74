//! Validate command - check a record file against the resume schema.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use vitae_core::validate_json;

use super::read_input;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Record file (JSON)
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let data = read_input(&args.input)?;
    let value: serde_json::Value = serde_json::from_slice(&data)
        .map_err(|e| anyhow::anyhow!("{} is not valid JSON: {}", args.input.display(), e))?;

    debug!("Validating {}", args.input.display());

    match validate_json(&value) {
        Ok(()) => {
            println!(
                "{} {} conforms to the resume schema",
                style("✓").green(),
                args.input.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", style("Schema violations:").yellow());
            for violation in &e.violations {
                eprintln!("  - {}", violation);
            }
            anyhow::bail!(
                "{} has {} schema violation(s)",
                args.input.display(),
                e.violations.len()
            );
        }
    }
}
