//! Schema command - print the resume record JSON Schema.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use vitae_core::resume_json_schema;

/// Arguments for the schema command.
#[derive(Args)]
pub struct SchemaArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = serde_json::to_string_pretty(&resume_json_schema())?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &schema)?;
        eprintln!(
            "{} Schema written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", schema);
    }

    Ok(())
}
