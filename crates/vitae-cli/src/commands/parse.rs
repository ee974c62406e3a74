//! Parse command - turn one resume file into a profile record.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info};

use vitae_core::{
    openai_backend, ParseOptions, PdfExtractor, PlainTextExtractor, Refiner, ResumePipeline,
    TextExtractor, VitaeConfig,
};

use super::{load_config, read_input};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF, or plain text with a .txt extension)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip model refinement and return the heuristic record
    #[arg(long)]
    no_refine: bool,

    /// Skip schema validation of the final record
    #[arg(long)]
    no_validate: bool,

    /// Storage location of the source document, written to resume.resumeUrl
    #[arg(long)]
    resume_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl ParseArgs {
    fn options(&self, config: &VitaeConfig) -> ParseOptions {
        let mut options = config.pipeline;
        if self.no_refine {
            options = options.with_refinement(false);
        }
        if self.no_validate {
            options = options.with_validation(false);
        }
        options
    }
}

fn text_extractor(args: &ParseArgs, config: &VitaeConfig) -> anyhow::Result<Arc<dyn TextExtractor>> {
    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Ok(Arc::new(PdfExtractor::from_config(&config.pdf))),
        "txt" | "text" => Ok(Arc::new(PlainTextExtractor)),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

fn spinner() -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let options = args.options(&config);

    let data = read_input(&args.input)?;
    let extractor = text_extractor(&args, &config)?;

    info!("Processing file: {}", args.input.display());

    let refiner = if options.use_refinement {
        let backend = openai_backend(&config.refinement).map_err(|e| {
            anyhow::anyhow!("{}. Set the key or pass --no-refine to skip refinement.", e)
        })?;
        Some(Refiner::from_config(backend, &config.refinement))
    } else {
        None
    };

    let pipeline = ResumePipeline::from_config(&config, refiner).with_text_extractor(extractor);

    let pb = spinner()?;
    pb.set_message(if options.use_refinement {
        "Extracting and refining resume..."
    } else {
        "Extracting resume..."
    });

    let record = match pipeline.parse(&data, options).await {
        Ok(record) => {
            pb.finish_and_clear();
            record
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Parse of {} failed ({})", args.input.display(), e.kind());
            anyhow::bail!("Failed to parse {}: {}", args.input.display(), e);
        }
    };

    let record = match args.resume_url {
        Some(ref url) => record.with_resume_url(url.clone()),
        None => record,
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    let empty = record.empty_sections();
    if !empty.is_empty() {
        eprintln!(
            "{} Empty sections: {}",
            style("ℹ").blue(),
            empty.join(", ")
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
