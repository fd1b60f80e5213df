//! Extract command - pull data points from a single PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use docpoint_core::ExtractionMode;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{ModeArg, OutputFormat, build_extractor, format_results, load_config, parse_fields};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Field to extract, as NAME or NAME=DESCRIPTION (repeatable)
    #[arg(short = 'f', long = "field", value_name = "NAME[=DESCRIPTION]", required = true)]
    fields: Vec<String>,

    /// Matching mode (default: extraction.default_mode)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let mode = args
        .mode
        .map(ExtractionMode::from)
        .unwrap_or(config.extraction.default_mode);
    let fields = parse_fields(&args.fields);

    info!(
        "Extracting {} fields from {} ({} mode)",
        fields.len(),
        args.input.display(),
        mode
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Reading PDF...");

    let extractor = build_extractor(&config);
    let data = fs::read(&args.input)?;

    pb.set_message("Matching fields...");
    let results = extractor.extract(mode, &data, &fields);
    pb.finish_and_clear();
    let results = results?;

    let output = format_results(&results, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    info!(
        "Found {}/{} fields in {:?}",
        results.iter().filter(|r| r.is_found()).count(),
        results.len(),
        start.elapsed()
    );

    Ok(())
}
