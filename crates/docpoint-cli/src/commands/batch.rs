//! Batch command for extracting from many PDFs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use docpoint_core::{DocumentExtractor, ExtractionMode, FieldRequest, FieldResult};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use super::{ModeArg, OutputFormat, build_extractor, format_results, load_config, parse_fields};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching input PDFs
    #[arg(required = true)]
    input: String,

    /// Field to extract, as NAME or NAME=DESCRIPTION (repeatable)
    #[arg(short = 'f', long = "field", value_name = "NAME[=DESCRIPTION]", required = true)]
    fields: Vec<String>,

    /// Matching mode (default: extraction.default_mode)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output directory (default: JSON lines on stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file written to the output directory
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    results: Option<Vec<FieldResult>>,
    error: Option<String>,
    processing_time_ms: u64,
}

/// One line of JSON lines output.
#[derive(Serialize)]
struct FileLine<'a> {
    file: String,
    results: &'a [FieldResult],
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        check_output_stems(&files)?;
        fs::create_dir_all(output_dir)?;
    }

    let mode = args
        .mode
        .map(ExtractionMode::from)
        .unwrap_or(config.extraction.default_mode);
    let fields = parse_fields(&args.fields);
    let extractor = build_extractor(&config);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = process_single_file(&path, &extractor, mode, &fields);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(fields) => results.push(ProcessResult {
                path,
                results: Some(fields),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        results: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing {} failed: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    for result in &results {
        let Some(fields) = &result.results else {
            continue;
        };

        match &args.output_dir {
            Some(output_dir) => {
                let stem = output_stem(&result.path);
                let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));

                fs::write(&output_path, format_results(fields, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
            None => {
                let line = FileLine {
                    file: result.path.display().to_string(),
                    results: fields,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn output_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
}

/// Output files are named after the input stem, so two inputs sharing a
/// stem would overwrite each other.
fn check_output_stems(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut seen: HashMap<&str, &PathBuf> = HashMap::new();

    for path in files {
        if let Some(previous) = seen.insert(output_stem(path), path) {
            anyhow::bail!(
                "{} and {} would both be written as {}.*, rename one or use separate runs",
                previous.display(),
                path.display(),
                output_stem(path)
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    extractor: &DocumentExtractor,
    mode: ExtractionMode,
    fields: &[FieldRequest],
) -> anyhow::Result<Vec<FieldResult>> {
    let data = fs::read(path)?;
    Ok(extractor.extract(mode, &data, fields)?)
}

fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "found", "requested", "processing_time_ms", "error"])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = result.processing_time_ms.to_string();

        match &result.results {
            Some(fields) => {
                let found = fields.iter().filter(|r| r.is_found()).count().to_string();
                let requested = fields.len().to_string();
                wtr.write_record([filename, "success", &found, &requested, &time, ""])?;
            }
            None => {
                let error = result.error.as_deref().unwrap_or("");
                wtr.write_record([filename, "error", "", "", &time, error])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
