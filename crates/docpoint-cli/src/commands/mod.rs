//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod extract;
pub mod serve;

use std::path::Path;

use docpoint_core::{
    DocpointConfig, DocumentExtractor, ExtractionMode, FieldRequest, FieldResult, Recognizer,
};
use tracing::debug;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Classify field names and apply fixed patterns
    Pattern,
    /// Score sentences by keyword overlap
    Proximity,
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pattern => ExtractionMode::Pattern,
            ModeArg::Proximity => ExtractionMode::Proximity,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Load the config named by `-c`, else the default file if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocpointConfig> {
    if let Some(path) = config_path {
        return DocpointConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path, e));
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(DocpointConfig::from_file(&default_path)?)
    } else {
        Ok(DocpointConfig::default())
    }
}

pub fn build_extractor(config: &DocpointConfig) -> DocumentExtractor {
    DocumentExtractor::from_config(config, Recognizer::load(&config.recognizer))
}

pub fn parse_fields(specs: &[String]) -> Vec<FieldRequest> {
    specs.iter().map(|spec| FieldRequest::parse_spec(spec)).collect()
}

pub fn format_results(results: &[FieldResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => format_csv(results),
        OutputFormat::Text => Ok(format_text(results)),
    }
}

fn format_csv(results: &[FieldResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["name", "value", "confidence"])?;
    for result in results {
        let confidence = result
            .confidence
            .map(|c| format!("{:.2}", c))
            .unwrap_or_default();
        wtr.write_record([result.name.as_str(), result.value.as_str(), confidence.as_str()])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(results: &[FieldResult]) -> String {
    let mut output = String::new();

    for result in results {
        let value = if result.is_found() { result.value.as_str() } else { "-" };
        match result.confidence {
            Some(confidence) => {
                output.push_str(&format!("{}: {} ({:.2})\n", result.name, value, confidence))
            }
            None => output.push_str(&format!("{}: {}\n", result.name, value)),
        }
    }

    output
}
