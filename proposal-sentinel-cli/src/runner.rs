use anyhow::{Context, Result};
use proposal_sentinel_core::{AnalyzerConfig, ProposalAnalyzer, Report};
use std::path::PathBuf;

pub const DEFAULT_JSON_OUTPUT: &str = "report.json";
pub const DEFAULT_TEXT_OUTPUT: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub json_output: PathBuf,
    pub text_output: PathBuf,
    pub config: Option<PathBuf>,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            text_output: PathBuf::from(DEFAULT_TEXT_OUTPUT),
            config: None,
        }
    }
}

/// Read the proposal, analyze it and write both report files.
pub fn run(options: &RunOptions) -> Result<Report> {
    let text = std::fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read proposal {}", options.input.display()))?;

    let config = AnalyzerConfig::load_with_fallback(options.config.as_deref());
    if let Some(path) = &options.config {
        tracing::info!("loaded config from {}", path.display());
    }

    let report = ProposalAnalyzer::with_config(config).analyze(&text);
    tracing::info!(
        flags = report.flags.len(),
        strengths = report.strengths.len(),
        "analyzed {}",
        options.input.display()
    );

    report.save(&options.json_output, &options.text_output)?;
    Ok(report)
}
