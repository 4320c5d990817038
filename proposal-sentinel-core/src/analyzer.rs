use crate::config::AnalyzerConfig;
use crate::rules::{ProposalText, RuleEngine};
use crate::segmenter::{segment, word_count};
use crate::types::{Report, ReportMeta};

/// Entry point for proposal analysis.
///
/// Holds only an immutable configuration, so one analyzer can serve any
/// number of concurrent callers. Every call builds its own report.
#[derive(Debug, Clone, Default)]
pub struct ProposalAnalyzer {
    config: AnalyzerConfig,
}

impl ProposalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Text in, report out. Never fails.
    pub fn analyze(&self, text: &str) -> Report {
        // STEP 1: Segment once; every rule reads the same sentences
        let sentences = segment(text);
        let proposal = ProposalText::new(text, &sentences);

        // STEP 2: Flag rules, in table order
        let engine = RuleEngine::new(&self.config);
        let flags = engine.apply_rules(&proposal);

        // STEP 3: Strengths, in sentence order
        let strengths = engine.detect_strengths(&proposal);

        // STEP 4: Metadata
        let meta = ReportMeta {
            word_count: word_count(text),
            title_guess: sentences.first().cloned().unwrap_or_default(),
        };

        tracing::debug!(
            sentences = sentences.len(),
            flags = flags.len(),
            strengths = strengths.len(),
            "analysis complete"
        );

        Report {
            flags,
            strengths,
            meta,
        }
    }
}

/// Analyze with the built-in configuration.
pub fn analyze(text: &str) -> Report {
    ProposalAnalyzer::new().analyze(text)
}
