use super::contains_any;
use super::engine::ProposalText;
use crate::config::{AnalyzerConfig, StrengthsConfig};
use crate::segmenter::word_count;
use crate::types::Strength;

pub const STRENGTH_TITLE: &str = "Clear societal impact";
pub const STRENGTH_NOTE: &str = "Impact sentence is specific and relevant.";

// StrengthScanner - one Strength per sufficiently long sentence that names a
// concrete societal benefit. No deduplication.
pub struct StrengthScanner<'a> {
    config: &'a StrengthsConfig,
}

impl<'a> StrengthScanner<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self {
            config: &config.strengths,
        }
    }

    fn is_strength(&self, sentence: &str) -> bool {
        word_count(sentence) > self.config.min_words
            && contains_any(&sentence.to_lowercase(), &self.config.keywords)
    }

    pub fn scan(&self, text: &ProposalText<'_>) -> Vec<Strength> {
        text.sentences
            .iter()
            .filter(|sentence| self.is_strength(sentence))
            .map(|sentence| Strength {
                title: STRENGTH_TITLE.to_string(),
                excerpt: sentence.clone(),
                note: STRENGTH_NOTE.to_string(),
            })
            .collect()
    }
}
