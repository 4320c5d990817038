use super::engine::{ProposalRule, ProposalText};
use super::specs::FlagSpec;
use super::suggestions::{EVAL_MISSING_EXPLANATION, EVAL_MISSING_SUGGESTION};
use crate::config::AnalyzerConfig;
use crate::types::Finding;

/// Sentences quoted as context when no evaluation language exists
const CONTEXT_SENTENCES: usize = 2;

// EvaluationMissingRule - flags a proposal that never talks about how
// success will be measured. Searches the whole raw text, not sentences.
pub struct EvaluationMissingRule<'a> {
    spec: &'a FlagSpec,
    keywords: &'a [String],
}

impl<'a> EvaluationMissingRule<'a> {
    pub fn new(spec: &'a FlagSpec, config: &'a AnalyzerConfig) -> Self {
        Self {
            spec,
            keywords: &config.evaluation_keywords,
        }
    }

    fn mentions_evaluation(&self, raw: &str) -> bool {
        super::contains_any(&raw.to_lowercase(), self.keywords)
    }
}

impl<'a> ProposalRule for EvaluationMissingRule<'a> {
    fn evaluate(&self, text: &ProposalText<'_>) -> Option<Finding> {
        if self.mentions_evaluation(text.raw) {
            return None;
        }

        let excerpt = text
            .sentences
            .iter()
            .take(CONTEXT_SENTENCES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        // Canned text instead of the generic explanation and suggestion
        Some(Finding {
            explanation: EVAL_MISSING_EXPLANATION.to_string(),
            suggestion: EVAL_MISSING_SUGGESTION.to_string(),
            ..self.spec.to_finding(excerpt)
        })
    }

    fn id(&self) -> &str {
        self.spec.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::specs::{find_spec, EVAL_MISSING};
    use crate::segmenter::segment;
    use crate::types::Severity;

    fn evaluate(raw: &str) -> Option<Finding> {
        let config = AnalyzerConfig::default();
        let spec = find_spec(EVAL_MISSING).unwrap();
        let sentences = segment(raw);
        EvaluationMissingRule::new(spec, &config).evaluate(&ProposalText::new(raw, &sentences))
    }

    #[test]
    fn test_keywords_suppress_flag() {
        for raw in [
            "We track a METRIC.",
            "Outcomes are reported.",
            "Against the baseline.",
            "Measurement plan attached.",
            "Success is likely.",
            "An evaluation follows.",
        ] {
            assert!(evaluate(raw).is_none(), "{raw}");
        }
    }

    #[test]
    fn test_excerpt_is_first_two_sentences() {
        let finding = evaluate("One here. Two here. Three here.").unwrap();
        assert_eq!(finding.excerpt, "One here. Two here.");
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.title, "Missing evaluation metrics");
        assert_eq!(finding.explanation, EVAL_MISSING_EXPLANATION);
        assert_eq!(finding.suggestion, EVAL_MISSING_SUGGESTION);
    }

    #[test]
    fn test_single_sentence_and_empty_text() {
        assert_eq!(evaluate("Only one").unwrap().excerpt, "Only one");
        assert_eq!(evaluate("").unwrap().excerpt, "");
    }

    #[test]
    fn test_evaluate_alone_does_not_count() {
        // "evaluate" is not one of the evaluation keywords
        assert!(evaluate("We evaluate things.").is_some());
    }
}
