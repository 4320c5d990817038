use crate::types::Report;

pub const REPORT_HEADER: &str = "Proposal Sentinel Report";

/// Human-readable rendering of a report. Pure formatting; output order is
/// exactly `report.flags` then `report.strengths`.
pub fn render(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(REPORT_HEADER.to_string());
    lines.push(format!("{}\n", "=".repeat(REPORT_HEADER.len())));
    lines.push(format!("Title guess: {}\n", report.meta.title_guess));
    lines.push(format!("Word count: {}\n", report.meta.word_count));

    lines.push("Flags:".to_string());
    if report.flags.is_empty() {
        lines.push(" - No issues detected.".to_string());
    } else {
        for flag in &report.flags {
            lines.push(format!(
                " - [{}] {}",
                flag.severity.as_str().to_uppercase(),
                flag.title
            ));
            lines.push(format!("   Excerpt: {}", flag.excerpt));
            lines.push(format!("   Suggestion: {}", flag.suggestion));
            lines.push(String::new());
        }
    }

    if !report.strengths.is_empty() {
        lines.push("\nStrengths:".to_string());
        for strength in &report.strengths {
            lines.push(format!(" - {}: {}", strength.title, strength.excerpt));
        }
    }

    lines.join("\n")
}

impl Report {
    pub fn render(&self) -> String {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Finding, ReportMeta, Severity, Strength};

    fn meta() -> ReportMeta {
        ReportMeta {
            word_count: 12,
            title_guess: "A title.".to_string(),
        }
    }

    #[test]
    fn test_render_without_flags() {
        let report = Report {
            meta: meta(),
            ..Report::default()
        };
        assert_eq!(
            render(&report),
            "Proposal Sentinel Report\n\
             ========================\n\
             \n\
             Title guess: A title.\n\
             \n\
             Word count: 12\n\
             \n\
             Flags:\n \
             - No issues detected."
        );
    }

    #[test]
    fn test_render_flags_and_strengths() {
        let report = Report {
            flags: vec![Finding {
                id: "budget_vague".to_string(),
                title: "Vague budget phrases".to_string(),
                severity: Severity::Medium,
                excerpt: "Misc costs.".to_string(),
                explanation: "unused".to_string(),
                suggestion: "Itemise.".to_string(),
            }],
            strengths: vec![Strength {
                title: "Clear societal impact".to_string(),
                excerpt: "Good sentence.".to_string(),
                note: "unused".to_string(),
            }],
            meta: meta(),
        };

        let rendered = render(&report);
        assert!(rendered.ends_with(
            "Flags:\n - [MEDIUM] Vague budget phrases\n   Excerpt: Misc costs.\n   Suggestion: Itemise.\n\n\nStrengths:\n - Clear societal impact: Good sentence."
        ));
        assert!(!rendered.contains("unused"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = crate::analyze("We will do good things.");
        assert_eq!(render(&report), render(&report.clone()));
        assert_eq!(report.render(), render(&report));
    }
}
