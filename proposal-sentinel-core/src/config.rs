use crate::rules::specs::{flag_specs, is_known_rule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown rule id in config: {0}")]
    UnknownRule(String),
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_rules() -> Vec<RuleConfig> {
    flag_specs()
        .iter()
        .map(|spec| RuleConfig {
            id: spec.id.to_string(),
            enabled: true,
        })
        .collect()
}

fn default_evaluation_keywords() -> Vec<String> {
    to_strings(&[
        "measure",
        "evaluation",
        "metric",
        "baseline",
        "outcome",
        "success",
    ])
}

fn default_impact_keywords() -> Vec<String> {
    to_strings(&["impact", "benefit", "contribute", "improve", "reduce"])
}

fn default_generic_words() -> Vec<String> {
    to_strings(&["important", "significant", "meaningful"])
}

fn default_impact_min_words() -> usize {
    6
}

fn default_generic_max_words() -> usize {
    12
}

fn default_strength_keywords() -> Vec<String> {
    to_strings(&[
        "food security",
        "sustainable",
        "reduce water",
        "climate resilience",
        "novel approach",
        "innovative",
    ])
}

fn default_strength_min_words() -> usize {
    6
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    /// Rule toggles. Rules not listed here run.
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleConfig>,
    /// Words whose absence anywhere in the text triggers `eval_missing`
    #[serde(default = "default_evaluation_keywords")]
    pub evaluation_keywords: Vec<String>,
    #[serde(default)]
    pub impact: ImpactConfig,
    #[serde(default)]
    pub strengths: StrengthsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleConfig {
    /// Flag id from the built-in table
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactConfig {
    /// A sentence containing any of these is an impact sentence
    #[serde(default = "default_impact_keywords")]
    pub keywords: Vec<String>,
    /// Filler words that make a short impact sentence generic
    #[serde(default = "default_generic_words")]
    pub generic_words: Vec<String>,
    /// Impact sentences with fewer words than this are too short
    #[serde(default = "default_impact_min_words")]
    pub min_words: usize,
    /// Generic impact sentences with fewer words than this are flagged
    #[serde(default = "default_generic_max_words")]
    pub generic_max_words: usize,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            keywords: default_impact_keywords(),
            generic_words: default_generic_words(),
            min_words: default_impact_min_words(),
            generic_max_words: default_generic_max_words(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrengthsConfig {
    #[serde(default = "default_strength_keywords")]
    pub keywords: Vec<String>,
    /// Only sentences with more words than this count as strengths
    #[serde(default = "default_strength_min_words")]
    pub min_words: usize,
}

impl Default for StrengthsConfig {
    fn default() -> Self {
        Self {
            keywords: default_strength_keywords(),
            min_words: default_strength_min_words(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            evaluation_keywords: default_evaluation_keywords(),
            impact: ImpactConfig::default(),
            strengths: StrengthsConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load and validate a YAML config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("{e}; using default config");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.rules.iter().find(|rule| !is_known_rule(&rule.id)) {
            Some(rule) => Err(ConfigError::UnknownRule(rule.id.clone())),
            None => Ok(()),
        }
    }

    pub fn is_rule_enabled(&self, id: &str) -> bool {
        self.rules
            .iter()
            .find(|rule| rule.id == id)
            .map_or(true, |rule| rule.enabled)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
