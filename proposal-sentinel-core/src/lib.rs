// Proposal Sentinel Core Library
//
// Scans free-form proposal text for heuristic red flags and strengths.
// Main interface: text in, Report out.

pub mod analyzer;
pub mod config;
pub mod render;
pub mod rules;
pub mod segmenter;
pub mod serialization;
pub mod types;

// Re-export main types and functions for easy use
pub use types::*;
pub use analyzer::{analyze, ProposalAnalyzer};
pub use config::{AnalyzerConfig, ConfigError};
pub use render::render;
pub use rules::{flag_specs, FlagSpec};
pub use segmenter::segment;
