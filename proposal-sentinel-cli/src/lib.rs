// All analysis lives in proposal-sentinel-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod logging;
pub mod runner;

// Re-export core types for convenience
pub use proposal_sentinel_core::*;

// Re-export CLI utilities
pub use runner::{run, RunOptions};
