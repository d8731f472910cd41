// crates/governance-gate-rules/src/config.rs
// ============================================================================
// Module: Evaluation Configuration
// Description: Validated configuration for gate evaluation runs.
// Purpose: Pin the proof directory and score version for an evaluation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Evaluation configuration is small by design: a proof directory and the
//! score schema version to stamp on assembled scores. Validation rejects
//! empty values up front so evaluation code never has to re-check them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::aggregate::SCORE_VERSION;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The proof directory is empty.
    #[error("proof directory must not be empty")]
    EmptyProofDir,
    /// The version tag is empty.
    #[error("score version must not be empty")]
    EmptyVersion,
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for one evaluation run.
///
/// # Invariants
/// - `proof_dir` and `version` are non-empty once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Directory holding the proof documents.
    pub proof_dir: PathBuf,
    /// Score schema version stamped on assembled scores.
    #[serde(default = "default_version")]
    pub version: String,
}

/// Returns the default score schema version.
fn default_version() -> String {
    SCORE_VERSION.to_string()
}

impl EvaluationConfig {
    /// Creates a configuration with the default score version.
    #[must_use]
    pub fn new(proof_dir: impl Into<PathBuf>) -> Self {
        Self { proof_dir: proof_dir.into(), version: default_version() }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error when the proof directory or version is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proof_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyProofDir);
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        Ok(())
    }
}
