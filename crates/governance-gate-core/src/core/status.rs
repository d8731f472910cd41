// crates/governance-gate-core/src/core/status.rs
// ============================================================================
// Module: Gate Status Ladder
// Description: Four-level compliance status derived from gate scores.
// Purpose: Provide the canonical score-to-status state function for all gates.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every gate derives its status through the same score ladder: 90/60/30
//! thresholds map a score in [0,100] to exactly one of pass, partial,
//! pending, or fail. Statuses are terminal for an evaluation cycle; the next
//! cycle recomputes from scratch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Gate Status
// ============================================================================

/// Compliance status of a governance gate.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - Derived exclusively through [`GateStatus::from_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    /// Gate is fully satisfied (score >= 90).
    Pass,
    /// Gate is mostly satisfied (score >= 60).
    Partial,
    /// Gate is awaiting evidence (score >= 30).
    Pending,
    /// Gate is unsatisfied (score < 30).
    Fail,
}

impl GateStatus {
    /// Derives a status from a gate score in [0,100].
    ///
    /// The ladder is total: every finite score maps to exactly one status.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Pass
        } else if score >= 60.0 {
            Self::Partial
        } else if score >= 30.0 {
            Self::Pending
        } else {
            Self::Fail
        }
    }

    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Partial => "partial",
            Self::Pending => "pending",
            Self::Fail => "fail",
        }
    }

    /// Returns the dashboard badge color for the status.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pass => "green",
            Self::Partial => "yellow",
            Self::Pending => "blue",
            Self::Fail => "red",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
