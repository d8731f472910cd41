// crates/governance-gate-core/src/core/gate.rs
// ============================================================================
// Module: Gate Results and Governance Score
// Description: Per-gate evaluation results and the assembled governance score.
// Purpose: Provide the immutable output shapes of a gate evaluation cycle.
// Dependencies: crate::core::{identifiers, status}, serde, time
// ============================================================================

//! ## Overview
//! A [`GateResult`] is produced fresh on every evaluation and never patched.
//! Evidence entries mirror what the rule inspected (booleans, counts, text,
//! or string lists); KPI maps carry named numeric indicators. The assembled
//! [`GovernanceScore`] combines the unweighted mean, the weight-normalized
//! score, and a pass/partial/pending/fail summary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::identifiers::GateId;
use crate::core::identifiers::TenantId;
use crate::core::status::GateStatus;

// ============================================================================
// SECTION: Evidence Values
// ============================================================================

/// Evidence entry recorded by a gate rule.
///
/// # Invariants
/// - Serializes untagged so evidence maps read naturally on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidenceValue {
    /// Boolean evidence flag.
    Flag(bool),
    /// Numeric evidence value.
    Number(f64),
    /// Free-text evidence value.
    Text(String),
    /// String-list evidence value.
    List(Vec<String>),
}

impl From<bool> for EvidenceValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for EvidenceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for EvidenceValue {
    fn from(value: usize) -> Self {
        #[allow(
            clippy::cast_precision_loss,
            reason = "evidence counts are far below f64 integer precision"
        )]
        Self::Number(value as f64)
    }
}

impl From<u64> for EvidenceValue {
    fn from(value: u64) -> Self {
        #[allow(
            clippy::cast_precision_loss,
            reason = "evidence counts are far below f64 integer precision"
        )]
        Self::Number(value as f64)
    }
}

impl From<&str> for EvidenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for EvidenceValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Evidence map keyed by stable evidence names.
pub type EvidenceMap = BTreeMap<String, EvidenceValue>;

/// KPI map keyed by stable indicator names.
pub type KpiMap = BTreeMap<String, f64>;

// ============================================================================
// SECTION: Gate Results
// ============================================================================

/// Result of one gate rule evaluation.
///
/// # Invariants
/// - Immutable; produced fresh on every evaluation cycle.
/// - `status` is derived from `score` via the shared status ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    /// Gate title.
    pub name: String,
    /// Derived gate status.
    pub status: GateStatus,
    /// Gate score in [0,100].
    pub score: f64,
    /// Evidence inspected by the rule.
    pub evidence: EvidenceMap,
    /// Key performance indicators recorded by the rule.
    pub kpis: KpiMap,
    /// Evaluation timestamp.
    #[serde(rename = "evaluatedAt", with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
}

// ============================================================================
// SECTION: Governance Score
// ============================================================================

/// Summary counts across evaluated gates.
///
/// # Invariants
/// - `total_gates` equals the sum of the four status counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSummary {
    /// Total number of evaluated gates.
    pub total_gates: usize,
    /// Number of passing gates.
    pub passed: usize,
    /// Number of partial gates.
    pub partial: usize,
    /// Number of pending gates.
    pub pending: usize,
    /// Number of failed gates.
    pub failed: usize,
}

impl GateSummary {
    /// Derives summary counts from a gate result map.
    #[must_use]
    pub fn from_gates(gates: &BTreeMap<GateId, GateResult>) -> Self {
        let count = |status: GateStatus| gates.values().filter(|g| g.status == status).count();
        Self {
            total_gates: gates.len(),
            passed: count(GateStatus::Pass),
            partial: count(GateStatus::Partial),
            pending: count(GateStatus::Pending),
            failed: count(GateStatus::Fail),
        }
    }
}

/// Assembled governance score for one evaluation cycle.
///
/// # Invariants
/// - `overall_score` and `weighted_score` are rounded to 2 decimals.
/// - Immutable; a new score is assembled each cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceScore {
    /// Unweighted mean of all gate scores.
    pub overall_score: f64,
    /// Weight-normalized score.
    pub weighted_score: f64,
    /// Gate results keyed by gate identifier.
    pub gates: BTreeMap<GateId, GateResult>,
    /// Status summary counts.
    pub summary: GateSummary,
    /// Score schema version tag.
    pub version: String,
    /// Generation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

/// Governance score tagged with the tenant it was computed for.
///
/// # Invariants
/// - `score` is computed exactly as the untagged variant; the tag is
///   presentation metadata only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantGovernanceScore {
    /// Tenant the score was computed for.
    pub tenant_id: TenantId,
    /// The governance score.
    #[serde(flatten)]
    pub score: GovernanceScore,
}
