// crates/governance-gate-rules/src/aggregate.rs
// ============================================================================
// Module: Score Aggregation
// Description: Assembles governance scores and the simplified health check.
// Purpose: Turn per-gate results into overall, weighted, and health views.
// Dependencies: crate::context, crate::orchestrator, governance-gate-core
// ============================================================================

//! ## Overview
//! Aggregation produces two scores from one result map: the unweighted mean
//! of gate scores and the weight-normalized sum over declared gate weights.
//! Both are rounded to two decimals. The health check is a simplified view:
//! healthy requires an overall score of at least 70 and no critical gate
//! (G13, G14, G17) failing or pending.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use governance_gate_core::GateStatus;
use governance_gate_core::GateSummary;
use governance_gate_core::GovernanceScore;
use governance_gate_core::TenantGovernanceScore;
use governance_gate_core::TenantId;
use governance_gate_core::core::scoring::round2;
use time::OffsetDateTime;

use crate::context::build_evaluation_context;
use crate::orchestrator::evaluate_all_gates;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Score schema version tag.
pub const SCORE_VERSION: &str = "v2.0";

/// Gates that must not fail or remain pending for a healthy verdict.
pub const CRITICAL_GATE_IDS: [GateId; 3] = [GateId::G13, GateId::G14, GateId::G17];

// ============================================================================
// SECTION: Score Assembly
// ============================================================================

/// Computes the unweighted mean of gate scores, rounded to two decimals.
fn average_score(gates: &BTreeMap<GateId, GateResult>) -> f64 {
    if gates.is_empty() {
        return 0.0;
    }
    let sum: f64 = gates.values().map(|gate| gate.score).sum();
    #[allow(
        clippy::cast_precision_loss,
        reason = "gate counts are far below f64 integer precision"
    )]
    let mean = sum / gates.len() as f64;
    round2(mean)
}

/// Computes the weight-normalized score, rounded to two decimals.
///
/// Each gate contributes `score * weight`; the sum is divided by the total
/// declared weight so the result stays in [0,100] even if weights drift
/// from summing to one.
fn weighted_score(gates: &BTreeMap<GateId, GateResult>) -> f64 {
    let weighted_sum: f64 =
        gates.iter().map(|(id, gate)| gate.score * id.weight()).sum();
    round2(weighted_sum / GateId::total_weight())
}

/// Assembles a governance score from an already-evaluated result map.
#[must_use]
pub fn assemble_governance_score(gates: BTreeMap<GateId, GateResult>) -> GovernanceScore {
    let summary = GateSummary::from_gates(&gates);
    GovernanceScore {
        overall_score: average_score(&gates),
        weighted_score: weighted_score(&gates),
        gates,
        summary,
        version: SCORE_VERSION.to_string(),
        generated_at: OffsetDateTime::now_utc(),
    }
}

/// Builds the evidence context, evaluates all gates, and assembles the score.
pub async fn compute_governance_score(proof_dir: impl AsRef<Path>) -> GovernanceScore {
    let context = build_evaluation_context(proof_dir.as_ref()).await;
    let gates = evaluate_all_gates(&context).await;
    assemble_governance_score(gates)
}

/// Computes a governance score tagged with the tenant it was computed for.
///
/// The tag is presentation metadata; the score itself is tenant-independent.
pub async fn compute_tenant_governance_score(
    tenant_id: TenantId,
    proof_dir: impl AsRef<Path>,
) -> TenantGovernanceScore {
    let score = compute_governance_score(proof_dir).await;
    TenantGovernanceScore { tenant_id, score }
}

// ============================================================================
// SECTION: Health Check
// ============================================================================

/// Simplified governance health verdict.
///
/// # Invariants
/// - `critical_gates` lists only gates from [`CRITICAL_GATE_IDS`] whose
///   status is fail or pending.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceHealth {
    /// True when the overall score is at least 70 and no critical gate is
    /// failing or pending.
    pub healthy: bool,
    /// The overall (unweighted) score.
    pub score: f64,
    /// Critical gates currently failing or pending.
    pub critical_gates: Vec<GateId>,
}

/// Derives the simplified health verdict from a governance score.
#[must_use]
pub fn governance_health(score: &GovernanceScore) -> GovernanceHealth {
    let critical_gates: Vec<GateId> = CRITICAL_GATE_IDS
        .iter()
        .copied()
        .filter(|id| {
            score.gates.get(id).is_some_and(|gate| {
                gate.status == GateStatus::Fail || gate.status == GateStatus::Pending
            })
        })
        .collect();

    GovernanceHealth {
        healthy: score.overall_score >= 70.0 && critical_gates.is_empty(),
        score: score.overall_score,
        critical_gates,
    }
}

// ============================================================================
// SECTION: Display Formatting
// ============================================================================

/// Formats a score with its qualitative band for display.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score >= 90.0 {
        format!("{score}% (Excellent)")
    } else if score >= 70.0 {
        format!("{score}% (Good)")
    } else if score >= 50.0 {
        format!("{score}% (Fair)")
    } else {
        format!("{score}% (Needs Improvement)")
    }
}
