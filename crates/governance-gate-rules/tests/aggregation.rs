// crates/governance-gate-rules/tests/aggregation.rs
// ============================================================================
// Module: Score Aggregation Tests
// Description: Verifies score assembly, health verdicts, and formatting.
// ============================================================================
//! ## Overview
//! Exercises the two aggregate scores on synthetic result maps, the
//! critical-gate health verdict, configuration validation, and the display
//! formatting bands.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;

use governance_gate_core::ALL_GATE_IDS;
use governance_gate_core::EvidenceMap;
use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use governance_gate_core::GateStatus;
use governance_gate_core::KpiMap;
use governance_gate_core::TenantId;
use governance_gate_rules::EvaluationConfig;
use governance_gate_rules::SCORE_VERSION;
use governance_gate_rules::assemble_governance_score;
use governance_gate_rules::compute_governance_score;
use governance_gate_rules::compute_tenant_governance_score;
use governance_gate_rules::format_score;
use governance_gate_rules::governance_health;
use time::OffsetDateTime;

fn result(score: f64) -> GateResult {
    GateResult {
        name: "Gate".to_string(),
        status: GateStatus::from_score(score),
        score,
        evidence: EvidenceMap::new(),
        kpis: KpiMap::new(),
        evaluated_at: OffsetDateTime::from_unix_timestamp(1_756_500_000).unwrap(),
    }
}

fn uniform_map(score: f64) -> BTreeMap<GateId, GateResult> {
    ALL_GATE_IDS.iter().map(|id| (*id, result(score))).collect()
}

#[test]
fn empty_map_yields_zero_scores() {
    let score = assemble_governance_score(BTreeMap::new());
    assert_eq!(score.overall_score, 0.0);
    assert_eq!(score.weighted_score, 0.0);
    assert_eq!(score.summary.total_gates, 0);
    assert_eq!(score.version, SCORE_VERSION);
}

#[test]
fn uniform_scores_agree_across_both_aggregates() {
    let score = assemble_governance_score(uniform_map(80.0));
    assert_eq!(score.overall_score, 80.0);
    // Weights sum to 1.0, so a uniform map weighted-averages to the same value.
    assert_eq!(score.weighted_score, 80.0);
    assert_eq!(score.summary.total_gates, 9);
    assert_eq!(score.summary.partial, 9);
}

#[test]
fn weighted_score_respects_gate_weights() {
    let mut gates = BTreeMap::new();
    gates.insert(GateId::G13, result(100.0));
    gates.insert(GateId::G14, result(50.0));

    let score = assemble_governance_score(gates);
    assert_eq!(score.overall_score, 75.0);
    // 100 * 0.12 + 50 * 0.15 over a total weight of 1.0.
    assert_eq!(score.weighted_score, 19.5);
}

#[test]
fn health_requires_score_and_critical_gates() {
    let healthy = governance_health(&assemble_governance_score(uniform_map(95.0)));
    assert!(healthy.healthy);
    assert!(healthy.critical_gates.is_empty());

    // Overall stays high but a critical gate drops to pending.
    let mut gates = uniform_map(95.0);
    gates.insert(GateId::G17, result(40.0));
    let verdict = governance_health(&assemble_governance_score(gates));
    assert!(!verdict.healthy);
    assert_eq!(verdict.critical_gates, vec![GateId::G17]);

    // A non-critical failure leaves the verdict healthy if the mean holds.
    let mut gates = uniform_map(95.0);
    gates.insert(GateId::G20, result(20.0));
    let verdict = governance_health(&assemble_governance_score(gates));
    assert!(verdict.healthy);

    // A low overall mean is unhealthy even with critical gates passing.
    let mut gates = uniform_map(95.0);
    for id in [GateId::G15, GateId::G16, GateId::G18, GateId::G19, GateId::G20, GateId::G21] {
        gates.insert(id, result(5.0));
    }
    let verdict = governance_health(&assemble_governance_score(gates));
    assert!(!verdict.healthy);
    assert!(verdict.critical_gates.is_empty());
}

#[tokio::test]
async fn full_pipeline_produces_nine_gates_from_missing_proofs() {
    // A nonexistent proof directory degrades every document to absent.
    let score = compute_governance_score("/nonexistent/proofs").await;
    assert_eq!(score.gates.len(), 9);
    assert_eq!(score.version, SCORE_VERSION);
    assert_eq!(
        score.summary.passed
            + score.summary.partial
            + score.summary.pending
            + score.summary.failed,
        9
    );
}

#[tokio::test]
async fn tenant_score_carries_tag_without_changing_score() {
    let tagged =
        compute_tenant_governance_score(TenantId::new("tenant-west"), "/nonexistent/proofs").await;
    assert_eq!(tagged.tenant_id.as_str(), "tenant-west");
    assert_eq!(tagged.score.gates.len(), 9);
}

#[test]
fn format_score_bands() {
    assert_eq!(format_score(95.0), "95% (Excellent)");
    assert_eq!(format_score(75.5), "75.5% (Good)");
    assert_eq!(format_score(50.0), "50% (Fair)");
    assert_eq!(format_score(20.0), "20% (Needs Improvement)");
}

#[test]
fn evaluation_config_validation() {
    assert!(EvaluationConfig::new("proofs").validate().is_ok());

    let empty_dir = EvaluationConfig::new("");
    assert!(empty_dir.validate().is_err());

    let empty_version =
        EvaluationConfig { proof_dir: "proofs".into(), version: "  ".to_string() };
    assert!(empty_version.validate().is_err());
}
