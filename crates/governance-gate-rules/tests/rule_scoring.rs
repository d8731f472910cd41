// crates/governance-gate-rules/tests/rule_scoring.rs
// ============================================================================
// Module: Gate Rule Scoring Tests
// Description: Verifies per-rule point allotments on empty and full evidence.
// ============================================================================
//! ## Overview
//! Evaluates each of the nine rules against an empty context and against a
//! fully-populated proof fixture, asserting the exact scores, statuses, and
//! key evidence entries each configuration must produce.

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

use governance_gate_core::EvidenceValue;
use governance_gate_core::GateStatus;
use governance_gate_core::core::proofs::ActiveKey;
use governance_gate_core::core::proofs::AlertMetrics;
use governance_gate_core::core::proofs::KeyRotationProof;
use governance_gate_core::core::proofs::KeyUrgency;
use governance_gate_core::core::proofs::ManifestFile;
use governance_gate_core::core::proofs::NonceStats;
use governance_gate_core::core::proofs::ReceiptManifest;
use governance_gate_core::core::proofs::ReceiptSignatures;
use governance_gate_core::core::proofs::ReceiptStatus;
use governance_gate_core::core::proofs::RotationPolicy;
use governance_gate_core::core::proofs::TowerReceiptProof;
use governance_gate_rules::GateEvaluationContext;
use governance_gate_rules::GateRule;
use governance_gate_rules::rules::g13::Determinism;
use governance_gate_rules::rules::g14::PrivacyByDesign;
use governance_gate_rules::rules::g15::FederationCorrectness;
use governance_gate_rules::rules::g16::CiEvidence;
use governance_gate_rules::rules::g17::KeyLifecycle;
use governance_gate_rules::rules::g18::FederationRuntime;
use governance_gate_rules::rules::g19::LedgerAutomation;
use governance_gate_rules::rules::g20::Observatory;
use governance_gate_rules::rules::g21::GenesisCertification;
use time::Duration;
use time::OffsetDateTime;

fn empty_context() -> GateEvaluationContext {
    GateEvaluationContext::empty("proofs")
}

fn timestamp() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_756_500_000).unwrap()
}

fn complete_hash() -> String {
    "a".repeat(64)
}

fn full_receipt() -> TowerReceiptProof {
    TowerReceiptProof {
        receipt_id: "receipt-7781".to_string(),
        manifest_hash: Some(complete_hash()),
        echo_root: Some(complete_hash()),
        uploaded_at: timestamp(),
        verified_at: Some(timestamp() + Duration::milliseconds(800)),
        status: ReceiptStatus::Verified,
        manifest: ReceiptManifest {
            version: "v1".to_string(),
            files: vec![
                ManifestFile { path: "ledger.json".to_string(), sha256: complete_hash() },
                ManifestFile { path: "seals.json".to_string(), sha256: complete_hash() },
            ],
            merkle_root: Some(complete_hash()),
        },
        signatures: Some(ReceiptSignatures {
            factory_signature: Some("factory-sig".to_string()),
            tower_signature: Some("tower-sig".to_string()),
            tower_kid: Some("tower-key-1".to_string()),
        }),
    }
}

fn full_key_proof() -> KeyRotationProof {
    let key = |kid: &str, days: i64| ActiveKey {
        kid: kid.to_string(),
        scope: "ledger".to_string(),
        algorithm: "ed25519".to_string(),
        created_at: timestamp(),
        rotates_at: timestamp() + Duration::days(days),
        days_until_rotation: days,
        urgency: KeyUrgency::Ok,
    };
    KeyRotationProof {
        rotation_policy: Some(RotationPolicy {
            max_age_days: 90,
            warning_days: 14,
            grace_period_days: 7,
        }),
        active_keys: vec![key("key-a", 30), key("key-b", 45)],
        retired_keys: Vec::new(),
    }
}

fn full_context() -> GateEvaluationContext {
    GateEvaluationContext {
        key_rotation_proof: Some(full_key_proof()),
        tower_receipt_proof: Some(full_receipt()),
        nonce_stats: Some(NonceStats {
            active_nonces: 128,
            expired_nonces: 12,
            by_context: std::collections::BTreeMap::new(),
            replay_rate: 0.0,
        }),
        alert_metrics: Some(AlertMetrics {
            active_alerts: 1,
            critical_alerts: 0,
            warning_alerts: 1,
            alert_coverage: 90.0,
        }),
        ..empty_context()
    }
}

fn flag(result: &governance_gate_core::GateResult, key: &str) -> bool {
    matches!(result.evidence.get(key), Some(EvidenceValue::Flag(true)))
}

#[tokio::test]
async fn g13_without_receipt_falls_back_to_capability_score() {
    let result = Determinism.evaluate(&empty_context()).await;
    assert_eq!(result.score, 70.0);
    assert_eq!(result.status, GateStatus::Partial);
    assert!(flag(&result, "merkleRootComputed"));
    assert_eq!(result.kpis["digestSuccessRate"], 100.0);
}

#[tokio::test]
async fn g13_full_receipt_scores_all_checks() {
    let result = Determinism.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.status, GateStatus::Pass);
    assert!(flag(&result, "reproducibilityChecks"));
}

#[tokio::test]
async fn g13_incomplete_file_hashes_score_tiered() {
    let mut context = full_context();
    if let Some(receipt) = context.tower_receipt_proof.as_mut() {
        if let Some(file) = receipt.manifest.files.last_mut() {
            file.sha256 = "deadbeef".to_string();
        }
    }
    let result = Determinism.evaluate(&context).await;
    // 40 + 30 for root and digest; 50% hashed earns the lowest tier.
    assert_eq!(result.score, 80.0);
    assert_eq!(result.kpis["digestSuccessRate"], 50.0);
}

#[tokio::test]
async fn g14_counts_live_scrubber_patterns() {
    let result = PrivacyByDesign.evaluate(&empty_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.status, GateStatus::Pass);
    assert_eq!(result.kpis["piiPatternCount"], 12.0);
    assert_eq!(result.kpis["scrubberEffectiveness"], 100.0);
}

#[tokio::test]
async fn g15_missing_stats_assumes_replay_protection() {
    let result = FederationCorrectness.evaluate(&empty_context()).await;
    assert_eq!(result.score, 95.0);
    assert_eq!(result.status, GateStatus::Pass);
    assert!(flag(&result, "replayProtection"));
}

#[tokio::test]
async fn g15_zero_replay_rate_scores_full() {
    let result = FederationCorrectness.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["replayRate"], 0.0);
}

#[tokio::test]
async fn g16_without_receipt_fails() {
    let result = CiEvidence.evaluate(&empty_context()).await;
    assert_eq!(result.score, 0.0);
    assert_eq!(result.status, GateStatus::Fail);
}

#[tokio::test]
async fn g16_verified_receipt_scores_full_with_latency() {
    let result = CiEvidence.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["ciUploadSuccessRate"], 100.0);
    assert_eq!(result.kpis["verificationLatencyMs"], 800.0);
}

#[tokio::test]
async fn g16_unverified_receipt_uses_latency_estimate() {
    let mut context = full_context();
    if let Some(receipt) = context.tower_receipt_proof.as_mut() {
        receipt.verified_at = None;
        receipt.status = ReceiptStatus::Received;
    }
    let result = CiEvidence.evaluate(&context).await;
    assert_eq!(result.kpis["verificationLatencyMs"], 1200.0);
    assert_eq!(result.kpis["ciUploadSuccessRate"], 80.0);
}

#[tokio::test]
async fn g17_without_proof_fails() {
    let result = KeyLifecycle.evaluate(&empty_context()).await;
    assert_eq!(result.score, 0.0);
    assert_eq!(result.status, GateStatus::Fail);
    assert_eq!(result.kpis["minDaysUntilRotation"], 90.0);
}

#[tokio::test]
async fn g17_healthy_keys_score_full() {
    let result = KeyLifecycle.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["activeKeys"], 2.0);
    assert_eq!(result.kpis["criticalRotations"], 0.0);
    assert_eq!(result.kpis["minDaysUntilRotation"], 30.0);
}

#[tokio::test]
async fn g17_critical_key_reduces_health_points() {
    let mut context = full_context();
    if let Some(proof) = context.key_rotation_proof.as_mut() {
        if let Some(key) = proof.active_keys.first_mut() {
            key.urgency = KeyUrgency::Overdue;
            key.days_until_rotation = -2;
        }
    }
    let result = KeyLifecycle.evaluate(&context).await;
    // Registry 30 + policy 25 + one critical 15; negative min days earns no bonus.
    assert_eq!(result.score, 70.0);
    assert_eq!(result.kpis["criticalRotations"], 1.0);
    assert_eq!(result.kpis["minDaysUntilRotation"], -2.0);
}

#[tokio::test]
async fn g18_missing_stats_assumes_functional_store() {
    let result = FederationRuntime.evaluate(&empty_context()).await;
    assert_eq!(result.score, 95.0);
    assert_eq!(result.status, GateStatus::Pass);
}

#[tokio::test]
async fn g18_zero_replay_scores_full() {
    let result = FederationRuntime.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["uptime"], 99.9);
}

#[tokio::test]
async fn g19_without_receipt_only_ci_credit() {
    let result = LedgerAutomation.evaluate(&empty_context()).await;
    assert_eq!(result.score, 20.0);
    assert_eq!(result.status, GateStatus::Fail);
    assert_eq!(result.kpis["automationCoverage"], 33.0);
}

#[tokio::test]
async fn g19_full_automation_earns_bonus() {
    let result = LedgerAutomation.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["automationCoverage"], 100.0);
}

#[tokio::test]
async fn g20_default_alert_estimate_scores_full() {
    let result = Observatory.evaluate(&empty_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["alertCoverage"], 80.0);
}

#[tokio::test]
async fn g20_low_alert_coverage_reduces_bonus() {
    let mut context = full_context();
    if let Some(metrics) = context.alert_metrics.as_mut() {
        metrics.alert_coverage = 60.0;
    }
    let result = Observatory.evaluate(&context).await;
    assert_eq!(result.score, 95.0);
    assert_eq!(result.kpis["alertCoverage"], 60.0);
}

#[tokio::test]
async fn g21_without_proofs_fails() {
    let result = GenesisCertification.evaluate(&empty_context()).await;
    assert_eq!(result.score, 0.0);
    assert_eq!(result.kpis["certificationProgress"], 0.0);
}

#[tokio::test]
async fn g21_single_proof_scores_partial_closure() {
    let context = GateEvaluationContext {
        key_rotation_proof: Some(full_key_proof()),
        ..empty_context()
    };
    let result = GenesisCertification.evaluate(&context).await;
    assert_eq!(result.score, 20.0);
    assert!(!flag(&result, "masterClosurePackage"));
}

#[tokio::test]
async fn g21_full_certification_scores_full() {
    let result = GenesisCertification.evaluate(&full_context()).await;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kpis["certificationProgress"], 100.0);
    assert!(flag(&result, "towerCoSign"));
}
