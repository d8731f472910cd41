// crates/governance-gate-rules/src/context.rs
// ============================================================================
// Module: Evidence Context Builder
// Description: Loads proof documents into one shared evaluation context.
// Purpose: Provide rules a read-only evidence snapshot tolerant of absence.
// Dependencies: governance-gate-core, serde, serde_json, tokio
// ============================================================================

//! ## Overview
//! Proof documents are loaded by file-name convention from a proof
//! directory. Any read or parse failure degrades that single document to
//! `None`; the context build itself never fails. This is the governing
//! failure policy for the whole evaluation subsystem: partial proof
//! availability is expected and must not prevent degraded scoring.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use governance_gate_core::AlertMetrics;
use governance_gate_core::KeyRotationProof;
use governance_gate_core::NonceStats;
use governance_gate_core::TowerReceiptProof;
use serde::de::DeserializeOwned;

// ============================================================================
// SECTION: Proof File Names
// ============================================================================

/// Key rotation proof file name.
pub const KEY_ROTATION_PROOF_FILE: &str = "security_key_rotation_v1.json";
/// Tower receipt proof file name.
pub const TOWER_RECEIPT_PROOF_FILE: &str = "tower_receipt_v1.json";
/// Optional nonce statistics file name.
pub const NONCE_STATS_FILE: &str = "nonce_stats_v1.json";
/// Optional alert metrics file name.
pub const ALERT_METRICS_FILE: &str = "alert_metrics_v1.json";

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// Immutable evidence snapshot shared read-only across all gate rules.
///
/// # Invariants
/// - All proof fields are nullable; absence is a normal, non-error state.
/// - Constructed fresh per evaluation cycle and never mutated.
#[derive(Debug, Clone)]
pub struct GateEvaluationContext {
    /// Proof directory the context was built from.
    pub proof_dir: PathBuf,
    /// Key rotation proof when available.
    pub key_rotation_proof: Option<KeyRotationProof>,
    /// Tower receipt proof when available.
    pub tower_receipt_proof: Option<TowerReceiptProof>,
    /// Nonce store statistics when available.
    pub nonce_stats: Option<NonceStats>,
    /// Alerting coverage metrics when available.
    pub alert_metrics: Option<AlertMetrics>,
}

impl GateEvaluationContext {
    /// Creates an empty context with no proofs loaded.
    #[must_use]
    pub fn empty(proof_dir: impl Into<PathBuf>) -> Self {
        Self {
            proof_dir: proof_dir.into(),
            key_rotation_proof: None,
            tower_receipt_proof: None,
            nonce_stats: None,
            alert_metrics: None,
        }
    }
}

// ============================================================================
// SECTION: Context Building
// ============================================================================

/// Reads and parses one proof document; any failure yields `None`.
async fn safe_read_proof<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = tokio::fs::read(path).await.ok()?;
    serde_json::from_slice(&content).ok()
}

/// Builds an evaluation context from a proof directory.
///
/// The four documents are read concurrently. Missing or unparseable
/// documents degrade to absent fields; the build itself never fails.
pub async fn build_evaluation_context(proof_dir: impl Into<PathBuf>) -> GateEvaluationContext {
    let proof_dir = proof_dir.into();

    let key_rotation_path = proof_dir.join(KEY_ROTATION_PROOF_FILE);
    let tower_receipt_path = proof_dir.join(TOWER_RECEIPT_PROOF_FILE);
    let nonce_stats_path = proof_dir.join(NONCE_STATS_FILE);
    let alert_metrics_path = proof_dir.join(ALERT_METRICS_FILE);

    let (key_rotation_proof, tower_receipt_proof, nonce_stats, alert_metrics) = tokio::join!(
        safe_read_proof::<KeyRotationProof>(&key_rotation_path),
        safe_read_proof::<TowerReceiptProof>(&tower_receipt_path),
        safe_read_proof::<NonceStats>(&nonce_stats_path),
        safe_read_proof::<AlertMetrics>(&alert_metrics_path),
    );

    GateEvaluationContext {
        proof_dir,
        key_rotation_proof,
        tower_receipt_proof,
        nonce_stats,
        alert_metrics,
    }
}
