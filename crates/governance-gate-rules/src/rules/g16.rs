// crates/governance-gate-rules/src/rules/g16.rs
// ============================================================================
// Module: G16 CI Evidence
// Description: Verifies signed manifests, per-file hashes, and receipt status.
// Purpose: Validate the CI/CD evidence chain end to end.
// Dependencies: crate::rules, governance-gate-core, time
// ============================================================================

//! ## Overview
//! G16 awards points for a factory-signed manifest (+30), complete per-file
//! hashes (+25 or a proportional floor), echo-root presence (+25), and
//! receipt status (verified +20, received +15, pending +10). The
//! upload-to-verify latency KPI falls back to a 1200 ms estimate when the
//! verification timestamp is missing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use governance_gate_core::EvidenceMap;
use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use governance_gate_core::KpiMap;
use governance_gate_core::core::proofs::ReceiptStatus;

use crate::context::GateEvaluationContext;
use crate::rules::GateRule;
use crate::rules::finish;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default verification latency estimate in milliseconds.
const DEFAULT_VERIFICATION_LATENCY_MS: f64 = 1200.0;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// G16 CI evidence rule.
pub struct CiEvidence;

#[async_trait]
impl GateRule for CiEvidence {
    fn id(&self) -> GateId {
        GateId::G16
    }

    fn description(&self) -> &'static str {
        "Validates CI/CD evidence chain with signed manifests and verification"
    }

    async fn evaluate(&self, context: &GateEvaluationContext) -> GateResult {
        let mut evidence = EvidenceMap::new();
        let mut kpis = KpiMap::new();
        let mut score = 0.0;

        evidence.insert("hmacSignedManifest".into(), false.into());
        evidence.insert("perFileHashes".into(), false.into());
        evidence.insert("echoRootVerify".into(), false.into());
        evidence.insert("receiptProof".into(), false.into());
        kpis.insert("ciUploadSuccessRate".into(), 0.0);
        kpis.insert("verificationLatencyMs".into(), 0.0);

        if let Some(receipt) = &context.tower_receipt_proof {
            let factory_signed = receipt
                .signatures
                .as_ref()
                .is_some_and(|sigs| sigs.factory_signature.is_some());
            if factory_signed {
                evidence.insert("hmacSignedManifest".into(), true.into());
                score += 30.0;
            }

            let files = &receipt.manifest.files;
            if !files.is_empty() {
                let hashed = files.iter().filter(|f| f.has_complete_hash()).count();
                let complete = hashed == files.len();
                evidence.insert("perFileHashes".into(), complete.into());
                evidence.insert("fileCount".into(), files.len().into());
                if complete {
                    score += 25.0;
                } else {
                    #[allow(
                        clippy::cast_precision_loss,
                        reason = "manifest file counts are far below f64 integer precision"
                    )]
                    let proportional = ((hashed as f64 / files.len() as f64) * 25.0).floor();
                    score += proportional;
                }
            }

            if receipt.echo_root.is_some() {
                evidence.insert("echoRootVerify".into(), true.into());
                score += 25.0;
            }

            match receipt.status {
                ReceiptStatus::Verified => {
                    evidence.insert("receiptProof".into(), true.into());
                    kpis.insert("ciUploadSuccessRate".into(), 100.0);
                    score += 20.0;
                }
                ReceiptStatus::Received => {
                    evidence.insert("receiptProof".into(), true.into());
                    kpis.insert("ciUploadSuccessRate".into(), 80.0);
                    score += 15.0;
                }
                ReceiptStatus::Pending => {
                    kpis.insert("ciUploadSuccessRate".into(), 50.0);
                    score += 10.0;
                }
                ReceiptStatus::Rejected => {}
            }

            let latency_ms = receipt.verified_at.map_or(DEFAULT_VERIFICATION_LATENCY_MS, |verified| {
                let latency = verified - receipt.uploaded_at;
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "latencies are far below f64 integer precision"
                )]
                let millis = latency.whole_milliseconds() as f64;
                millis
            });
            kpis.insert("verificationLatencyMs".into(), latency_ms);
        }

        finish(self.id(), score, evidence, kpis)
    }
}
