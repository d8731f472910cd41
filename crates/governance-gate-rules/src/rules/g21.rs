// crates/governance-gate-rules/src/rules/g21.rs
// ============================================================================
// Module: G21 Genesis Certification
// Description: Scores closure-package completeness and co-sign evidence.
// Purpose: Validate master closure, public genesis, and tower co-sign.
// Dependencies: crate::rules, governance-gate-core
// ============================================================================

//! ## Overview
//! G21 awards the master closure package when both proofs are present (+40,
//! or +20 for either alone), public genesis when the receipt is verified
//! (+30), and tower co-sign when both signatures exist (+30). The
//! certification-progress KPI is the fraction of those three present.

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
// SECTION: Rule
// ============================================================================

/// G21 genesis certification rule.
pub struct GenesisCertification;

#[async_trait]
impl GateRule for GenesisCertification {
    fn id(&self) -> GateId {
        GateId::G21
    }

    fn description(&self) -> &'static str {
        "Ensures genesis certification with master closure and tower co-sign"
    }

    async fn evaluate(&self, context: &GateEvaluationContext) -> GateResult {
        let mut evidence = EvidenceMap::new();
        let mut kpis = KpiMap::new();
        let mut score = 0.0;

        let has_key_proof = context.key_rotation_proof.is_some();
        let has_tower_proof = context.tower_receipt_proof.is_some();

        let master_closure = has_key_proof && has_tower_proof;
        if master_closure {
            score += 40.0;
        } else if has_key_proof || has_tower_proof {
            score += 20.0;
        }

        let public_genesis = context
            .tower_receipt_proof
            .as_ref()
            .is_some_and(|receipt| receipt.status == ReceiptStatus::Verified);
        if public_genesis {
            score += 30.0;
        }

        let tower_co_sign = context
            .tower_receipt_proof
            .as_ref()
            .and_then(|receipt| receipt.signatures.as_ref())
            .is_some_and(|sigs| {
                sigs.tower_signature.is_some() && sigs.factory_signature.is_some()
            });
        if tower_co_sign {
            score += 30.0;
        }

        evidence.insert("masterClosurePackage".into(), master_closure.into());
        evidence.insert("publicGenesis".into(), public_genesis.into());
        evidence.insert("towerCoSign".into(), tower_co_sign.into());

        let certified = [master_closure, public_genesis, tower_co_sign]
            .iter()
            .filter(|present| **present)
            .count();
        #[allow(
            clippy::cast_precision_loss,
            reason = "feature counts are far below f64 integer precision"
        )]
        let progress = ((certified as f64 / 3.0) * 100.0).round();
        kpis.insert("certificationProgress".into(), progress);

        finish(self.id(), score, evidence, kpis)
    }
}
