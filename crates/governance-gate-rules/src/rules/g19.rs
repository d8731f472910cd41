// crates/governance-gate-rules/src/rules/g19.rs
// ============================================================================
// Module: G19 Ledger Automation
// Description: Scores automated ledger operations and seal verification.
// Purpose: Validate factory seals, echo-root verification, and CI coverage.
// Dependencies: crate::rules, governance-gate-core
// ============================================================================

//! ## Overview
//! G19 awards points for a signed factory seal (+35), a verified tower echo
//! root (+35), and CI workflow integration (+20, assumed configured). The
//! automation-coverage KPI is the fraction of those three features present,
//! with a +10 bonus at full coverage.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use governance_gate_core::EvidenceMap;
use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use governance_gate_core::KpiMap;

use crate::context::GateEvaluationContext;
use crate::rules::GateRule;
use crate::rules::finish;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// G19 ledger automation rule.
pub struct LedgerAutomation;

#[async_trait]
impl GateRule for LedgerAutomation {
    fn id(&self) -> GateId {
        GateId::G19
    }

    fn description(&self) -> &'static str {
        "Ensures automated ledger operations with factory seals and CI integration"
    }

    async fn evaluate(&self, context: &GateEvaluationContext) -> GateResult {
        let mut evidence = EvidenceMap::new();
        let mut kpis = KpiMap::new();
        let mut score = 0.0;

        let signed_factory_seal = context
            .tower_receipt_proof
            .as_ref()
            .and_then(|receipt| receipt.signatures.as_ref())
            .is_some_and(|sigs| sigs.factory_signature.is_some());
        let tower_echo_root_verify = context
            .tower_receipt_proof
            .as_ref()
            .is_some_and(|receipt| receipt.echo_root.is_some());
        // Workflow configuration ships with the deployment.
        let ci_workflow = true;

        evidence.insert("signedFactorySeal".into(), signed_factory_seal.into());
        evidence.insert("towerEchoRootVerify".into(), tower_echo_root_verify.into());
        evidence.insert("ciWorkflow".into(), ci_workflow.into());

        if signed_factory_seal {
            score += 35.0;
        }
        if tower_echo_root_verify {
            score += 35.0;
        }
        if ci_workflow {
            score += 20.0;
        }

        let automated = [signed_factory_seal, tower_echo_root_verify, ci_workflow]
            .iter()
            .filter(|present| **present)
            .count();
        #[allow(
            clippy::cast_precision_loss,
            reason = "feature counts are far below f64 integer precision"
        )]
        let coverage = ((automated as f64 / 3.0) * 100.0).round();
        kpis.insert("automationCoverage".into(), coverage);

        if automated == 3 {
            score += 10.0;
        }

        finish(self.id(), score, evidence, kpis)
    }
}
