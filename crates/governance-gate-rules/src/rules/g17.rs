// crates/governance-gate-rules/src/rules/g17.rs
// ============================================================================
// Module: G17 Key Lifecycle
// Description: Scores key rotation posture from the key rotation proof.
// Purpose: Enforce registry, rotation policy, and key-health compliance.
// Dependencies: crate::rules, governance-gate-core
// ============================================================================

//! ## Overview
//! G17 awards points for a present key registry (+30), a declared rotation
//! policy (+25), key health by the number of critical or overdue rotations
//! (0 critical +30, one +15, more +5), and a minimum-days-until-rotation
//! bonus (+15 above 14 days, +10 above 7). Attestation is a stretch goal
//! and is never penalized.

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

/// G17 key lifecycle rule.
pub struct KeyLifecycle;

#[async_trait]
impl GateRule for KeyLifecycle {
    fn id(&self) -> GateId {
        GateId::G17
    }

    fn description(&self) -> &'static str {
        "Ensures proper key rotation, registry management, and lifecycle compliance"
    }

    async fn evaluate(&self, context: &GateEvaluationContext) -> GateResult {
        let mut evidence = EvidenceMap::new();
        let mut kpis = KpiMap::new();
        let mut score = 0.0;

        evidence.insert("keyRegistry".into(), false.into());
        evidence.insert("rotationPolicy".into(), false.into());
        evidence.insert("attestation".into(), false.into());
        evidence.insert("criticalRotations".into(), 0.0.into());
        kpis.insert("activeKeys".into(), 0.0);
        kpis.insert("criticalRotations".into(), 0.0);
        kpis.insert("minDaysUntilRotation".into(), 90.0);

        if let Some(proof) = &context.key_rotation_proof {
            evidence.insert("keyRegistry".into(), true.into());
            score += 30.0;

            if let Some(policy) = &proof.rotation_policy {
                evidence.insert("rotationPolicy".into(), true.into());
                evidence.insert("maxAgeDays".into(), f64::from(policy.max_age_days).into());
                evidence.insert("warningDays".into(), f64::from(policy.warning_days).into());
                score += 25.0;
            }

            if !proof.active_keys.is_empty() {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "key counts are far below f64 integer precision"
                )]
                let active = proof.active_keys.len() as f64;
                kpis.insert("activeKeys".into(), active);

                let critical = proof
                    .active_keys
                    .iter()
                    .filter(|key| key.urgency.is_critical())
                    .count();
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "key counts are far below f64 integer precision"
                )]
                let critical_f = critical as f64;
                kpis.insert("criticalRotations".into(), critical_f);
                evidence.insert("criticalRotations".into(), critical_f.into());

                let min_days = proof
                    .active_keys
                    .iter()
                    .map(|key| key.days_until_rotation)
                    .min()
                    .unwrap_or(90);
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "rotation horizons are far below f64 integer precision"
                )]
                let min_days_f = min_days as f64;
                kpis.insert("minDaysUntilRotation".into(), min_days_f);

                if critical == 0 {
                    score += 30.0;
                } else if critical <= 1 {
                    score += 15.0;
                } else {
                    score += 5.0;
                }

                if min_days > 14 {
                    score += 15.0;
                } else if min_days > 7 {
                    score += 10.0;
                }
            }
        }

        finish(self.id(), score, evidence, kpis)
    }
}
