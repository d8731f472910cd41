// crates/governance-gate-rules/src/rules/mod.rs
// ============================================================================
// Module: Gate Rule Set
// Description: Declarative rule trait and the G13-G21 rule registry.
// Purpose: Define the shared rule contract and expose the full rule set.
// Dependencies: crate::context, governance-gate-core, async-trait
// ============================================================================

//! ## Overview
//! Each gate rule starts its score at zero, inspects a small number of
//! evidence conditions from the shared context, awards fixed point
//! allotments per satisfied condition, and records evidence and KPI maps.
//! Status derivation is shared across all rules through the score ladder.
//! Degraded or absent evidence yields fewer points, never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use governance_gate_core::EvidenceMap;
use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use governance_gate_core::GateStatus;
use governance_gate_core::KpiMap;
use time::OffsetDateTime;

use crate::context::GateEvaluationContext;

/// Determinism and reproducibility rule.
pub mod g13;
/// Privacy-by-design rule.
pub mod g14;
/// Federation correctness rule.
pub mod g15;
/// CI evidence rule.
pub mod g16;
/// Key lifecycle rule.
pub mod g17;
/// Federation runtime rule.
pub mod g18;
/// Ledger automation rule.
pub mod g19;
/// Observability rule.
pub mod g20;
/// Genesis certification rule.
pub mod g21;

// ============================================================================
// SECTION: Rule Contract
// ============================================================================

/// Declarative governance gate rule.
///
/// # Invariants
/// - Rules are stateless; all inputs come from the shared context.
/// - `evaluate` never fails; absent evidence degrades the score instead.
#[async_trait]
pub trait GateRule: Send + Sync {
    /// Returns the gate identifier this rule evaluates.
    fn id(&self) -> GateId;

    /// Returns the rule's one-line description.
    fn description(&self) -> &'static str;

    /// Returns the gate's human-readable title.
    fn title(&self) -> &'static str {
        self.id().title()
    }

    /// Returns the gate's declared weight.
    fn weight(&self) -> f64 {
        self.id().weight()
    }

    /// Evaluates the rule against the shared evidence context.
    async fn evaluate(&self, context: &GateEvaluationContext) -> GateResult;
}

/// Assembles a gate result from a rule's score, evidence, and KPIs.
///
/// Status derivation is the shared ladder; rules never set status directly.
pub(crate) fn finish(id: GateId, score: f64, evidence: EvidenceMap, kpis: KpiMap) -> GateResult {
    GateResult {
        name: id.title().to_string(),
        status: GateStatus::from_score(score),
        score,
        evidence,
        kpis,
        evaluated_at: OffsetDateTime::now_utc(),
    }
}

// ============================================================================
// SECTION: Rule Registry
// ============================================================================

/// Returns the full rule set in gate order.
#[must_use]
pub fn all_rules() -> Vec<Arc<dyn GateRule>> {
    vec![
        Arc::new(g13::Determinism),
        Arc::new(g14::PrivacyByDesign),
        Arc::new(g15::FederationCorrectness),
        Arc::new(g16::CiEvidence),
        Arc::new(g17::KeyLifecycle),
        Arc::new(g18::FederationRuntime),
        Arc::new(g19::LedgerAutomation),
        Arc::new(g20::Observatory),
        Arc::new(g21::GenesisCertification),
    ]
}

/// Returns the summed weight of the full rule set.
#[must_use]
pub fn total_weight() -> f64 {
    all_rules().iter().map(|rule| rule.weight()).sum()
}
