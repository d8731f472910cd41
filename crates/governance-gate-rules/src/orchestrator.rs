// crates/governance-gate-rules/src/orchestrator.rs
// ============================================================================
// Module: Gate Orchestrator
// Description: Concurrent fan-out evaluation of the registered rule set.
// Purpose: Evaluate all gates against one shared context in gate order.
// Dependencies: crate::rules, crate::telemetry, governance-gate-core, tokio
// ============================================================================

//! ## Overview
//! The registry holds one rule per gate identifier and fans evaluation out
//! on a `JoinSet` over an `Arc`-shared immutable context. Rules never fail,
//! so every spawned task yields a result; completion order is arbitrary and
//! results are returned sorted by gate identifier. Each evaluation is timed
//! and reported to the configured metrics sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use governance_gate_core::GateId;
use governance_gate_core::GateResult;
use tokio::task::JoinSet;

use crate::context::GateEvaluationContext;
use crate::rules::GateRule;
use crate::rules::all_rules;
use crate::telemetry::GateMetricEvent;
use crate::telemetry::GateMetrics;
use crate::telemetry::NoopMetrics;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Rule registry keyed by gate identifier.
///
/// # Invariants
/// - At most one rule per gate identifier; re-registration replaces.
/// - Evaluation results are always sorted by gate identifier.
pub struct GateRegistry {
    /// Registered rules keyed by gate identifier.
    rules: BTreeMap<GateId, Arc<dyn GateRule>>,
    /// Metrics sink for evaluation events.
    metrics: Arc<dyn GateMetrics>,
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GateRegistry {
    /// Creates a registry preloaded with the full G13-G21 rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(NoopMetrics))
    }

    /// Creates a preloaded registry reporting to the given metrics sink.
    #[must_use]
    pub fn with_metrics(metrics: Arc<dyn GateMetrics>) -> Self {
        let mut registry = Self { rules: BTreeMap::new(), metrics };
        for rule in all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Registers a rule, replacing any existing rule for the same gate.
    pub fn register(&mut self, rule: Arc<dyn GateRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Returns the rule registered for the given gate, if any.
    #[must_use]
    pub fn rule(&self, id: GateId) -> Option<&Arc<dyn GateRule>> {
        self.rules.get(&id)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates all registered rules concurrently against the context.
    ///
    /// The result map is keyed and ordered by gate identifier regardless of
    /// task completion order. A rule that cannot complete (task failure) is
    /// omitted rather than blocking the remaining gates.
    pub async fn evaluate_all(
        &self,
        context: &GateEvaluationContext,
    ) -> BTreeMap<GateId, GateResult> {
        let shared = Arc::new(context.clone());
        let mut tasks: JoinSet<(GateId, GateResult, std::time::Duration)> = JoinSet::new();

        for rule in self.rules.values() {
            let rule = Arc::clone(rule);
            let context = Arc::clone(&shared);
            tasks.spawn(async move {
                let started = Instant::now();
                let result = rule.evaluate(&context).await;
                (rule.id(), result, started.elapsed())
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            if let Ok((id, result, latency)) = joined {
                let event =
                    GateMetricEvent { gate: id, status: result.status, score: result.score };
                self.metrics.record_evaluation(event);
                self.metrics.record_latency(event, latency);
                results.insert(id, result);
            }
        }

        results
    }

    /// Evaluates a single gate, returning `None` when no rule is registered.
    pub async fn evaluate(
        &self,
        id: GateId,
        context: &GateEvaluationContext,
    ) -> Option<GateResult> {
        let rule = self.rules.get(&id)?;
        let started = Instant::now();
        let result = rule.evaluate(context).await;
        let event = GateMetricEvent { gate: id, status: result.status, score: result.score };
        self.metrics.record_evaluation(event);
        self.metrics.record_latency(event, started.elapsed());
        Some(result)
    }
}

// ============================================================================
// SECTION: Convenience Entry Points
// ============================================================================

/// Evaluates the full G13-G21 rule set against the context.
pub async fn evaluate_all_gates(
    context: &GateEvaluationContext,
) -> BTreeMap<GateId, GateResult> {
    GateRegistry::new().evaluate_all(context).await
}

/// Evaluates one gate from the full rule set.
pub async fn evaluate_gate(id: GateId, context: &GateEvaluationContext) -> Option<GateResult> {
    GateRegistry::new().evaluate(id, context).await
}

/// Evaluates an explicit rule list against the context.
///
/// Rules are keyed by gate identifier; later duplicates replace earlier ones.
pub async fn evaluate_gates_with_rules(
    rules: Vec<Arc<dyn GateRule>>,
    context: &GateEvaluationContext,
) -> BTreeMap<GateId, GateResult> {
    let mut registry = GateRegistry { rules: BTreeMap::new(), metrics: Arc::new(NoopMetrics) };
    for rule in rules {
        registry.register(rule);
    }
    registry.evaluate_all(context).await
}
