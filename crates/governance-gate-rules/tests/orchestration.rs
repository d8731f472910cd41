// crates/governance-gate-rules/tests/orchestration.rs
// ============================================================================
// Module: Orchestrator Tests
// Description: Verifies concurrent fan-out, registry behavior, and telemetry.
// ============================================================================
//! ## Overview
//! Exercises the rule registry's concurrent evaluation against a shared
//! context: full-set coverage in gate order, single-gate lookup, explicit
//! rule subsets, and metric-sink reporting.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use governance_gate_core::ALL_GATE_IDS;
use governance_gate_core::GateId;
use governance_gate_rules::GateEvaluationContext;
use governance_gate_rules::GateMetricEvent;
use governance_gate_rules::GateMetrics;
use governance_gate_rules::GateRegistry;
use governance_gate_rules::all_rules;
use governance_gate_rules::evaluate_all_gates;
use governance_gate_rules::evaluate_gate;
use governance_gate_rules::evaluate_gates_with_rules;
use governance_gate_rules::rules::g13::Determinism;
use governance_gate_rules::rules::g17::KeyLifecycle;
use governance_gate_rules::total_weight;

struct CountingMetrics {
    evaluations: AtomicUsize,
    latencies: AtomicUsize,
}

impl GateMetrics for CountingMetrics {
    fn record_evaluation(&self, _event: GateMetricEvent) {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
    }

    fn record_latency(&self, _event: GateMetricEvent, _latency: Duration) {
        self.latencies.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn evaluate_all_gates_covers_full_set_in_order() {
    let context = GateEvaluationContext::empty("proofs");
    let results = evaluate_all_gates(&context).await;

    assert_eq!(results.len(), 9);
    let ids: Vec<GateId> = results.keys().copied().collect();
    assert_eq!(ids, ALL_GATE_IDS.to_vec());
}

#[tokio::test(flavor = "multi_thread")]
async fn evaluate_all_matches_individual_evaluations() {
    let context = GateEvaluationContext::empty("proofs");
    let results = evaluate_all_gates(&context).await;

    for id in ALL_GATE_IDS {
        let single = evaluate_gate(id, &context).await.unwrap();
        let fanned = &results[&id];
        assert_eq!(fanned.score, single.score);
        assert_eq!(fanned.status, single.status);
        assert_eq!(fanned.name, single.name);
    }
}

#[tokio::test]
async fn subset_evaluation_returns_only_requested_gates() {
    let context = GateEvaluationContext::empty("proofs");
    let results = evaluate_gates_with_rules(
        vec![Arc::new(Determinism), Arc::new(KeyLifecycle)],
        &context,
    )
    .await;

    assert_eq!(results.len(), 2);
    assert!(results.contains_key(&GateId::G13));
    assert!(results.contains_key(&GateId::G17));
}

#[tokio::test]
async fn registry_reports_to_metrics_sink() {
    let metrics = Arc::new(CountingMetrics {
        evaluations: AtomicUsize::new(0),
        latencies: AtomicUsize::new(0),
    });
    let registry = GateRegistry::with_metrics(Arc::clone(&metrics) as Arc<dyn GateMetrics>);
    let context = GateEvaluationContext::empty("proofs");

    let results = registry.evaluate_all(&context).await;
    assert_eq!(results.len(), 9);
    assert_eq!(metrics.evaluations.load(Ordering::SeqCst), 9);
    assert_eq!(metrics.latencies.load(Ordering::SeqCst), 9);
}

#[tokio::test]
async fn registry_replaces_duplicate_registrations() {
    let mut registry = GateRegistry::new();
    assert_eq!(registry.len(), 9);
    registry.register(Arc::new(Determinism));
    assert_eq!(registry.len(), 9);
}

#[test]
fn full_rule_set_weight_sums_to_one() {
    assert_eq!(all_rules().len(), 9);
    assert!((total_weight() - 1.0).abs() < 1e-9);
}
