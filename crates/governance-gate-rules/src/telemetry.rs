// crates/governance-gate-rules/src/telemetry.rs
// ============================================================================
// Module: Gate Telemetry
// Description: Observability hooks for gate evaluation runs.
// Purpose: Provide metric events and latency recording without hard deps.
// Dependencies: governance-gate-core
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for gate evaluation counters
//! and latency observations. It is intentionally dependency-light so
//! downstream deployments can plug in Prometheus or OpenTelemetry without
//! redesign. Telemetry must avoid leaking raw evidence values; events carry
//! only gate identifiers, statuses, and scores.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use governance_gate_core::GateId;
use governance_gate_core::GateStatus;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default latency buckets in milliseconds for gate evaluation histograms.
pub const GATE_LATENCY_BUCKETS_MS: &[u64] =
    &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000, 2_500, 5_000];

// ============================================================================
// SECTION: Metric Events
// ============================================================================

/// Gate evaluation metric event payload.
///
/// # Invariants
/// - Carries only identifiers and scores, never evidence values.
#[derive(Debug, Clone, Copy)]
pub struct GateMetricEvent {
    /// Gate that was evaluated.
    pub gate: GateId,
    /// Resulting status.
    pub status: GateStatus,
    /// Resulting score in [0,100].
    pub score: f64,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for gate evaluations and latencies.
pub trait GateMetrics: Send + Sync {
    /// Records a completed gate evaluation.
    fn record_evaluation(&self, event: GateMetricEvent);
    /// Records a latency observation for the evaluation.
    fn record_latency(&self, event: GateMetricEvent, latency: Duration);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopMetrics;

impl GateMetrics for NoopMetrics {
    fn record_evaluation(&self, _event: GateMetricEvent) {}

    fn record_latency(&self, _event: GateMetricEvent, _latency: Duration) {}
}
