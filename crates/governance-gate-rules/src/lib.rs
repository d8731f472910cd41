// crates/governance-gate-rules/src/lib.rs
// ============================================================================
// Module: Governance Gate Rules
// Description: Evidence loading, the G13-G21 rule set, and score assembly.
// Purpose: Evaluate governance gates concurrently and assemble trust scores.
// Dependencies: governance-gate-core, governance-gate-scrub, async-trait,
// serde, serde_json, thiserror, time, tokio
// ============================================================================

//! ## Overview
//! This crate hosts the runtime half of gate evaluation: the evidence
//! context builder (proof-file loading with per-document degradation), the
//! nine declarative gate rules, the concurrent orchestrator, and the score
//! aggregator with its health check. Missing evidence never raises; it
//! yields fewer points and degraded statuses, and one gate's missing
//! evidence never blocks the other eight.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod aggregate;
pub mod config;
pub mod context;
pub mod orchestrator;
pub mod rules;
pub mod telemetry;

pub use aggregate::CRITICAL_GATE_IDS;
pub use aggregate::GovernanceHealth;
pub use aggregate::SCORE_VERSION;
pub use aggregate::assemble_governance_score;
pub use aggregate::compute_governance_score;
pub use aggregate::compute_tenant_governance_score;
pub use aggregate::format_score;
pub use aggregate::governance_health;
pub use config::ConfigError;
pub use config::EvaluationConfig;
pub use context::GateEvaluationContext;
pub use context::build_evaluation_context;
pub use orchestrator::GateRegistry;
pub use orchestrator::evaluate_all_gates;
pub use orchestrator::evaluate_gate;
pub use orchestrator::evaluate_gates_with_rules;
pub use rules::GateRule;
pub use rules::all_rules;
pub use rules::total_weight;
pub use telemetry::GateMetricEvent;
pub use telemetry::GateMetrics;
pub use telemetry::NoopMetrics;
