// crates/governance-gate-engine/src/lib.rs
// ============================================================================
// Module: Governance Gate Engine
// Description: Stateful pattern-scoring engine with privacy verification.
// Purpose: Maintain refreshable global statistics and score metric records.
// Dependencies: governance-gate-core, governance-gate-scrub, serde,
// serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! This crate wraps the pure scoring primitives in a stateful engine: a
//! read-write-locked global statistics snapshot, a staleness window, and a
//! privacy verification step applied to every result the engine returns.
//! Privacy validation for inbound metric records is re-exported from the
//! scrubber crate so callers have one import surface.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod engine;

pub use config::DEFAULT_STATS_REFRESH_SECS;
pub use config::EngineConfig;
pub use config::EngineConfigError;
pub use engine::GovernanceEngine;
pub use engine::ensure_privacy_safe;
pub use governance_gate_scrub::validate_metric_privacy;
