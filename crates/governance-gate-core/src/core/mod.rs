// crates/governance-gate-core/src/core/mod.rs
// ============================================================================
// Module: Core Model Root
// Description: Submodule index for the governance gate data model.
// Purpose: Group identifiers, statuses, metrics, stats, scoring, and proofs.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Submodule index for the governance gate core model.

/// Gate result and governance score types.
pub mod gate;
/// Opaque identifiers and the gate identifier enum.
pub mod identifiers;
/// Tenant metric observations and tracked metric names.
pub mod metrics;
/// Read-only proof document shapes.
pub mod proofs;
/// Pattern-scoring modifier and pattern score computation.
pub mod scoring;
/// Percentile statistics engine.
pub mod stats;
/// Gate status ladder.
pub mod status;
