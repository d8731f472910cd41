// crates/governance-gate-core/src/lib.rs
// ============================================================================
// Module: Governance Gate Core
// Description: Data model and pure scoring logic for governance gate evaluation.
// Purpose: Provide deterministic, clock-free building blocks for gate scoring.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Governance Gate Core defines the shared data model (gate identifiers,
//! statuses, metric records, proof documents) plus the pure computation
//! layers: percentile statistics and the pattern-scoring modifier. Everything
//! in this crate is a value object; nothing here reads wall-clock time or
//! performs I/O. Hosts supply timestamps and proof documents explicitly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;

pub use core::gate::EvidenceMap;
pub use core::gate::EvidenceValue;
pub use core::gate::GateResult;
pub use core::gate::GateSummary;
pub use core::gate::GovernanceScore;
pub use core::gate::KpiMap;
pub use core::gate::TenantGovernanceScore;
pub use core::identifiers::ALL_GATE_IDS;
pub use core::identifiers::ChannelId;
pub use core::identifiers::GateId;
pub use core::identifiers::MetricId;
pub use core::identifiers::TenantId;
pub use core::metrics::ALL_METRIC_NAMES;
pub use core::metrics::MetricName;
pub use core::metrics::MetricRecord;
pub use core::proofs::AlertMetrics;
pub use core::proofs::KeyRotationProof;
pub use core::proofs::NonceStats;
pub use core::proofs::TowerReceiptProof;
pub use core::scoring::GovernanceGate;
pub use core::scoring::GovernanceScoringResult;
pub use core::scoring::MetricScoringResult;
pub use core::scoring::ModifierKind;
pub use core::stats::GlobalPatternStats;
pub use core::stats::PercentileStats;
pub use core::status::GateStatus;
