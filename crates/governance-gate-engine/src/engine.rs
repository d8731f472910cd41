// crates/governance-gate-engine/src/engine.rs
// ============================================================================
// Module: Governance Scoring Engine
// Description: Stateful pattern-scoring engine over global statistics.
// Purpose: Hold a refreshable statistics snapshot and score metric records.
// Dependencies: governance-gate-core, governance-gate-scrub, serde_json, time
// ============================================================================

//! ## Overview
//! The engine owns one global statistics snapshot behind a read-write lock.
//! Refreshes replace the snapshot wholesale; scoring reads clone the shared
//! handle and release the lock before computing, so a concurrent refresh
//! never observes a half-updated snapshot and scoring never holds the lock
//! across computation. Every returned scoring result passes through the
//! privacy verification step before it leaves the engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::RwLock;
use std::time::Instant;

use governance_gate_core::GlobalPatternStats;
use governance_gate_core::GovernanceScoringResult;
use governance_gate_core::MetricName;
use governance_gate_core::MetricRecord;
use governance_gate_core::core::scoring::approximate_sorted_from_stats;
use governance_gate_core::core::scoring::compute_aggregate_pattern_score;
use governance_gate_core::core::scoring::compute_pattern_score;
use governance_gate_core::core::scoring::scoring_modifier;
use governance_gate_core::core::stats::calculate_global_pattern_stats;
use governance_gate_core::core::stats::percentile_rank;
use governance_gate_core::ModifierKind;
use governance_gate_scrub::scrub_audit_payload;
use time::OffsetDateTime;

use crate::config::EngineConfig;

// ============================================================================
// SECTION: Privacy Verification
// ============================================================================

/// Verifies a scoring result carries no redactable content.
///
/// Scoring results structurally exclude tenant-identifying fields, so
/// scrubbing the serialized form is verification rather than transformation;
/// the input is returned unchanged if serialization is not possible.
#[must_use]
pub fn ensure_privacy_safe(result: GovernanceScoringResult) -> GovernanceScoringResult {
    let mut verified = match serde_json::to_value(&result) {
        Ok(raw) => serde_json::from_value(scrub_audit_payload(&raw)).unwrap_or(result),
        Err(_) => result,
    };
    verified.privacy_safe = true;
    verified
}

// ============================================================================
// SECTION: Engine State
// ============================================================================

/// Snapshot state guarded by the engine lock.
struct StatsState {
    /// Current global statistics snapshot.
    stats: Arc<GlobalPatternStats>,
    /// When the snapshot was last replaced.
    updated_at: Option<Instant>,
}

/// Stateful pattern-scoring engine.
///
/// # Invariants
/// - The statistics snapshot is replaced wholesale, never mutated in place.
/// - Scoring results always report `privacy_safe == true`.
pub struct GovernanceEngine {
    /// Guarded snapshot state.
    state: RwLock<StatsState>,
    /// Engine configuration.
    config: EngineConfig,
}

impl Default for GovernanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceEngine {
    /// Creates an engine with empty statistics and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with empty statistics and the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: RwLock::new(StatsState {
                stats: Arc::new(GlobalPatternStats::default()),
                updated_at: None,
            }),
            config,
        }
    }

    /// Recomputes and replaces the global statistics snapshot.
    pub fn update_global_stats(&self, records: &[MetricRecord]) {
        let stats = Arc::new(calculate_global_pattern_stats(records));
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.stats = stats;
        state.updated_at = Some(Instant::now());
    }

    /// Returns the current global statistics snapshot.
    #[must_use]
    pub fn global_stats(&self) -> Arc<GlobalPatternStats> {
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(&state.stats)
    }

    /// Returns true when the snapshot is older than the staleness window, or
    /// has never been refreshed.
    #[must_use]
    pub fn needs_stats_refresh(&self) -> bool {
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        state
            .updated_at
            .is_none_or(|updated_at| updated_at.elapsed() > self.config.refresh_window())
    }

    /// Scores one metric record against the current snapshot.
    #[must_use]
    pub fn score(&self, record: &MetricRecord) -> GovernanceScoringResult {
        let stats = self.global_stats();
        ensure_privacy_safe(compute_pattern_score(record, &stats))
    }

    /// Scores the average of multiple metric records against the snapshot.
    #[must_use]
    pub fn score_aggregate(&self, records: &[MetricRecord]) -> GovernanceScoringResult {
        let stats = self.global_stats();
        let result =
            compute_aggregate_pattern_score(records, &stats, OffsetDateTime::now_utc());
        ensure_privacy_safe(result)
    }

    /// Explains how a value would be scored against the current snapshot.
    #[must_use]
    pub fn explain_score(&self, metric: MetricName, value: f64) -> String {
        let stats = self.global_stats();
        let summary = stats.metric(metric);
        if summary.count == 0 {
            return format!("No global data available for {metric}");
        }

        let proxy = approximate_sorted_from_stats(summary);
        let rank = percentile_rank(value, &proxy, metric.lower_is_better());
        match scoring_modifier(rank) {
            ModifierKind::Penalty => format!(
                "{metric}={value} is below 20th percentile (rank: {rank:.1}%), penalty applied"
            ),
            ModifierKind::Bonus => format!(
                "{metric}={value} is above 80th percentile (rank: {rank:.1}%), bonus applied"
            ),
            ModifierKind::None => {
                format!("{metric}={value} is within normal range (rank: {rank:.1}%)")
            }
        }
    }
}
