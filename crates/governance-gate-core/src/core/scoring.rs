// crates/governance-gate-core/src/core/scoring.rs
// ============================================================================
// Module: Pattern Scoring Modifier
// Description: Percentile-rank modifiers and pattern score computation.
// Purpose: Adjust governance scores based on population-relative behavior.
// Dependencies: crate::core::{metrics, stats}, serde, time
// ============================================================================

//! ## Overview
//! The pattern-scoring modifier maps a percentile rank to a bounded penalty
//! or bonus: below the 20th percentile subtracts 0.1, above the 80th adds
//! 0.1, and the boundaries are inclusive-neutral. Ranks are computed against
//! a five-point proxy population ({min, p20, p50, p80, max}) rebuilt from
//! the stored percentile summary; the engine deliberately retains only
//! summary statistics, trading rank precision for constant space. Scoring
//! results structurally exclude tenant-identifying fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::gate::GateResult;
use crate::core::metrics::ALL_METRIC_NAMES;
use crate::core::metrics::MetricName;
use crate::core::metrics::MetricRecord;
use crate::core::stats::GlobalPatternStats;
use crate::core::stats::PercentileStats;
use crate::core::stats::percentile_rank;
use crate::core::status::GateStatus;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Percentile rank below which a penalty applies (exclusive).
pub const PENALTY_PERCENTILE: f64 = 20.0;
/// Percentile rank above which a bonus applies (exclusive).
pub const BONUS_PERCENTILE: f64 = 80.0;
/// Score modifier applied for a penalty.
pub const PENALTY_MODIFIER: f64 = -0.1;
/// Score modifier applied for a bonus.
pub const BONUS_MODIFIER: f64 = 0.1;
/// Minimum normalized score.
pub const MIN_SCORE: f64 = 0.0;
/// Maximum normalized score.
pub const MAX_SCORE: f64 = 1.0;
/// Base score before pattern modifiers apply.
pub const BASE_SCORE: f64 = 1.0;

// ============================================================================
// SECTION: Modifier Derivation
// ============================================================================

/// Kind of modifier applied to a metric score.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Metric ranked below the penalty percentile.
    Penalty,
    /// Metric ranked above the bonus percentile.
    Bonus,
    /// Metric ranked within the neutral band.
    None,
}

impl ModifierKind {
    /// Returns the modifier value for this kind.
    #[must_use]
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Penalty => PENALTY_MODIFIER,
            Self::Bonus => BONUS_MODIFIER,
            Self::None => 0.0,
        }
    }
}

/// Derives the modifier kind for a percentile rank in [0,100].
///
/// Boundary ranks of exactly 20 or 80 are inclusive-neutral.
#[must_use]
pub fn scoring_modifier(rank: f64) -> ModifierKind {
    if rank < PENALTY_PERCENTILE {
        ModifierKind::Penalty
    } else if rank > BONUS_PERCENTILE {
        ModifierKind::Bonus
    } else {
        ModifierKind::None
    }
}

// ============================================================================
// SECTION: Scoring Results
// ============================================================================

/// Scoring outcome for a single metric.
///
/// # Invariants
/// - Contains no tenant-identifying fields; the shape enforces the privacy
///   contract structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScoringResult {
    /// Tracked metric name.
    pub metric_name: MetricName,
    /// Raw observed value.
    pub raw_value: f64,
    /// Percentile rank in [0,100], rounded to 2 decimals.
    pub percentile_rank: f64,
    /// Applied modifier value.
    pub modifier: f64,
    /// Applied modifier kind.
    pub modifier_type: ModifierKind,
}

/// Overall pattern scoring result.
///
/// # Invariants
/// - `final_score` is clamped to [0,1].
/// - `privacy_safe` is `true` on every returned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceScoringResult {
    /// Base score before modifiers (always 1.0).
    pub base_score: f64,
    /// Sum of per-metric modifiers, rounded to 3 decimals.
    pub pattern_modifier: f64,
    /// Clamped final score in [0,1], rounded to 3 decimals.
    pub final_score: f64,
    /// Per-metric scoring results.
    pub metrics: Vec<MetricScoringResult>,
    /// Result timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Privacy contract flag; always `true` on returned values.
    pub privacy_safe: bool,
}

impl GovernanceScoringResult {
    /// Neutral result used when no global statistics are available.
    #[must_use]
    pub const fn neutral(timestamp: OffsetDateTime) -> Self {
        Self {
            base_score: BASE_SCORE,
            pattern_modifier: 0.0,
            final_score: BASE_SCORE,
            metrics: Vec::new(),
            timestamp,
            privacy_safe: true,
        }
    }
}

/// Governance gate with pattern-adjusted scoring in the normalized [0,1]
/// space.
///
/// # Invariants
/// - `final_score` is clamped to [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceGate {
    /// Gate title.
    pub name: String,
    /// Gate status.
    pub status: GateStatus,
    /// Base normalized score before pattern adjustment.
    pub base_score: f64,
    /// Applied pattern modifier.
    pub pattern_score: f64,
    /// Clamped final normalized score.
    pub final_score: f64,
    /// Per-metric scoring details.
    pub scoring_details: Vec<MetricScoringResult>,
}

// ============================================================================
// SECTION: Metric Scoring
// ============================================================================

/// Approximates the original sorted population from its percentile summary.
///
/// Five representative points {min, p20, p50, p80, max} stand in for the
/// full population; the engine does not retain raw per-record values. This
/// is a deliberate space/accuracy trade-off, not a defect.
#[must_use]
pub fn approximate_sorted_from_stats(stats: &PercentileStats) -> Vec<f64> {
    if stats.count == 0 {
        return Vec::new();
    }
    if stats.count == 1 {
        return vec![stats.p50];
    }
    vec![stats.min, stats.p20, stats.p50, stats.p80, stats.max]
}

/// Scores a single metric value against its global percentile summary.
#[must_use]
pub fn score_metric(
    name: MetricName,
    value: f64,
    stats: &PercentileStats,
) -> MetricScoringResult {
    let proxy = approximate_sorted_from_stats(stats);
    let rank = percentile_rank(value, &proxy, name.lower_is_better());
    let kind = scoring_modifier(rank);

    MetricScoringResult {
        metric_name: name,
        raw_value: value,
        percentile_rank: round2(rank),
        modifier: kind.modifier(),
        modifier_type: kind,
    }
}

/// Computes the pattern score for one metric record against global stats.
///
/// All four tracked metrics are scored; the modifiers sum into a single
/// pattern modifier and the final score is `clamp(1.0 + modifier, 0, 1)`.
#[must_use]
pub fn compute_pattern_score(
    record: &MetricRecord,
    global_stats: &GlobalPatternStats,
) -> GovernanceScoringResult {
    let metrics: Vec<MetricScoringResult> = ALL_METRIC_NAMES
        .into_iter()
        .map(|name| score_metric(name, record.value(name), global_stats.metric(name)))
        .collect();

    let total_modifier: f64 = metrics.iter().map(|result| result.modifier).sum();
    let final_score = (BASE_SCORE + total_modifier).clamp(MIN_SCORE, MAX_SCORE);

    GovernanceScoringResult {
        base_score: BASE_SCORE,
        pattern_modifier: round3(total_modifier),
        final_score: round3(final_score),
        metrics,
        timestamp: record.recorded_at,
        privacy_safe: true,
    }
}

/// Computes an aggregate pattern score across multiple metric records.
///
/// Metrics are arithmetically averaged into a synthetic record whose
/// identifier fields are the literal `"aggregate"`. An empty input
/// short-circuits to the neutral base result, which is a degenerate but
/// valid case rather than an error.
#[must_use]
pub fn compute_aggregate_pattern_score(
    records: &[MetricRecord],
    global_stats: &GlobalPatternStats,
    timestamp: OffsetDateTime,
) -> GovernanceScoringResult {
    if records.is_empty() {
        return GovernanceScoringResult::neutral(timestamp);
    }

    let averaged = MetricRecord {
        recorded_at: timestamp,
        tenant_id: crate::core::identifiers::TenantId::new("aggregate"),
        channel: crate::core::identifiers::ChannelId::new("aggregate"),
        success_rate: mean(records.iter().map(|r| r.success_rate)),
        retry_rate: mean(records.iter().map(|r| r.retry_rate)),
        dlq_depth: mean(records.iter().map(|r| r.dlq_depth)),
        jitter_ms_avg: mean(records.iter().map(|r| r.jitter_ms_avg)),
        metric_id: crate::core::identifiers::MetricId::new("aggregate"),
    };

    compute_pattern_score(&averaged, global_stats)
}

/// Applies a pattern scoring result to a gate's base normalized score.
///
/// The final score is `clamp(base_score + pattern_modifier, 0, 1)`.
#[must_use]
pub fn apply_pattern_score_to_gate(
    name: impl Into<String>,
    status: GateStatus,
    base_score: f64,
    pattern: &GovernanceScoringResult,
) -> GovernanceGate {
    let final_score = (base_score + pattern.pattern_modifier).clamp(MIN_SCORE, MAX_SCORE);

    GovernanceGate {
        name: name.into(),
        status,
        base_score,
        pattern_score: pattern.pattern_modifier,
        final_score: round3(final_score),
        scoring_details: pattern.metrics.clone(),
    }
}

/// Applies a pattern scoring result to an evaluated gate, normalizing its
/// 0-100 score into the [0,1] space first.
#[must_use]
pub fn apply_pattern_score_to_gate_result(
    gate: &GateResult,
    pattern: &GovernanceScoringResult,
) -> GovernanceGate {
    apply_pattern_score_to_gate(gate.name.clone(), gate.status, gate.score / 100.0, pattern)
}

// ============================================================================
// SECTION: Numeric Helpers
// ============================================================================

/// Arithmetic mean with an explicit empty guard (0, never NaN).
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "population sizes are far below f64 integer precision"
    )]
    let denominator = count as f64;
    sum / denominator
}

/// Rounds to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 3 decimal places.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
