// crates/governance-gate-core/src/core/stats.rs
// ============================================================================
// Module: Percentile Statistics Engine
// Description: Percentile value, percentile rank, and global stats derivation.
// Purpose: Summarize unbounded metric populations into fixed-size statistics.
// Dependencies: crate::core::metrics, serde
// ============================================================================

//! ## Overview
//! Pure percentile computations over numeric populations. Percentile values
//! use linear interpolation at index `p/100 * (n-1)`. Percentile ranks are
//! normalized into a higher-is-better space regardless of the metric's
//! natural direction, which lets a single downstream modifier rule serve all
//! metrics. Empty populations yield defined neutral defaults, never errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::metrics::ALL_METRIC_NAMES;
use crate::core::metrics::MetricName;
use crate::core::metrics::MetricRecord;

// ============================================================================
// SECTION: Percentile Summaries
// ============================================================================

/// Derived percentile summary for one metric population.
///
/// # Invariants
/// - Recomputed wholesale from a population; never mutated in place.
/// - `count == 0` implies all fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileStats {
    /// 20th percentile value.
    pub p20: f64,
    /// 50th percentile value (median).
    pub p50: f64,
    /// 80th percentile value.
    pub p80: f64,
    /// Minimum observed value.
    pub min: f64,
    /// Maximum observed value.
    pub max: f64,
    /// Population size.
    pub count: usize,
}

impl PercentileStats {
    /// Empty statistics for a population with no observations.
    pub const EMPTY: Self = Self {
        p20: 0.0,
        p50: 0.0,
        p80: 0.0,
        min: 0.0,
        max: 0.0,
        count: 0,
    };

    /// Derives percentile statistics from an ascending-sorted population.
    #[must_use]
    pub fn from_sorted(sorted: &[f64]) -> Self {
        let Some(first) = sorted.first() else {
            return Self::EMPTY;
        };
        let Some(last) = sorted.last() else {
            return Self::EMPTY;
        };
        Self {
            p20: percentile_value(sorted, 20.0),
            p50: percentile_value(sorted, 50.0),
            p80: percentile_value(sorted, 80.0),
            min: *first,
            max: *last,
            count: sorted.len(),
        }
    }
}

impl Default for PercentileStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Global percentile statistics, one summary per tracked metric.
///
/// # Invariants
/// - Owned by the governance engine and replaced atomically on refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalPatternStats {
    /// Success-rate population summary.
    pub success_rate: PercentileStats,
    /// Retry-rate population summary.
    pub retry_rate: PercentileStats,
    /// DLQ-depth population summary.
    pub dlq_depth: PercentileStats,
    /// Jitter population summary.
    pub jitter_ms_avg: PercentileStats,
}

impl GlobalPatternStats {
    /// Returns the summary for a tracked metric name.
    #[must_use]
    pub const fn metric(&self, name: MetricName) -> &PercentileStats {
        match name {
            MetricName::SuccessRate => &self.success_rate,
            MetricName::RetryRate => &self.retry_rate,
            MetricName::DlqDepth => &self.dlq_depth,
            MetricName::JitterMsAvg => &self.jitter_ms_avg,
        }
    }

    /// Returns a mutable summary for a tracked metric name.
    const fn metric_mut(&mut self, name: MetricName) -> &mut PercentileStats {
        match name {
            MetricName::SuccessRate => &mut self.success_rate,
            MetricName::RetryRate => &mut self.retry_rate,
            MetricName::DlqDepth => &mut self.dlq_depth,
            MetricName::JitterMsAvg => &mut self.jitter_ms_avg,
        }
    }
}

// ============================================================================
// SECTION: Percentile Computation
// ============================================================================

/// Computes the linearly-interpolated value at a percentile in [0,100].
///
/// Uses the nearest-rank index formula `index = percentile/100 * (n-1)` and
/// interpolates between the floor and ceil indices. Returns 0 for an empty
/// population and the sole element for a singleton.
#[must_use]
pub fn percentile_value(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "population sizes are far below f64 integer precision"
    )]
    let index = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor();
    let upper = index.ceil();

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "floor/ceil of a non-negative in-range index"
    )]
    let (lower_idx, upper_idx) = (lower as usize, upper as usize);

    if lower_idx == upper_idx {
        return sorted[lower_idx];
    }

    let fraction = index - lower;
    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Computes the percentile rank of a value within an ascending-sorted
/// population.
///
/// The rank is `100 * count(v < value) / n`, inverted when
/// `lower_is_better` so that the output space is always higher-is-better.
/// An empty population yields the neutral rank 50. A singleton yields 50 on
/// equality, otherwise 0 or 100 depending on direction.
#[must_use]
pub fn percentile_rank(value: f64, sorted: &[f64], lower_is_better: bool) -> f64 {
    let Some(first) = sorted.first() else {
        return 50.0;
    };
    if sorted.len() == 1 {
        if value == *first {
            return 50.0;
        }
        let below = value < *first;
        return if below == lower_is_better { 100.0 } else { 0.0 };
    }

    let count_below = sorted.iter().filter(|v| **v < value).count();
    #[allow(
        clippy::cast_precision_loss,
        reason = "population sizes are far below f64 integer precision"
    )]
    let raw = (count_below as f64 / sorted.len() as f64) * 100.0;

    if lower_is_better { 100.0 - raw } else { raw }
}

/// Derives global pattern statistics from a metric record population.
///
/// Sorts each tracked metric's values ascending and summarizes them. An
/// empty input yields all-zero statistics (count 0), never an error.
#[must_use]
pub fn calculate_global_pattern_stats(records: &[MetricRecord]) -> GlobalPatternStats {
    let mut stats = GlobalPatternStats::default();
    if records.is_empty() {
        return stats;
    }

    for name in ALL_METRIC_NAMES {
        let mut values: Vec<f64> = records.iter().map(|record| record.value(name)).collect();
        values.sort_by(f64::total_cmp);
        *stats.metric_mut(name) = PercentileStats::from_sorted(&values);
    }
    stats
}
