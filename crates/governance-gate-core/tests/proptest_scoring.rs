// crates/governance-gate-core/tests/proptest_scoring.rs
// ============================================================================
// Module: Scoring Property-Based Tests
// Description: Property tests for percentile and scoring invariants.
// Purpose: Detect panics and out-of-range results across wide input ranges.
// ============================================================================

//! Property-based tests for percentile and pattern-scoring invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use governance_gate_core::ChannelId;
use governance_gate_core::MetricId;
use governance_gate_core::MetricRecord;
use governance_gate_core::PercentileStats;
use governance_gate_core::TenantId;
use governance_gate_core::core::scoring::compute_pattern_score;
use governance_gate_core::core::stats::calculate_global_pattern_stats;
use governance_gate_core::core::stats::percentile_rank;
use governance_gate_core::core::stats::percentile_value;
use proptest::prelude::*;
use time::OffsetDateTime;

fn finite_value() -> impl Strategy<Value = f64> {
    -1.0e6_f64 .. 1.0e6_f64
}

fn record_strategy() -> impl Strategy<Value = MetricRecord> {
    (finite_value(), finite_value(), finite_value(), finite_value()).prop_map(
        |(success_rate, retry_rate, dlq_depth, jitter_ms_avg)| MetricRecord {
            recorded_at: OffsetDateTime::from_unix_timestamp(1_756_500_000).unwrap(),
            tenant_id: TenantId::new("tenant-west"),
            channel: ChannelId::new("slack"),
            success_rate,
            retry_rate,
            dlq_depth,
            jitter_ms_avg,
            metric_id: MetricId::new("metric-001"),
        },
    )
}

proptest! {
    #[test]
    fn percentile_value_stays_within_population_bounds(
        mut values in prop::collection::vec(finite_value(), 1 .. 64),
        percentile in 0.0_f64 .. 100.0,
    ) {
        values.sort_by(f64::total_cmp);
        let result = percentile_value(&values, percentile);
        prop_assert!(result >= values[0] - 1e-9);
        prop_assert!(result <= values[values.len() - 1] + 1e-9);
    }

    #[test]
    fn percentile_rank_is_bounded(
        value in finite_value(),
        mut values in prop::collection::vec(finite_value(), 0 .. 64),
        lower_is_better in any::<bool>(),
    ) {
        values.sort_by(f64::total_cmp);
        let rank = percentile_rank(value, &values, lower_is_better);
        prop_assert!((0.0 ..= 100.0).contains(&rank));
    }

    #[test]
    fn pattern_score_final_is_clamped_and_privacy_safe(
        record in record_strategy(),
        population in prop::collection::vec(record_strategy(), 0 .. 32),
    ) {
        let stats = calculate_global_pattern_stats(&population);
        let result = compute_pattern_score(&record, &stats);
        prop_assert!((0.0 ..= 1.0).contains(&result.final_score));
        prop_assert!(result.privacy_safe);
        prop_assert_eq!(result.metrics.len(), 4);
    }

    #[test]
    fn from_sorted_orders_summary_points(
        mut values in prop::collection::vec(finite_value(), 2 .. 64),
    ) {
        values.sort_by(f64::total_cmp);
        let stats = PercentileStats::from_sorted(&values);
        prop_assert!(stats.min <= stats.p20);
        prop_assert!(stats.p20 <= stats.p50);
        prop_assert!(stats.p50 <= stats.p80);
        prop_assert!(stats.p80 <= stats.max);
        prop_assert_eq!(stats.count, values.len());
    }
}
