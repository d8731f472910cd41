// crates/governance-gate-core/tests/scoring.rs
// ============================================================================
// Module: Pattern Scoring Tests
// Description: Verifies modifier boundaries, clamping, and aggregation.
// ============================================================================
//! ## Overview
//! Exercises the percentile-threshold modifier with exact boundary ranks,
//! per-metric scoring against percentile summaries, the [0,1] clamp on final
//! scores, and the neutral short-circuit for empty aggregate inputs.

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
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use governance_gate_core::ChannelId;
use governance_gate_core::GateStatus;
use governance_gate_core::GlobalPatternStats;
use governance_gate_core::MetricId;
use governance_gate_core::MetricName;
use governance_gate_core::MetricRecord;
use governance_gate_core::ModifierKind;
use governance_gate_core::PercentileStats;
use governance_gate_core::TenantId;
use governance_gate_core::core::scoring::apply_pattern_score_to_gate;
use governance_gate_core::core::scoring::compute_aggregate_pattern_score;
use governance_gate_core::core::scoring::compute_pattern_score;
use governance_gate_core::core::scoring::round2;
use governance_gate_core::core::scoring::round3;
use governance_gate_core::core::scoring::score_metric;
use governance_gate_core::core::scoring::scoring_modifier;
use time::OffsetDateTime;

fn timestamp() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_756_500_000).unwrap()
}

fn record(success_rate: f64, retry_rate: f64, dlq_depth: f64, jitter_ms_avg: f64) -> MetricRecord {
    MetricRecord {
        recorded_at: timestamp(),
        tenant_id: TenantId::new("tenant-west"),
        channel: ChannelId::new("slack"),
        success_rate,
        retry_rate,
        dlq_depth,
        jitter_ms_avg,
        metric_id: MetricId::new("metric-001"),
    }
}

fn spread_stats() -> PercentileStats {
    PercentileStats { p20: 20.0, p50: 50.0, p80: 80.0, min: 10.0, max: 90.0, count: 100 }
}

#[test]
fn modifier_boundaries_are_inclusive_neutral() {
    assert_eq!(scoring_modifier(19.99), ModifierKind::Penalty);
    assert_eq!(scoring_modifier(20.0), ModifierKind::None);
    assert_eq!(scoring_modifier(80.0), ModifierKind::None);
    assert_eq!(scoring_modifier(80.01), ModifierKind::Bonus);
    assert_eq!(scoring_modifier(0.0), ModifierKind::Penalty);
    assert_eq!(scoring_modifier(100.0), ModifierKind::Bonus);
}

#[test]
fn modifier_values_match_kinds() {
    assert_eq!(ModifierKind::Penalty.modifier(), -0.1);
    assert_eq!(ModifierKind::Bonus.modifier(), 0.1);
    assert_eq!(ModifierKind::None.modifier(), 0.0);
}

#[test]
fn score_metric_penalizes_bottom_of_population() {
    // 5.0 sits below every proxy point: rank 0 in higher-is-better space.
    let result = score_metric(MetricName::SuccessRate, 5.0, &spread_stats());
    assert_eq!(result.percentile_rank, 0.0);
    assert_eq!(result.modifier_type, ModifierKind::Penalty);
    assert_eq!(result.modifier, -0.1);
}

#[test]
fn score_metric_rewards_top_of_population() {
    let result = score_metric(MetricName::SuccessRate, 95.0, &spread_stats());
    assert_eq!(result.percentile_rank, 100.0);
    assert_eq!(result.modifier_type, ModifierKind::Bonus);
}

#[test]
fn score_metric_inverts_for_lower_is_better() {
    // A very low retry rate is the best rank for a lower-is-better metric.
    let result = score_metric(MetricName::RetryRate, 5.0, &spread_stats());
    assert_eq!(result.percentile_rank, 100.0);
    assert_eq!(result.modifier_type, ModifierKind::Bonus);
}

#[test]
fn score_metric_empty_stats_is_neutral() {
    let result = score_metric(MetricName::DlqDepth, 7.0, &PercentileStats::EMPTY);
    assert_eq!(result.percentile_rank, 50.0);
    assert_eq!(result.modifier_type, ModifierKind::None);
}

#[test]
fn pattern_score_clamps_final_to_unit_interval() {
    let stats = GlobalPatternStats {
        success_rate: spread_stats(),
        retry_rate: spread_stats(),
        dlq_depth: spread_stats(),
        jitter_ms_avg: spread_stats(),
    };

    // Worst on every metric: four penalties sum to -0.4.
    let worst = record(5.0, 95.0, 95.0, 95.0);
    let result = compute_pattern_score(&worst, &stats);
    assert_eq!(result.pattern_modifier, -0.4);
    assert_eq!(result.final_score, 0.6);
    assert!(result.privacy_safe);
    assert_eq!(result.metrics.len(), 4);

    // Best on every metric: four bonuses, clamped at 1.0.
    let best = record(95.0, 5.0, 5.0, 5.0);
    let result = compute_pattern_score(&best, &stats);
    assert_eq!(result.pattern_modifier, 0.4);
    assert_eq!(result.final_score, 1.0);
}

#[test]
fn pattern_score_uses_record_timestamp() {
    let result = compute_pattern_score(&record(0.9, 0.1, 1.0, 50.0), &GlobalPatternStats::default());
    assert_eq!(result.timestamp, timestamp());
}

#[test]
fn aggregate_empty_input_is_neutral() {
    let result =
        compute_aggregate_pattern_score(&[], &GlobalPatternStats::default(), timestamp());
    assert_eq!(result.base_score, 1.0);
    assert_eq!(result.pattern_modifier, 0.0);
    assert_eq!(result.final_score, 1.0);
    assert!(result.metrics.is_empty());
    assert!(result.privacy_safe);
}

#[test]
fn aggregate_averages_records_before_scoring() {
    let stats =
        GlobalPatternStats { success_rate: spread_stats(), ..GlobalPatternStats::default() };

    // Average success rate 95: above the whole proxy population.
    let records = vec![record(100.0, 50.0, 50.0, 50.0), record(90.0, 50.0, 50.0, 50.0)];
    let result = compute_aggregate_pattern_score(&records, &stats, timestamp());
    let success = result
        .metrics
        .iter()
        .find(|metric| metric.metric_name == MetricName::SuccessRate)
        .unwrap();
    assert_eq!(success.raw_value, 95.0);
    assert_eq!(success.modifier_type, ModifierKind::Bonus);
}

#[test]
fn apply_pattern_score_clamps_gate_final() {
    let neutral = compute_aggregate_pattern_score(&[], &GlobalPatternStats::default(), timestamp());

    let mut bonus = neutral.clone();
    bonus.pattern_modifier = 0.1;
    let gate = apply_pattern_score_to_gate("Determinism", GateStatus::Pass, 0.8, &bonus);
    assert_eq!(gate.final_score, 0.9);

    let mut big_bonus = neutral.clone();
    big_bonus.pattern_modifier = 0.2;
    let gate = apply_pattern_score_to_gate("Determinism", GateStatus::Pass, 0.95, &big_bonus);
    assert_eq!(gate.final_score, 1.0);

    let mut big_penalty = neutral;
    big_penalty.pattern_modifier = -0.4;
    let gate = apply_pattern_score_to_gate("Determinism", GateStatus::Fail, 0.05, &big_penalty);
    assert_eq!(gate.final_score, 0.0);
}

#[test]
fn rounding_helpers_truncate_to_fixed_places() {
    assert_eq!(round2(0.126), 0.13);
    assert_eq!(round2(0.124), 0.12);
    assert_eq!(round3(0.1234), 0.123);
    assert_eq!(round3(0.1238), 0.124);
}
