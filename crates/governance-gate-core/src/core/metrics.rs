// crates/governance-gate-core/src/core/metrics.rs
// ============================================================================
// Module: Tenant Metric Observations
// Description: Immutable tenant-channel metric records and tracked metric names.
// Purpose: Provide the input shape for pattern statistics and scoring.
// Dependencies: crate::core::identifiers, serde, time
// ============================================================================

//! ## Overview
//! A [`MetricRecord`] is one tenant-channel observation of the four tracked
//! operational metrics. Records are immutable once recorded. [`MetricName`]
//! is the closed set of tracked metrics and carries each metric's natural
//! direction (`lower_is_better`), so downstream ranking can normalize every
//! metric into a single higher-is-better space.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::identifiers::ChannelId;
use crate::core::identifiers::MetricId;
use crate::core::identifiers::TenantId;

// ============================================================================
// SECTION: Tracked Metric Names
// ============================================================================

/// Tracked metric names for pattern analysis.
///
/// # Invariants
/// - Variants are stable for serialization and stats lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    /// Delivery success rate in [0,1]; higher is better.
    SuccessRate,
    /// Retry rate in [0,1]; lower is better.
    RetryRate,
    /// Dead-letter queue depth; lower is better.
    DlqDepth,
    /// Average delivery jitter in milliseconds; lower is better.
    JitterMsAvg,
}

/// All tracked metric names in scoring order.
pub const ALL_METRIC_NAMES: [MetricName; 4] = [
    MetricName::SuccessRate,
    MetricName::RetryRate,
    MetricName::DlqDepth,
    MetricName::JitterMsAvg,
];

impl MetricName {
    /// Returns `true` when lower raw values indicate better behavior.
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        match self {
            Self::SuccessRate => false,
            Self::RetryRate | Self::DlqDepth | Self::JitterMsAvg => true,
        }
    }

    /// Returns a stable label for the metric name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuccessRate => "success_rate",
            Self::RetryRate => "retry_rate",
            Self::DlqDepth => "dlq_depth",
            Self::JitterMsAvg => "jitter_ms_avg",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Metric Records
// ============================================================================

/// One tenant-channel metric observation.
///
/// # Invariants
/// - Immutable once recorded.
/// - Identifier fields are free text and must pass privacy validation before
///   scoring (see the scrubber crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Observation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
    /// Tenant identifier.
    pub tenant_id: TenantId,
    /// Delivery channel identifier.
    pub channel: ChannelId,
    /// Delivery success rate in [0,1].
    pub success_rate: f64,
    /// Retry rate in [0,1].
    pub retry_rate: f64,
    /// Dead-letter queue depth.
    pub dlq_depth: f64,
    /// Average delivery jitter in milliseconds.
    pub jitter_ms_avg: f64,
    /// Opaque metric identifier.
    pub metric_id: MetricId,
}

impl MetricRecord {
    /// Returns the raw value for a tracked metric name.
    #[must_use]
    pub const fn value(&self, name: MetricName) -> f64 {
        match name {
            MetricName::SuccessRate => self.success_rate,
            MetricName::RetryRate => self.retry_rate,
            MetricName::DlqDepth => self.dlq_depth,
            MetricName::JitterMsAvg => self.jitter_ms_avg,
        }
    }
}
