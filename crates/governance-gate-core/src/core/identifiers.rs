// crates/governance-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Governance Gate Identifiers
// Description: Canonical opaque identifiers and the fixed gate identifier set.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout the
//! governance engine. Tenant, channel, and metric identifiers are opaque
//! strings with stable wire forms. Gate identifiers are a closed enum
//! (`G13..G21`) carrying each gate's declared weight, which is a
//! configuration invariant: the nine weights sum to 1.0.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Opaque Identifiers
// ============================================================================

/// Tenant identifier scoped to metric observations.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new tenant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Delivery channel identifier for a metric observation.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Creates a new channel identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque metric observation identifier.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricId(String);

impl MetricId {
    /// Creates a new metric identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Gate Identifiers
// ============================================================================

/// Fixed governance gate identifier set.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - Declared weights sum to 1.0 across the full set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum GateId {
    /// Determinism and reproducibility.
    G13,
    /// Privacy by design.
    G14,
    /// Federation correctness.
    G15,
    /// CI evidence.
    G16,
    /// Key lifecycle.
    G17,
    /// Federation runtime.
    G18,
    /// Ledger automation.
    G19,
    /// Observability.
    G20,
    /// Genesis certification.
    G21,
}

/// All gate identifiers in evaluation order.
pub const ALL_GATE_IDS: [GateId; 9] = [
    GateId::G13,
    GateId::G14,
    GateId::G15,
    GateId::G16,
    GateId::G17,
    GateId::G18,
    GateId::G19,
    GateId::G20,
    GateId::G21,
];

impl GateId {
    /// Returns the gate's declared weight (fraction of 1.0 across all gates).
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::G13 | Self::G15 | Self::G16 | Self::G17 => 0.12,
            Self::G14 => 0.15,
            Self::G18 | Self::G19 | Self::G20 => 0.10,
            Self::G21 => 0.07,
        }
    }

    /// Returns the gate's human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::G13 => "Determinism & Reproducibility",
            Self::G14 => "Privacy by Design",
            Self::G15 => "Federation Correctness",
            Self::G16 => "CI Evidence",
            Self::G17 => "Key Lifecycle",
            Self::G18 => "Federation Runtime",
            Self::G19 => "Ledger Automation",
            Self::G20 => "Observatory",
            Self::G21 => "Genesis Certification",
        }
    }

    /// Returns a stable label for the gate identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::G13 => "G13",
            Self::G14 => "G14",
            Self::G15 => "G15",
            Self::G16 => "G16",
            Self::G17 => "G17",
            Self::G18 => "G18",
            Self::G19 => "G19",
            Self::G20 => "G20",
            Self::G21 => "G21",
        }
    }

    /// Returns the sum of declared weights over the full gate set.
    #[must_use]
    pub fn total_weight() -> f64 {
        ALL_GATE_IDS.iter().map(|gate| gate.weight()).sum()
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
