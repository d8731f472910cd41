// crates/governance-gate-core/src/core/proofs.rs
// ============================================================================
// Module: Proof Document Shapes
// Description: Read-only proof artifact formats consumed by gate rules.
// Purpose: Mirror the external proof-file wire formats with lenient parsing.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Proof documents are read-only inputs produced by external systems and
//! loaded by file-name convention. Parsing is lenient: unknown fields are
//! ignored and optional fields default, so partially-populated documents
//! still parse. A document that fails to parse at all degrades to an absent
//! context field upstream; absence is a normal, non-error state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Key Rotation Proof
// ============================================================================

/// Key rotation urgency classification.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyUrgency {
    /// Rotation is not yet due.
    Ok,
    /// Rotation is approaching the warning window.
    Warning,
    /// Rotation is overdue-adjacent and must be scheduled.
    Critical,
    /// Rotation deadline has passed.
    Overdue,
}

impl KeyUrgency {
    /// Returns `true` when the key demands immediate rotation attention.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical | Self::Overdue)
    }
}

/// Rotation policy declared by the key registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationPolicy {
    /// Maximum key age in days.
    pub max_age_days: u32,
    /// Days before rotation at which warnings begin.
    pub warning_days: u32,
    /// Grace period in days after the rotation deadline.
    pub grace_period_days: u32,
}

/// Active key entry in the rotation proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveKey {
    /// Key identifier.
    pub kid: String,
    /// Key scope label.
    pub scope: String,
    /// Signing algorithm label.
    pub algorithm: String,
    /// Key creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Scheduled rotation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub rotates_at: OffsetDateTime,
    /// Days remaining until rotation.
    pub days_until_rotation: i64,
    /// Rotation urgency.
    pub urgency: KeyUrgency,
}

/// Retired key entry in the rotation proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetiredKey {
    /// Key identifier.
    pub kid: String,
    /// Key scope label.
    pub scope: String,
    /// Retirement timestamp when recorded.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub retired_at: Option<OffsetDateTime>,
}

/// Key rotation proof document (`security_key_rotation_v1.json`).
///
/// # Invariants
/// - Read-only; never produced or mutated by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRotationProof {
    /// Declared rotation policy when present.
    #[serde(default)]
    pub rotation_policy: Option<RotationPolicy>,
    /// Currently active keys.
    #[serde(default)]
    pub active_keys: Vec<ActiveKey>,
    /// Retired keys.
    #[serde(default)]
    pub retired_keys: Vec<RetiredKey>,
}

// ============================================================================
// SECTION: Tower Receipt Proof
// ============================================================================

/// Receipt verification status.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    /// Receipt uploaded, awaiting acknowledgment.
    Pending,
    /// Receipt acknowledged by the tower.
    Received,
    /// Receipt verified against the echo root.
    Verified,
    /// Receipt rejected.
    Rejected,
}

/// Manifest file entry with its content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// File path within the sealed artifact set.
    pub path: String,
    /// Hex-encoded SHA-256 digest (64 characters when complete).
    pub sha256: String,
}

impl ManifestFile {
    /// Returns `true` when the digest is a complete 64-character hex string.
    #[must_use]
    pub fn has_complete_hash(&self) -> bool {
        self.sha256.len() == 64 && self.sha256.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

/// Sealed manifest within the receipt proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptManifest {
    /// Manifest schema version.
    pub version: String,
    /// Files covered by the manifest.
    #[serde(default)]
    pub files: Vec<ManifestFile>,
    /// Merkle root over the file digests.
    #[serde(default)]
    pub merkle_root: Option<String>,
}

/// Signature block within the receipt proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSignatures {
    /// Factory-side seal signature.
    #[serde(default)]
    pub factory_signature: Option<String>,
    /// Tower-side co-signature when present.
    #[serde(default)]
    pub tower_signature: Option<String>,
    /// Tower signing key identifier when present.
    #[serde(default)]
    pub tower_kid: Option<String>,
}

/// Tower receipt proof document (`tower_receipt_v1.json`).
///
/// # Invariants
/// - Read-only; never produced or mutated by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerReceiptProof {
    /// Receipt identifier.
    pub receipt_id: String,
    /// Canonical manifest hash.
    #[serde(default)]
    pub manifest_hash: Option<String>,
    /// Echo root published by the tower.
    #[serde(default)]
    pub echo_root: Option<String>,
    /// Upload timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
    /// Verification timestamp when verified.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub verified_at: Option<OffsetDateTime>,
    /// Receipt verification status.
    pub status: ReceiptStatus,
    /// Sealed manifest.
    pub manifest: ReceiptManifest,
    /// Signature block.
    #[serde(default)]
    pub signatures: Option<ReceiptSignatures>,
}

// ============================================================================
// SECTION: Runtime Statistics Documents
// ============================================================================

/// Nonce store statistics document (`nonce_stats_v1.json`).
///
/// # Invariants
/// - `replay_rate` is a fraction in [0,1] reported by the nonce store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceStats {
    /// Currently active nonces.
    pub active_nonces: u64,
    /// Expired nonces.
    pub expired_nonces: u64,
    /// Active nonce counts keyed by context label.
    #[serde(default)]
    pub by_context: BTreeMap<String, u64>,
    /// Observed replay rate.
    pub replay_rate: f64,
}

/// Alerting coverage document (`alert_metrics_v1.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMetrics {
    /// Currently firing alerts.
    pub active_alerts: u64,
    /// Firing critical alerts.
    pub critical_alerts: u64,
    /// Firing warning alerts.
    pub warning_alerts: u64,
    /// Fraction of monitored surfaces with alert coverage, in [0,100].
    pub alert_coverage: f64,
}
