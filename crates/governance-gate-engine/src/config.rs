// crates/governance-gate-engine/src/config.rs
// ============================================================================
// Module: Engine Configuration
// Description: Validated configuration for the stateful scoring engine.
// Purpose: Pin the statistics staleness window for engine instances.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The engine's only tunable is the statistics staleness window: how long a
//! global statistics snapshot remains fresh before `needs_stats_refresh`
//! reports true. Validation rejects a zero window up front.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default statistics staleness window in seconds.
pub const DEFAULT_STATS_REFRESH_SECS: u64 = 300;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Engine configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineConfigError {
    /// The staleness window is zero.
    #[error("stats refresh window must be greater than zero seconds")]
    ZeroRefreshWindow,
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for a scoring engine instance.
///
/// # Invariants
/// - `stats_refresh_secs` is positive once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds before a statistics snapshot is considered stale.
    #[serde(default = "default_refresh_secs")]
    pub stats_refresh_secs: u64,
}

/// Returns the default staleness window in seconds.
const fn default_refresh_secs() -> u64 {
    DEFAULT_STATS_REFRESH_SECS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { stats_refresh_secs: DEFAULT_STATS_REFRESH_SECS }
    }
}

impl EngineConfig {
    /// Returns the staleness window as a duration.
    #[must_use]
    pub const fn refresh_window(&self) -> Duration {
        Duration::from_secs(self.stats_refresh_secs)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error when the staleness window is zero.
    pub const fn validate(&self) -> Result<(), EngineConfigError> {
        if self.stats_refresh_secs == 0 {
            return Err(EngineConfigError::ZeroRefreshWindow);
        }
        Ok(())
    }
}
