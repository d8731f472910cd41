// crates/governance-gate-scrub/src/lib.rs
// ============================================================================
// Module: Governance Gate PII Scrubber
// Description: Pattern-matching redaction for text, objects, and metric records.
// Purpose: Guarantee no personally identifiable information leaks into outputs.
// Dependencies: governance-gate-core, regex, serde_json
// ============================================================================

//! ## Overview
//! The scrubber maintains two named rule sets (default and extended) applied
//! as an ordered sequence of whole-text replacements. The rule order places
//! narrow, syntax-specific patterns ahead of broader ones so no pattern can
//! partially redact input that a later pattern would have matched whole.
//! Privacy validation is operational: input is clean exactly when scrubbing
//! it is a no-op.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod patterns;
pub mod scrub;

pub use patterns::ScrubRule;
pub use patterns::default_rules;
pub use patterns::extended_rules;
pub use patterns::pattern_names;
pub use scrub::CustomRule;
pub use scrub::PatternProfile;
pub use scrub::ScrubOptions;
pub use scrub::contains_pii;
pub use scrub::scrub_audit_payload;
pub use scrub::scrub_text;
pub use scrub::scrub_value;
pub use scrub::validate_metric_privacy;
