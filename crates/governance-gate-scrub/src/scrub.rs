// crates/governance-gate-scrub/src/scrub.rs
// ============================================================================
// Module: Scrub Engine
// Description: Text, object, and metric-record scrubbing plus PII probes.
// Purpose: Apply the redaction rule sets on every output path.
// Dependencies: crate::patterns, governance-gate-core, regex, serde_json
// ============================================================================

//! ## Overview
//! Scrubbing applies the default rules always, the extended rules when the
//! profile requests them, then any caller-supplied custom rules. Object
//! scrubbing walks nested JSON structures and redacts every string leaf.
//! [`validate_metric_privacy`] defines cleanliness operationally: a record
//! is clean when scrubbing its free-text fields changes nothing. Callers
//! must drop or quarantine records that fail validation, never proceed
//! silently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use governance_gate_core::MetricRecord;
use regex::Regex;
use serde_json::Map;
use serde_json::Value;

use crate::patterns::ScrubRule;
use crate::patterns::default_rules;
use crate::patterns::extended_rules;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Named rule-set selection for a scrub pass.
///
/// # Invariants
/// - Variants are stable for configuration surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternProfile {
    /// Default rules only.
    Basic,
    /// Default plus extended rules.
    #[default]
    Extended,
}

/// Caller-supplied custom redaction rule.
#[derive(Debug, Clone)]
pub struct CustomRule {
    /// Rule name for diagnostics.
    pub name: String,
    /// Compiled match pattern.
    pub regex: Regex,
    /// Replacement token.
    pub replacement: String,
}

/// Options controlling a scrub pass.
#[derive(Debug, Clone, Default)]
pub struct ScrubOptions {
    /// Selected rule profile.
    pub profile: PatternProfile,
    /// Custom rules applied after the shipped rule sets.
    pub custom: Vec<CustomRule>,
}

// ============================================================================
// SECTION: Text Scrubbing
// ============================================================================

/// Applies one rule set as ordered whole-text replacements.
fn apply_rules(text: &str, rules: &[ScrubRule]) -> String {
    let mut scrubbed = text.to_string();
    for rule in rules {
        scrubbed = rule.regex.replace_all(&scrubbed, rule.replacement).into_owned();
    }
    scrubbed
}

/// Scrubs PII from text according to the selected options.
#[must_use]
pub fn scrub_text(text: &str, options: &ScrubOptions) -> String {
    let mut scrubbed = apply_rules(text, default_rules());

    if options.profile == PatternProfile::Extended {
        scrubbed = apply_rules(&scrubbed, extended_rules());
    }

    for custom in &options.custom {
        scrubbed = custom
            .regex
            .replace_all(&scrubbed, custom.replacement.as_str())
            .into_owned();
    }

    scrubbed
}

/// Returns `true` when any shipped rule matches the text.
#[must_use]
pub fn contains_pii(text: &str) -> bool {
    default_rules()
        .iter()
        .chain(extended_rules().iter())
        .any(|rule| rule.regex.is_match(text))
}

// ============================================================================
// SECTION: Object Scrubbing
// ============================================================================

/// Recursively scrubs every string leaf in a JSON value.
///
/// Arrays and objects are walked; non-string leaves are left untouched.
#[must_use]
pub fn scrub_value(value: &Value, options: &ScrubOptions) -> Value {
    match value {
        Value::String(text) => Value::String(scrub_text(text, options)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| scrub_value(item, options)).collect())
        }
        Value::Object(fields) => {
            let mut scrubbed = Map::with_capacity(fields.len());
            for (key, field) in fields {
                scrubbed.insert(key.clone(), scrub_value(field, options));
            }
            Value::Object(scrubbed)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

/// Scrubs an audit mirror payload with the extended profile.
#[must_use]
pub fn scrub_audit_payload(payload: &Value) -> Value {
    scrub_value(payload, &ScrubOptions::default())
}

// ============================================================================
// SECTION: Metric Privacy Validation
// ============================================================================

/// Validates that a metric record's free-text fields carry no PII.
///
/// Validation is operational: the record is clean exactly when scrubbing
/// its tenant id, channel, and metric id is a no-op. A `false` return means
/// the record must be dropped or quarantined.
#[must_use]
pub fn validate_metric_privacy(record: &MetricRecord) -> bool {
    let options = ScrubOptions::default();

    let fields = [
        record.tenant_id.as_str(),
        record.channel.as_str(),
        record.metric_id.as_str(),
    ];
    fields.iter().all(|field| scrub_text(field, &options) == *field)
}
