// crates/governance-gate-scrub/src/patterns.rs
// ============================================================================
// Module: PII Pattern Tables
// Description: Compiled redaction rule sets with fixed replacement tokens.
// Purpose: Define the default and extended PII match rules in applied order.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Rule tables are compiled once on first use. The default set covers common
//! personal identifiers (email, international phone, credit card, SSN); the
//! extended set covers regional and infrastructure identifiers (NRIC, UUID
//! v4, AWS ARN, API keys, JWT, IPv4, access tokens). Within each set the
//! narrowest syntax appears first. Each rule replaces matches with a fixed
//! redaction token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// SECTION: Rule Definitions
// ============================================================================

/// A compiled PII redaction rule.
///
/// # Invariants
/// - `replacement` is a fixed token; rules never echo matched input.
#[derive(Debug)]
pub struct ScrubRule {
    /// Stable rule name.
    pub name: &'static str,
    /// Compiled match pattern.
    pub regex: Regex,
    /// Fixed redaction token.
    pub replacement: &'static str,
}

/// Default rule source table: (name, pattern, replacement).
///
/// SSN and credit card run before phone so digit groups are consumed by the
/// most specific rule first.
const DEFAULT_TABLE: &[(&str, &str, &str)] = &[
    ("email", r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b", "[EMAIL_REDACTED]"),
    ("ssn", r"\b\d{3}-\d{2}-\d{4}\b", "[SSN_REDACTED]"),
    (
        "credit_card",
        r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
        "[CARD_REDACTED]",
    ),
    (
        "phone",
        r"\+\d{1,3}(?:[-.\s]?\d{2,4}){2,4}|\(?\d{3}\)?[-.\s]\d{3}[-.\s]?\d{4}\b",
        "[PHONE_REDACTED]",
    ),
];

/// Extended rule source table: (name, pattern, replacement).
const EXTENDED_TABLE: &[(&str, &str, &str)] = &[
    (
        "jwt_token",
        r"eyJ[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}",
        "[JWT_REDACTED]",
    ),
    (
        "aws_arn",
        r"(?i)arn:aws:[a-z0-9-]+:[a-z0-9-]*:\d{12}:[a-zA-Z0-9/_-]+",
        "[AWS_ARN_REDACTED]",
    ),
    ("google_api_key", r"AIza[0-9A-Za-z_-]{35}", "[API_KEY_REDACTED]"),
    ("aws_access_key", r"AKIA[0-9A-Z]{16}", "[AWS_KEY_REDACTED]"),
    ("github_token", r"ghp_[a-zA-Z0-9]{36}", "[GITHUB_TOKEN_REDACTED]"),
    (
        "uuid_v4",
        r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}\b",
        "[UUID_REDACTED]",
    ),
    ("nric", r"\b\d{6}-\d{2}-\d{4}\b", "[NRIC_REDACTED]"),
    ("ipv4", r"\b(?:\d{1,3}\.){3}\d{1,3}\b", "[IP_REDACTED]"),
];

// ============================================================================
// SECTION: Compiled Rule Sets
// ============================================================================

/// Compiled default rules.
static DEFAULT_RULES: LazyLock<Vec<ScrubRule>> = LazyLock::new(|| compile_table(DEFAULT_TABLE));

/// Compiled extended rules.
static EXTENDED_RULES: LazyLock<Vec<ScrubRule>> = LazyLock::new(|| compile_table(EXTENDED_TABLE));

/// Compiles a rule source table, skipping any pattern that fails to compile.
///
/// All shipped patterns compile; the rule-count tests pin the tables so a
/// regression here cannot silently weaken coverage.
fn compile_table(table: &'static [(&'static str, &'static str, &'static str)]) -> Vec<ScrubRule> {
    table
        .iter()
        .filter_map(|(name, pattern, replacement)| {
            Regex::new(pattern).ok().map(|regex| ScrubRule {
                name,
                regex,
                replacement,
            })
        })
        .collect()
}

/// Returns the compiled default rule set in applied order.
#[must_use]
pub fn default_rules() -> &'static [ScrubRule] {
    &DEFAULT_RULES
}

/// Returns the compiled extended rule set in applied order.
#[must_use]
pub fn extended_rules() -> &'static [ScrubRule] {
    &EXTENDED_RULES
}

/// Returns the stable names of every shipped rule (default then extended).
#[must_use]
pub fn pattern_names() -> Vec<&'static str> {
    default_rules()
        .iter()
        .chain(extended_rules().iter())
        .map(|rule| rule.name)
        .collect()
}
