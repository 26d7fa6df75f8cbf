//! Closed vocabularies for choice-backed fields.
//!
//! These are data tables: extending a vocabulary is an edit here, not new
//! branching anywhere else.

/// Roles a jobber can hold.
pub const JOBBER_ROLES: &[&str] = &[
    "Supervisor",
    "Line Incharge",
    "Operator",
    "Helper",
    "Account",
    "Other",
];

pub const DEFAULT_JOBBER_ROLE: &str = "Operator";

/// Legal forms a firm can take.
pub const FIRM_TYPES: &[&str] = &["proprietorship", "partnership", "llp", "pvt_ltd"];

/// Finish applied to a finished material.
pub const FINISH_TYPES: &[&str] = &["dyed", "printed", "coated", "washed", "other"];

/// Categories of trim material.
pub const TRIM_TYPES: &[&str] = &[
    "Button", "Zipper", "Label", "Elastic", "Thread", "Hook", "Other",
];

/// Two-letter India state and union-territory codes.
pub const INDIA_STATE_CODES: &[&str] = &[
    "AN", "AP", "AR", "AS", "BR", "CH", "CG", "DN", "DL", "GA", "GJ", "HR", "HP", "JK", "JH",
    "KA", "KL", "LA", "LD", "MP", "MH", "MN", "ML", "MZ", "NL", "OR", "PB", "PY", "RJ", "SK",
    "TN", "TS", "TR", "UP", "UK", "WB",
];

pub fn contains(vocab: &[&str], value: &str) -> bool {
    vocab.iter().any(|v| *v == value)
}
