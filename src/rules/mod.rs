//! Rule tables for autoapprove-hook
//!
//! Three ordered tables drive every decision: dangerous patterns (deny),
//! safe prefixes (allow), and safe exact commands (allow). Order within a
//! table is priority order.

pub mod dangerous;
pub mod safe;

/// A regex whose match anywhere in a command forces denial
#[derive(Debug, Clone, Copy)]
pub struct DangerousPattern {
    /// Regex pattern, searched (not anchored) in the trimmed command
    pub pattern: &'static str,

    /// Short human-readable description, shown by `--list-rules`
    pub description: &'static str,
}

impl DangerousPattern {
    /// Create a new dangerous pattern
    pub const fn new(pattern: &'static str, description: &'static str) -> Self {
        Self {
            pattern,
            description,
        }
    }
}

/// Which kind of allow rule produced an approval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowKind {
    /// Command starts with the rule text
    Prefix,

    /// Command equals the rule text
    Exact,
}
