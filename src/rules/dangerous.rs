//! Dangerous command patterns
//!
//! Matched with a regex search against the whole command text, so a
//! pattern embedded in a compound command (`echo ok && rm -rf /`) still
//! denies. Matching is case-sensitive and not anchored to word boundaries.

use crate::rules::DangerousPattern;

/// Built-in dangerous patterns, highest priority first
pub const DANGEROUS_PATTERNS: &[DangerousPattern] = &[
    DangerousPattern::new(r"rm\s+-rf\s+/", "recursive delete from root"),
    DangerousPattern::new(r"rm\s+-rf\s+~", "recursive delete of home"),
    DangerousPattern::new(r"mkfs\.", "format disk"),
    DangerousPattern::new(r"dd\s+if=", "raw disk write"),
    DangerousPattern::new(r">\s*/dev/sd", "overwrite disk device"),
    DangerousPattern::new(r"chmod\s+-R\s+777\s+/", "world-writable from root"),
    DangerousPattern::new(r"curl.*\|\s*sh", "curl piped to shell"),
    DangerousPattern::new(r"curl.*\|\s*bash", "curl piped to bash"),
    DangerousPattern::new(r"wget.*\|\s*sh", "wget piped to shell"),
    DangerousPattern::new(r"eval\s+.*\$\(", "eval with command substitution"),
    DangerousPattern::new(r"git\s+push.*--force\s+.*main", "force push to main"),
    DangerousPattern::new(r"git\s+push.*--force\s+.*master", "force push to master"),
    DangerousPattern::new(r"git\s+reset\s+--hard", "destructive git reset"),
    DangerousPattern::new(r"git\s+clean\s+-fd", "destructive git clean"),
];

/// Pattern strings of the built-in table, in priority order
pub fn builtin_patterns() -> impl Iterator<Item = &'static str> {
    DANGEROUS_PATTERNS.iter().map(|p| p.pattern)
}
