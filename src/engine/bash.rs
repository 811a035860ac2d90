//! Bash command rule evaluation
//!
//! Three stages in fixed order: dangerous patterns, safe prefixes, safe
//! exact commands. The first stage to produce a decision wins.

use crate::output::Decision;

use regex::RegexSet;
use std::collections::HashSet;

/// Evaluate a trimmed command against the compiled rules
pub fn check_command(
    command: &str,
    dangerous: &RegexSet,
    dangerous_patterns: &[String],
    safe_prefixes: &[String],
    safe_exact: &HashSet<String>,
) -> Decision {
    // 1. Deny always takes precedence
    if let Some(decision) = check_dangerous(command, dangerous, dangerous_patterns) {
        return decision;
    }

    // 2. Safe prefixes, first listed wins
    if let Some(decision) = check_prefixes(command, safe_prefixes) {
        return decision;
    }

    // 3. Full-command matches
    if let Some(decision) = check_exact(command, safe_exact) {
        return decision;
    }

    Decision::Defer
}

/// Highest-priority dangerous pattern found anywhere in the command
fn check_dangerous(command: &str, rules: &RegexSet, patterns: &[String]) -> Option<Decision> {
    // SetMatches iterates indices in ascending order
    let idx = rules.matches(command).iter().next()?;
    patterns.get(idx).map(|p| Decision::deny(p.as_str()))
}

fn check_prefixes(command: &str, prefixes: &[String]) -> Option<Decision> {
    prefixes
        .iter()
        .find(|prefix| command.starts_with(prefix.as_str()))
        .map(|prefix| Decision::allow_prefix(prefix.as_str()))
}

fn check_exact(command: &str, exact: &HashSet<String>) -> Option<Decision> {
    exact
        .get(command)
        .map(|cmd| Decision::allow_exact(cmd.as_str()))
}
