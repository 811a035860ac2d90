//! Command classifier for autoapprove-hook
//!
//! Compiles the rule tables once and answers `classify` for each hook
//! invocation. Classification is pure: no I/O, no state between calls.

pub mod bash;

use crate::config::RulesConfig;
use crate::input::{HookInput, SHELL_TOOL};
use crate::output::Decision;
use crate::rules::{dangerous, safe};

use regex::RegexSet;
use std::collections::HashSet;

/// Compiled, immutable rule set
#[derive(Debug, Clone)]
pub struct Classifier {
    dangerous: RegexSet,
    dangerous_patterns: Vec<String>,
    safe_prefixes: Vec<String>,
    safe_exact: HashSet<String>,
}

impl Classifier {
    /// Build a classifier from configured rules
    ///
    /// Built-in tables come first (when enabled), user rules follow in the
    /// order given. Fails if any dangerous pattern is not a valid regex.
    pub fn new(rules: &RulesConfig) -> Result<Self, regex::Error> {
        let mut dangerous_patterns: Vec<String> = Vec::new();
        let mut safe_prefixes: Vec<String> = Vec::new();
        let mut safe_exact: HashSet<String> = HashSet::new();

        if rules.builtin {
            dangerous_patterns.extend(dangerous::builtin_patterns().map(String::from));
            safe_prefixes.extend(safe::SAFE_PREFIXES.iter().map(|p| p.to_string()));
            safe_exact.extend(safe::SAFE_EXACT.iter().map(|p| p.to_string()));
        }

        dangerous_patterns.extend(rules.dangerous.iter().cloned());
        // An empty prefix would approve everything
        safe_prefixes.extend(rules.safe_prefixes.iter().filter(|p| !p.is_empty()).cloned());
        safe_exact.extend(rules.safe_exact.iter().cloned());

        let dangerous = RegexSet::new(&dangerous_patterns)?;

        Ok(Self {
            dangerous,
            dangerous_patterns,
            safe_prefixes,
            safe_exact,
        })
    }

    /// Classifier with only the built-in tables
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::new(&RulesConfig::default())
    }

    /// Classify a proposed tool invocation
    ///
    /// Non-shell tools defer without evaluating any rule.
    pub fn classify(&self, tool_name: &str, command: &str) -> Decision {
        if tool_name != SHELL_TOOL {
            return Decision::Defer;
        }

        bash::check_command(
            command.trim(),
            &self.dangerous,
            &self.dangerous_patterns,
            &self.safe_prefixes,
            &self.safe_exact,
        )
    }

    /// Classify a parsed hook payload
    pub fn classify_input(&self, input: &HookInput) -> Decision {
        self.classify(&input.tool_name, input.command())
    }

    /// Dangerous patterns in priority order
    pub fn dangerous_patterns(&self) -> &[String] {
        &self.dangerous_patterns
    }

    /// Safe prefixes in priority order
    pub fn safe_prefixes(&self) -> &[String] {
        &self.safe_prefixes
    }

    /// Safe exact commands, sorted for display
    pub fn safe_exact(&self) -> Vec<&str> {
        let mut exact: Vec<&str> = self.safe_exact.iter().map(String::as_str).collect();
        exact.sort_unstable();
        exact
    }
}
