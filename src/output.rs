//! Decisions and the hook response contract
//!
//! `Allow` answers with a JSON permission decision on stdout, `Deny` exits 2
//! with the reason on stderr, and `Defer` stays silent so the host falls
//! back to its normal permission prompt.

use serde::Serialize;
use std::io::{self, Write};

use crate::rules::AllowKind;

/// Exit code the host treats as "block this tool call"
pub const EXIT_BLOCK: i32 = 2;

/// Main output structure for an approval
#[derive(Debug, Serialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Hook-specific output with permission decision
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    /// Always "PreToolUse"
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,

    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: String,
}

/// Classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A dangerous pattern matched; the pattern is the reason
    Deny { pattern: String },

    /// A safe prefix or exact rule matched
    Allow { rule: String, kind: AllowKind },

    /// No rule matched, or the tool is not the shell
    Defer,
}

impl Decision {
    /// Create a deny decision
    pub fn deny(pattern: impl Into<String>) -> Self {
        Decision::Deny {
            pattern: pattern.into(),
        }
    }

    /// Create an allow decision from a prefix rule
    pub fn allow_prefix(prefix: impl Into<String>) -> Self {
        Decision::Allow {
            rule: prefix.into(),
            kind: AllowKind::Prefix,
        }
    }

    /// Create an allow decision from an exact rule
    pub fn allow_exact(command: impl Into<String>) -> Self {
        Decision::Allow {
            rule: command.into(),
            kind: AllowKind::Exact,
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    pub fn is_defer(&self) -> bool {
        matches!(self, Decision::Defer)
    }

    /// The matched rule text, if any
    pub fn rule(&self) -> Option<&str> {
        match self {
            Decision::Deny { pattern } => Some(pattern),
            Decision::Allow { rule, .. } => Some(rule),
            Decision::Defer => None,
        }
    }

    /// Lowercase verdict name
    pub fn verdict(&self) -> &'static str {
        match self {
            Decision::Deny { .. } => "deny",
            Decision::Allow { .. } => "allow",
            Decision::Defer => "defer",
        }
    }

    /// Human-readable reason
    pub fn reason(&self) -> String {
        match self {
            Decision::Deny { pattern } => {
                format!("Blocked: command matched dangerous pattern '{}'", pattern)
            }
            Decision::Allow {
                rule,
                kind: AllowKind::Prefix,
            } => format!("Auto-approved: '{}...'", rule),
            Decision::Allow {
                rule,
                kind: AllowKind::Exact,
            } => format!("Auto-approved: exact match '{}'", rule),
            Decision::Defer => "no rule matched".to_string(),
        }
    }
}

impl HookOutput {
    /// Create an allow response with reason
    pub fn allow(reason: impl Into<String>) -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse".to_string(),
                permission_decision: "allow".to_string(),
                permission_decision_reason: reason.into(),
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// What the process writes and how it exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
}

impl Response {
    /// Silent success: the host's normal permission flow applies
    pub fn defer() -> Self {
        Response {
            stdout: None,
            stderr: None,
            exit_code: 0,
        }
    }

    /// Map a decision onto the hook contract
    pub fn from_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Deny { .. } => Response {
                stdout: None,
                stderr: Some(decision.reason()),
                exit_code: EXIT_BLOCK,
            },
            Decision::Allow { .. } => Response {
                stdout: Some(HookOutput::allow(decision.reason()).to_json()),
                stderr: None,
                exit_code: 0,
            },
            Decision::Defer => Response::defer(),
        }
    }

    /// Attach a diagnostic line without changing the outcome
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.stderr = Some(note.into());
        self
    }

    /// Write stdout/stderr parts and return the exit code
    pub fn emit(&self) -> i32 {
        if let Some(ref text) = self.stdout {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if writeln!(handle, "{}", text).and_then(|_| handle.flush()).is_err() {
                eprintln!("Warning: Failed to write hook output");
            }
        }
        if let Some(ref text) = self.stderr {
            eprintln!("{}", text);
        }
        self.exit_code
    }
}
