//! JSONL audit logging for autoapprove-hook
//!
//! Records every hook decision to a JSONL file for later review of what was
//! auto-approved and what was blocked.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::Decision;
use crate::redact::redact_secrets;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Deferred,
    Disabled,
    Error,
}

impl LogLevel {
    fn for_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Allow { .. } => LogLevel::Allowed,
            Decision::Deny { .. } => LogLevel::Blocked,
            Decision::Defer => LogLevel::Deferred,
        }
    }
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// Tool that was invoked (empty when the input could not be parsed)
    pub tool: String,

    /// Rule that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Redacted summary of the input
    pub input_summary: String,

    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Decision was computed but not enforced
    pub dry_run: bool,
}

impl AuditEntry {
    /// Create an entry for a classified input
    pub fn new(input: &HookInput, decision: &Decision, dry_run: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::for_decision(decision),
            tool: input.tool_name.clone(),
            rule: decision.rule().map(String::from),
            input_summary: redact_secrets(&input.summary()),
            reason: decision.reason(),
            session_id: input.session_id.clone(),
            dry_run,
        }
    }

    /// Create an entry for an input that was not classified
    pub fn disabled(input: &HookInput) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Disabled,
            tool: input.tool_name.clone(),
            rule: None,
            input_summary: redact_secrets(&input.summary()),
            reason: "AUTOAPPROVE_DISABLED".to_string(),
            session_id: input.session_id.clone(),
            dry_run: false,
        }
    }

    /// Create an entry for unreadable input
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            tool: String::new(),
            rule: None,
            input_summary: String::new(),
            reason: reason.into(),
            session_id: None,
            dry_run: false,
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Warning: Failed to create {}: {}", parent.display(), e);
                }
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .map_err(|e| eprintln!("Warning: Failed to open audit log {}: {}", p.display(), e))
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a decision
    pub fn log_decision(
        &mut self,
        input: &HookInput,
        decision: &Decision,
        dry_run: bool,
    ) -> Result<(), std::io::Error> {
        self.log(&AuditEntry::new(input, decision, dry_run))
    }
}
