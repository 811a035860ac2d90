//! Input parsing for the PreToolUse hook JSON format
//!
//! Only `tool_name`, `tool_input.command` and `tool_input.file_path` feed any
//! rule; everything else in the payload is kept for audit logging or ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Tool name the host uses for shell command execution
pub const SHELL_TOOL: &str = "Bash";

/// One hook invocation, read once from stdin
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Write")
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific parameters, kept as raw JSON
    #[serde(default, deserialize_with = "object_or_empty")]
    pub tool_input: Map<String, Value>,

    /// Optional session identifier
    #[serde(default, deserialize_with = "string_or_none")]
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default, deserialize_with = "string_or_none")]
    pub hook_event_name: Option<String>,
}

/// `tool_input` that is not an object (null, string, ...) reads as empty
fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Audit-only fields never reject the payload; non-strings read as absent
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a shell invocation directly, as `--check` does
    pub fn shell(command: impl Into<String>) -> Self {
        let mut tool_input = Map::new();
        tool_input.insert("command".to_string(), Value::String(command.into()));
        Self {
            tool_name: SHELL_TOOL.to_string(),
            tool_input,
            session_id: None,
            hook_event_name: None,
        }
    }

    /// Whether this invocation targets the shell tool
    pub fn is_shell(&self) -> bool {
        self.tool_name == SHELL_TOOL
    }

    /// The `command` field; missing or non-string reads as empty
    pub fn command(&self) -> &str {
        self.string_field("command")
    }

    /// The `file_path` field; missing or non-string reads as empty
    pub fn file_path(&self) -> &str {
        self.string_field("file_path")
    }

    fn string_field(&self, key: &str) -> &str {
        self.tool_input
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        if self.is_shell() {
            let command = self.command().trim();
            let truncated: String = command.chars().take(100).collect();
            if truncated.len() < command.len() {
                format!("Bash: {}...", truncated)
            } else {
                format!("Bash: {}", truncated)
            }
        } else if !self.file_path().is_empty() {
            format!("{}: {}", self.tool_name, self.file_path())
        } else if self.tool_name.is_empty() {
            "unknown tool".to_string()
        } else {
            self.tool_name.clone()
        }
    }
}
