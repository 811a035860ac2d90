//! Configuration loading for autoapprove-hook
//!
//! Supports TOML configuration with embedded defaults. User rules extend the
//! built-in tables; they are appended, so built-in priority never changes.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: Some("~/.claude/autoapprove/audit.jsonl".to_string()),
        }
    }
}

/// Rule table extensions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Include the built-in tables
    pub builtin: bool,

    /// Extra dangerous regexes, checked after the built-ins
    pub dangerous: Vec<String>,

    /// Extra safe prefixes, checked after the built-ins
    pub safe_prefixes: Vec<String>,

    /// Extra safe full commands
    pub safe_exact: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            dangerous: Vec::new(),
            safe_prefixes: Vec::new(),
            safe_exact: Vec::new(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub rules: RulesConfig,
}

impl Config {
    /// Standard config locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        [
            // Project config
            Some(PathBuf::from(".claude/autoapprove.toml")),
            // User config
            dirs::home_dir().map(|p| p.join(".claude/autoapprove/config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load configuration from the first standard location, or use defaults
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Audit log path (expanded), if logging is enabled
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
audit_path = "~/.claude/autoapprove/audit.jsonl"

[rules]
builtin = true
dangerous = []
safe_prefixes = []
safe_exact = []
"#;
