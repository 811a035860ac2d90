//! autoapprove-hook - auto-approve safe Bash commands, block dangerous ones
//!
//! A `PreToolUse` hook that classifies each proposed shell command as
//! deny, allow, or defer, using three ordered rule tables.
//!
//! # Features
//!
//! - **Dangerous patterns**: regex search anywhere in the command, always checked first
//! - **Safe prefixes / exact commands**: auto-approve common read-only and dev commands
//! - **Defer by default**: anything unmatched or unreadable goes to the normal permission prompt
//! - **User rules**: extra patterns and prefixes from TOML configuration
//! - **Audit logging**: JSONL log of all decisions, with secrets redacted
//!
//! # Example
//!
//! ```
//! use autoapprove_hook::{Classifier, HookInput};
//!
//! let classifier = Classifier::builtin().unwrap();
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"echo ok && rm -rf /"}}"#;
//! let hook_input = HookInput::from_json(input).unwrap();
//!
//! let decision = classifier.classify_input(&hook_input);
//! assert!(decision.is_deny());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod hook;
pub mod input;
pub mod output;
pub mod redact;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::Classifier;
pub use hook::HookOptions;
pub use input::HookInput;
pub use output::{Decision, HookOutput, Response};
