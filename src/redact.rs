//! Secret redaction for audit summaries
//!
//! Commands land in the audit log verbatim otherwise, and commands are
//! where tokens tend to get pasted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns and their replacement text
static SECRET_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // key=value style credentials
        (
            r#"(?i)(api[_-]?key|secret[_-]?key|access[_-]?token|auth[_-]?token)\s*[=:]\s*['"]?[A-Za-z0-9_\-]{16,}"#,
            "[REDACTED]",
        ),
        // AWS access key id
        (r"AKIA[0-9A-Z]{16}", "[REDACTED]"),
        // GitHub tokens
        (r"gh[pousr]_[A-Za-z0-9_]{36,}", "[REDACTED]"),
        (r"github_pat_[A-Za-z0-9_]{22,}", "[REDACTED]"),
        // Authorization headers
        (r"(?i)bearer\s+[A-Za-z0-9._\-]{16,}", "[REDACTED]"),
        // Inline passwords
        (r#"(?i)(password|passwd)\s*[=:]\s*['"][^'"]+['"]"#, "[REDACTED]"),
        // mysql -pSECRET; only the value after -p is replaced
        (
            r"(\b(?:mysql|mysqldump|mysqladmin)\b[^|;&\n]*?\s-p)[^\s-]\S*",
            "${1}[REDACTED]",
        ),
    ]
    .iter()
    .map(|(p, r)| (Regex::new(p).expect("built-in redaction pattern"), *r))
    .collect()
});

/// Replace secrets in text for logging
pub fn redact_secrets(text: &str) -> String {
    SECRET_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}
