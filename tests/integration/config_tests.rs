//! Integration tests for user rule configuration

use std::io::Write;

use autoapprove_hook::{Classifier, Config};
use tempfile::NamedTempFile;

fn classifier_from(toml: &str) -> Classifier {
    let config = Config::from_toml(toml).unwrap();
    Classifier::new(&config.rules).unwrap()
}

#[test]
fn test_user_deny_beats_builtin_prefix() {
    // "npm run" is a built-in safe prefix, but deny is checked first
    let classifier = classifier_from(
        r#"
        [rules]
        dangerous = ["npm\\s+run\\s+db:reset"]
        "#,
    );
    assert!(classifier.classify("Bash", "npm run db:reset").is_deny());
    assert!(classifier.classify("Bash", "npm run build").is_allow());
}

#[test]
fn test_builtin_prefix_keeps_priority() {
    let classifier = classifier_from(
        r#"
        [rules]
        safe_prefixes = ["git"]
        "#,
    );
    let decision = classifier.classify("Bash", "git status");
    assert_eq!(decision.rule(), Some("git status"));

    let decision = classifier.classify("Bash", "git commit -m x");
    assert_eq!(decision.rule(), Some("git"));
}

#[test]
fn test_builtin_disabled_uses_only_user_rules() {
    let classifier = classifier_from(
        r#"
        [rules]
        builtin = false
        safe_prefixes = ["cargo "]
        safe_exact = ["make"]
        "#,
    );
    assert!(classifier.classify("Bash", "cargo build").is_allow());
    assert!(classifier.classify("Bash", "make").is_allow());
    assert!(classifier.classify("Bash", "git status").is_defer());
    assert!(classifier.classify("Bash", "rm -rf /").is_defer());
}

#[test]
fn test_invalid_user_regex_rejected() {
    let config = Config::from_toml(
        r#"
        [rules]
        dangerous = ["[unterminated"]
        "#,
    )
    .unwrap();
    assert!(Classifier::new(&config.rules).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[general]
audit_log = false

[rules]
safe_exact = ["make test"]
"#
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert!(config.audit_path().is_none());

    let classifier = Classifier::new(&config.rules).unwrap();
    assert!(classifier.classify("Bash", "make test").is_allow());
}
