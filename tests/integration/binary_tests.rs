//! End-to-end tests of the stdin / stdout / exit-code contract

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

struct Hook {
    dir: TempDir,
}

impl Hook {
    /// Hook with audit logging into a temp dir, so tests never touch $HOME
    fn new() -> Self {
        Self::with_rules("")
    }

    fn with_rules(rules: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let audit = dir.path().join("audit.jsonl");
        let config = format!(
            "[general]\naudit_log = true\naudit_path = {:?}\n\n{}",
            audit.display().to_string(),
            rules
        );
        std::fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_autoapprove-hook"));
        cmd.arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .current_dir(self.dir.path())
            .env_remove("AUTOAPPROVE_DISABLED")
            .env_remove("AUTOAPPROVE_DRY_RUN");
        cmd
    }

    fn run_with(&self, mut cmd: Command, stdin: &str) -> Output {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
        child.wait_with_output().unwrap()
    }

    fn run(&self, stdin: &str) -> Output {
        self.run_with(self.command(), stdin)
    }

    fn audit_lines(&self) -> Vec<Value> {
        let path = self.dir.path().join("audit.jsonl");
        read_jsonl(&path)
    }
}

fn read_jsonl(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn bash(command: &str) -> String {
    serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": command },
        "session_id": "s-1",
        "hook_event_name": "PreToolUse",
    })
    .to_string()
}

#[test]
fn test_allow_writes_decision_json() {
    let hook = Hook::new();
    let output = hook.run(&bash("git status"));

    assert_eq!(output.status.code(), Some(0));
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "allow",
                "permissionDecisionReason": "Auto-approved: 'git status...'",
            }
        })
    );

    let audit = hook.audit_lines();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0]["level"], "ALLOWED");
    assert_eq!(audit[0]["session_id"], "s-1");
}

#[test]
fn test_deny_exits_two_with_reason() {
    let hook = Hook::new();
    let output = hook.run(&bash("echo safe && rm -rf /"));

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r"Blocked: command matched dangerous pattern 'rm\s+-rf\s+/'"));

    assert_eq!(hook.audit_lines()[0]["level"], "BLOCKED");
}

#[test]
fn test_defer_is_silent() {
    let hook = Hook::new();
    let output = hook.run(&bash("some-random-command --flag"));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert_eq!(hook.audit_lines()[0]["level"], "DEFERRED");
}

#[test]
fn test_malformed_input_defers() {
    let hook = Hook::new();
    for stdin in ["", "not json", r#"{"tool_name":"Bash","tool_input":{"command":["rm","-rf","/"]}}"#] {
        let output = hook.run(stdin);
        assert_eq!(output.status.code(), Some(0), "stdin {:?}", stdin);
        assert!(output.stdout.is_empty(), "stdin {:?}", stdin);
    }
}

#[test]
fn test_other_tool_defers() {
    let hook = Hook::new();
    let output = hook.run(r#"{"tool_name":"Write","tool_input":{"command":"rm -rf /"}}"#);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_disabled_env_never_blocks() {
    let hook = Hook::new();
    let mut cmd = hook.command();
    cmd.env("AUTOAPPROVE_DISABLED", "1");
    let output = hook.run_with(cmd, &bash("rm -rf /"));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(hook.audit_lines()[0]["level"], "DISABLED");
}

#[test]
fn test_dry_run_reports_without_blocking() {
    let hook = Hook::new();
    let mut cmd = hook.command();
    cmd.arg("--dry-run");
    let output = hook.run_with(cmd, &bash("git reset --hard"));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("would deny"));

    let audit = hook.audit_lines();
    assert_eq!(audit[0]["level"], "BLOCKED");
    assert_eq!(audit[0]["dry_run"], true);
}

#[test]
fn test_invalid_user_rule_falls_back_to_builtin() {
    let hook = Hook::with_rules("[rules]\ndangerous = [\"(oops\"]\n");
    let output = hook.run(&bash("rm -rf /"));
    assert_eq!(output.status.code(), Some(2));

    let output = hook.run(&bash("git log"));
    assert_eq!(output.status.code(), Some(0));
    assert!(!output.stdout.is_empty());
}

#[test]
fn test_check_flag() {
    let hook = Hook::new();

    let mut cmd = hook.command();
    cmd.args(["--check", "git push --force origin main"]);
    let output = hook.run_with(cmd, "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("deny: "));

    let mut cmd = hook.command();
    cmd.arg("--check=done");
    let output = hook.run_with(cmd, "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "allow: Auto-approved: exact match 'done'"
    );
}

#[test]
fn test_list_rules() {
    let hook = Hook::new();
    let mut cmd = hook.command();
    cmd.arg("--list-rules");
    let output = hook.run_with(cmd, "");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r"rm\s+-rf\s+/"));
    assert!(stdout.contains("\"terminal-notifier\""));
}

#[test]
fn test_flag_without_value_is_usage_error() {
    let hook = Hook::new();

    let mut cmd = hook.command();
    cmd.arg("--check");
    let output = hook.run_with(cmd, "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--check requires a value"));

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_autoapprove-hook"));
    cmd.arg("-c");
    let output = hook.run_with(cmd, "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("-c requires a value"));
}
