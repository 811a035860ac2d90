//! Safe command rules
//!
//! Prefixes are literal: `"ls"` also approves `lsof`, and `"cat "` needs the
//! trailing space. Exact rules are checked only after every prefix missed.

/// Built-in safe prefixes, highest priority first
pub const SAFE_PREFIXES: &[&str] = &[
    // Git (read-only & safe operations)
    "git status",
    "git log",
    "git diff",
    "git branch",
    "git fetch",
    "git worktree",
    "git checkout",
    "git show",
    "git rev-parse",
    "git remote",
    "git stash list",
    "git tag",
    // npm
    "npm run",
    "npm test",
    "npm -w",
    "npm install",
    "npm uninstall",
    "npm remove",
    "npm ls",
    "npm list",
    "npm outdated",
    "npm audit",
    "npm run build",
    // npx
    "npx oxfmt",
    "npx oxlint",
    "npx tsc",
    "npx vue-tsc",
    "npx vitest",
    // Docker (inspection & exec)
    "docker ps",
    "docker logs",
    "docker exec",
    "docker compose exec",
    "docker compose ps",
    "docker compose logs",
    // GitHub CLI
    "gh pr",
    "gh issue",
    "gh release",
    "gh label",
    "gh api",
    "gh run",
    // Read-only filesystem & text tools
    "ls",
    "cat ",
    "head ",
    "tail ",
    "wc ",
    "find ",
    "grep ",
    "xargs grep",
    "xargs ",
    "sort ",
    "du ",
    "pwd",
    "which ",
    "file ",
    "stat ",
    "basename ",
    "dirname ",
    "realpath ",
    // Dev tools
    "ast-grep",
    "node -e",
    "python3",
    "jq ",
    "curl ",
    "sed ",
    "awk ",
    "echo ",
    "printf ",
    // Project-specific
    "touch .claude/i18n-bypass",
    "rm .claude/i18n-bypass",
    "magick",
    "terminal-notifier",
];

/// Built-in full-command matches
pub const SAFE_EXACT: &[&str] = &["pwd", "done", "npm test"];
