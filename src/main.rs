//! autoapprove-hook - PreToolUse hook that auto-approves safe Bash commands
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads JSON from stdin)
//! echo '{"tool_name":"Bash","tool_input":{"command":"git status"}}' | autoapprove-hook
//!
//! # Try a command against the rules
//! autoapprove-hook --check "git push --force origin main"
//! ```

use std::env;
use std::io;
use std::path::Path;
use std::process;

use autoapprove_hook::{
    audit::AuditLogger,
    config::{Config, DEFAULT_CONFIG_TOML},
    engine::Classifier,
    hook::{self, HookOptions},
    input::HookInput,
    output::Response,
};

/// Print version information
fn print_version() {
    println!("autoapprove-hook {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"autoapprove-hook - auto-approve safe Bash commands, block dangerous ones

USAGE:
    autoapprove-hook [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
    -n, --dry-run           Report decisions on stderr but never approve or block
        --check COMMAND     Classify COMMAND as a Bash call and print the verdict
        --list-rules        Print the active rules in priority order
        --print-config      Print the default configuration file

ENVIRONMENT:
    AUTOAPPROVE_DISABLED=1  Skip all checks (still logs)
    AUTOAPPROVE_DRY_RUN=1   Same as --dry-run

EXIT CODES:
    0   allowed (JSON on stdout) or no opinion (no output)
    2   blocked (reason on stderr)

USAGE AS HOOK:
    Configure in .claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{ "type": "command", "command": "autoapprove-hook" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    list_rules: bool,
    print_config: bool,
    config_path: Option<String>,
    check: Option<String>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            list_rules: false,
            print_config: false,
            config_path: None,
            check: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-n" | "--dry-run" => result.dry_run = true,
                "--list-rules" => result.list_rules = true,
                "--print-config" => result.print_config = true,
                flag @ ("-c" | "--config" | "--check") => {
                    let Some(value) = args.get(i + 1) else {
                        return Err(format!("{} requires a value", flag));
                    };
                    i += 1;
                    if flag == "--check" {
                        result.check = Some(value.clone());
                    } else {
                        result.config_path = Some(value.clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                arg if arg.starts_with("--check=") => {
                    result.check = Some(arg.trim_start_matches("--check=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        Ok(result)
    }
}

/// Build the classifier, falling back to built-in rules if user rules are invalid
fn build_classifier(config: &Config) -> Option<Classifier> {
    match Classifier::new(&config.rules) {
        Ok(classifier) => Some(classifier),
        Err(e) => {
            eprintln!("Warning: Invalid rule in config, using built-in rules: {}", e);
            Classifier::builtin()
                .map_err(|e| eprintln!("Error: Built-in rules failed to compile: {}", e))
                .ok()
        }
    }
}

fn print_rules(classifier: &Classifier) {
    println!("Dangerous patterns (deny):");
    for pattern in classifier.dangerous_patterns() {
        println!("    {}", pattern);
    }
    println!("Safe prefixes (allow):");
    for prefix in classifier.safe_prefixes() {
        println!("    {:?}", prefix);
    }
    println!("Safe exact commands (allow):");
    for exact in classifier.safe_exact() {
        println!("    {:?}", exact);
    }
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run with --help for usage");
        process::exit(1);
    });

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    if args.print_config {
        print!("{}", DEFAULT_CONFIG_TOML.trim_start());
        return;
    }

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    let classifier = build_classifier(&config);

    if args.list_rules {
        if let Some(ref classifier) = classifier {
            print_rules(classifier);
        }
        return;
    }

    if let Some(ref command) = args.check {
        let Some(ref classifier) = classifier else {
            process::exit(1);
        };
        let decision = classifier.classify_input(&HookInput::shell(command.as_str()));
        println!("{}: {}", decision.verdict(), decision.reason());
        process::exit(Response::from_decision(&decision).exit_code);
    }

    let options = HookOptions {
        dry_run: args.dry_run || env::var_os("AUTOAPPROVE_DRY_RUN").is_some(),
        disabled: env::var_os("AUTOAPPROVE_DISABLED").is_some(),
    };

    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    // Read the whole payload; a read failure is treated like empty input
    let raw = io::read_to_string(io::stdin()).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to read stdin: {}", e);
        String::new()
    });

    let response = hook::respond(&raw, classifier.as_ref(), options, &mut logger);
    process::exit(response.emit());
}
