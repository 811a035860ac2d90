//! One hook run: raw stdin in, `Response` out
//!
//! Unreadable input never fails the host. Empty, malformed, or wrongly
//! shaped payloads all defer to the normal permission flow.

use crate::audit::{AuditEntry, AuditLogger};
use crate::engine::Classifier;
use crate::input::HookInput;
use crate::output::{Decision, Response};

/// Runtime switches that come from flags or the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct HookOptions {
    /// Classify and audit, but always defer
    pub dry_run: bool,

    /// Skip classification entirely
    pub disabled: bool,
}

/// Handle one raw hook payload
pub fn respond(
    raw: &str,
    classifier: Option<&Classifier>,
    options: HookOptions,
    logger: &mut AuditLogger,
) -> Response {
    if raw.trim().is_empty() {
        audit(logger, &AuditEntry::error("empty input"));
        return Response::defer();
    }

    let input = match HookInput::from_json(raw) {
        Ok(input) => input,
        Err(e) => {
            audit(logger, &AuditEntry::error(format!("failed to parse input: {}", e)));
            return Response::defer();
        }
    };

    if options.disabled {
        audit(logger, &AuditEntry::disabled(&input));
        return Response::defer();
    }

    let Some(classifier) = classifier else {
        audit(logger, &AuditEntry::error("no usable rule set"));
        return Response::defer();
    };

    let decision = classifier.classify_input(&input);
    if let Err(e) = logger.log_decision(&input, &decision, options.dry_run) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    if options.dry_run {
        return dry_run_response(&decision);
    }

    Response::from_decision(&decision)
}

fn dry_run_response(decision: &Decision) -> Response {
    if decision.is_defer() {
        return Response::defer();
    }
    Response::defer().with_note(format!(
        "[autoapprove dry-run] would {}: {}",
        decision.verdict(),
        decision.reason()
    ))
}

fn audit(logger: &mut AuditLogger, entry: &AuditEntry) {
    if let Err(e) = logger.log(entry) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }
}
