//! Instruction validation for RWL source text.
//!
//! [`line::validate_line`] checks a single instruction in isolation;
//! [`validate_source`] runs it over every scanned line of a document and
//! positions the resulting diagnostics.

pub use rwl_toolchain_diagnostics::Diagnostic;
use rwl_toolchain_diagnostics::Severity;
use serde::Serialize;

use crate::scan::scan_lines;

/// Shorthand for building a `BTreeMap<String, String>` context from
/// key-value pairs.
///
/// ```ignore
/// ctx!("keyword" => "(return)", "side" => "left")
/// ```
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Per-line validation checks.
pub mod line;

/// Result of validating an RWL document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// `true` if no errors were found.
    pub ok: bool,
    /// All diagnostics produced during validation, in source order.
    pub issues: Vec<Diagnostic>,
}

/// Validate a whole document.
///
/// Scans the text into instruction lines, validates each line
/// independently, and attaches the line's span to every issue it produced.
/// Total: malformed input yields diagnostics, never an error.
pub fn validate_source(text: &str) -> ValidationResult {
    let mut issues = Vec::new();
    for l in scan_lines(text) {
        let span = l.span();
        for diag in line::validate_line(l.text) {
            issues.push(diag.with_span(span));
        }
    }
    let ok = !issues
        .iter()
        .any(|d| matches!(d.severity, Severity::Error));
    ValidationResult { ok, issues }
}
