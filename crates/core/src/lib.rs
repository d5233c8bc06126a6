//! RWL toolchain core library.
//!
//! Provides scanning and validation of RWL rewrite-rule source text. The
//! main entry points are [`validate_source`] for whole documents and
//! [`validate_line`] for a single instruction line.

#![warn(missing_docs)]

/// Source text scanning into instruction lines.
pub mod scan;
/// Instruction validation.
pub mod validate;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Scanner
pub use scan::{Line, scan_lines};

// Validator
pub use validate::line::validate_line;
pub use validate::{ValidationResult, validate_source};

// Diagnostics (re-exported from the diagnostics crate)
pub use rwl_toolchain_diagnostics::{Diagnostic, LineIndex, Severity, Span, codes};
