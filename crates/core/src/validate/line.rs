//! The per-line instruction checker.
//!
//! An instruction is a rewrite rule `LEFT=RIGHT`. `#` starts a comment, and
//! the four keyword tokens `(return)`, `(start)`, `(end)`, `(once)` are
//! meaningful only at the very start of a side. Checks are additive rather
//! than short-circuiting, so one pass can surface several problems at once;
//! the single exception is the equal-sign count, which is a structural
//! precondition for everything after it.

use rwl_toolchain_diagnostics::{Diagnostic, codes};
use std::collections::BTreeMap;

/// Keyword tokens and the single-character markers substituted for them.
///
/// `#` cannot occur in instruction text (it always starts a comment), so a
/// marker is unambiguous after substitution.
const KEYWORD_MARKERS: &[(&str, &str)] = &[
    ("(return)", "#r"),
    ("(start)", "#s"),
    ("(end)", "#e"),
    ("(once)", "#o"),
];

/// Substitute every keyword token in one side with its marker.
fn normalize_side(side: &str) -> String {
    let mut out = side.to_string();
    for (token, marker) in KEYWORD_MARKERS {
        out = out.replace(token, marker);
    }
    out
}

/// True if the character is printable ASCII (0x20–0x7E).
fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Validate one instruction line.
///
/// Pure, deterministic, and total. The returned diagnostics carry no span
/// (callers position them) and their order is the order the checks run.
/// An empty list means the line is valid.
pub fn validate_line(line: &str) -> Vec<Diagnostic> {
    let mut issues = Vec::new();

    // Everything from the first comment marker onward is ignored, then all
    // whitespace is dropped from what remains.
    let instruction = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let expr: String = instruction.chars().filter(|c| !c.is_whitespace()).collect();

    // Blank and comment-only lines are valid.
    if expr.is_empty() {
        return issues;
    }

    if !expr.chars().all(is_printable_ascii) {
        issues.push(Diagnostic::error(
            codes::NON_ASCII,
            "Instruction cannot contain non-ascii characters.",
            None,
        ));
    }

    let sides: Vec<&str> = expr.split('=').collect();
    if sides.len() != 2 {
        issues.push(
            Diagnostic::error(
                codes::EQUAL_SIGN_COUNT,
                "Each instruction must include exactly one equal sign.",
                None,
            )
            .with_context(ctx!("equal_signs" => (sides.len() - 1).to_string())),
        );
        // Without exactly two sides none of the remaining checks apply.
        return issues;
    }

    let left = normalize_side(sides[0]);
    let right = normalize_side(sides[1]);
    let both = [left.as_str(), right.as_str()];

    // Parentheses surviving substitution belong to no keyword. The two
    // checks are independent and may both fire.
    if both.iter().any(|s| s.contains('(')) {
        issues.push(Diagnostic::error(codes::STRAY_OPEN_PAREN, "( is invalid.", None));
    }
    if both.iter().any(|s| s.contains(')')) {
        issues.push(Diagnostic::error(codes::STRAY_CLOSE_PAREN, ") is invalid.", None));
    }

    if both.iter().any(|s| s.matches('#').count() > 1) {
        issues.push(Diagnostic::error(
            codes::KEYWORD_COUNT,
            "Each side cannot contain more than one keyword.",
            None,
        ));
    }
    if both
        .iter()
        .any(|s| s.match_indices('#').any(|(pos, _)| pos > 0))
    {
        issues.push(Diagnostic::error(
            codes::KEYWORD_POSITION,
            "Keywords must occur at the start of left side or right side.",
            None,
        ));
    }

    // Placement rules. (start) and (end) have no side restriction and no
    // exclusivity rule of their own.
    if left.starts_with("#r") {
        issues.push(
            Diagnostic::error(
                codes::RETURN_SIDE,
                "(return) is allowed only in right side.",
                None,
            )
            .with_context(ctx!("keyword" => "(return)", "side" => "left")),
        );
    }
    if right.starts_with("#o") {
        issues.push(
            Diagnostic::error(
                codes::ONCE_SIDE,
                "(once) is allowed only in left side.",
                None,
            )
            .with_context(ctx!("keyword" => "(once)", "side" => "right")),
        );
    }
    if left.starts_with("#o") && right.starts_with('#') {
        issues.push(Diagnostic::error(
            codes::ONCE_EXCLUSIVE,
            "(once) and another keyword cannot be used at the same time.",
            None,
        ));
    }
    if right.starts_with("#r") && left.starts_with('#') {
        issues.push(Diagnostic::error(
            codes::RETURN_EXCLUSIVE,
            "(return) and another keyword cannot be used at the same time.",
            None,
        ));
    }

    issues
}
