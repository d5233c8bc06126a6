use lsp_types::{Position, Range};
use rwl_toolchain_diagnostics::{LineIndex, Span};

/// Convert a byte offset to an LSP position through the line index.
///
/// Columns are byte columns. Valid instruction text is printable ASCII, so
/// the two agree; anything else already carries its own diagnostic.
pub fn position_at(index: &LineIndex, offset: usize) -> Position {
    let (line, col) = index.line_col(offset);
    Position {
        line: line as u32,
        character: col as u32,
    }
}

/// Convert a byte span to an LSP range.
pub fn span_to_range(index: &LineIndex, span: Span) -> Range {
    Range {
        start: position_at(index, span.start),
        end: position_at(index, span.end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_zero_indexed() {
        let index = LineIndex::new("a=b\nc=d");
        assert_eq!(position_at(&index, 0), Position::new(0, 0));
        assert_eq!(position_at(&index, 4), Position::new(1, 0));
        assert_eq!(position_at(&index, 6), Position::new(1, 2));
    }

    #[test]
    fn span_maps_to_range_on_one_line() {
        let index = LineIndex::new("first\nsecond");
        let range = span_to_range(&index, Span::new(6, 12));
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 6));
    }
}
