use xi_rope::Rope;

use super::span::Span;

/// A single line of the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 0-based line number.
    pub number: usize,
    /// Byte span of this line, newline included.
    pub span: Span,
    pub text: String,
}

/// Iterates over the rope's lines with their numbers and byte spans.
///
/// Uses `lines_raw` so that newline bytes stay inside the spans.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(number, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_and_keeps_newlines() {
        let rope = Rope::from("# A\n\ntext");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number, 0);
        assert_eq!(lines[0].span, Span::new(0, 4));
        assert_eq!(lines[1].text, "\n");
        assert_eq!(lines[2].number, 2);
        assert_eq!(lines[2].span, Span::new(5, 9));
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }
}
