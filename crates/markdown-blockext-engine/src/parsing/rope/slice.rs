use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Text for a span on a single line, cut to at most `max` bytes with a "..." suffix.
///
/// Newlines are shown as `⏎` and the cut never splits a character.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let text = slice_to_string(rope, sp).replace('\n', "⏎");
    if text.len() <= max {
        return text;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let rope = Rope::from("hello");
        assert_eq!(preview(&rope, Span::new(0, 5), 10), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("hello world");
        assert_eq!(preview(&rope, Span::new(0, 11), 5), "hello...");
    }

    #[test]
    fn preview_marks_newlines() {
        let rope = Rope::from("# A\nbody");
        assert_eq!(preview(&rope, Span::new(0, 8), 40), "# A⏎body");
    }

    #[test]
    fn preview_does_not_split_characters() {
        let rope = Rope::from("héllo");
        assert_eq!(preview(&rope, Span::new(0, 6), 2), "h...");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }
}
