use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::content::ContentView;
use crate::parsing::blocks::types::{BlockKind, NewBlock};

/// An ATX heading line. Offsets are byte positions within the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSig {
    pub level: u8,
    pub text_start: usize,
    pub text_end: usize,
}

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// `start` is where the line's indent ends.
    pub fn sig(text: &str, start: usize) -> Option<HeadingSig> {
        let rest = &text[start..];
        let level = rest.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }

        let after = &rest[level..];
        if !(after.is_empty() || after.starts_with([' ', '\t'])) {
            return None;
        }

        let text_start = start + level + (after.len() - after.trim_start().len());
        let mut body = text[text_start..].trim_end();
        // Closing sequence: a run of `#` that is the whole body or follows whitespace.
        let without_closer = body.trim_end_matches(Self::MARKER);
        if without_closer.is_empty() || without_closer.ends_with([' ', '\t']) {
            body = without_closer.trim_end();
        }

        Some(HeadingSig {
            level: level as u8,
            text_start,
            text_end: text_start + body.len(),
        })
    }

    pub fn text<'a>(line: &'a LineClass, sig: &HeadingSig) -> &'a str {
        &line.text[sig.text_start..sig.text_end]
    }

    pub fn block(line: &LineClass, sig: &HeadingSig) -> NewBlock {
        NewBlock {
            kind: BlockKind::Heading {
                level: sig.level,
                text: Self::text(line, sig).to_string(),
            },
            span: line.line,
            line: line.number,
            column: line.content_start,
            content: ContentView::Contiguous(line.span_of(sig.text_start, sig.text_end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Intro", Some((1, "Intro")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", Some((1, "")))]
    #[case("## Closed ##", Some((2, "Closed")))]
    #[case("# C#", Some((1, "C#")))]
    #[case("# #", Some((1, "")))]
    #[case("#\tTabbed  ", Some((1, "Tabbed")))]
    fn parses_atx_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        let got = Heading::sig(line, 0).map(|s| (s.level, &line[s.text_start..s.text_end]));
        assert_eq!(got, expected);
    }

    #[test]
    fn offsets_respect_indent() {
        let sig = Heading::sig("  ## Deep", 2).unwrap();
        assert_eq!((sig.level, sig.text_start, sig.text_end), (2, 5, 9));
    }
}
