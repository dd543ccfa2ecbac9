//! Content projection for blocks whose lines carry a prefix.
//!
//! Alert lines start with `!`; the inline pass must only see what follows it.

use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// One physical line of a prefixed block.
///
/// # Invariants
///
/// - `raw_line.start <= prefix.start`
/// - `prefix.end <= content.start`
/// - `content.end <= raw_line.end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the rope.
    pub raw_line: Span,
    /// The block's marker on this line (e.g. `! `).
    pub prefix: Span,
    /// Remainder after the prefix, without the newline.
    pub content: Span,
}

/// How a block's meaningful content is laid out in the rope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// A single span, no per-line prefixes.
    Contiguous(Span),
    /// Non-contiguous content; every line has its own prefix.
    Lines(Vec<ContentLine>),
}

impl ContentView {
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        matches!(self, ContentView::Contiguous(_))
    }

    /// Content spans in document order.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        let (single, lines) = match self {
            ContentView::Contiguous(span) => (Some(*span), &[][..]),
            ContentView::Lines(lines) => (None, lines.as_slice()),
        };
        single.into_iter().chain(lines.iter().map(|l| l.content))
    }

    /// The "without-prefix" text of the block, lines joined with `\n`.
    #[must_use]
    pub fn join_content(&self, rope: &Rope) -> String {
        match self {
            ContentView::Contiguous(span) => slice_to_string(rope, *span),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|line| slice_to_string(rope, line.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
