use crate::parsing::references::LinkReferenceTable;
use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, ReferenceLink},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins
/// - `s`: The content to parse (one content span of a block)
/// - `references`: Labels that turn bracketed text into reference links
///
/// # Returns
/// Nodes covering the entire input. Text between constructs is emitted as
/// `InlineNode::Text`; brackets with an unknown label stay text.
pub fn parse_inline(base: usize, s: &str, references: &LinkReferenceTable) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        // Code spans first: raw zone
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_reference_link(&mut cur, references));
        match node {
            Some(node) => {
                let span = node.span();
                flush_text(&mut out, text_start, span.start);
                text_start = span.end;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if cur.skip_until(CodeSpan::TICK, &[]).is_none() {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span { start, end: cur.pos() },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Reads `[...]` at the cursor; returns the local range of its inside.
fn bracket(cur: &mut Cursor<'_>) -> Option<(usize, usize)> {
    if cur.peek() != Some(ReferenceLink::OPEN) {
        return None;
    }
    cur.bump();
    let start = cur.i;
    match cur.skip_until(ReferenceLink::CLOSE, &[ReferenceLink::OPEN, CodeSpan::TICK]) {
        Some(ReferenceLink::CLOSE) => {
            let end = cur.i;
            cur.bump();
            Some((start, end))
        }
        _ => None,
    }
}

/// Full `[text][label]`, collapsed `[label][]` and shortcut `[label]`
/// references. Only labels defined in `references` make a link; otherwise the
/// cursor is restored.
fn try_parse_reference_link(
    cur: &mut Cursor<'_>,
    references: &LinkReferenceTable,
) -> Option<InlineNode> {
    if cur.peek() != Some(ReferenceLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    let Some(text) = bracket(cur) else {
        *cur = saved;
        return None;
    };

    let after_text = cur.clone();
    let label = match bracket(cur) {
        Some((a, b)) if a == b => text,
        Some(label) => label,
        None => {
            *cur = after_text;
            text
        }
    };

    if !references.contains(&cur.s[label.0..label.1]) {
        *cur = saved;
        return None;
    }

    let abs = |(a, b): (usize, usize)| Span {
        start: cur.base + a,
        end: cur.base + b,
    };
    Some(InlineNode::ReferenceLink {
        full: Span { start, end: cur.pos() },
        text: abs(text),
        label: abs(label),
    })
}
