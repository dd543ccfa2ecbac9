use crate::error::DocumentError;
use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::content::ContentView;
use crate::parsing::blocks::traits::{Closeable, Continuable, Continuation, Openable};
use crate::parsing::blocks::types::{BlockKind, NewBlock};
use crate::parsing::context::ParseContext;
use crate::parsing::rope::span::Span;

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

#[derive(Debug, Clone, Copy)]
pub struct ParagraphState {
    line: usize,
    column: usize,
    start: usize,
    content_start: usize,
    content_end: usize,
    end: usize,
}

impl Openable for ParagraphState {
    /// Any non-blank line opens a paragraph.
    fn try_open(line: &LineClass, _cx: &mut ParseContext<'_>) -> Result<Option<Self>, DocumentError> {
        if line.is_blank {
            return Ok(None);
        }
        Ok(Some(Self {
            line: line.number,
            column: line.content_start,
            start: line.line.start,
            content_start: line.line.start + line.content_start,
            content_end: line.text_end(),
            end: line.line.end,
        }))
    }
}

impl Continuable for ParagraphState {
    fn continue_line(&mut self, line: &LineClass, cx: &ParseContext<'_>) -> Continuation {
        if line.is_blank || line.interrupts_paragraph(cx.config) {
            return Continuation::CloseAndRetry;
        }
        self.content_end = line.text_end();
        self.end = line.line.end;
        Continuation::Continue
    }
}

impl Closeable for ParagraphState {
    fn close(self, _cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        Ok(Some(NewBlock {
            kind: BlockKind::Paragraph,
            span: Span::new(self.start, self.end),
            line: self.line,
            column: self.column,
            content: ContentView::Contiguous(Span::new(self.content_start, self.content_end)),
        }))
    }
}
