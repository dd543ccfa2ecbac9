use log::trace;

use crate::error::DocumentError;
use crate::parsing::context::ParseContext;

use super::classify::LineClass;
use super::kinds::{
    AlertState, FenceState, LinkDefinition, OptionsState, ParagraphState,
};
use super::traits::{Closeable, Continuable, Continuation, Openable};
use super::types::NewBlock;

/// The leaf block currently accepting lines.
#[derive(Debug, Clone)]
pub enum OpenLeaf {
    Paragraph(ParagraphState),
    Fence(FenceState),
    Alert(AlertState),
    Options(OptionsState),
}

/// Outcome of offering a line to the leaf openers.
#[derive(Debug)]
pub enum Opened {
    /// A multi-line block is now open.
    Leaf(OpenLeaf),
    /// A single-line block, already closed.
    Block(NewBlock),
    /// The line was used up without producing a block.
    Consumed,
}

/// Opens a leaf block for `line`.
///
/// Precedence: options block, fence, alert, link definition, paragraph.
/// Headings are routed through the section resolver before this is called.
pub fn open_leaf(line: &LineClass, cx: &mut ParseContext<'_>) -> Result<Opened, DocumentError> {
    if let Some(options) = OptionsState::try_open(line, cx)? {
        if options.is_complete() {
            // One-line payload: nothing else belongs to it.
            options.close(cx)?;
            return Ok(Opened::Consumed);
        }
        return Ok(Opened::Leaf(OpenLeaf::Options(options)));
    }
    if let Some(fence) = FenceState::try_open(line, cx)? {
        return Ok(Opened::Leaf(OpenLeaf::Fence(fence)));
    }
    if let Some(alert) = AlertState::try_open(line, cx)? {
        return Ok(Opened::Leaf(OpenLeaf::Alert(alert)));
    }
    if let Some(sig) = &line.link_definition {
        if !cx.references.define(LinkDefinition::reference(sig)) {
            trace!("line {}: duplicate definition [{}] ignored", line.number + 1, sig.label);
        }
        return Ok(Opened::Block(LinkDefinition::block(line, sig)));
    }
    match ParagraphState::try_open(line, cx)? {
        Some(paragraph) => Ok(Opened::Leaf(OpenLeaf::Paragraph(paragraph))),
        None => Ok(Opened::Consumed),
    }
}

impl Continuable for OpenLeaf {
    fn continue_line(&mut self, line: &LineClass, cx: &ParseContext<'_>) -> Continuation {
        match self {
            OpenLeaf::Paragraph(state) => state.continue_line(line, cx),
            OpenLeaf::Fence(state) => state.continue_line(line, cx),
            OpenLeaf::Alert(state) => state.continue_line(line, cx),
            OpenLeaf::Options(state) => state.continue_line(line, cx),
        }
    }
}

impl Closeable for OpenLeaf {
    fn close(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        match self {
            OpenLeaf::Paragraph(state) => state.close(cx),
            OpenLeaf::Fence(state) => state.close(cx),
            OpenLeaf::Alert(state) => state.close(cx),
            OpenLeaf::Options(state) => state.close(cx),
        }
    }

    fn close_at_end(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        match self {
            OpenLeaf::Paragraph(state) => state.close_at_end(cx),
            OpenLeaf::Fence(state) => state.close_at_end(cx),
            OpenLeaf::Alert(state) => state.close_at_end(cx),
            OpenLeaf::Options(state) => state.close_at_end(cx),
        }
    }
}
