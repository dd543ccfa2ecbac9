use log::debug;

use crate::error::{BlockName, DocumentError};
use crate::parsing::blocks::kinds::{Heading, HeadingSig};
use crate::parsing::blocks::{
    BlockId, BlockKind, BlockTree, ContentView, Continuable, Continuation, LineClass, NewBlock,
    Section,
};
use crate::parsing::context::ParseContext;
use crate::parsing::rope::Span;

/// A section on the open stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSection {
    pub id: BlockId,
    pub level: u8,
}

impl Continuable for OpenSection {
    /// A heading at the same or a shallower level ends the section.
    fn continue_line(&mut self, line: &LineClass, _cx: &ParseContext<'_>) -> Continuation {
        match &line.heading {
            Some(sig) if sig.level <= self.level => Continuation::CloseAndRetry,
            _ => Continuation::Continue,
        }
    }
}

/// What a heading line turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOpen {
    /// A new section with its heading as first child.
    Opened { section: BlockId, heading: BlockId },
    /// The wrapper resolved to none: a bare heading, nothing pushed.
    StandAlone(BlockId),
}

/// Keeps the stack of open sections so that nesting mirrors heading levels.
#[derive(Debug, Default)]
pub struct SectionNestingResolver {
    open: Vec<OpenSection>,
}

impl SectionNestingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The section new blocks are appended to, `None` for the document root.
    pub fn innermost(&self) -> Option<BlockId> {
        self.open.last().map(|s| s.id)
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Closes open sections, innermost first, until one accepts `line`.
    pub fn close_for(&mut self, line: &LineClass, tree: &mut BlockTree, cx: &ParseContext<'_>) {
        while let Some(top) = self.open.last_mut() {
            match top.continue_line(line, cx) {
                Continuation::CloseAndRetry => self.close_innermost(tree),
                Continuation::Continue | Continuation::CloseAfter => break,
            }
        }
    }

    /// Opens a section for a heading line. Call [`close_for`](Self::close_for) first.
    pub fn open(
        &mut self,
        line: &LineClass,
        sig: &HeadingSig,
        tree: &mut BlockTree,
        cx: &mut ParseContext<'_>,
    ) -> Result<SectionOpen, DocumentError> {
        let config = cx.config;
        let options = cx.claim_options(&config.sections, line.number, BlockName::SectionBlock)?;
        let heading = Heading::block(line, sig);

        if !options.element.wraps() {
            let id = tree.append(self.innermost(), heading);
            return Ok(SectionOpen::StandAlone(id));
        }

        let section = tree.append(
            self.innermost(),
            NewBlock {
                kind: BlockKind::Section(Section {
                    level: sig.level,
                    wrapper: options.element,
                    options,
                    id: None,
                }),
                span: heading.span,
                line: heading.line,
                column: heading.column,
                content: ContentView::Contiguous(Span::empty(heading.span.start)),
            },
        );
        let heading = tree.append(Some(section), heading);
        self.open.push(OpenSection {
            id: section,
            level: sig.level,
        });
        debug!(
            "section opened at line {} (level {}, depth {})",
            line.number + 1,
            sig.level,
            self.open.len()
        );
        Ok(SectionOpen::Opened { section, heading })
    }

    /// Pops the innermost section and stretches its span over its content.
    pub fn close_innermost(&mut self, tree: &mut BlockTree) {
        let Some(closed) = self.open.pop() else {
            return;
        };
        // Ids on the stack always come from `tree`.
        if let Ok(span) = tree.fit_span_to_children(closed.id) {
            debug!(
                "section {:?} (level {}) closed, bytes {}..{}",
                closed.id, closed.level, span.start, span.end
            );
        }
    }

    pub fn close_all(&mut self, tree: &mut BlockTree) {
        while !self.open.is_empty() {
            self.close_innermost(tree);
        }
    }
}
