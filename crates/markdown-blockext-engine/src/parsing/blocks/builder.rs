use log::{debug, trace};

use crate::error::DocumentError;
use crate::parsing::context::ParseContext;
use crate::parsing::sections::{SectionNestingResolver, SectionOpen};

use super::{
    classify::LineClass,
    kinds::{Heading, HeadingSig},
    open::{OpenLeaf, Opened, open_leaf},
    traits::{Closeable, Continuable, Continuation},
    tree::{BlockId, BlockTree},
    types::NewBlock,
};

/// Line-driven state machine producing the [`BlockTree`].
///
/// Every line is offered, in order, to:
/// 1. the open leaf block (fences and options payloads are raw zones, so they
///    see headings before the sections do),
/// 2. the open sections, innermost first,
/// 3. the openers.
pub struct BlockBuilder {
    tree: BlockTree,
    sections: SectionNestingResolver,
    leaf: Option<OpenLeaf>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            tree: BlockTree::new(),
            sections: SectionNestingResolver::new(),
            leaf: None,
        }
    }

    pub fn push(&mut self, line: &LineClass, cx: &mut ParseContext<'_>) -> Result<(), DocumentError> {
        if let Some(mut leaf) = self.leaf.take() {
            match leaf.continue_line(line, cx) {
                Continuation::Continue => {
                    self.leaf = Some(leaf);
                    return Ok(());
                }
                Continuation::CloseAfter => return self.close_leaf(leaf, cx),
                Continuation::CloseAndRetry => self.close_leaf(leaf, cx)?,
            }
        }

        if line.is_blank {
            return Ok(());
        }

        if let Some(sig) = &line.heading {
            return self.open_heading(line, sig, cx);
        }

        match open_leaf(line, cx)? {
            Opened::Leaf(leaf) => self.leaf = Some(leaf),
            Opened::Block(block) => {
                self.append(block);
            }
            Opened::Consumed => {}
        }
        Ok(())
    }

    /// Closes everything still open and returns the tree.
    pub fn finish(mut self, cx: &mut ParseContext<'_>) -> Result<BlockTree, DocumentError> {
        // EOF flush
        if let Some(leaf) = self.leaf.take() {
            if let Some(block) = leaf.close_at_end(cx)? {
                self.append(block);
            }
        }
        self.sections.close_all(&mut self.tree);
        cx.payloads.ensure_empty()?;

        debug!("parse pass done: {} blocks", self.tree.len());
        Ok(self.tree)
    }

    fn open_heading(
        &mut self,
        line: &LineClass,
        sig: &HeadingSig,
        cx: &mut ParseContext<'_>,
    ) -> Result<(), DocumentError> {
        if !cx.config.enabled.sections {
            self.append(Heading::block(line, sig));
            return Ok(());
        }

        self.sections.close_for(line, &mut self.tree, cx);
        match self.sections.open(line, sig, &mut self.tree, cx)? {
            SectionOpen::Opened { section, .. } => {
                trace!("line {}: section {section:?} opened", line.number + 1)
            }
            SectionOpen::StandAlone(heading) => {
                trace!("line {}: heading {heading:?} stands alone", line.number + 1)
            }
        }
        Ok(())
    }

    fn close_leaf(&mut self, leaf: OpenLeaf, cx: &mut ParseContext<'_>) -> Result<(), DocumentError> {
        if let Some(block) = leaf.close(cx)? {
            self.append(block);
        }
        Ok(())
    }

    fn append(&mut self, block: NewBlock) -> BlockId {
        self.tree.append(self.sections.innermost(), block)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
