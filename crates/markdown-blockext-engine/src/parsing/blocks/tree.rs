use std::ops::Index;

use crate::error::UsageError;
use crate::parsing::rope::span::Span;

use super::types::{BlockKind, BlockNode, NewBlock, Section};

/// Index of a block in its [`BlockTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of blocks. Each block is owned by its parent, or by the document
/// root when `parent` is `None`.
#[derive(Debug, Clone, Default)]
pub struct BlockTree {
    nodes: Vec<BlockNode>,
    roots: Vec<BlockId>,
}

impl BlockTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `block` as the last child of `parent`, or as a root.
    ///
    /// # Panics
    /// If `parent` does not belong to this tree.
    pub fn append(&mut self, parent: Option<BlockId>, block: NewBlock) -> BlockId {
        let id = BlockId(self.nodes.len());
        self.nodes.push(BlockNode {
            kind: block.kind,
            span: block.span,
            line: block.line,
            column: block.column,
            content: block.content,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockNode> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: BlockId) -> Result<&BlockNode, UsageError> {
        self.nodes.get(id.0).ok_or(UsageError::UnknownBlock(id))
    }

    pub fn node_mut(&mut self, id: BlockId) -> Result<&mut BlockNode, UsageError> {
        self.nodes.get_mut(id.0).ok_or(UsageError::UnknownBlock(id))
    }

    pub fn roots(&self) -> &[BlockId] {
        &self.roots
    }

    /// Children of `id`; empty for unknown ids.
    pub fn children(&self, id: BlockId) -> &[BlockId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All blocks in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &BlockNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (BlockId(i), n))
    }

    /// Sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = (BlockId, &Section)> + '_ {
        self.pre_order()
            .into_iter()
            .filter_map(|id| self.nodes[id.0].section().map(|s| (id, s)))
    }

    /// Number of ancestors plus one: roots have depth 1.
    pub fn depth(&self, id: BlockId) -> usize {
        let mut depth = 1;
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent.0].parent;
        }
        depth
    }

    /// Parent first, children in order.
    pub fn pre_order(&self) -> Vec<BlockId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<BlockId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        out
    }

    /// Children before their parent, siblings in order.
    pub fn post_order(&self) -> Vec<BlockId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(BlockId, bool)> = self.roots.iter().rev().map(|&id| (id, false)).collect();
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            stack.extend(self.nodes[id.0].children.iter().rev().map(|&c| (c, false)));
        }
        out
    }

    /// Grows a container's span to cover all of its descendants.
    pub fn fit_span_to_children(&mut self, id: BlockId) -> Result<Span, UsageError> {
        let node = self.node(id)?;
        let span = node
            .children
            .iter()
            .fold(node.span, |acc, child| acc.cover(self.nodes[child.0].span));
        self.nodes[id.0].span = span;
        Ok(span)
    }

    /// First direct child matching `pred`.
    pub fn find_child(
        &self,
        id: BlockId,
        pred: impl Fn(&BlockKind) -> bool,
    ) -> Option<BlockId> {
        self.children(id)
            .iter()
            .copied()
            .find(|c| pred(&self.nodes[c.0].kind))
    }
}

impl Index<BlockId> for BlockTree {
    type Output = BlockNode;

    fn index(&self, id: BlockId) -> &BlockNode {
        &self.nodes[id.0]
    }
}
