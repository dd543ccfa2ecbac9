use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the rope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `[text][label]`, `[label][]` or `[label]` whose label is defined.
    ReferenceLink {
        /// Full span including all brackets.
        full: Span,
        /// Link text, inside the first pair of brackets.
        text: Span,
        /// The label looked up in the reference table. Equal to `text` for
        /// the collapsed and shortcut forms.
        label: Span,
    },
}

impl InlineNode {
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::ReferenceLink { full, .. } => *full,
        }
    }
}
