use markdown_blockext_config::Config;

use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{
    AlertBlock, AlertSig, CodeFence, FenceSig, Heading, HeadingSig, LinkDefinition,
    LinkDefinitionSig, OptionsBlock,
};

/// Openers are only recognized up to this many columns of indent.
pub const MAX_OPENER_INDENT: usize = 3;
const TAB_STOP: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Offsets are bytes within `text`.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 0-based line number.
    pub number: usize,
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// Line text without the line ending.
    pub text: String,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Indent width in columns, tabs expanded to the next multiple of 4.
    pub indent: usize,
    /// Byte offset of the first non-indent character.
    pub content_start: usize,
    pub fence: Option<FenceSig>,
    pub heading: Option<HeadingSig>,
    /// Byte offset of the opening brace of an `@{` sentinel.
    pub options_at: Option<usize>,
    pub alert: Option<AlertSig>,
    pub link_definition: Option<LinkDefinitionSig>,
}

impl LineClass {
    /// Rope span of `text[start..end]`.
    pub fn span_of(&self, start: usize, end: usize) -> Span {
        Span::new(self.line.start + start, self.line.start + end)
    }

    /// Rope offset just past the text, before the line ending.
    pub fn text_end(&self) -> usize {
        self.line.start + self.text.len()
    }

    /// Whether this line ends an open paragraph instead of continuing it.
    /// Link definitions never interrupt a paragraph.
    pub fn interrupts_paragraph(&self, config: &Config) -> bool {
        self.fence.is_some()
            || self.heading.is_some()
            || (self.options_at.is_some() && config.enabled.options_blocks)
            || (self.alert.is_some() && config.enabled.alerts)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.text.trim_end_matches(['\r', '\n']);
        let is_blank = text.trim().is_empty();
        let (indent, content_start) = Self::indent(text);

        let mut class = LineClass {
            number: lr.number,
            line: lr.span,
            text: text.to_string(),
            is_blank,
            indent,
            content_start,
            fence: None,
            heading: None,
            options_at: None,
            alert: None,
            link_definition: None,
        };

        if is_blank || indent > MAX_OPENER_INDENT {
            return class;
        }

        let rest = &text[content_start..];
        class.fence = CodeFence::sig(rest);
        class.heading = Heading::sig(text, content_start);
        class.options_at = OptionsBlock::open_brace(text, content_start);
        class.alert = AlertBlock::sig(text, content_start);
        class.link_definition = LinkDefinition::parse(rest);
        class
    }

    /// Indent width in columns and the byte offset where it ends.
    fn indent(text: &str) -> (usize, usize) {
        let mut width = 0;
        for (offset, ch) in text.char_indices() {
            match ch {
                ' ' => width += 1,
                '\t' => width += TAB_STOP - width % TAB_STOP,
                _ => return (width, offset),
            }
        }
        (width, text.len())
    }
}
