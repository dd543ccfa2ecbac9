use markdown_blockext_config::{AlertOptions, CodeBlockOptions, SectionOptions, WrapperKind};

use crate::error::{BlockName, Position};
use crate::parsing::rope::span::Span;

use super::content::ContentView;
use super::kinds::FenceKind;
use super::tree::BlockId;

/// A heading-anchored container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub wrapper: WrapperKind,
    pub options: SectionOptions,
    /// Assigned when the section is finalized, if id generation is enabled.
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub fence: FenceKind,
    /// The info string after the opening fence.
    pub info: Option<String>,
    /// `None` when the code block extension is disabled.
    pub options: Option<CodeBlockOptions>,
    /// Resolved from `class_format` and the language during finalize.
    pub class_name: Option<String>,
}

impl CodeBlock {
    /// Language from the options, falling back to the info string's first word.
    pub fn language(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.language.as_deref())
            .or_else(|| self.info.as_deref().and_then(|i| i.split_whitespace().next()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub options: AlertOptions,
    /// Resolved from `class_format` and the alert type during finalize.
    pub class_name: Option<String>,
}

/// The closed set of block kinds the builder produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The default leaf block when no other opener matches.
    Paragraph,
    /// An ATX heading, either inside a section or standing alone.
    Heading { level: u8, text: String },
    Section(Section),
    FencedCode(CodeBlock),
    Alert(Alert),
    /// An explicit `[label]: destination "title"` line.
    LinkDefinition {
        label: String,
        destination: String,
        title: Option<String>,
    },
}

impl BlockKind {
    pub fn name(&self) -> BlockName {
        match self {
            BlockKind::Paragraph => BlockName::Paragraph,
            BlockKind::Heading { .. } => BlockName::Heading,
            BlockKind::Section(_) => BlockName::SectionBlock,
            BlockKind::FencedCode(_) => BlockName::CodeBlock,
            BlockKind::Alert(_) => BlockName::AlertBlock,
            BlockKind::LinkDefinition { .. } => BlockName::LinkDefinition,
        }
    }
}

/// A closed block, ready to be appended to the tree.
#[derive(Debug, Clone)]
pub struct NewBlock {
    pub kind: BlockKind,
    /// Full byte span including delimiters.
    pub span: Span,
    /// 0-based line of the opening line.
    pub line: usize,
    /// 0-based byte column of the opening marker.
    pub column: usize,
    pub content: ContentView,
}

/// A block in the tree.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub span: Span,
    pub line: usize,
    pub column: usize,
    /// Content for inline parsing (excludes fences, `#` markers and `!` prefixes).
    pub content: ContentView,
    pub parent: Option<BlockId>,
    pub children: Vec<BlockId>,
}

impl BlockNode {
    /// 1-based position of the block's opening marker.
    pub fn position(&self) -> Position {
        Position::from_zero_based(self.line, self.column)
    }

    pub fn section(&self) -> Option<&Section> {
        match &self.kind {
            BlockKind::Section(section) => Some(section),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(info: Option<&str>, language: Option<&str>) -> CodeBlock {
        CodeBlock {
            fence: FenceKind::Backticks,
            info: info.map(str::to_string),
            options: Some(CodeBlockOptions {
                language: language.map(str::to_string),
                ..CodeBlockOptions::default()
            }),
            class_name: None,
        }
    }

    #[test]
    fn options_language_beats_info_string() {
        assert_eq!(code(Some("rust ignore"), Some("toml")).language(), Some("toml"));
        assert_eq!(code(Some("rust ignore"), None).language(), Some("rust"));
        assert_eq!(code(None, None).language(), None);
    }

    #[test]
    fn kinds_report_their_names() {
        let kind = BlockKind::Heading {
            level: 1,
            text: "A".to_string(),
        };
        assert_eq!(kind.name(), BlockName::Heading);
        assert_eq!(BlockKind::Paragraph.name().to_string(), "paragraph");
    }
}
