use log::trace;
use markdown_blockext_config::CodeBlockOptions;

use crate::error::{BlockName, DocumentError};
use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::content::ContentView;
use crate::parsing::blocks::traits::{Closeable, Continuable, Continuation, Openable};
use crate::parsing::blocks::types::{BlockKind, CodeBlock, NewBlock};
use crate::parsing::context::ParseContext;
use crate::parsing::rope::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence: its marker character, run length and
/// info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub info: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    /// `remainder` is the line text after its indent.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let kind = match remainder.chars().next()? {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let marker = Self::marker(kind);
        let len = remainder.chars().take_while(|&c| c == marker).count();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = remainder[len..].trim();
        // A backtick info string may not contain backticks, or the line
        // would be an inline code span.
        if kind == FenceKind::Backticks && info.contains(Self::BACKTICK) {
            return None;
        }

        Some(FenceSig {
            kind,
            len,
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    pub fn marker(kind: FenceKind) -> char {
        match kind {
            FenceKind::Backticks => Self::BACKTICK,
            FenceKind::Tildes => Self::TILDE,
        }
    }

    /// Whether `candidate` closes a fence opened with `open`: same character,
    /// at least as long, no info string.
    pub fn closes(open: &FenceSig, candidate: Option<&FenceSig>) -> bool {
        candidate.is_some_and(|c| c.kind == open.kind && c.len >= open.len && c.info.is_none())
    }
}

/// An open fenced code block. Everything up to the closing fence is raw.
#[derive(Debug, Clone)]
pub struct FenceState {
    sig: FenceSig,
    line: usize,
    column: usize,
    start: usize,
    content_start: usize,
    content_end: usize,
    end: usize,
    options: Option<CodeBlockOptions>,
}

impl Openable for FenceState {
    fn try_open(line: &LineClass, cx: &mut ParseContext<'_>) -> Result<Option<Self>, DocumentError> {
        let Some(sig) = &line.fence else {
            return Ok(None);
        };

        let config = cx.config;
        let options = if config.enabled.code_blocks {
            Some(cx.claim_options(&config.code_blocks, line.number, BlockName::CodeBlock)?)
        } else {
            None
        };

        trace!("line {}: fence opened ({:?} x{})", line.number + 1, sig.kind, sig.len);
        Ok(Some(Self {
            sig: sig.clone(),
            line: line.number,
            column: line.content_start,
            start: line.line.start,
            content_start: line.line.end,
            content_end: line.line.end,
            end: line.line.end,
            options,
        }))
    }
}

impl Continuable for FenceState {
    fn continue_line(&mut self, line: &LineClass, _cx: &ParseContext<'_>) -> Continuation {
        self.end = line.line.end;
        if CodeFence::closes(&self.sig, line.fence.as_ref()) {
            return Continuation::CloseAfter;
        }
        self.content_end = line.line.end;
        Continuation::Continue
    }
}

impl Closeable for FenceState {
    /// An unterminated fence runs to the end of the document.
    fn close(self, _cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        Ok(Some(NewBlock {
            kind: BlockKind::FencedCode(CodeBlock {
                fence: self.sig.kind,
                info: self.sig.info,
                options: self.options,
                class_name: None,
            }),
            span: Span::new(self.start, self.end),
            line: self.line,
            column: self.column,
            content: ContentView::Contiguous(Span::new(self.content_start, self.content_end)),
        }))
    }
}
