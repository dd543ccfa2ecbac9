use log::trace;
use markdown_blockext_config::AlertOptions;

use crate::error::{BlockName, DocumentError};
use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::content::{ContentLine, ContentView};
use crate::parsing::blocks::traits::{Closeable, Continuable, Continuation, Openable};
use crate::parsing::blocks::types::{Alert, BlockKind, NewBlock};
use crate::parsing::context::ParseContext;
use crate::parsing::rope::span::Span;

/// Where the `!` prefix and the content start within a line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSig {
    pub prefix_start: usize,
    pub content_start: usize,
}

pub struct AlertBlock;

impl AlertBlock {
    pub const PREFIX: char = '!';

    /// `!` followed by whitespace or the end of the line. One space or tab
    /// after the prefix belongs to the prefix.
    pub fn sig(text: &str, start: usize) -> Option<AlertSig> {
        let rest = text[start..].strip_prefix(Self::PREFIX)?;
        let prefix_len = match rest.chars().next() {
            None => 1,
            Some(' ' | '\t') => 2,
            Some(_) => return None,
        };
        Some(AlertSig {
            prefix_start: start,
            content_start: start + prefix_len,
        })
    }
}

/// Consecutive `!` lines.
#[derive(Debug, Clone)]
pub struct AlertState {
    options: AlertOptions,
    line: usize,
    column: usize,
    lines: Vec<ContentLine>,
}

impl AlertState {
    fn push_line(&mut self, line: &LineClass, sig: &AlertSig) {
        self.lines.push(ContentLine {
            raw_line: line.line,
            prefix: line.span_of(sig.prefix_start, sig.content_start),
            content: line.span_of(sig.content_start, line.text.len()),
        });
    }
}

impl Openable for AlertState {
    fn try_open(line: &LineClass, cx: &mut ParseContext<'_>) -> Result<Option<Self>, DocumentError> {
        let config = cx.config;
        if !config.enabled.alerts {
            return Ok(None);
        }
        let Some(sig) = &line.alert else {
            return Ok(None);
        };

        let options = cx.claim_options(&config.alerts, line.number, BlockName::AlertBlock)?;
        trace!("line {}: alert opened ({})", line.number + 1, options.alert_type);
        let mut state = Self {
            options,
            line: line.number,
            column: sig.prefix_start,
            lines: Vec::new(),
        };
        state.push_line(line, sig);
        Ok(Some(state))
    }
}

impl Continuable for AlertState {
    fn continue_line(&mut self, line: &LineClass, _cx: &ParseContext<'_>) -> Continuation {
        match &line.alert {
            Some(sig) => {
                self.push_line(line, sig);
                Continuation::Continue
            }
            None => Continuation::CloseAndRetry,
        }
    }
}

impl Closeable for AlertState {
    fn close(self, _cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        let span = match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => first.raw_line.cover(last.raw_line),
            _ => Span::default(),
        };
        Ok(Some(NewBlock {
            kind: BlockKind::Alert(Alert {
                options: self.options,
                class_name: None,
            }),
            span,
            line: self.line,
            column: self.column,
            content: ContentView::Lines(self.lines),
        }))
    }
}
