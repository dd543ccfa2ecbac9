use log::trace;

use crate::error::DocumentError;
use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::traits::{Closeable, Continuable, Continuation, Openable};
use crate::parsing::blocks::types::NewBlock;
use crate::parsing::context::ParseContext;
use crate::parsing::payload::{PayloadScanner, ScanStatus};

pub struct OptionsBlock;

impl OptionsBlock {
    pub const SENTINEL: char = '@';

    /// Byte offset of the opening brace when `text[start..]` begins with `@{`.
    pub fn open_brace(text: &str, start: usize) -> Option<usize> {
        let rest = text[start..].strip_prefix(Self::SENTINEL)?;
        rest.starts_with(PayloadScanner::OPEN)
            .then_some(start + Self::SENTINEL.len_utf8())
    }
}

/// An options payload being scanned. It never produces a tree node: on close
/// the payload is parked in the context for the next consumer.
#[derive(Debug, Clone)]
pub struct OptionsState {
    scanner: PayloadScanner,
    end: Option<(usize, usize)>,
}

impl OptionsState {
    /// Whether the payload closed on the lines seen so far.
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    fn scan(&mut self, line: &LineClass, column: usize) -> Continuation {
        match self.scanner.scan_line(&line.text[column..], column) {
            ScanStatus::Continue => Continuation::Continue,
            ScanStatus::Complete { end_column } => {
                self.end = Some((line.number, end_column));
                Continuation::CloseAfter
            }
        }
    }
}

impl Openable for OptionsState {
    fn try_open(line: &LineClass, cx: &mut ParseContext<'_>) -> Result<Option<Self>, DocumentError> {
        if !cx.config.enabled.options_blocks {
            return Ok(None);
        }
        let Some(brace) = line.options_at else {
            return Ok(None);
        };

        trace!("line {}: options block opened", line.number + 1);
        let mut state = Self {
            scanner: PayloadScanner::new(line.number, line.content_start),
            end: None,
        };
        state.scan(line, brace);
        Ok(Some(state))
    }
}

impl Continuable for OptionsState {
    fn continue_line(&mut self, line: &LineClass, _cx: &ParseContext<'_>) -> Continuation {
        self.scan(line, 0)
    }
}

impl Closeable for OptionsState {
    fn close(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        let Some((end_line, end_column)) = self.end else {
            return Err(self.scanner.unterminated());
        };
        cx.payloads.store(self.scanner.into_payload(end_line, end_column))?;
        Ok(None)
    }

    fn close_at_end(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError> {
        if self.is_complete() {
            return self.close(cx);
        }
        Err(self.scanner.unterminated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_must_touch_the_brace() {
        assert_eq!(OptionsBlock::open_brace("@{}", 0), Some(1));
        assert_eq!(OptionsBlock::open_brace("   @{ \"a\": 1 }", 3), Some(4));
        assert_eq!(OptionsBlock::open_brace("@ {}", 0), None);
        assert_eq!(OptionsBlock::open_brace("{}", 0), None);
        assert_eq!(OptionsBlock::open_brace("@mention", 0), None);
    }
}
