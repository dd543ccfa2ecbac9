use crate::error::DocumentError;
use crate::parsing::context::ParseContext;

use super::classify::LineClass;
use super::types::NewBlock;

/// What an open block does with the line it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The line belongs to the block; the block stays open.
    Continue,
    /// The line belongs to the block and ends it (e.g. a closing fence).
    CloseAfter,
    /// The line does not belong to the block. Close it, then offer the same
    /// line to whatever is open next.
    CloseAndRetry,
}

/// Recognizes a block's opening line.
pub trait Openable: Sized {
    /// Returns the open state if `line` starts this kind of block. Consumers
    /// claim any pending options payload here, exactly once.
    fn try_open(line: &LineClass, cx: &mut ParseContext<'_>) -> Result<Option<Self>, DocumentError>;
}

/// Decides, line by line, whether an open block goes on.
pub trait Continuable {
    fn continue_line(&mut self, line: &LineClass, cx: &ParseContext<'_>) -> Continuation;
}

/// Turns an open block into its finished form.
pub trait Closeable {
    /// `None` means the block produced no tree node.
    fn close(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError>;

    /// Close forced by the end of the document.
    fn close_at_end(self, cx: &mut ParseContext<'_>) -> Result<Option<NewBlock>, DocumentError>
    where
        Self: Sized,
    {
        self.close(cx)
    }
}
