//! # Options Payloads
//!
//! An options block is a `@{ ... }` object that configures the block directly
//! after it. Two pieces carry a payload from one block to the next:
//!
//! - **`scanner`**: `PayloadScanner` finds where the object ends, line by line,
//!   tracking brace depth outside string literals.
//! - **`slot`**: `PendingPayloadSlot` holds at most one closed payload until the
//!   next consuming block claims it, enforcing that nothing sits between them.

pub mod scanner;
pub mod slot;

pub use scanner::{PayloadScanner, ScanStatus};
pub use slot::PendingPayloadSlot;

use crate::error::{BlockName, DocumentError, MalformedReason, Position};

/// Raw text of a closed options payload and where it sits in the source.
///
/// Lines and columns are 0-based; columns are byte offsets within the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSpan {
    /// The object text, from the opening brace through the matching closing brace.
    pub raw: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl PayloadSpan {
    /// 1-based position of the options block, for error reporting.
    pub fn position(&self) -> Position {
        Position::from_zero_based(self.start_line, self.start_column)
    }

    pub fn malformed(&self, reason: MalformedReason) -> DocumentError {
        DocumentError::MalformedPayload {
            block: BlockName::OptionsBlock,
            position: self.position(),
            raw: self.raw.clone(),
            reason,
        }
    }
}
