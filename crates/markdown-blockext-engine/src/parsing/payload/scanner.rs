use crate::error::{BlockName, DocumentError, MalformedReason, Position};

use super::PayloadSpan;

/// Result of feeding one line to a [`PayloadScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// The object is still open; feed the next line.
    Continue,
    /// The object closed on this line, at `end_column`.
    Complete { end_column: usize },
}

/// Finds the end of a brace-delimited payload that may span many lines.
///
/// State carries across lines:
/// - `depth`: unmatched `{` outside string literals
/// - `in_string`: inside a `"..."` literal, where braces are inert
/// - `pending_escape`: the previous character was `\`, so the next one is
///   consumed without effect
#[derive(Debug, Clone)]
pub struct PayloadScanner {
    depth: i32,
    in_string: bool,
    pending_escape: bool,
    text: String,
    start_line: usize,
    start_column: usize,
    lines_scanned: usize,
}

impl PayloadScanner {
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';
    pub const QUOTE: char = '"';
    pub const ESCAPE: char = '\\';

    /// Starts a scan for an options block that begins at `start_line:start_column`.
    pub fn new(start_line: usize, start_column: usize) -> Self {
        Self {
            depth: 0,
            in_string: false,
            pending_escape: false,
            text: String::new(),
            start_line,
            start_column,
            lines_scanned: 0,
        }
    }

    /// Scans `text`, which begins at byte `column` of its source line.
    ///
    /// The first call must start at the opening brace. Characters after the
    /// matching closing brace are not scanned and not captured.
    pub fn scan_line(&mut self, text: &str, column: usize) -> ScanStatus {
        if self.lines_scanned > 0 {
            self.text.push('\n');
        }
        self.lines_scanned += 1;

        for (offset, ch) in text.char_indices() {
            self.text.push(ch);

            if self.pending_escape {
                self.pending_escape = false;
                continue;
            }

            match ch {
                Self::ESCAPE => self.pending_escape = true,
                Self::QUOTE => self.in_string = !self.in_string,
                Self::OPEN if !self.in_string => self.depth += 1,
                Self::CLOSE if !self.in_string => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        return ScanStatus::Complete {
                            end_column: column + offset,
                        };
                    }
                }
                _ => {}
            }
        }

        ScanStatus::Continue
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// The text captured so far, lines joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        Position::from_zero_based(self.start_line, self.start_column)
    }

    /// The error to raise when the document ends before the payload closes.
    pub fn unterminated(&self) -> DocumentError {
        DocumentError::MalformedPayload {
            block: BlockName::OptionsBlock,
            position: self.position(),
            raw: self.text.clone(),
            reason: MalformedReason::Unterminated,
        }
    }

    /// Consumes the scanner once it has reported [`ScanStatus::Complete`].
    pub fn into_payload(self, end_line: usize, end_column: usize) -> PayloadSpan {
        PayloadSpan {
            raw: self.text,
            start_line: self.start_line,
            start_column: self.start_column,
            end_line,
            end_column,
        }
    }
}
