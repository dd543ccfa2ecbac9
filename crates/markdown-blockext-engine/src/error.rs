use std::fmt;

use thiserror::Error;

use crate::format::FormatError;
use crate::parsing::blocks::BlockId;

/// A 1-based line/column position in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Converts the parser's 0-based coordinates into a reportable position.
    pub fn from_zero_based(line: usize, column: usize) -> Self {
        Self {
            line: line + 1,
            column: column + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Human-readable name of a block kind, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockName {
    OptionsBlock,
    AlertBlock,
    CodeBlock,
    SectionBlock,
    Heading,
    Paragraph,
    LinkDefinition,
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockName::OptionsBlock => "options block",
            BlockName::AlertBlock => "alert block",
            BlockName::CodeBlock => "code block",
            BlockName::SectionBlock => "section block",
            BlockName::Heading => "heading",
            BlockName::Paragraph => "paragraph",
            BlockName::LinkDefinition => "link reference definition",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The document ended before the closing brace.
    Unterminated,
    /// The payload is balanced but does not deserialize into the options type.
    InvalidData(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Unterminated => f.write_str("payload is never closed"),
            MalformedReason::InvalidData(reason) => write!(f, "payload is invalid: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanCause {
    /// Another options block closed while this one was still pending.
    Superseded,
    /// The document ended while this payload was still pending.
    Unconsumed,
}

impl fmt::Display for OrphanCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanCause::Superseded => f.write_str("another options block followed it"),
            OrphanCause::Unconsumed => f.write_str("no block claimed it before the end of the document"),
        }
    }
}

/// Errors caused by document content. Any of these aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{block} at {position}: {reason}: {raw:?}")]
    MalformedPayload {
        block: BlockName,
        position: Position,
        raw: String,
        reason: MalformedReason,
    },

    #[error("{block} at {position} was never consumed: {cause}")]
    OrphanedPayload {
        block: BlockName,
        position: Position,
        cause: OrphanCause,
    },

    #[error("{block} at {position} must immediately precede the {consumer} it configures")]
    MispositionedPayload {
        block: BlockName,
        position: Position,
        consumer: BlockName,
    },

    #[error("{block} at {position}: {message}")]
    InvalidStructure {
        block: BlockName,
        position: Position,
        message: String,
    },

    #[error("{block} at {position}: format string {format:?} is invalid: {source}")]
    InvalidFormat {
        block: BlockName,
        position: Position,
        format: String,
        source: FormatError,
    },
}

impl DocumentError {
    /// Where the offending block or payload starts.
    pub fn position(&self) -> Position {
        match self {
            DocumentError::MalformedPayload { position, .. }
            | DocumentError::OrphanedPayload { position, .. }
            | DocumentError::MispositionedPayload { position, .. }
            | DocumentError::InvalidStructure { position, .. }
            | DocumentError::InvalidFormat { position, .. } => *position,
        }
    }

    pub fn block(&self) -> BlockName {
        match self {
            DocumentError::MalformedPayload { block, .. }
            | DocumentError::OrphanedPayload { block, .. }
            | DocumentError::MispositionedPayload { block, .. }
            | DocumentError::InvalidStructure { block, .. }
            | DocumentError::InvalidFormat { block, .. } => *block,
        }
    }
}

/// Misuse of the engine's API, as opposed to a problem in the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("block {0:?} does not belong to this tree")]
    UnknownBlock(BlockId),

    #[error("block {id:?} is a {found}, expected a section block")]
    NotASection { id: BlockId, found: BlockName },

    #[error("deferred heading links were already flushed for this document")]
    LinksAlreadyFlushed,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl Error {
    /// The content error, if this is one.
    pub fn as_document(&self) -> Option<&DocumentError> {
        match self {
            Error::Document(err) => Some(err),
            Error::Usage(_) => None,
        }
    }
}
