//! # Block Parsing
//!
//! Line-driven block parsing with an explicit open / continue / close contract.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (indent, blank status, fence,
//!    heading, options sentinel, alert prefix, link definition).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` offers every line
//!    to the open leaf block, then to the open sections, then tries to open a
//!    new block. Closed blocks are appended to a `BlockTree`.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `BlockNode` and the per-kind payloads
//! - **`tree`**: `BlockTree` arena addressed by `BlockId`
//! - **`traits`**: `Openable`, `Continuable`, `Closeable` capability traits
//! - **`kinds`**: per-kind syntax knowledge and open-block state
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`content`**: `ContentView` projection for prefixed (alert) content
//! - **`open`**: opener precedence for leaf blocks
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code and options payloads are raw zones: no block is recognized
//!   inside them, headings included.
//! - Options blocks never reach the tree; their payload is handed to the next
//!   consuming block through the `ParseContext`.
//! - All block nodes store byte spans into the rope.

pub mod builder;
pub mod classify;
pub mod content;
pub mod kinds;
pub mod open;
pub mod traits;
pub mod tree;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::{ContentLine, ContentView};
pub use traits::{Closeable, Continuable, Continuation, Openable};
pub use tree::{BlockId, BlockTree};
pub use types::{Alert, BlockKind, BlockNode, CodeBlock, NewBlock, Section};
