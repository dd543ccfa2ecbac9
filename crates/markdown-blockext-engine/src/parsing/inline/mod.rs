//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing runs after the block tree is finalized and the heading
//! links are flushed, so reference links can see every label the document
//! defines, explicit or generated.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, ReferenceLink)
//! - **`kinds`**: inline types that own their delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[intro]` `` parses as a single CodeSpan,
//! never as a reference link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
