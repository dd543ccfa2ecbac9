//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser reads these
//! constants; it never hardcodes `[` or `` ` ``.

pub mod code_span;
pub mod reference;

pub use code_span::CodeSpan;
pub use reference::ReferenceLink;
