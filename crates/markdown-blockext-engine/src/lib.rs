//! # markdown-blockext-engine
//!
//! Block-level extensions for a line-oriented markdown parser: alert boxes,
//! fenced code blocks, heading-anchored sections and `@{ ... }` options blocks
//! that configure the block right after them.
//!
//! ## Pipeline
//!
//! ```text
//! Rope → lines → LineClass → BlockBuilder → BlockTree → finalize → Document
//!                              │                          │
//!                              └── ParseContext ──────────┘
//!                                  (payload slot, id registry, deferred links)
//! ```
//!
//! 1. **Parse pass** ([`parsing::blocks`]): each line is classified, then offered
//!    to the open blocks (open / continue / close). Options blocks hand their
//!    payload to the next consuming block through the [`PendingPayloadSlot`].
//! 2. **Finalize pass** ([`parsing::finalize`]): post-order over the tree.
//!    Sections get their ids and register auto-links, alerts and code blocks
//!    resolve their class names.
//! 3. **Inline start**: deferred heading links are flushed into the document's
//!    reference table exactly once.
//!
//! Every content error aborts the parse; see [`DocumentError`].

pub mod error;
pub mod format;
pub mod options;
pub mod parsing;

pub use error::{
    BlockName, DocumentError, Error, MalformedReason, OrphanCause, Position, UsageError,
};
pub use format::{FormatError, apply_format};
pub use markdown_blockext_config::{
    AlertOptions, Attributes, CodeBlockOptions, Config, Extensions, SectionOptions, WrapperKind,
};
pub use options::merge_payload;
pub use parsing::{
    Document, ResolvedLink, parse_document, parse_str,
    blocks::{BlockId, BlockKind, BlockNode, BlockTree},
    context::ParseContext,
    payload::{PayloadScanner, PayloadSpan, PendingPayloadSlot, ScanStatus},
    references::{LinkDestination, LinkReference, LinkReferenceTable},
    sections::{DeferredLinkBinder, IdentifierRegistry, SectionNestingResolver, slugify},
};
