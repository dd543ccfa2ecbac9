//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Document`](crate::Document) to a stable,
//!   serializable `Snap` for `insta` snapshot testing and for the CLI's JSON output
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   children inside their parent, section levels increasing downward, id format)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{BlockSnap, ReferenceSnap, Snap, normalize};
