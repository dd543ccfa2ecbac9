pub mod alert;
pub mod code_fence;
pub mod heading;
pub mod link_definition;
pub mod options_block;
pub mod paragraph;

pub use alert::{AlertBlock, AlertSig, AlertState};
pub use code_fence::{CodeFence, FenceKind, FenceSig, FenceState};
pub use heading::{Heading, HeadingSig};
pub use link_definition::{LinkDefinition, LinkDefinitionSig};
pub use options_block::{OptionsBlock, OptionsState};
pub use paragraph::{Paragraph, ParagraphState};
