//! Second pass over the finished tree.
//!
//! Walks the tree post-order, the order in which a line-driven parser closes
//! blocks: a nested section is finalized before the section containing it.

use log::debug;

use crate::error::{BlockName, DocumentError, Error};
use crate::format::apply_format;

use super::blocks::{BlockKind, BlockTree};
use super::context::ParseContext;
use super::sections::close_section;

pub fn finalize(tree: &mut BlockTree, cx: &mut ParseContext<'_>) -> Result<(), Error> {
    let order = tree.post_order();
    for id in order {
        if tree.node(id)?.section().is_some() {
            close_section(tree, id, cx)?;
            continue;
        }

        let node = tree.node_mut(id)?;
        let position = node.position();
        match &mut node.kind {
            BlockKind::Alert(alert) => {
                let format = &alert.options.class_format;
                let class = apply_format(format, &alert.options.alert_type).map_err(|source| {
                    DocumentError::InvalidFormat {
                        block: BlockName::AlertBlock,
                        position,
                        format: format.clone(),
                        source,
                    }
                })?;
                alert.class_name = Some(class);
            }
            BlockKind::FencedCode(code) => {
                let Some(language) = code.language().map(str::to_string) else {
                    continue;
                };
                let Some(options) = &code.options else {
                    continue;
                };
                let format = &options.class_format;
                let class = apply_format(format, &language).map_err(|source| {
                    DocumentError::InvalidFormat {
                        block: BlockName::CodeBlock,
                        position,
                        format: format.clone(),
                        source,
                    }
                })?;
                code.class_name = Some(class);
            }
            BlockKind::Section(_)
            | BlockKind::Paragraph
            | BlockKind::Heading { .. }
            | BlockKind::LinkDefinition { .. } => {}
        }
    }

    debug!(
        "finalize done: {} ids issued, {} heading links pending",
        tree.sections().filter(|(_, s)| s.id.is_some()).count(),
        cx.links.pending()
    );
    Ok(())
}
