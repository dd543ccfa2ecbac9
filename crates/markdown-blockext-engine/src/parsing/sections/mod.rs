//! # Sections
//!
//! Heading-anchored containers and the document-wide services they use.
//!
//! - **`resolver`**: `SectionNestingResolver` keeps the open-section stack so
//!   that nesting depth mirrors heading level.
//! - **`ids`**: `IdentifierRegistry` turns heading text into unique slugs.
//! - **`links`**: `DeferredLinkBinder` collects heading auto-links until the
//!   inline phase starts.
//!
//! Sections get their id when they close (see [`close_section`]), which runs in
//! the finalize pass: children before parents.

pub mod ids;
pub mod links;
pub mod resolver;

pub use ids::{DEFAULT_SLUG, IdentifierRegistry, slugify};
pub use links::DeferredLinkBinder;
pub use resolver::{OpenSection, SectionNestingResolver, SectionOpen};

use log::debug;

use crate::error::{BlockName, DocumentError, Error, UsageError};
use crate::parsing::blocks::{BlockId, BlockKind, BlockTree};
use crate::parsing::context::ParseContext;

/// Finalizes one section: assigns its id from the first direct heading child
/// and registers the heading text as an auto-link.
pub fn close_section(tree: &mut BlockTree, id: BlockId, cx: &mut ParseContext<'_>) -> Result<(), Error> {
    let node = tree.node(id)?;
    let BlockKind::Section(section) = &node.kind else {
        return Err(UsageError::NotASection {
            id,
            found: node.kind.name(),
        }
        .into());
    };
    let (generate_id, auto_link) = (section.options.generate_id, section.options.auto_link);

    let heading_text = tree
        .find_child(id, |kind| matches!(kind, BlockKind::Heading { .. }))
        .and_then(|h| match &tree[h].kind {
            BlockKind::Heading { text, .. } => Some(text.clone()),
            _ => None,
        });

    let Some(text) = heading_text else {
        if generate_id {
            return Err(DocumentError::InvalidStructure {
                block: BlockName::SectionBlock,
                position: node.position(),
                message: "section has no heading to generate an id from".to_string(),
            }
            .into());
        }
        return Ok(());
    };

    if !generate_id {
        return Ok(());
    }

    let assigned = cx.identifiers.assign(&text);
    if auto_link {
        cx.links.register(&text, id)?;
    }
    debug!("section {id:?} id = {assigned}");

    if let BlockKind::Section(section) = &mut tree.node_mut(id)?.kind {
        section.id = Some(assigned);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{ContentView, NewBlock, Section};
    use crate::parsing::rope::Span;
    use markdown_blockext_config::{Config, SectionOptions, WrapperKind};

    fn block(kind: BlockKind) -> NewBlock {
        NewBlock {
            kind,
            span: Span::default(),
            line: 2,
            column: 0,
            content: ContentView::Contiguous(Span::default()),
        }
    }

    fn section(options: SectionOptions) -> BlockKind {
        BlockKind::Section(Section {
            level: 1,
            wrapper: WrapperKind::Section,
            options,
            id: None,
        })
    }

    #[test]
    fn section_without_heading_is_invalid() {
        let config = Config::default();
        let mut cx = ParseContext::new(&config);
        let mut tree = BlockTree::new();
        let id = tree.append(None, block(section(SectionOptions::default())));
        tree.append(Some(id), block(BlockKind::Paragraph));

        let err = close_section(&mut tree, id, &mut cx).unwrap_err();

        assert!(matches!(
            err.as_document(),
            Some(DocumentError::InvalidStructure {
                block: BlockName::SectionBlock,
                ..
            })
        ));
        assert_eq!(err.as_document().map(|e| e.position().line), Some(3));
    }

    #[test]
    fn headless_section_is_fine_without_id_generation() {
        let config = Config::default();
        let mut cx = ParseContext::new(&config);
        let mut tree = BlockTree::new();
        let id = tree.append(
            None,
            block(section(SectionOptions {
                generate_id: false,
                ..SectionOptions::default()
            })),
        );

        assert!(close_section(&mut tree, id, &mut cx).is_ok());
        assert_eq!(tree[id].section().and_then(|s| s.id.clone()), None);
    }

    #[test]
    fn non_section_is_usage_error() {
        let config = Config::default();
        let mut cx = ParseContext::new(&config);
        let mut tree = BlockTree::new();
        let id = tree.append(None, block(BlockKind::Paragraph));

        let err = close_section(&mut tree, id, &mut cx).unwrap_err();

        assert!(matches!(
            err,
            Error::Usage(UsageError::NotASection {
                found: BlockName::Paragraph,
                ..
            })
        ));
    }

    #[test]
    fn id_and_link_are_registered() {
        let config = Config::default();
        let mut cx = ParseContext::new(&config);
        let mut tree = BlockTree::new();
        let id = tree.append(None, block(section(SectionOptions::default())));
        tree.append(
            Some(id),
            block(BlockKind::Heading {
                level: 1,
                text: "Getting Started".to_string(),
            }),
        );

        close_section(&mut tree, id, &mut cx).unwrap();

        assert_eq!(tree[id].section().and_then(|s| s.id.as_deref()), Some("getting-started"));
        assert_eq!(cx.links.pending(), 1);
    }
}
