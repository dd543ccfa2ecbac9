pub mod blocks;
pub mod context;
pub mod finalize;
pub mod inline;
pub mod payload;
pub mod references;
pub mod rope;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

use log::{Level, log_enabled, trace};
use markdown_blockext_config::Config;
use xi_rope::Rope;

use crate::error::{Error, UsageError};
use blocks::{BlockBuilder, BlockId, BlockKind, BlockTree, MarkdownLineClassifier};
use context::ParseContext;
use references::{LinkDestination, LinkReferenceTable};
use rope::lines_with_spans;

/// A fully parsed and finalized document. Read-only.
#[derive(Debug)]
pub struct Document {
    rope: Rope,
    pub tree: BlockTree,
    pub references: LinkReferenceTable,
}

/// A reference link target, evaluated on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub url: String,
    pub title: Option<String>,
}

/// Runs the parse pass, the finalize pass and the deferred link flush.
pub fn parse_document(rope: &Rope, config: &Config) -> Result<Document, Error> {
    let classifier = MarkdownLineClassifier;
    let mut cx = ParseContext::new(config);
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc, &mut cx)?;
    }

    let mut tree = builder.finish(&mut cx)?;
    finalize::finalize(&mut tree, &mut cx)?;
    if log_enabled!(Level::Trace) {
        for (id, node) in tree.iter() {
            trace!("{id:?} {}: {:?}", node.kind.name(), rope::preview(rope, node.span, 40));
        }
    }
    let references = cx.begin_inline()?;

    Ok(Document {
        rope: rope.clone(),
        tree,
        references,
    })
}

pub fn parse_str(source: &str, config: &Config) -> Result<Document, Error> {
    parse_document(&Rope::from(source), config)
}

impl Document {
    /// Parses UTF-8 bytes with the given configuration.
    pub fn from_bytes(bytes: &[u8], config: &Config) -> anyhow::Result<Self> {
        let source = std::str::from_utf8(bytes)?;
        Ok(parse_str(source, config)?)
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The block's content with container prefixes removed.
    pub fn content(&self, id: BlockId) -> Result<String, UsageError> {
        Ok(self.tree.node(id)?.content.join_content(&self.rope))
    }

    /// Inline nodes of a paragraph, heading or alert. Other blocks have none.
    pub fn inline(&self, id: BlockId) -> Result<Vec<inline::InlineNode>, UsageError> {
        let node = self.tree.node(id)?;
        if !matches!(
            node.kind,
            BlockKind::Paragraph | BlockKind::Heading { .. } | BlockKind::Alert(_)
        ) {
            return Ok(vec![]);
        }
        Ok(node
            .content
            .spans()
            .flat_map(|span| {
                let s = rope::slice_to_string(&self.rope, span);
                inline::parse_inline(span.start, &s, &self.references)
            })
            .collect())
    }

    /// Resolves a reference label. Section targets read the section's final id.
    pub fn resolve_reference(&self, label: &str) -> Option<ResolvedLink> {
        let reference = self.references.get(label)?;
        let url = match &reference.destination {
            LinkDestination::Url(url) => url.clone(),
            LinkDestination::Section(id) => match &self.tree.get(*id)?.kind {
                BlockKind::Section(section) => format!("#{}", section.id.as_deref()?),
                _ => return None,
            },
        };
        Some(ResolvedLink {
            url,
            title: reference.title.clone(),
        })
    }
}
