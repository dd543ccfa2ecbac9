use serde::Serialize;

use crate::parsing::{
    Document,
    blocks::{BlockId, BlockKind},
    references::{LinkDestination, normalize_label},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
    pub references: Vec<ReferenceSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockSnap>,
}

/// One reference table entry. Exactly one of `url` and `section` is set;
/// `section` holds the target section's id.
#[derive(Debug, Serialize)]
pub struct ReferenceSnap {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

pub fn normalize(doc: &Document) -> Snap {
    let blocks = doc.tree.roots().iter().map(|&id| block(doc, id)).collect();

    let mut references: Vec<_> = doc
        .references
        .iter()
        .map(|r| {
            let (url, section) = match &r.destination {
                LinkDestination::Url(url) => (Some(url.clone()), None),
                LinkDestination::Section(id) => (
                    None,
                    doc.tree
                        .get(*id)
                        .and_then(|n| n.section())
                        .and_then(|s| s.id.clone()),
                ),
            };
            ReferenceSnap {
                label: normalize_label(&r.label),
                url,
                section,
            }
        })
        .collect();
    references.sort_by(|a, b| a.label.cmp(&b.label));

    Snap { blocks, references }
}

fn block(doc: &Document, id: BlockId) -> BlockSnap {
    let node = &doc.tree[id];
    let (kind, block_id, class) = match &node.kind {
        BlockKind::Paragraph => ("Paragraph".to_string(), None, None),
        BlockKind::Heading { level, .. } => (format!("Heading({level})"), None, None),
        BlockKind::Section(section) => (
            format!("Section({})", section.level),
            section.id.clone(),
            None,
        ),
        BlockKind::FencedCode(code) => ("FencedCode".to_string(), None, code.class_name.clone()),
        BlockKind::Alert(alert) => (
            format!("Alert({})", alert.options.alert_type),
            None,
            alert.class_name.clone(),
        ),
        BlockKind::LinkDefinition { .. } => ("LinkDefinition".to_string(), None, None),
    };

    BlockSnap {
        kind,
        span: (node.span.start, node.span.end),
        id: block_id,
        class,
        children: node.children.iter().map(|&c| block(doc, c)).collect(),
    }
}
