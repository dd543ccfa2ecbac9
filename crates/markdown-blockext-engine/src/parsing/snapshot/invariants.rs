use crate::parsing::{Document, blocks::BlockKind};

/// Lowercase alphanumeric words joined by single hyphens.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// Panics if the document breaks a structural invariant.
pub fn check(doc: &Document) {
    let n = doc.rope().len();

    for (id, node) in doc.tree.iter() {
        assert!(
            node.span.start <= node.span.end && node.span.end <= n,
            "block span out of bounds: {:?} (rope len: {n})",
            node.span,
        );
        for content in node.content.spans() {
            assert!(
                content.end <= n && node.span.contains(content),
                "content span {content:?} not contained in block span {:?}",
                node.span
            );
        }

        if let Some(parent) = node.parent {
            let outer = &doc.tree[parent];
            assert!(
                outer.span.contains(node.span),
                "child {id:?} {:?} escapes parent {parent:?} {:?}",
                node.span,
                outer.span
            );
            if let (Some(inner), Some(outer)) = (node.section(), outer.section()) {
                assert!(
                    inner.level > outer.level,
                    "section {id:?} (level {}) nested under level {}",
                    inner.level,
                    outer.level
                );
            }
        }

        if let BlockKind::Section(section) = &node.kind {
            if let Some(section_id) = &section.id {
                assert!(is_valid_id(section_id), "malformed section id {section_id:?}");
            }
        }
    }

    let mut ids: Vec<_> = doc.tree.sections().filter_map(|(_, s)| s.id.as_deref()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "section ids are not unique");
}
