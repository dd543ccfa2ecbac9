use std::collections::HashMap;

use super::blocks::BlockId;

/// Where a reference link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDestination {
    /// An explicit URL from a `[label]: url` definition.
    Url(String),
    /// A section whose id is read when the link is resolved.
    Section(BlockId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// The label as written.
    pub label: String,
    pub destination: LinkDestination,
    pub title: Option<String>,
}

/// The document's reference definitions, keyed by normalized label.
#[derive(Debug, Clone, Default)]
pub struct LinkReferenceTable {
    entries: HashMap<String, LinkReference>,
}

impl LinkReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition unless one with the same normalized label exists.
    /// The first definition wins. Returns whether it was added.
    pub fn define(&mut self, reference: LinkReference) -> bool {
        let key = normalize_label(&reference.label);
        if key.is_empty() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, reference);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(&normalize_label(label))
    }

    pub fn get(&self, label: &str) -> Option<&LinkReference> {
        self.entries.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkReference> {
        self.entries.values()
    }
}

/// Case-folds a label and collapses internal whitespace to single spaces.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(label: &str, url: &str) -> LinkReference {
        LinkReference {
            label: label.to_string(),
            destination: LinkDestination::Url(url.to_string()),
            title: None,
        }
    }

    #[test]
    fn normalize_folds_case_and_whitespace() {
        assert_eq!(normalize_label("  Getting   Started\t"), "getting started");
    }

    #[test]
    fn first_definition_wins() {
        let mut table = LinkReferenceTable::new();
        assert!(table.define(url("Intro", "/a")));
        assert!(!table.define(url("intro", "/b")));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("INTRO").map(|r| &r.destination),
            Some(&LinkDestination::Url("/a".to_string()))
        );
    }

    #[test]
    fn blank_label_is_rejected() {
        let mut table = LinkReferenceTable::new();
        assert!(!table.define(url("   ", "/a")));
        assert!(table.is_empty());
    }
}
