use std::collections::HashMap;

use log::debug;

use crate::error::UsageError;
use crate::parsing::blocks::BlockId;
use crate::parsing::references::{LinkDestination, LinkReference, LinkReferenceTable, normalize_label};

/// Heading auto-links collected during finalize, installed into the
/// reference table once all ids are known.
#[derive(Debug, Default)]
pub struct DeferredLinkBinder {
    /// Registration order, one entry per heading text.
    entries: Vec<(String, BlockId)>,
    /// Heading text → index into `entries`.
    index: HashMap<String, usize>,
    flushed: bool,
}

impl DeferredLinkBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `heading_text` should link to `section`. A later
    /// registration of the same text replaces the earlier target.
    pub fn register(&mut self, heading_text: &str, section: BlockId) -> Result<(), UsageError> {
        if self.flushed {
            return Err(UsageError::LinksAlreadyFlushed);
        }
        match self.index.get(heading_text) {
            Some(&i) => self.entries[i].1 = section,
            None => {
                self.index.insert(heading_text.to_string(), self.entries.len());
                self.entries.push((heading_text.to_string(), section));
            }
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    /// Installs every placeholder whose label is not already defined.
    /// Explicit definitions always win. Returns how many were installed.
    pub fn flush(&mut self, table: &mut LinkReferenceTable) -> Result<usize, UsageError> {
        if self.flushed {
            return Err(UsageError::LinksAlreadyFlushed);
        }
        self.flushed = true;
        self.index.clear();

        let mut installed = 0;
        for (label, section) in self.entries.drain(..) {
            if normalize_label(&label).is_empty() || table.contains(&label) {
                continue;
            }
            if table.define(LinkReference {
                label,
                destination: LinkDestination::Section(section),
                title: None,
            }) {
                installed += 1;
            }
        }

        debug!("heading links flushed: {installed} installed");
        Ok(installed)
    }
}
