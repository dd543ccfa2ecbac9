use markdown_blockext_config::Config;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BlockName, DocumentError, UsageError};
use crate::options::merge_payload;

use super::payload::PendingPayloadSlot;
use super::references::LinkReferenceTable;
use super::sections::{DeferredLinkBinder, IdentifierRegistry};

/// Per-document state shared by the block parsers and the finalize pass.
///
/// Owned by one parse; nothing in it outlives the document.
#[derive(Debug)]
pub struct ParseContext<'c> {
    pub config: &'c Config,
    /// The options payload waiting for its consumer.
    pub payloads: PendingPayloadSlot,
    pub identifiers: IdentifierRegistry,
    /// Heading auto-links waiting for their section ids.
    pub links: DeferredLinkBinder,
    pub references: LinkReferenceTable,
}

impl<'c> ParseContext<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            payloads: PendingPayloadSlot::new(),
            identifiers: IdentifierRegistry::new(),
            links: DeferredLinkBinder::new(),
            references: LinkReferenceTable::new(),
        }
    }

    /// Claims the pending payload for a consumer opening on `line` and
    /// returns the effective options: `defaults` with the payload merged over
    /// them, or `defaults` unchanged when nothing is pending.
    pub fn claim_options<T>(
        &mut self,
        defaults: &T,
        line: usize,
        consumer: BlockName,
    ) -> Result<T, DocumentError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        match self.payloads.try_claim(line, consumer)? {
            Some(payload) => merge_payload(defaults, &payload),
            None => Ok(defaults.clone()),
        }
    }

    /// Start of the inline phase: installs the deferred heading links and
    /// hands over the finished reference table. Only valid once.
    pub fn begin_inline(&mut self) -> Result<LinkReferenceTable, UsageError> {
        self.links.flush(&mut self.references)?;
        Ok(std::mem::take(&mut self.references))
    }
}
