use log::debug;

use crate::error::{BlockName, DocumentError, OrphanCause};

use super::PayloadSpan;

/// Holds the one closed payload waiting for its consumer.
#[derive(Debug, Default)]
pub struct PendingPayloadSlot {
    occupant: Option<PayloadSpan>,
}

impl PendingPayloadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn peek(&self) -> Option<&PayloadSpan> {
        self.occupant.as_ref()
    }

    /// Parks a closed payload. Fails if an earlier payload was never claimed;
    /// the error points at that earlier payload.
    pub fn store(&mut self, payload: PayloadSpan) -> Result<(), DocumentError> {
        if let Some(previous) = &self.occupant {
            return Err(DocumentError::OrphanedPayload {
                block: BlockName::OptionsBlock,
                position: previous.position(),
                cause: OrphanCause::Superseded,
            });
        }
        debug!(
            "options payload stored (lines {}..={})",
            payload.start_line + 1,
            payload.end_line + 1
        );
        self.occupant = Some(payload);
        Ok(())
    }

    /// Hands the pending payload to a consumer that opens on `consumer_start_line`.
    ///
    /// The payload must end on the line directly above the consumer; any gap,
    /// blank lines included, is an error pointing at the payload.
    pub fn try_claim(
        &mut self,
        consumer_start_line: usize,
        consumer: BlockName,
    ) -> Result<Option<PayloadSpan>, DocumentError> {
        let Some(payload) = &self.occupant else {
            return Ok(None);
        };
        if payload.end_line + 1 != consumer_start_line {
            return Err(DocumentError::MispositionedPayload {
                block: BlockName::OptionsBlock,
                position: payload.position(),
                consumer,
            });
        }
        debug!(
            "{consumer} on line {} claimed options payload",
            consumer_start_line + 1
        );
        Ok(self.occupant.take())
    }

    /// End-of-document check: nothing may be left unclaimed.
    pub fn ensure_empty(&self) -> Result<(), DocumentError> {
        match &self.occupant {
            Some(payload) => Err(DocumentError::OrphanedPayload {
                block: BlockName::OptionsBlock,
                position: payload.position(),
                cause: OrphanCause::Unconsumed,
            }),
            None => Ok(()),
        }
    }
}
