//! The pending-request table.
//!
//! An ordered list of requests awaiting a response, keyed by the 8-bit
//! sequence number echoed back in each frame. Order is submission order, so
//! lookups are deterministically first-match-wins even if a caller violates
//! the uniqueness contract.

use deconz_frame::CommandResult;
use tokio::sync::oneshot;

use crate::error::RequestError;
use crate::response::Response;

type Outcome = Result<CommandResult, RequestError>;

/// One outstanding request. Owned by the [`Registry`] from registration
/// until it is matched or cancelled; completing it consumes it, so no
/// request can ever be resolved twice.
#[derive(Debug)]
pub struct PendingRequest {
    seq: u8,
    tx: oneshot::Sender<Outcome>,
}

impl PendingRequest {
    /// Sequence number this request is waiting on.
    pub fn seq(&self) -> u8 {
        self.seq
    }

    /// Complete with a decoded payload.
    pub fn succeed(self, payload: CommandResult) {
        // The waiter may have gone away; that is its business, not ours.
        let _ = self.tx.send(Ok(payload));
    }

    /// Complete with a failure.
    pub fn fail(self, error: RequestError) {
        let _ = self.tx.send(Err(error));
    }
}

/// Ordered collection of outstanding requests.
#[derive(Debug, Default)]
pub struct Registry {
    pending: Vec<PendingRequest>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending request and hand back the response future.
    ///
    /// The caller must not register a sequence number that is already
    /// outstanding; if it does anyway, the earliest registration wins.
    pub fn register(&mut self, seq: u8) -> Response {
        let (tx, rx) = oneshot::channel();
        self.pending.push(PendingRequest { seq, tx });
        Response::new(rx)
    }

    /// Remove and return the first request matching `seq`, if any.
    ///
    /// Removal happens here, before the caller completes the request, which
    /// is what makes re-use of the sequence number safe afterwards.
    pub fn take(&mut self, seq: u8) -> Option<PendingRequest> {
        let i = self.pending.iter().position(|r| r.seq == seq)?;
        Some(self.pending.remove(i))
    }

    /// Number of requests still awaiting a response.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_take() {
        let mut registry = Registry::new();
        let _response = registry.register(5);
        assert_eq!(registry.len(), 1);

        let req = registry.take(5).unwrap();
        assert_eq!(req.seq(), 5);
        assert!(registry.is_empty());
    }

    #[test]
    fn take_missing_seq_is_none() {
        let mut registry = Registry::new();
        let _response = registry.register(5);

        assert!(registry.take(6).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn take_removes_so_second_take_misses() {
        let mut registry = Registry::new();
        let _response = registry.register(9);

        assert!(registry.take(9).is_some());
        assert!(registry.take(9).is_none());
    }

    #[test]
    fn duplicate_seq_resolves_first_registered() {
        let mut registry = Registry::new();
        let mut first = registry.register(1);
        let mut second = registry.register(1);

        registry
            .take(1)
            .unwrap()
            .succeed(CommandResult::NetworkChannel(11));

        assert_eq!(
            first.try_take(),
            Some(Ok(CommandResult::NetworkChannel(11)))
        );
        assert_eq!(second.try_take(), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn preserves_submission_order_across_removals() {
        let mut registry = Registry::new();
        let _a = registry.register(1);
        let _b = registry.register(2);
        let _c = registry.register(3);

        registry.take(2);
        let seqs: Vec<u8> = registry.pending.iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![1, 3]);
    }
}
