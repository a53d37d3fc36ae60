//! Correlation between incoming response frames and outstanding requests.
//!
//! The transport calls [`Driver::supply_frame`] once per delimited frame;
//! the request originator calls [`Driver::submit`] when it sends a command
//! and awaits the returned [`Response`]. Both paths mutate the same
//! registry through `&mut self`, so the exactly-once completion invariant
//! holds without any further synchronization.

use deconz_frame::{decode, DecodedFrame};
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::registry::Registry;
use crate::response::Response;

/// Matches decoded response frames to pending requests.
#[derive(Debug, Default)]
pub struct Driver {
    registry: Registry,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in the response for `seq`.
    ///
    /// Called by the request originator at the moment the command goes out
    /// on the wire. The originator assigns sequence numbers and must not
    /// reuse one until the prior request has completed or been cancelled.
    pub fn submit(&mut self, seq: u8) -> Response {
        debug!(seq, "request submitted");
        self.registry.register(seq)
    }

    /// Decode a raw frame handed over by the transport and resolve the
    /// matching request, if any.
    ///
    /// Decode failures indicate frame corruption, not the outcome of any
    /// particular request; they are logged and the frame is dropped without
    /// touching the registry.
    pub fn supply_frame(&mut self, buf: &[u8]) {
        let frame = match decode(buf) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(%err, len = buf.len(), "dropping undecodable frame");
                return;
            }
        };
        self.resolve(frame);
    }

    /// Resolve an already-decoded frame against the registry.
    ///
    /// No match is expected traffic (the originator may have cancelled or
    /// timed the request out); the frame is discarded silently. On a match
    /// the request is removed first, then completed, so a later frame with
    /// the same sequence number can never reach it again.
    pub fn resolve(&mut self, frame: DecodedFrame) {
        debug!(seq = frame.seq, status = frame.status, "processing frame");

        let Some(request) = self.registry.take(frame.seq) else {
            debug!(seq = frame.seq, "no pending request, discarding frame");
            return;
        };

        if frame.is_success() {
            request.succeed(frame.payload);
        } else {
            request.fail(RequestError::Remote {
                status: frame.status,
            });
        }
    }

    /// Proactively fail the request waiting on `seq`.
    ///
    /// Used by the transport's timeout handling. No-op if the request has
    /// already completed or was never registered.
    pub fn cancel(&mut self, seq: u8) {
        if let Some(request) = self.registry.take(seq) {
            debug!(seq, "request cancelled");
            request.fail(RequestError::Cancelled);
        }
    }

    /// Number of requests still awaiting a response.
    pub fn pending(&self) -> usize {
        self.registry.len()
    }
}
