use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use deconz_frame::CommandResult;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::error::RequestError;

type Outcome = Result<CommandResult, RequestError>;

/// Deferred result of a submitted request.
///
/// Resolves exactly once: with the decoded payload when a matching success
/// frame arrives, with [`RequestError::Remote`] on a non-zero status, with
/// [`RequestError::Cancelled`] when the owner cancels the request, or with
/// [`RequestError::Closed`] if the driver goes away first.
#[derive(Debug)]
pub struct Response {
    rx: oneshot::Receiver<Outcome>,
}

impl Response {
    pub(crate) fn new(rx: oneshot::Receiver<Outcome>) -> Self {
        Self { rx }
    }

    /// Non-blocking check, for event-loop callers that poll by hand.
    ///
    /// Returns `None` while the request is still outstanding.
    pub fn try_take(&mut self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(RequestError::Closed)),
        }
    }
}

impl Future for Response {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // Sender dropped without completing: driver shut down.
            Poll::Ready(Err(_)) => Poll::Ready(Err(RequestError::Closed)),
            Poll::Pending => Poll::Pending,
        }
    }
}
