//! Spawns model requests on background threads with a result channel and a cancel token.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm::{self, ChatError, RequestKind};

/// A request in flight. The worker sends exactly one result, then exits.
pub struct PendingRequest {
    pub kind: RequestKind,
    pub result_rx: mpsc::Receiver<Result<String, ChatError>>,
    /// Cancelled when the view that asked for the result goes away.
    pub cancel_token: CancellationToken,
}

/// What polling a pending request produced.
pub enum Poll {
    Pending,
    Ready(Result<String, ChatError>),
    /// Worker gone without a result, or request cancelled; drop it.
    Gone,
}

impl PendingRequest {
    pub fn poll(&self) -> Poll {
        if self.cancel_token.is_cancelled() {
            return Poll::Gone;
        }
        match self.result_rx.try_recv() {
            Ok(result) => Poll::Ready(result),
            Err(mpsc::TryRecvError::Empty) => Poll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => Poll::Gone,
        }
    }

    /// A request whose worker never runs. Returns the token for assertions.
    #[cfg(test)]
    pub fn detached(kind: RequestKind) -> (Self, CancellationToken) {
        let (_tx, result_rx) = mpsc::channel();
        let cancel_token = CancellationToken::new();
        let request = Self {
            kind,
            result_rx,
            cancel_token: cancel_token.clone(),
        };
        (request, cancel_token)
    }

    /// A request that already finished with `result`.
    #[cfg(test)]
    pub fn ready(kind: RequestKind, result: Result<String, ChatError>) -> Self {
        let (tx, result_rx) = mpsc::channel();
        let _ = tx.send(result);
        Self {
            kind,
            result_rx,
            cancel_token: CancellationToken::new(),
        }
    }
}

/// Spawn a request. The worker thread drives the shared runtime until the reply or cancellation.
pub fn spawn_request(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    model_id: String,
    kind: RequestKind,
) -> PendingRequest {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);
    let worker_kind = kind.clone();

    std::thread::spawn(move || {
        let result = rt_clone.block_on(llm::complete(
            config.as_ref(),
            &model_id,
            &worker_kind,
            Some(&cancel_token_clone),
        ));
        let _ = result_tx.send(result);
    });

    PendingRequest {
        kind,
        result_rx,
        cancel_token,
    }
}
