//! Network actor - runs fetches in the Tokio async runtime

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::error::FetchError;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Tracks an active fetch for cancellation
struct ActiveFetch {
    cancel_tx: oneshot::Sender<()>,
}

/// Reports a terminal response for a fetch when dropped.
///
/// Whatever happens to the task (normal completion, cancellation, abort on
/// shutdown, panic), the App layer hears about it exactly once and can
/// release its loading flag.
struct SettleGuard {
    id: u64,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    settled: bool,
}

impl SettleGuard {
    fn new(id: u64, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        SettleGuard {
            id,
            response_tx,
            settled: false,
        }
    }

    fn settle(mut self, response: NetworkResponse) {
        self.settled = true;
        let _ = self.response_tx.send(response);
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(id = self.id, "Fetch task ended without a result");
            let _ = self.response_tx.send(NetworkResponse::Failed {
                id: self.id,
                error: FetchError::Aborted,
                time_ms: 0,
            });
        }
    }
}

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
    cancel_handles: HashMap<u64, ActiveFetch>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, timeout: Duration) -> Self {
        NetworkActor {
            client: create_client(timeout),
            response_tx,
            active_fetches: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchItems { id, url }) => self.spawn_fetch(id, url),

                        Some(NetworkCommand::CancelFetch(id)) => {
                            if let Some(active) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling fetch");
                                let _ = active.cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            for (_, active) in self.cancel_handles.drain() {
                                let _ = active.cancel_tx.send(());
                            }
                            self.active_fetches.shutdown().await;
                            break;
                        }
                    }
                }

                Some(_result) = self.active_fetches.join_next() => {
                    // Task completed - it already reported through its guard
                }
            }
        }
    }

    fn spawn_fetch(&mut self, id: u64, url: String) {
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        self.cancel_handles.insert(id, ActiveFetch { cancel_tx });

        let guard = SettleGuard::new(id, self.response_tx.clone());
        let client = self.client.clone();

        self.active_fetches.spawn(async move {
            tracing::info!(id, url = %url, "Fetching items");
            tokio::select! {
                biased;

                _ = &mut cancel_rx => {
                    guard.settle(NetworkResponse::Cancelled { id });
                }
                response = execute_fetch(&client, &url, id) => {
                    match &response {
                        NetworkResponse::Items { items, time_ms, .. } => {
                            tracing::info!(id, count = items.len(), time_ms, "Fetch completed");
                        }
                        NetworkResponse::Failed { error, time_ms, .. } => {
                            tracing::warn!(id, %error, time_ms, "Fetch failed");
                        }
                        NetworkResponse::Cancelled { .. } => {}
                    }
                    guard.settle(response);
                }
            }
        });

        // Forget cancel handles of fetches that already finished
        self.cancel_handles.retain(|_, active| !active.cancel_tx.is_closed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_guard_reports_aborted() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(SettleGuard::new(7, tx));

        match rx.try_recv().unwrap() {
            NetworkResponse::Failed { id, error, .. } => {
                assert_eq!(id, 7);
                assert_eq!(error, FetchError::Aborted);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_settled_guard_reports_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        SettleGuard::new(3, tx).settle(NetworkResponse::Cancelled { id: 3 });

        assert!(matches!(rx.try_recv(), Ok(NetworkResponse::Cancelled { id: 3 })));
        assert!(rx.try_recv().is_err());
    }
}
