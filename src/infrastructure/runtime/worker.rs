//! Async worker - runs in the Tokio runtime and performs wallet fetches

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::infrastructure::blockcypher::WalletService;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};

/// Run the async worker loop
///
/// Every fetch is spawned as its own task. Nothing is de-duplicated or
/// cancelled; a second request for the same address simply runs alongside
/// the first.
pub(crate) async fn run_async_worker(
    service: Arc<dyn WalletService>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    let mut poll_interval = interval(Duration::from_millis(25));

    loop {
        // Process commands (non-blocking)
        loop {
            match cmd_rx.try_recv() {
                Ok(RuntimeCommand::Shutdown) => {
                    info!("worker shutting down");
                    return Ok(());
                }
                Ok(RuntimeCommand::FetchWallet {
                    address,
                    wallet_type,
                }) => {
                    let service = Arc::clone(&service);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let event = match service.fetch_wallet(&address, wallet_type).await {
                            Ok(wallet) => {
                                debug!(%address, txs = wallet.transactions.len(), "fetch done");
                                RuntimeEvent::WalletFetched {
                                    address,
                                    wallet_type,
                                    wallet,
                                }
                            }
                            Err(error) => {
                                warn!(%address, %error, "fetch failed");
                                RuntimeEvent::FetchFailed {
                                    address,
                                    wallet_type,
                                    error,
                                }
                            }
                        };
                        let _ = evt_tx.send(event);
                    });
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return Ok(());
                }
            }
        }

        poll_interval.tick().await;
    }
}
