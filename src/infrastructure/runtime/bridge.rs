//! Runtime bridge - connects the sync TUI thread with the async Tokio runtime
//!
//! The TUI thread owns the coordinator. Fetches run on a worker thread that
//! owns its own Tokio runtime; results come back over a channel and are
//! drained on the TUI thread, so every state change happens in one place.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use tokio::runtime::Runtime;

use crate::core::{FetchError, Intent};
use crate::domain::{Wallet, WalletType};
use crate::infrastructure::blockcypher::WalletService;
use crate::infrastructure::runtime::worker::run_async_worker;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCommand {
    /// Fetch a wallet by address
    FetchWallet {
        address: String,
        wallet_type: WalletType,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeEvent {
    WalletFetched {
        address: String,
        wallet_type: WalletType,
        wallet: Wallet,
    },
    FetchFailed {
        address: String,
        wallet_type: WalletType,
        error: FetchError,
    },
}

impl From<RuntimeEvent> for Intent {
    fn from(event: RuntimeEvent) -> Self {
        match event {
            RuntimeEvent::WalletFetched {
                address,
                wallet_type,
                wallet,
            } => Intent::WalletFetched {
                address,
                wallet_type,
                wallet,
            },
            RuntimeEvent::FetchFailed {
                address,
                wallet_type,
                error,
            } => Intent::WalletFetchFailed {
                address,
                wallet_type,
                error,
            },
        }
    }
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Spawn the worker thread serving fetches from `service`
    pub fn new(service: Arc<dyn WalletService>) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        let rt = Runtime::new().context("create Tokio runtime")?;
        thread::Builder::new()
            .name("wallet-worker".into())
            .spawn(move || {
                rt.block_on(async {
                    if let Err(err) = run_async_worker(service, cmd_rx, evt_tx).await {
                        tracing::error!("worker exited: {err:#}");
                    }
                });
            })
            .context("spawn worker thread")?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
