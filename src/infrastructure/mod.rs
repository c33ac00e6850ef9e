//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - The BlockCypher wallet-fetch client (reqwest + serde)
//! - System clipboard access (arboard)
//! - Tokio runtime bridge for async fetches

pub mod blockcypher;
pub mod clipboard;
pub mod runtime;

pub use blockcypher::{BlockCypherClient, ClientConfig, WalletService};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
