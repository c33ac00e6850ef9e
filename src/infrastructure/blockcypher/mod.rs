//! BlockCypher-backed wallet-fetch service

mod client;

pub use client::{BlockCypherClient, ClientConfig, WalletService, DEFAULT_BASE_URL};
