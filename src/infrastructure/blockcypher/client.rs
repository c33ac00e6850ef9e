//! Wallet-fetch service backed by the BlockCypher address API
//!
//! `GET {base}/{chain}/main/addrs/{address}/full?limit=N[&token=T]`

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::core::FetchError;
use crate::domain::{Transaction, Wallet, WalletType};

pub const DEFAULT_BASE_URL: &str = "https://api.blockcypher.com/v1";

/// Abstract wallet source
///
/// The coordinator never sees this trait; the runtime worker calls it and
/// turns the outcome into an intent.
#[async_trait::async_trait]
pub trait WalletService: Send + Sync + 'static {
    async fn fetch_wallet(&self, address: &str, wallet_type: WalletType) -> Result<Wallet, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// Maximum number of transactions requested per address
    pub tx_limit: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            tx_limit: 50,
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct BlockCypherClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl BlockCypherClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self { http, config })
    }

    pub fn address_url(&self, address: &str, wallet_type: WalletType) -> String {
        format!(
            "{}/{}/main/addrs/{}/full",
            self.config.base_url.trim_end_matches('/'),
            wallet_type.code(),
            address
        )
    }
}

#[async_trait::async_trait]
impl WalletService for BlockCypherClient {
    async fn fetch_wallet(&self, address: &str, wallet_type: WalletType) -> Result<Wallet, FetchError> {
        let address = address.trim();
        if address.is_empty() || !address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FetchError::InvalidAddress(address.to_string()));
        }

        let url = self.address_url(address, wallet_type);
        debug!(%url, "requesting address");

        let mut request = self
            .http
            .get(&url)
            .query(&[("limit", self.config.tx_limit.to_string())]);
        if let Some(token) = &self.config.token {
            request = request.query(&[("token", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: AddressResponse = response.json().await?;
        Ok(body.into())
    }
}

/// Full address endpoint response (only the fields we use)
#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    pub address: String,
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub total_received: u64,
    #[serde(default)]
    pub total_sent: u64,
    #[serde(default)]
    pub n_tx: u64,
    #[serde(default)]
    pub txs: Vec<TxResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TxResponse {
    pub hash: String,
    #[serde(default)]
    pub total: u64,
    pub received: DateTime<Utc>,
    #[serde(default)]
    pub confirmed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub confirmations: u64,
    /// -1 while unconfirmed
    #[serde(default)]
    pub block_height: Option<i64>,
    #[serde(default)]
    pub block_index: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl From<TxResponse> for Transaction {
    fn from(tx: TxResponse) -> Self {
        Transaction {
            hash: tx.hash,
            total: tx.total,
            received: tx.received,
            confirmed: tx.confirmed,
            confirmations: tx.confirmations,
            block_height: tx.block_height.filter(|h| *h >= 0),
            block_index: tx.confirmed.and(tx.block_index),
        }
    }
}

impl From<AddressResponse> for Wallet {
    fn from(body: AddressResponse) -> Self {
        Wallet {
            address: body.address,
            balance: body.balance,
            total_received: body.total_received,
            total_sent: body.total_sent,
            tx_count: body.n_tx,
            transactions: body.txs.into_iter().map(Transaction::from).collect(),
        }
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_string())
}
