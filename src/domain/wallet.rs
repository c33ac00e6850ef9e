//! Wallet and transaction models as returned by the address API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Smallest units per display unit (satoshi-equivalent, 8 decimals)
pub const UNITS_PER_COIN: u64 = 100_000_000;

/// Chains the wallet-fetch service knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    Bitcoin,
    Litecoin,
    Dash,
    Dogecoin,
}

impl WalletType {
    pub const ALL: [WalletType; 4] = [
        WalletType::Bitcoin,
        WalletType::Litecoin,
        WalletType::Dash,
        WalletType::Dogecoin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WalletType::Bitcoin => "Bitcoin",
            WalletType::Litecoin => "Litecoin",
            WalletType::Dash => "Dash",
            WalletType::Dogecoin => "Dogecoin",
        }
    }

    /// Currency suffix appended to every formatted amount
    pub fn unit(&self) -> &'static str {
        match self {
            WalletType::Bitcoin => "BTC",
            WalletType::Litecoin => "LTC",
            WalletType::Dash => "DASH",
            WalletType::Dogecoin => "DOGE",
        }
    }

    /// Chain code used in API paths
    pub fn code(&self) -> &'static str {
        match self {
            WalletType::Bitcoin => "btc",
            WalletType::Litecoin => "ltc",
            WalletType::Dash => "dash",
            WalletType::Dogecoin => "doge",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WalletType::Bitcoin => "₿",
            WalletType::Litecoin => "Ł",
            WalletType::Dash => "Đ",
            WalletType::Dogecoin => "Ð",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            WalletType::Bitcoin => '1',
            WalletType::Litecoin => '2',
            WalletType::Dash => '3',
            WalletType::Dogecoin => '4',
        }
    }
}

/// Human labels offered when naming a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletName {
    Coinbase,
    Exodus,
    ColdStorage,
    LedgerNano,
    Trezor,
}

impl WalletName {
    pub const ALL: [WalletName; 5] = [
        WalletName::Coinbase,
        WalletName::Exodus,
        WalletName::ColdStorage,
        WalletName::LedgerNano,
        WalletName::Trezor,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            WalletName::Coinbase => "Coinbase",
            WalletName::Exodus => "Exodus",
            WalletName::ColdStorage => "Cold Storage",
            WalletName::LedgerNano => "Ledger Nano",
            WalletName::Trezor => "Trezor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    /// Total moved by the transaction, in smallest units
    pub total: u64,
    pub received: DateTime<Utc>,
    pub confirmed: Option<DateTime<Utc>>,
    pub confirmations: u64,
    pub block_height: Option<i64>,
    /// Position of the transaction within its block
    pub block_index: Option<u64>,
}

impl Transaction {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Date used for grouping and ordering; unconfirmed transactions fall back
    /// to the time the network first saw them.
    pub fn confirmation_date(&self) -> DateTime<Utc> {
        self.confirmed.unwrap_or(self.received)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub balance: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub tx_count: u64,
    pub transactions: Vec<Transaction>,
}

/// Convert smallest units to a fixed 8-decimal string with a unit suffix
pub fn format_amount(units: u64, unit: &str) -> String {
    let whole = units / UNITS_PER_COIN;
    let frac = units % UNITS_PER_COIN;
    format!("{whole}.{frac:08} {unit}")
}
