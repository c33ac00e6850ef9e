//! Example wallets shown by the "default wallets" action
//!
//! Transactions are generated deterministically from a seed, so the same
//! dataset is shown on every run and tests can rely on it.

use chrono::{DateTime, Utc};

use super::wallet::{Transaction, Wallet, WalletName, WalletType};

/// A precomputed wallet with its display name and chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultWallet {
    pub name: WalletName,
    pub wallet_type: WalletType,
    pub wallet: Wallet,
}

// 2023-01-01 00:00:00 UTC
const DATASET_EPOCH: i64 = 1_672_531_200;
const DAY_SECS: i64 = 86_400;

pub fn default_wallets() -> Vec<DefaultWallet> {
    vec![
        DefaultWallet {
            name: WalletName::ColdStorage,
            wallet_type: WalletType::Bitcoin,
            wallet: mock_wallet("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 1, 9),
        },
        DefaultWallet {
            name: WalletName::Coinbase,
            wallet_type: WalletType::Bitcoin,
            wallet: mock_wallet("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", 2, 6),
        },
        DefaultWallet {
            name: WalletName::LedgerNano,
            wallet_type: WalletType::Litecoin,
            wallet: mock_wallet("LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", 3, 7),
        },
        DefaultWallet {
            name: WalletName::Exodus,
            wallet_type: WalletType::Dash,
            wallet: mock_wallet("XpESxaUmonkq8RaLLp46Brx2K39ggQe226", 4, 4),
        },
        DefaultWallet {
            name: WalletName::Trezor,
            wallet_type: WalletType::Dogecoin,
            wallet: mock_wallet("DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L", 5, 8),
        },
    ]
}

fn mock_wallet(address: &str, seed: u64, tx_count: u64) -> Wallet {
    let transactions: Vec<Transaction> = (0..tx_count)
        .map(|i| mock_transaction(seed * 100 + i))
        .collect();
    let total_received = transactions
        .iter()
        .fold(0u64, |acc, tx| acc.saturating_add(tx.total));
    let total_sent = total_received / 3;
    Wallet {
        address: address.to_string(),
        balance: total_received - total_sent,
        total_received,
        total_sent,
        tx_count,
        transactions,
    }
}

fn mock_transaction(seed: u64) -> Transaction {
    let hash = format!("{:0>64x}", seed.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    let total = (seed % 17 + 1) * 1_250_000 + (seed % 5) * 37_000;
    // Spread transactions over the year so several months show up
    let day = ((seed * 41) % 360) as i64;
    let received = timestamp(DATASET_EPOCH + day * DAY_SECS + (seed as i64 % 24) * 3_600);
    let confirmations = seed % 9;
    let confirmed = (confirmations > 0).then(|| received + chrono::Duration::minutes(10));
    Transaction {
        hash,
        total,
        received,
        confirmed,
        confirmations,
        block_height: confirmed.map(|_| 770_000 + (seed as i64) * 13),
        block_index: confirmed.map(|_| seed % 2_000),
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
