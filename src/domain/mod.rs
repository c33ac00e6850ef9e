//! Domain models and display derivations
//!
//! Nothing in here touches the network or the terminal.

pub mod fixtures;
pub mod view_model;
pub mod wallet;

pub use fixtures::{default_wallets, DefaultWallet};
pub use view_model::{
    SortOrder, TransactionDetailView, TransactionRow, TransactionSection, WalletDetailView,
    WalletListRow,
};
pub use wallet::{format_amount, Transaction, Wallet, WalletName, WalletType};
