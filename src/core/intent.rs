//! Intents consumed by the coordinator and the effects it hands back

use crate::domain::{SortOrder, Wallet, WalletName, WalletType};

use super::FetchError;

/// User- or system-originated actions. The only input to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Show the built-in example wallets
    DisplayDefaultWallets,

    /// Open one of the wallets on the list
    SelectedWallet(String),

    /// Open one section of the current wallet detail
    SelectedSection(usize),

    /// Open a transaction from the current wallet
    SelectedTransaction(String),

    /// Re-derive the wallet detail sections
    SortOrderChanged(SortOrder),

    /// Ask which kind of wallet is being added
    WalletNameSelectAlert,

    /// A wallet name was picked in the name alert
    WalletNameSelected(WalletName),

    /// Ask which chain the scanned address belongs to
    WalletTypeSelectAlert,

    /// Open the scanner for the given chain
    ScanQr(WalletType),

    /// Scanner finished. A missing type means the scan was cancelled.
    DeliverQrResult {
        address: String,
        wallet_type: Option<WalletType>,
    },

    /// Wallet fetch completed
    WalletFetched {
        address: String,
        wallet_type: WalletType,
        wallet: Wallet,
    },

    /// Wallet fetch failed
    WalletFetchFailed {
        address: String,
        wallet_type: WalletType,
        error: FetchError,
    },

    CopyWalletAddressToClipboard(String),

    /// Show the address as a QR code
    ShowQr(String),

    /// Close the current notice
    DismissNotice,

    /// Go back to the previous screen
    Back,
}

/// Side effects requested by a transition, executed by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a one-shot fetch; the result comes back as an intent
    FetchWallet {
        address: String,
        wallet_type: WalletType,
    },

    /// Write text to the system clipboard
    WriteClipboard(String),
}
