//! Screens the coordinator can present

use crate::domain::{
    DefaultWallet, TransactionDetailView, TransactionSection, Wallet, WalletDetailView,
    WalletListRow, WalletName, WalletType,
};

/// Screen content, either still being produced or ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Loading,
    Loaded(T),
}

impl<T> Payload<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Payload::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Payload::Loaded(value) => Some(value),
            Payload::Loading => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletListView {
    pub entries: Vec<DefaultWallet>,
    pub rows: Vec<WalletListRow>,
}

/// Loaded wallet detail. Keeps the wallet so sections can be re-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletDetailState {
    pub wallet: Wallet,
    pub wallet_type: WalletType,
    pub view: WalletDetailView,
}

/// A single section of a wallet detail opened on its own
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentView {
    pub wallet_title: String,
    pub address: String,
    pub section: TransactionSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrView {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerView {
    pub wallet_type: WalletType,
}

/// Option list presented by the selection alerts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionAlert<T> {
    pub title: &'static str,
    pub message: &'static str,
    pub options: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    WalletList(Payload<WalletListView>),
    WalletDetail {
        address: String,
        name: Option<WalletName>,
        payload: Payload<WalletDetailState>,
    },
    TransactionDetail(Payload<TransactionDetailView>),
    TransactionSegmentDetail(Payload<SegmentView>),
    QrDisplay(Payload<QrView>),
    TypeSelectAlert(Payload<SelectionAlert<WalletType>>),
    NameSelectAlert(Payload<SelectionAlert<WalletName>>),
    Scanner(Payload<ScannerView>),
}

impl ViewState {
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::WalletList(_) => "Wallets",
            ViewState::WalletDetail { .. } => "Wallet",
            ViewState::TransactionDetail(_) => "Transaction",
            ViewState::TransactionSegmentDetail(_) => "Transactions",
            ViewState::QrDisplay(_) => "QR Code",
            ViewState::TypeSelectAlert(_) => "Wallet Type",
            ViewState::NameSelectAlert(_) => "Wallet Name",
            ViewState::Scanner(_) => "Scan",
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ViewState::WalletList(p) => p.is_loading(),
            ViewState::WalletDetail { payload, .. } => payload.is_loading(),
            ViewState::TransactionDetail(p) => p.is_loading(),
            ViewState::TransactionSegmentDetail(p) => p.is_loading(),
            ViewState::QrDisplay(p) => p.is_loading(),
            ViewState::TypeSelectAlert(p) => p.is_loading(),
            ViewState::NameSelectAlert(p) => p.is_loading(),
            ViewState::Scanner(p) => p.is_loading(),
        }
    }

    /// Address shown on this screen, if any (copy / QR targets)
    pub fn address(&self) -> Option<&str> {
        match self {
            ViewState::WalletDetail { address, .. } => Some(address),
            ViewState::TransactionSegmentDetail(Payload::Loaded(segment)) => Some(&segment.address),
            ViewState::QrDisplay(Payload::Loaded(qr)) => Some(&qr.address),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// What dismissing a notice does to the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    Stay,
    PopBack,
}

/// Modal message shown over the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
    pub on_dismiss: DismissAction,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Info,
            on_dismiss: DismissAction::Stay,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>, on_dismiss: DismissAction) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Error,
            on_dismiss,
        }
    }
}
