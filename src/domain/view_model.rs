//! Display structures derived from fetched wallets
//!
//! Everything here is a pure function of its inputs so the screens can be
//! rebuilt from the wallet at any time (e.g. when the sort order changes).

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Month, Utc};

use super::wallet::{format_amount, Transaction, Wallet, WalletName, WalletType};

/// Confirmation count at which a transaction is considered settled
pub const SETTLED_CONFIRMATIONS: u64 = 6;

pub const LARGEST_SECTION_TITLE: &str = "Largest Transactions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Recent,
    Largest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Recent, SortOrder::Largest];

    pub fn title(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Recent",
            SortOrder::Largest => "Largest",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Recent => SortOrder::Largest,
            SortOrder::Largest => SortOrder::Recent,
        }
    }
}

/// Transfer direction shown on a row. Only incoming transfers are tagged;
/// the address API response is not inspected for spent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    Received,
}

impl TransferDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TransferDirection::Received => "received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub hash: String,
    pub direction: TransferDirection,
    pub amount: String,
    pub date: String,
    pub confirmations: String,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSection {
    pub title: String,
    pub subtitle: Option<String>,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetailView {
    pub row: TransactionRow,
    pub metadata: Vec<MetadataRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDetailView {
    pub address: String,
    pub title: String,
    pub icon: &'static str,
    pub wallet_type: WalletType,
    pub balance: String,
    pub total_received: String,
    pub total_sent: String,
    pub tx_count: u64,
    pub sort: SortOrder,
    pub sections: Vec<TransactionSection>,
}

impl WalletDetailView {
    /// Number of rows across all sections
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletListRow {
    pub name: String,
    pub wallet_type: WalletType,
    pub icon: &'static str,
    pub address: String,
    pub balance: String,
}

/// Displayed confirmation count, capped at "6+"
pub fn confirmations_label(confirmations: u64) -> String {
    if confirmations >= SETTLED_CONFIRMATIONS {
        format!("{SETTLED_CONFIRMATIONS}+")
    } else {
        confirmations.to_string()
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}

pub fn transaction_row(tx: &Transaction, unit: &str) -> TransactionRow {
    TransactionRow {
        hash: tx.hash.clone(),
        direction: TransferDirection::Received,
        amount: format_amount(tx.total, unit),
        date: format_date(tx.confirmation_date()),
        confirmations: confirmations_label(tx.confirmations),
        is_confirmed: tx.is_confirmed(),
    }
}

/// One section per calendar month that has transactions, in January..December
/// order regardless of year. Rows are newest first.
pub fn derive_recent(wallet: &Wallet, unit: &str) -> Vec<TransactionSection> {
    let mut by_month: BTreeMap<u32, Vec<&Transaction>> = BTreeMap::new();
    for tx in &wallet.transactions {
        by_month
            .entry(tx.confirmation_date().month0())
            .or_default()
            .push(tx);
    }

    by_month
        .into_iter()
        .map(|(month0, mut txs)| {
            txs.sort_by(|a, b| b.confirmation_date().cmp(&a.confirmation_date()));
            let total = txs
                .iter()
                .fold(0u64, |acc, tx| acc.saturating_add(tx.total));
            TransactionSection {
                title: month_name(month0).to_string(),
                subtitle: Some(format_amount(total, unit)),
                rows: txs.iter().map(|tx| transaction_row(tx, unit)).collect(),
            }
        })
        .collect()
}

/// A single section with every transaction, largest total first
pub fn derive_largest(wallet: &Wallet, unit: &str) -> Vec<TransactionSection> {
    let mut txs: Vec<&Transaction> = wallet.transactions.iter().collect();
    txs.sort_by(|a, b| b.total.cmp(&a.total));
    vec![TransactionSection {
        title: LARGEST_SECTION_TITLE.to_string(),
        subtitle: None,
        rows: txs.iter().map(|tx| transaction_row(tx, unit)).collect(),
    }]
}

pub fn derive_sections(wallet: &Wallet, unit: &str, sort: SortOrder) -> Vec<TransactionSection> {
    match sort {
        SortOrder::Recent => derive_recent(wallet, unit),
        SortOrder::Largest => derive_largest(wallet, unit),
    }
}

pub fn derive_wallet_detail(
    wallet: &Wallet,
    wallet_type: WalletType,
    name: Option<WalletName>,
    sort: SortOrder,
) -> WalletDetailView {
    let unit = wallet_type.unit();
    WalletDetailView {
        address: wallet.address.clone(),
        title: name
            .map(|n| n.description())
            .unwrap_or_else(|| wallet_type.title())
            .to_string(),
        icon: wallet_type.icon(),
        wallet_type,
        balance: format_amount(wallet.balance, unit),
        total_received: format_amount(wallet.total_received, unit),
        total_sent: format_amount(wallet.total_sent, unit),
        tx_count: wallet.tx_count,
        sort,
        sections: derive_sections(wallet, unit, sort),
    }
}

pub fn derive_transaction_detail(tx: &Transaction, unit: &str) -> TransactionDetailView {
    TransactionDetailView {
        row: transaction_row(tx, unit),
        metadata: vec![
            MetadataRow {
                key: "Hash",
                value: tx.hash.clone(),
            },
            MetadataRow {
                key: "Block Index",
                value: tx
                    .block_index
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            },
            MetadataRow {
                key: "Block Height",
                value: tx
                    .block_height
                    .filter(|h| *h >= 0)
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            },
            MetadataRow {
                key: "Confirmations",
                value: tx.confirmations.to_string(),
            },
        ],
    }
}

pub fn wallet_list_row(name: WalletName, wallet_type: WalletType, wallet: &Wallet) -> WalletListRow {
    WalletListRow {
        name: name.description().to_string(),
        wallet_type,
        icon: wallet_type.icon(),
        address: wallet.address.clone(),
        balance: format_amount(wallet.balance, wallet_type.unit()),
    }
}

fn month_name(month0: u32) -> &'static str {
    // month0 comes from chrono and is always 0..=11
    Month::try_from(month0 as u8 + 1)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tx(hash: &str, total: u64, month: u32, day: u32, confirmations: u64) -> Transaction {
        let at = Utc.with_ymd_and_hms(2023, month, day, 9, 30, 0).unwrap();
        Transaction {
            hash: hash.to_string(),
            total,
            received: at,
            confirmed: Some(at),
            confirmations,
            block_height: Some(800_000),
            block_index: Some(12),
        }
    }

    fn wallet(transactions: Vec<Transaction>) -> Wallet {
        Wallet {
            address: "1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string(),
            balance: 0,
            total_received: 0,
            total_sent: 0,
            tx_count: transactions.len() as u64,
            transactions,
        }
    }

    #[test]
    fn test_confirmations_label() {
        let labels: Vec<_> = [0, 1, 5, 6, 10].into_iter().map(confirmations_label).collect();
        assert_eq!(labels, vec!["0", "1", "5", "6+", "6+"]);
    }

    #[test]
    fn test_recent_groups_only_populated_months() {
        let w = wallet(vec![
            tx("a", 100, 3, 2, 10),
            tx("b", 50, 6, 1, 10),
            tx("c", 25, 3, 20, 10),
        ]);
        let sections = derive_recent(&w, "BTC");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "March");
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[1].title, "June");
        assert_eq!(sections[1].rows.len(), 1);
        assert_eq!(sections[0].subtitle.as_deref(), Some("0.00000125 BTC"));
    }

    #[test]
    fn test_recent_rows_newest_first() {
        let w = wallet(vec![tx("early", 1, 3, 2, 1), tx("late", 1, 3, 20, 1)]);
        let sections = derive_recent(&w, "BTC");
        let hashes: Vec<_> = sections[0].rows.iter().map(|r| r.hash.as_str()).collect();
        assert_eq!(hashes, vec!["late", "early"]);
    }

    #[test]
    fn test_recent_orders_by_month_name_not_year() {
        let mut january_next_year = tx("jan", 1, 1, 5, 1);
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        january_next_year.confirmed = Some(at);
        january_next_year.received = at;
        let w = wallet(vec![tx("dec", 1, 12, 5, 1), january_next_year]);
        let titles: Vec<_> = derive_recent(&w, "BTC")
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["January", "December"]);
    }

    #[test]
    fn test_largest_sorted_by_total() {
        let w = wallet(vec![tx("five", 5, 1, 1, 1), tx("twenty", 20, 2, 1, 1), tx("one", 1, 3, 1, 1)]);
        let sections = derive_largest(&w, "BTC");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, LARGEST_SECTION_TITLE);
        let hashes: Vec<_> = sections[0].rows.iter().map(|r| r.hash.as_str()).collect();
        assert_eq!(hashes, vec!["twenty", "five", "one"]);
    }

    #[test]
    fn test_empty_wallet_has_no_recent_sections() {
        assert!(derive_recent(&wallet(vec![]), "BTC").is_empty());
        assert_eq!(derive_largest(&wallet(vec![]), "BTC")[0].rows.len(), 0);
    }

    #[test]
    fn test_row_fields() {
        let row = transaction_row(&tx("h", 123_456_789, 7, 4, 3), "LTC");
        assert_eq!(row.direction, TransferDirection::Received);
        assert_eq!(row.amount, "1.23456789 LTC");
        assert_eq!(row.date, "Jul 4, 2023 09:30");
        assert_eq!(row.confirmations, "3");
        assert!(row.is_confirmed);
    }

    #[test]
    fn test_transaction_detail_metadata() {
        let mut t = tx("deadbeef", 1, 1, 1, 42);
        t.block_index = None;
        let detail = derive_transaction_detail(&t, "DASH");
        let pairs: Vec<_> = detail
            .metadata
            .iter()
            .map(|m| (m.key, m.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Hash", "deadbeef"),
                ("Block Index", "-"),
                ("Block Height", "800000"),
                ("Confirmations", "42"),
            ]
        );
        assert_eq!(detail.row.confirmations, "6+");
    }

    #[test]
    fn test_wallet_detail_title_and_icon() {
        let w = wallet(vec![tx("a", 1, 1, 1, 1)]);
        let view = derive_wallet_detail(&w, WalletType::Dogecoin, None, SortOrder::Largest);
        assert_eq!(view.title, "Dogecoin");
        assert_eq!(view.icon, WalletType::Dogecoin.icon());
        assert_eq!(view.sections[0].title, LARGEST_SECTION_TITLE);

        let named = derive_wallet_detail(&w, WalletType::Bitcoin, Some(WalletName::Trezor), SortOrder::Recent);
        assert_eq!(named.title, "Trezor");
        assert_eq!(named.row_count(), 1);
    }
}
