//! View-model derivation properties on hand-built wallets

use chrono::{TimeZone, Utc};

use walletscope::domain::view_model::{
    confirmations_label, derive_largest, derive_recent, derive_sections, derive_transaction_detail,
    LARGEST_SECTION_TITLE,
};
use walletscope::domain::{SortOrder, Transaction, Wallet};

fn tx(hash: &str, total: u64, year: i32, month: u32, day: u32) -> Transaction {
    let at = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
    Transaction {
        hash: hash.into(),
        total,
        received: at,
        confirmed: Some(at),
        confirmations: 3,
        block_height: Some(1),
        block_index: Some(0),
    }
}

fn wallet(transactions: Vec<Transaction>) -> Wallet {
    Wallet {
        address: "addr".into(),
        balance: 0,
        total_received: 0,
        total_sent: 0,
        tx_count: transactions.len() as u64,
        transactions,
    }
}

#[test]
fn test_two_march_one_june() {
    let w = wallet(vec![
        tx("m1", 10, 2022, 3, 1),
        tx("j1", 20, 2022, 6, 1),
        tx("m2", 30, 2022, 3, 15),
    ]);
    let sections = derive_recent(&w, "BTC");
    let summary: Vec<_> = sections
        .iter()
        .map(|s| (s.title.as_str(), s.rows.len()))
        .collect();
    assert_eq!(summary, vec![("March", 2), ("June", 1)]);
    assert_eq!(sections[0].subtitle.as_deref(), Some("0.00000040 BTC"));
    assert_eq!(sections[1].subtitle.as_deref(), Some("0.00000020 BTC"));
}

#[test]
fn test_largest_order() {
    let w = wallet(vec![
        tx("five", 5, 2022, 1, 1),
        tx("twenty", 20, 2022, 1, 2),
        tx("one", 1, 2022, 1, 3),
    ]);
    let sections = derive_largest(&w, "DOGE");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, LARGEST_SECTION_TITLE);
    let amounts: Vec<_> = sections[0].rows.iter().map(|r| r.amount.as_str()).collect();
    assert_eq!(
        amounts,
        vec!["0.00000020 DOGE", "0.00000005 DOGE", "0.00000001 DOGE"]
    );
}

#[test]
fn test_every_transaction_appears_once() {
    let txs: Vec<_> = (1..=12)
        .flat_map(|m| (1..=3).map(move |d| tx(&format!("{m}-{d}"), (m * 10 + d) as u64, 2021 + (d as i32 % 2), m, d)))
        .collect();
    let w = wallet(txs);
    for order in SortOrder::ALL {
        let count: usize = derive_sections(&w, "BTC", order)
            .iter()
            .map(|s| s.rows.len())
            .sum();
        assert_eq!(count, 36, "{order:?}");
    }
    let titles: Vec<_> = derive_recent(&w, "BTC").into_iter().map(|s| s.title).collect();
    assert_eq!(titles.first().map(String::as_str), Some("January"));
    assert_eq!(titles.last().map(String::as_str), Some("December"));
}

#[test]
fn test_unconfirmed_transaction_uses_received_date() {
    let mut pending = tx("pending", 1, 2022, 8, 30);
    pending.confirmed = None;
    pending.confirmations = 0;
    pending.block_height = None;
    pending.block_index = None;
    let w = wallet(vec![pending.clone()]);
    let sections = derive_recent(&w, "BTC");
    assert_eq!(sections[0].title, "August");
    assert!(!sections[0].rows[0].is_confirmed);

    let detail = derive_transaction_detail(&pending, "BTC");
    assert_eq!(detail.metadata[1].value, "-");
    assert_eq!(detail.metadata[2].value, "-");
    assert_eq!(detail.metadata[3].value, "0");
}

#[test]
fn test_confirmation_labels() {
    assert_eq!(
        [0, 1, 5, 6, 10].map(confirmations_label),
        ["0", "1", "5", "6+", "6+"].map(String::from)
    );
}
