//! Screen coordinator
//!
//! Owns the navigation stack and applies intents to it. Every intent is
//! handled; anything that does not apply to the current screen is a no-op.
//! Side effects (network, clipboard) are returned to the caller instead of
//! being performed here, which keeps the whole state machine testable
//! without a terminal or a network.

use tracing::{debug, info, warn};

use crate::domain::view_model::{derive_sections, derive_transaction_detail, derive_wallet_detail, wallet_list_row};
use crate::domain::{default_wallets, DefaultWallet, SortOrder, Wallet, WalletName, WalletType};

use super::view_state::{
    DismissAction, Notice, Payload, QrView, ScannerView, SegmentView, SelectionAlert,
    WalletDetailState, WalletListView, ViewState,
};
use super::{Effect, FetchError, Intent};

#[derive(Debug)]
pub struct Coordinator {
    /// Navigation stack; the last entry is the current screen. Never empty.
    stack: Vec<ViewState>,
    notice: Option<Notice>,
    /// Wallet type requested by the open scanner
    pending_scan: Option<WalletType>,
    /// Name picked before the type alert, used to title the fetched wallet
    pending_name: Option<WalletName>,
    /// Stack index of a failed Loading screen kept visible under its error
    /// notice until the notice is dismissed
    failed_screen: Option<usize>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        Self {
            stack: vec![ViewState::WalletList(Payload::Loaded(WalletListView::default()))],
            notice: None,
            pending_scan: None,
            pending_name: None,
            failed_screen: None,
        }
    }

    pub fn current(&self) -> &ViewState {
        // The root screen is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[ViewState] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn pending_scan_type(&self) -> Option<WalletType> {
        self.pending_scan
    }

    /// Apply an intent and return the side effects the shell must run
    pub fn handle(&mut self, intent: Intent) -> Vec<Effect> {
        debug!(screen = self.current().title(), ?intent, "handle intent");

        match intent {
            Intent::DisplayDefaultWallets => {
                self.display_wallets(default_wallets());
                Vec::new()
            }
            Intent::SelectedWallet(address) => {
                self.select_wallet(&address);
                Vec::new()
            }
            Intent::SelectedSection(index) => {
                self.select_section(index);
                Vec::new()
            }
            Intent::SelectedTransaction(hash) => {
                self.select_transaction(&hash);
                Vec::new()
            }
            Intent::SortOrderChanged(order) => {
                self.change_sort(order);
                Vec::new()
            }
            Intent::WalletNameSelectAlert => {
                if !matches!(self.current(), ViewState::NameSelectAlert(_)) {
                    self.stack.push(name_alert());
                }
                Vec::new()
            }
            Intent::WalletNameSelected(name) => {
                if matches!(self.current(), ViewState::NameSelectAlert(_)) {
                    self.pending_name = Some(name);
                    self.replace_top(type_alert());
                }
                Vec::new()
            }
            Intent::WalletTypeSelectAlert => {
                if !matches!(self.current(), ViewState::TypeSelectAlert(_)) {
                    // Fresh add flow; a name only carries over from the name alert
                    self.pending_name = None;
                    self.stack.push(type_alert());
                }
                Vec::new()
            }
            Intent::ScanQr(wallet_type) => {
                self.open_scanner(wallet_type);
                Vec::new()
            }
            Intent::DeliverQrResult {
                address,
                wallet_type,
            } => self.deliver_scan(address, wallet_type),
            Intent::WalletFetched {
                address,
                wallet_type,
                wallet,
            } => {
                self.apply_fetched(&address, wallet_type, wallet);
                Vec::new()
            }
            Intent::WalletFetchFailed {
                address,
                wallet_type,
                error,
            } => {
                self.apply_fetch_failed(&address, wallet_type, &error);
                Vec::new()
            }
            Intent::CopyWalletAddressToClipboard(address) => {
                self.notice = Some(Notice::info("Copied", format!("{address} copied to clipboard")));
                vec![Effect::WriteClipboard(address)]
            }
            Intent::ShowQr(address) => {
                if !address.is_empty() {
                    self.stack
                        .push(ViewState::QrDisplay(Payload::Loaded(QrView { address })));
                }
                Vec::new()
            }
            Intent::DismissNotice => {
                if self.notice.take().is_some() {
                    if let Some(index) = self.failed_screen.take() {
                        while self.stack.len() > index.max(1) {
                            self.pop();
                        }
                    }
                }
                Vec::new()
            }
            Intent::Back => {
                self.pop();
                Vec::new()
            }
        }
    }

    fn display_wallets(&mut self, entries: Vec<DefaultWallet>) {
        let rows = entries
            .iter()
            .map(|e| wallet_list_row(e.name, e.wallet_type, &e.wallet))
            .collect();
        info!(count = entries.len(), "display default wallets");
        self.failed_screen = None;
        self.stack = vec![ViewState::WalletList(Payload::Loaded(WalletListView {
            entries,
            rows,
        }))];
    }

    fn select_wallet(&mut self, address: &str) {
        let entry = match &self.stack[0] {
            ViewState::WalletList(Payload::Loaded(list)) => {
                list.entries.iter().find(|e| e.wallet.address == address).cloned()
            }
            _ => None,
        };
        let Some(entry) = entry else {
            debug!(address, "selected wallet not on the list");
            return;
        };

        self.stack.push(ViewState::WalletDetail {
            address: address.to_string(),
            name: Some(entry.name),
            payload: Payload::Loading,
        });
        // Precomputed wallets need no fetch
        self.load_detail(self.stack.len() - 1, entry.wallet_type, entry.wallet);
    }

    fn select_section(&mut self, index: usize) {
        let ViewState::WalletDetail {
            address,
            payload: Payload::Loaded(detail),
            ..
        } = self.current()
        else {
            return;
        };
        let Some(section) = detail.view.sections.get(index) else {
            return;
        };
        let segment = SegmentView {
            wallet_title: detail.view.title.clone(),
            address: address.clone(),
            section: section.clone(),
        };
        self.stack
            .push(ViewState::TransactionSegmentDetail(Payload::Loaded(segment)));
    }

    fn select_transaction(&mut self, hash: &str) {
        let detail = match self.current() {
            ViewState::WalletDetail { payload, .. } => payload.loaded(),
            ViewState::TransactionSegmentDetail(Payload::Loaded(segment)) => {
                if !segment.section.rows.iter().any(|row| row.hash == hash) {
                    return;
                }
                // A segment is always opened on top of its wallet detail
                match self.stack.iter().rev().nth(1) {
                    Some(ViewState::WalletDetail { payload, .. }) => payload.loaded(),
                    _ => None,
                }
            }
            _ => None,
        };
        let Some(detail) = detail else {
            return;
        };
        let Some(tx) = detail.wallet.transactions.iter().find(|tx| tx.hash == hash) else {
            return;
        };
        let view = derive_transaction_detail(tx, detail.wallet_type.unit());
        self.stack
            .push(ViewState::TransactionDetail(Payload::Loaded(view)));
    }

    fn change_sort(&mut self, order: SortOrder) {
        if let Some(ViewState::WalletDetail {
            payload: Payload::Loaded(detail),
            ..
        }) = self.stack.last_mut()
        {
            if detail.view.sort != order {
                detail.view.sections = derive_sections(&detail.wallet, detail.wallet_type.unit(), order);
                detail.view.sort = order;
            }
        }
    }

    fn open_scanner(&mut self, wallet_type: WalletType) {
        self.pending_scan = Some(wallet_type);
        let scanner = ViewState::Scanner(Payload::Loaded(ScannerView { wallet_type }));
        if matches!(self.current(), ViewState::TypeSelectAlert(_) | ViewState::Scanner(_)) {
            self.replace_top(scanner);
        } else {
            self.pending_name = None;
            self.stack.push(scanner);
        }
    }

    fn deliver_scan(&mut self, address: String, wallet_type: Option<WalletType>) -> Vec<Effect> {
        let Some(wallet_type) = wallet_type else {
            debug!("scan cancelled");
            return Vec::new();
        };
        let address = address.trim().to_string();
        if address.is_empty() {
            return Vec::new();
        }

        if matches!(self.current(), ViewState::Scanner(_)) {
            self.stack.pop();
        }
        self.pending_scan = None;
        self.stack.push(ViewState::WalletDetail {
            address: address.clone(),
            name: self.pending_name.take(),
            payload: Payload::Loading,
        });
        info!(%address, chain = wallet_type.code(), "fetch wallet");
        vec![Effect::FetchWallet {
            address,
            wallet_type,
        }]
    }

    fn apply_fetched(&mut self, address: &str, wallet_type: WalletType, wallet: Wallet) {
        let Some(index) = self.loading_detail_index(address) else {
            debug!(address, "fetch result has no waiting screen");
            return;
        };
        info!(address, txs = wallet.transactions.len(), "wallet loaded");
        self.load_detail(index, wallet_type, wallet);
    }

    fn apply_fetch_failed(&mut self, address: &str, wallet_type: WalletType, error: &FetchError) {
        warn!(address, chain = wallet_type.code(), %error, "wallet fetch failed");
        match self.loading_detail_index(address) {
            Some(index) if index == self.stack.len() - 1 && self.failed_screen.is_none() => {
                self.failed_screen = Some(index);
            }
            Some(index) => {
                // Waiting screen is buried under newer screens
                self.stack.remove(index);
                if let Some(failed) = self.failed_screen.as_mut() {
                    if index < *failed {
                        *failed -= 1;
                    }
                }
            }
            None => {}
        }
        // An earlier failure still waiting on dismissal keeps its pop
        let on_dismiss = if self.failed_screen.is_some() {
            DismissAction::PopBack
        } else {
            DismissAction::Stay
        };
        self.notice = Some(Notice::error(
            "Error",
            format!("Unable to load {} wallet", wallet_type.title()),
            on_dismiss,
        ));
    }

    /// Newest Loading detail for `address` that has not already failed
    fn loading_detail_index(&self, address: &str) -> Option<usize> {
        self.stack
            .iter()
            .enumerate()
            .rev()
            .find(|(index, screen)| {
                Some(*index) != self.failed_screen
                    && matches!(
                        screen,
                        ViewState::WalletDetail { address: a, payload: Payload::Loading, .. } if a == address
                    )
            })
            .map(|(index, _)| index)
    }

    fn load_detail(&mut self, index: usize, wallet_type: WalletType, wallet: Wallet) {
        if let Some(ViewState::WalletDetail { name, payload, .. }) = self.stack.get_mut(index) {
            let view = derive_wallet_detail(&wallet, wallet_type, *name, SortOrder::Recent);
            *payload = Payload::Loaded(WalletDetailState {
                wallet,
                wallet_type,
                view,
            });
        }
    }

    fn replace_top(&mut self, screen: ViewState) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.stack.push(screen);
    }

    fn pop(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        if self.failed_screen == Some(self.stack.len() - 1) {
            self.failed_screen = None;
            if let Some(notice) = self.notice.as_mut() {
                notice.on_dismiss = DismissAction::Stay;
            }
        }
        match self.stack.pop() {
            Some(ViewState::Scanner(_)) => {
                self.pending_scan = None;
                self.pending_name = None;
            }
            Some(ViewState::TypeSelectAlert(_) | ViewState::NameSelectAlert(_)) => {
                self.pending_name = None;
            }
            _ => {}
        }
    }
}

fn type_alert() -> ViewState {
    ViewState::TypeSelectAlert(Payload::Loaded(SelectionAlert {
        title: "Wallet Type",
        message: "Which chain does the address belong to?",
        options: WalletType::ALL.to_vec(),
    }))
}

fn name_alert() -> ViewState {
    ViewState::NameSelectAlert(Payload::Loaded(SelectionAlert {
        title: "Wallet Name",
        message: "Where is this wallet kept?",
        options: WalletName::ALL.to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view_model::LARGEST_SECTION_TITLE;

    fn with_defaults() -> Coordinator {
        let mut c = Coordinator::new();
        c.handle(Intent::DisplayDefaultWallets);
        c
    }

    fn first_address(c: &Coordinator) -> String {
        match c.current() {
            ViewState::WalletList(Payload::Loaded(list)) => list.entries[0].wallet.address.clone(),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_initial_state_is_empty_wallet_list() {
        let c = Coordinator::new();
        assert_eq!(
            c.current(),
            &ViewState::WalletList(Payload::Loaded(WalletListView::default()))
        );
        assert!(c.notice().is_none());
    }

    #[test]
    fn test_selected_wallet_loads_precomputed_detail() {
        let mut c = with_defaults();
        let address = first_address(&c);
        let effects = c.handle(Intent::SelectedWallet(address.clone()));
        assert!(effects.is_empty());
        match c.current() {
            ViewState::WalletDetail {
                address: a,
                payload: Payload::Loaded(detail),
                ..
            } => {
                assert_eq!(a, &address);
                assert_eq!(detail.view.sort, SortOrder::Recent);
                assert_eq!(detail.view.title, "Cold Storage");
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_unknown_wallet_is_ignored() {
        let mut c = with_defaults();
        c.handle(Intent::SelectedWallet("unknown".into()));
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn test_sort_change_rederives_sections() {
        let mut c = with_defaults();
        let address = first_address(&c);
        c.handle(Intent::SelectedWallet(address));
        c.handle(Intent::SortOrderChanged(SortOrder::Largest));
        let ViewState::WalletDetail {
            payload: Payload::Loaded(detail),
            ..
        } = c.current()
        else {
            panic!("expected wallet detail");
        };
        assert_eq!(detail.view.sort, SortOrder::Largest);
        assert_eq!(detail.view.sections.len(), 1);
        assert_eq!(detail.view.sections[0].title, LARGEST_SECTION_TITLE);
    }

    #[test]
    fn test_section_and_transaction_navigation() {
        let mut c = with_defaults();
        let address = first_address(&c);
        c.handle(Intent::SelectedWallet(address));
        c.handle(Intent::SelectedSection(0));
        let hash = match c.current() {
            ViewState::TransactionSegmentDetail(Payload::Loaded(segment)) => {
                segment.section.rows[0].hash.clone()
            }
            other => panic!("unexpected screen {other:?}"),
        };
        c.handle(Intent::SelectedTransaction(hash.clone()));
        match c.current() {
            ViewState::TransactionDetail(Payload::Loaded(detail)) => {
                assert_eq!(detail.row.hash, hash);
                assert_eq!(detail.metadata[0].value, hash);
            }
            other => panic!("unexpected screen {other:?}"),
        }
        assert_eq!(c.depth(), 4);
        c.handle(Intent::Back);
        c.handle(Intent::Back);
        c.handle(Intent::Back);
        c.handle(Intent::Back);
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn test_out_of_range_section_is_ignored() {
        let mut c = with_defaults();
        let address = first_address(&c);
        c.handle(Intent::SelectedWallet(address));
        c.handle(Intent::SelectedSection(99));
        assert!(matches!(c.current(), ViewState::WalletDetail { .. }));
    }

    #[test]
    fn test_name_then_type_then_scan_flow() {
        let mut c = with_defaults();
        c.handle(Intent::WalletNameSelectAlert);
        assert!(matches!(c.current(), ViewState::NameSelectAlert(_)));
        c.handle(Intent::WalletNameSelected(WalletName::Exodus));
        assert!(matches!(c.current(), ViewState::TypeSelectAlert(_)));
        c.handle(Intent::ScanQr(WalletType::Litecoin));
        assert_eq!(c.depth(), 2);
        assert_eq!(c.pending_scan_type(), Some(WalletType::Litecoin));

        let effects = c.handle(Intent::DeliverQrResult {
            address: "Laddr".into(),
            wallet_type: Some(WalletType::Litecoin),
        });
        assert_eq!(
            effects,
            vec![Effect::FetchWallet {
                address: "Laddr".into(),
                wallet_type: WalletType::Litecoin,
            }]
        );
        assert_eq!(c.pending_scan_type(), None);
        match c.current() {
            ViewState::WalletDetail { name, payload, .. } => {
                assert_eq!(*name, Some(WalletName::Exodus));
                assert!(payload.is_loading());
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_cancelled_scan_is_noop() {
        let mut c = with_defaults();
        c.handle(Intent::ScanQr(WalletType::Bitcoin));
        let before = c.stack().to_vec();
        let effects = c.handle(Intent::DeliverQrResult {
            address: "1abc".into(),
            wallet_type: None,
        });
        assert!(effects.is_empty());
        assert_eq!(c.stack(), before.as_slice());
        assert_eq!(c.pending_scan_type(), Some(WalletType::Bitcoin));
    }

    #[test]
    fn test_back_from_scanner_forgets_type() {
        let mut c = with_defaults();
        c.handle(Intent::ScanQr(WalletType::Dash));
        c.handle(Intent::Back);
        assert_eq!(c.pending_scan_type(), None);
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn test_fetch_failure_pops_on_dismiss() {
        let mut c = with_defaults();
        c.handle(Intent::ScanQr(WalletType::Dogecoin));
        c.handle(Intent::DeliverQrResult {
            address: "Daddr".into(),
            wallet_type: Some(WalletType::Dogecoin),
        });
        c.handle(Intent::WalletFetchFailed {
            address: "Daddr".into(),
            wallet_type: WalletType::Dogecoin,
            error: FetchError::Transport("offline".into()),
        });
        let notice = c.notice().cloned().expect("notice");
        assert!(notice.message.contains("Dogecoin"));
        assert_eq!(notice.on_dismiss, DismissAction::PopBack);
        // still waiting until the user dismisses
        assert!(matches!(c.current(), ViewState::WalletDetail { .. }));

        c.handle(Intent::DismissNotice);
        assert!(c.notice().is_none());
        assert!(matches!(c.current(), ViewState::WalletList(_)));
    }

    #[test]
    fn test_late_fetch_result_is_ignored() {
        let mut c = with_defaults();
        c.handle(Intent::ScanQr(WalletType::Bitcoin));
        c.handle(Intent::DeliverQrResult {
            address: "1addr".into(),
            wallet_type: Some(WalletType::Bitcoin),
        });
        c.handle(Intent::Back);
        let before = c.stack().to_vec();
        c.handle(Intent::WalletFetched {
            address: "1addr".into(),
            wallet_type: WalletType::Bitcoin,
            wallet: default_wallets().remove(0).wallet,
        });
        assert_eq!(c.stack(), before.as_slice());
    }

    #[test]
    fn test_copy_address_writes_clipboard_once() {
        let mut c = with_defaults();
        let before = c.stack().to_vec();
        let effects = c.handle(Intent::CopyWalletAddressToClipboard("1abc".into()));
        assert_eq!(effects, vec![Effect::WriteClipboard("1abc".into())]);
        assert_eq!(c.stack(), before.as_slice());
        assert!(c.notice().is_some());
        c.handle(Intent::DismissNotice);
        assert_eq!(c.stack(), before.as_slice());
    }

    fn scan(c: &mut Coordinator, address: &str) {
        c.handle(Intent::ScanQr(WalletType::Bitcoin));
        c.handle(Intent::DeliverQrResult {
            address: address.into(),
            wallet_type: Some(WalletType::Bitcoin),
        });
    }

    fn fail(c: &mut Coordinator, address: &str) {
        c.handle(Intent::WalletFetchFailed {
            address: address.into(),
            wallet_type: WalletType::Bitcoin,
            error: FetchError::Transport("offline".into()),
        });
    }

    #[test]
    fn test_overlapping_failures_pop_failed_screens() {
        let mut c = with_defaults();
        scan(&mut c, "1first");
        scan(&mut c, "1second");
        assert_eq!(c.depth(), 3);

        fail(&mut c, "1second");
        fail(&mut c, "1first");
        assert_eq!(c.notice().map(|n| n.on_dismiss), Some(DismissAction::PopBack));
        // Buried screen goes right away, the top one waits for dismissal
        assert_eq!(c.depth(), 2);
        assert_eq!(c.current().address(), Some("1second"));

        c.handle(Intent::DismissNotice);
        assert_eq!(c.depth(), 1);
        assert!(!c.stack().iter().any(ViewState::is_loading));
    }

    #[test]
    fn test_repeated_failures_for_same_address() {
        let mut c = with_defaults();
        scan(&mut c, "1same");
        scan(&mut c, "1same");
        fail(&mut c, "1same");
        fail(&mut c, "1same");
        c.handle(Intent::DismissNotice);
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn test_result_after_failure_fills_remaining_screen() {
        let mut c = with_defaults();
        scan(&mut c, "1same");
        scan(&mut c, "1same");
        fail(&mut c, "1same");
        c.handle(Intent::WalletFetched {
            address: "1same".into(),
            wallet_type: WalletType::Bitcoin,
            wallet: default_wallets().remove(0).wallet,
        });
        assert!(c.current().is_loading());
        assert!(!c.stack()[1].is_loading());

        c.handle(Intent::DismissNotice);
        assert_eq!(c.depth(), 2);
        assert!(matches!(
            c.current(),
            ViewState::WalletDetail { payload: Payload::Loaded(_), .. }
        ));
    }

    #[test]
    fn test_back_from_failed_screen_keeps_previous_screen_on_dismiss() {
        let mut c = with_defaults();
        scan(&mut c, "1gone");
        fail(&mut c, "1gone");
        c.handle(Intent::Back);
        assert_eq!(c.notice().map(|n| n.on_dismiss), Some(DismissAction::Stay));
        c.handle(Intent::DismissNotice);
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn test_transaction_on_loading_detail_is_ignored() {
        let mut c = with_defaults();
        let address = first_address(&c);
        c.handle(Intent::SelectedWallet(address));
        let hash = match c.current() {
            ViewState::WalletDetail {
                payload: Payload::Loaded(detail),
                ..
            } => detail.wallet.transactions[0].hash.clone(),
            other => panic!("unexpected screen {other:?}"),
        };
        scan(&mut c, "1other");
        assert!(c.current().is_loading());

        let before = c.stack().to_vec();
        c.handle(Intent::SelectedTransaction(hash));
        assert_eq!(c.stack(), before.as_slice());
    }

    #[test]
    fn test_segment_only_opens_its_own_transactions() {
        let mut c = with_defaults();
        let address = first_address(&c);
        c.handle(Intent::SelectedWallet(address));
        c.handle(Intent::SelectedSection(0));
        let (inside, outside) = match &c.stack()[1] {
            ViewState::WalletDetail {
                payload: Payload::Loaded(detail),
                ..
            } => (
                detail.view.sections[0].rows[0].hash.clone(),
                detail.view.sections.last().map(|s| s.rows[0].hash.clone()),
            ),
            other => panic!("unexpected screen {other:?}"),
        };
        if let Some(outside) = outside.filter(|h| *h != inside) {
            c.handle(Intent::SelectedTransaction(outside));
            assert!(matches!(c.current(), ViewState::TransactionSegmentDetail(_)));
        }
        c.handle(Intent::SelectedTransaction(inside));
        assert!(matches!(c.current(), ViewState::TransactionDetail(_)));
    }

    #[test]
    fn test_cancelled_name_flow_forgets_name() {
        let mut c = with_defaults();
        c.handle(Intent::WalletNameSelectAlert);
        c.handle(Intent::WalletNameSelected(WalletName::Exodus));
        c.handle(Intent::Back);
        assert_eq!(c.depth(), 1);

        c.handle(Intent::WalletTypeSelectAlert);
        scan(&mut c, "1plain");
        match c.current() {
            ViewState::WalletDetail { name, .. } => assert_eq!(*name, None),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_direct_scan_starts_without_name() {
        let mut c = with_defaults();
        c.handle(Intent::WalletNameSelectAlert);
        c.handle(Intent::WalletNameSelected(WalletName::Trezor));
        c.handle(Intent::ScanQr(WalletType::Bitcoin));
        c.handle(Intent::Back);
        scan(&mut c, "1plain");
        match c.current() {
            ViewState::WalletDetail { name, .. } => assert_eq!(*name, None),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut c = Coordinator::new();
        c.handle(Intent::Back);
        c.handle(Intent::Back);
        assert_eq!(c.depth(), 1);
    }
}
