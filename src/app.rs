use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Coordinator, Effect, FetchError, Intent, Payload, ViewState};
use crate::domain::{TransactionRow, WalletName, WalletType};
use crate::infrastructure::{ClipboardWriter, RuntimeBridge, RuntimeCommand};

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Terminal shell around the coordinator: key mapping, list selection and
/// the scanner input line. Screen state itself lives in the coordinator.
#[derive(Debug)]
pub struct App {
    pub coordinator: Coordinator,
    /// Selected row per stack depth
    selections: Vec<usize>,
    /// Title of the screen each selection belongs to
    selection_owners: Vec<&'static str>,
    pub scan_input: String,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let coordinator = Coordinator::new();
        let owner = coordinator.current().title();
        Self {
            coordinator,
            selections: vec![0],
            selection_owners: vec![owner],
            scan_input: String::new(),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn current(&self) -> &ViewState {
        self.coordinator.current()
    }

    pub fn selection(&self) -> usize {
        self.selections.last().copied().unwrap_or(0)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn on_tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.since.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    /// Feed an intent to the coordinator and keep the selection stack in step
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let was_scanner = matches!(self.current(), ViewState::Scanner(_));
        let effects = self.coordinator.handle(intent);

        let stack = self.coordinator.stack();
        self.selections.truncate(stack.len());
        self.selection_owners.truncate(stack.len());
        for (depth, screen) in stack.iter().enumerate() {
            if depth >= self.selections.len() {
                self.selections.push(0);
                self.selection_owners.push(screen.title());
            } else if self.selection_owners[depth] != screen.title() {
                self.selections[depth] = 0;
                self.selection_owners[depth] = screen.title();
            }
        }
        self.clamp_selection();

        if was_scanner && !matches!(self.current(), ViewState::Scanner(_)) {
            self.scan_input.clear();
        }
        effects
    }

    /// Run side effects returned by the coordinator. A fetch that cannot even
    /// be queued is reported like any other fetch failure.
    pub fn execute_effects(
        &mut self,
        effects: Vec<Effect>,
        runtime: &RuntimeBridge,
        clipboard: &mut dyn ClipboardWriter,
    ) {
        for effect in effects {
            match effect {
                Effect::FetchWallet {
                    address,
                    wallet_type,
                } => {
                    let cmd = RuntimeCommand::FetchWallet {
                        address: address.clone(),
                        wallet_type,
                    };
                    if let Err(err) = runtime.send(cmd) {
                        tracing::error!("queue fetch: {err:#}");
                        // Failures never produce further effects
                        self.dispatch(Intent::WalletFetchFailed {
                            address,
                            wallet_type,
                            error: FetchError::Unavailable(err.to_string()),
                        });
                    }
                }
                Effect::WriteClipboard(text) => {
                    if let Err(err) = clipboard.write(&text) {
                        tracing::warn!("clipboard write failed: {err:#}");
                        self.set_status(format!("{err}"), StatusLevel::Error);
                    }
                }
            }
        }
    }

    /// Drain finished fetches from the worker into the coordinator
    pub fn pump_runtime(&mut self, runtime: &RuntimeBridge, clipboard: &mut dyn ClipboardWriter) {
        for event in runtime.poll_events() {
            let effects = self.dispatch(event.into());
            self.execute_effects(effects, runtime, clipboard);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if self.coordinator.notice().is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    self.dispatch(Intent::DismissNotice)
                }
                _ => Vec::new(),
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if matches!(self.current(), ViewState::Scanner(_)) {
            return self.handle_scanner_key(key);
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_open = false;
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Char('?') => {
                self.help_open = true;
                Vec::new()
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                self.dispatch(Intent::Back)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Vec::new()
            }
            _ => match self.screen_intent(key) {
                Some(intent) => self.dispatch(intent),
                None => Vec::new(),
            },
        }
    }

    fn handle_scanner_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => {
                let address = self.scan_input.trim().to_string();
                if address.is_empty() {
                    self.set_status("Enter an address first", StatusLevel::Warn);
                    return Vec::new();
                }
                let wallet_type = self.coordinator.pending_scan_type();
                self.dispatch(Intent::DeliverQrResult {
                    address,
                    wallet_type,
                })
            }
            KeyCode::Esc => {
                let address = std::mem::take(&mut self.scan_input);
                let mut effects = self.dispatch(Intent::DeliverQrResult {
                    address,
                    wallet_type: None,
                });
                effects.extend(self.dispatch(Intent::Back));
                effects
            }
            KeyCode::Backspace => {
                self.scan_input.pop();
                Vec::new()
            }
            KeyCode::Char(c) if !c.is_whitespace() => {
                self.scan_input.push(c);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Screen-specific keys
    fn screen_intent(&self, key: KeyEvent) -> Option<Intent> {
        let selected = self.selection();
        match self.current() {
            ViewState::WalletList(payload) => match key.code {
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => payload
                    .loaded()
                    .and_then(|list| list.rows.get(selected))
                    .map(|row| Intent::SelectedWallet(row.address.clone())),
                KeyCode::Char('d') => Some(Intent::DisplayDefaultWallets),
                KeyCode::Char('a') => Some(Intent::WalletNameSelectAlert),
                KeyCode::Char('s') => Some(Intent::WalletTypeSelectAlert),
                KeyCode::Char('c') => payload
                    .loaded()
                    .and_then(|list| list.rows.get(selected))
                    .map(|row| Intent::CopyWalletAddressToClipboard(row.address.clone())),
                _ => None,
            },
            ViewState::WalletDetail {
                address, payload, ..
            } => {
                let detail = payload.loaded()?;
                match key.code {
                    KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                        let rows = detail.view.sections.iter().flat_map(|s| s.rows.iter());
                        selected_hash(rows, selected).map(Intent::SelectedTransaction)
                    }
                    KeyCode::Char('g') => {
                        section_of_row(&detail.view.sections, selected).map(Intent::SelectedSection)
                    }
                    KeyCode::Char('o') | KeyCode::Tab => {
                        Some(Intent::SortOrderChanged(detail.view.sort.toggled()))
                    }
                    KeyCode::Char('c') => Some(Intent::CopyWalletAddressToClipboard(address.clone())),
                    KeyCode::Char('r') => Some(Intent::ShowQr(address.clone())),
                    _ => None,
                }
            }
            ViewState::TransactionSegmentDetail(payload) => {
                let segment = payload.loaded()?;
                match key.code {
                    KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                        selected_hash(segment.section.rows.iter(), selected)
                            .map(Intent::SelectedTransaction)
                    }
                    KeyCode::Char('c') => {
                        Some(Intent::CopyWalletAddressToClipboard(segment.address.clone()))
                    }
                    _ => None,
                }
            }
            ViewState::QrDisplay(Payload::Loaded(qr)) => match key.code {
                KeyCode::Char('c') => Some(Intent::CopyWalletAddressToClipboard(qr.address.clone())),
                _ => None,
            },
            ViewState::TypeSelectAlert(Payload::Loaded(alert)) => match key.code {
                KeyCode::Enter => alert.options.get(selected).copied().map(Intent::ScanQr),
                KeyCode::Char(c) => WalletType::ALL
                    .iter()
                    .find(|t| t.shortcut() == c)
                    .copied()
                    .map(Intent::ScanQr),
                _ => None,
            },
            ViewState::NameSelectAlert(Payload::Loaded(alert)) => match key.code {
                KeyCode::Enter => alert
                    .options
                    .get(selected)
                    .copied()
                    .map(Intent::WalletNameSelected),
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| WalletName::ALL.get(i).copied())
                    .map(Intent::WalletNameSelected),
                _ => None,
            },
            _ => None,
        }
    }

    /// Number of selectable rows on the current screen
    pub fn list_len(&self) -> usize {
        match self.current() {
            ViewState::WalletList(Payload::Loaded(list)) => list.rows.len(),
            ViewState::WalletDetail {
                payload: Payload::Loaded(detail),
                ..
            } => detail.view.row_count(),
            ViewState::TransactionSegmentDetail(Payload::Loaded(segment)) => {
                segment.section.rows.len()
            }
            ViewState::TypeSelectAlert(Payload::Loaded(alert)) => alert.options.len(),
            ViewState::NameSelectAlert(Payload::Loaded(alert)) => alert.options.len(),
            _ => 0,
        }
    }

    pub fn move_selection(&mut self, forward: bool) {
        let len = self.list_len();
        let Some(selection) = self.selections.last_mut() else {
            return;
        };
        if len == 0 {
            *selection = 0;
        } else if forward {
            *selection = (*selection + 1).min(len - 1);
        } else {
            *selection = selection.saturating_sub(1);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        if let Some(selection) = self.selections.last_mut() {
            if len == 0 {
                *selection = 0;
            } else if *selection >= len {
                *selection = len - 1;
            }
        }
    }
}

fn selected_hash<'a>(
    mut rows: impl Iterator<Item = &'a TransactionRow>,
    selected: usize,
) -> Option<String> {
    rows.nth(selected).map(|row| row.hash.clone())
}

/// Index of the section containing the flattened row `selected`
fn section_of_row(sections: &[crate::domain::TransactionSection], selected: usize) -> Option<usize> {
    let mut start = 0;
    for (index, section) in sections.iter().enumerate() {
        let end = start + section.rows.len();
        if selected < end {
            return Some(index);
        }
        start = end;
    }
    None
}
