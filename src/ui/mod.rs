use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, StatusLevel};
use crate::core::{NoticeLevel, Payload, SelectionAlert, ViewState};
use crate::domain::{TransactionRow, TransactionSection, WalletDetailView};

use self::layout::centered_rect;
use self::widgets::QrCodeWidget;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_body(f, areas.body, app);
    draw_status_line(f, areas.status_line, app);
    f.render_widget(Paragraph::new(action_hints(app)), areas.hint_line);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
    if let Some(notice) = app.coordinator.notice() {
        let popup = centered_rect(50, 24, areas.size);
        f.render_widget(Clear, popup);
        let color = match notice.level {
            NoticeLevel::Info => Color::LightGreen,
            NoticeLevel::Error => Color::LightRed,
        };
        let text = Text::from(vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled("Enter to dismiss", Style::default().fg(Color::DarkGray))),
        ]);
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title(notice.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, popup);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let breadcrumb = app
        .coordinator
        .stack()
        .iter()
        .map(|screen| screen.title())
        .collect::<Vec<_>>()
        .join(" › ");
    let title = Line::from(vec![
        Span::styled(
            "walletscope",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(breadcrumb),
    ]);
    let paragraph = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selection();
    match app.current() {
        ViewState::WalletList(Payload::Loaded(list)) => {
            let items: Vec<ListItem> = list
                .rows
                .iter()
                .map(|row| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{} ", row.icon), Style::default().fg(Color::LightYellow)),
                        Span::styled(format!("{:<14}", row.name), Style::default().fg(Color::White)),
                        Span::styled(format!("{:<10}", row.wallet_type.title()), Style::default().fg(Color::LightCyan)),
                        Span::raw(format!("{}  ", short_addr(&row.address))),
                        Span::styled(row.balance.clone(), Style::default().fg(Color::LightGreen)),
                    ]))
                })
                .collect();
            if items.is_empty() {
                draw_placeholder(f, area, "Wallets", "No wallets yet. Press d for examples, a to add one.");
            } else {
                draw_list(f, area, "Wallets", items, selected);
            }
        }
        ViewState::WalletDetail {
            address, payload, ..
        } => match payload {
            Payload::Loading => draw_placeholder(f, area, "Wallet", &format!("Loading {address}…")),
            Payload::Loaded(detail) => draw_wallet_detail(f, area, &detail.view, selected),
        },
        ViewState::TransactionSegmentDetail(Payload::Loaded(segment)) => {
            let (summary, list) = layout::summary_and_list(area);
            let lines = vec![
                kv_line("Wallet", segment.wallet_title.clone()),
                kv_line("Address", segment.address.clone()),
                kv_line("Section", segment.section.title.clone()),
                kv_line(
                    "Total",
                    segment.section.subtitle.clone().unwrap_or_else(|| "-".to_string()),
                ),
                kv_line("Count", segment.section.rows.len().to_string()),
            ];
            f.render_widget(
                Paragraph::new(lines).block(Block::default().title("Segment").borders(Borders::ALL)),
                summary,
            );
            let items = segment.section.rows.iter().map(row_item).collect();
            draw_list(f, list, &segment.section.title, items, selected);
        }
        ViewState::TransactionDetail(Payload::Loaded(detail)) => {
            let row = &detail.row;
            let mut lines = vec![
                kv_line("Direction", row.direction.label().to_string()),
                kv_line("Amount", row.amount.clone()),
                kv_line("Date", row.date.clone()),
                kv_line(
                    "Status",
                    if row.is_confirmed { "confirmed" } else { "pending" }.to_string(),
                ),
                Line::from(""),
            ];
            lines.extend(detail.metadata.iter().map(|m| kv_line(m.key, m.value.clone())));
            let paragraph = Paragraph::new(lines)
                .block(Block::default().title("Transaction").borders(Borders::ALL))
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, area);
        }
        ViewState::QrDisplay(Payload::Loaded(qr)) => {
            let block = Block::default().title(qr.address.clone()).borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(QrCodeWidget::new(&qr.address), inner);
        }
        ViewState::TypeSelectAlert(Payload::Loaded(alert)) => {
            draw_alert(f, area, alert, selected, |t| format!("{}  {} ({})", t.icon(), t.title(), t.unit()));
        }
        ViewState::NameSelectAlert(Payload::Loaded(alert)) => {
            draw_alert(f, area, alert, selected, |n| n.description().to_string());
        }
        ViewState::Scanner(Payload::Loaded(scanner)) => {
            let popup = centered_rect(70, 30, area);
            f.render_widget(Clear, popup);
            let lines = vec![
                Line::from(format!("Paste or type a {} address", scanner.wallet_type.title())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::LightCyan)),
                    Span::raw(app.scan_input.clone()),
                    Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                ]),
            ];
            let paragraph = Paragraph::new(lines)
                .block(Block::default().title("Scan").borders(Borders::ALL));
            f.render_widget(paragraph, popup);
        }
        screen => draw_placeholder(f, area, screen.title(), "Loading…"),
    }
}

fn draw_wallet_detail(f: &mut Frame, area: Rect, view: &WalletDetailView, selected: usize) {
    let (summary, list) = layout::summary_and_list(area);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", view.icon), Style::default().fg(Color::LightYellow)),
            Span::styled(view.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        kv_line("Address", view.address.clone()),
        kv_line("Balance", view.balance.clone()),
        kv_line(
            "Received",
            format!("{}  Sent {}", view.total_received, view.total_sent),
        ),
        kv_line("Txs", view.tx_count.to_string()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().title("Wallet").borders(Borders::ALL)),
        summary,
    );

    let items = section_items(&view.sections);
    let title = format!("Transactions · {}", view.sort.title());
    if items.is_empty() {
        draw_placeholder(f, list, &title, "No transactions");
    } else {
        // Section headers are not selectable; map the row index onto the item index
        let item_index = item_index_for_row(&view.sections, selected);
        draw_list(f, list, &title, items, item_index);
    }
}

fn section_items(sections: &[TransactionSection]) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for section in sections {
        let mut header = vec![Span::styled(
            section.title.clone(),
            Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(subtitle) = &section.subtitle {
            header.push(Span::styled(format!("  {subtitle}"), Style::default().fg(Color::DarkGray)));
        }
        items.push(ListItem::new(Line::from(header)));
        items.extend(section.rows.iter().map(row_item));
    }
    items
}

fn item_index_for_row(sections: &[TransactionSection], row: usize) -> usize {
    let mut remaining = row;
    let mut item = 0;
    for section in sections {
        item += 1;
        if remaining < section.rows.len() {
            return item + remaining;
        }
        remaining -= section.rows.len();
        item += section.rows.len();
    }
    item.saturating_sub(1)
}

fn row_item(row: &TransactionRow) -> ListItem<'static> {
    let confirmations = if row.is_confirmed {
        Span::styled(format!("{:>3}", row.confirmations), Style::default().fg(Color::LightGreen))
    } else {
        Span::styled(format!("{:>3}", row.confirmations), Style::default().fg(Color::LightYellow))
    };
    ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::raw(format!("{}  ", short_hash(&row.hash, 12))),
        Span::styled(format!("{:<9}", row.direction.label()), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{:>24}  ", row.amount), Style::default().fg(Color::White)),
        Span::raw(format!("{}  ", row.date)),
        confirmations,
    ]))
}

fn draw_alert<T>(
    f: &mut Frame,
    area: Rect,
    alert: &SelectionAlert<T>,
    selected: usize,
    label: impl Fn(&T) -> String,
) {
    let popup = centered_rect(50, 50, area);
    f.render_widget(Clear, popup);
    let items: Vec<ListItem> = alert
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| ListItem::new(format!("{}. {}", i + 1, label(option))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{} · {}", alert.title, alert.message))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::LightCyan));
    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, popup, &mut state);
}

fn draw_list(f: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_placeholder(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().title(title.to_string()).borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let Some(status) = app.status.as_ref() else {
        return;
    };
    let color = match status.level {
        StatusLevel::Info => Color::LightGreen,
        StatusLevel::Warn => Color::LightYellow,
        StatusLevel::Error => Color::LightRed,
    };
    f.render_widget(
        Paragraph::new(Span::styled(status.text.clone(), Style::default().fg(color))),
        area,
    );
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.current() {
        ViewState::WalletList(_) => &[
            ("Enter", "Open"),
            ("d", "Examples"),
            ("a", "Add"),
            ("s", "Scan"),
            ("c", "Copy"),
        ],
        ViewState::WalletDetail { .. } => &[
            ("Enter", "Tx"),
            ("g", "Section"),
            ("o", "Sort"),
            ("c", "Copy"),
            ("r", "QR"),
            ("Esc", "Back"),
        ],
        ViewState::TransactionSegmentDetail(_) => &[("Enter", "Tx"), ("c", "Copy"), ("Esc", "Back")],
        ViewState::QrDisplay(_) => &[("c", "Copy"), ("Esc", "Back")],
        ViewState::TypeSelectAlert(_) | ViewState::NameSelectAlert(_) => {
            &[("Enter", "Choose"), ("1-5", "Pick"), ("Esc", "Cancel")]
        }
        ViewState::Scanner(_) => &[("Enter", "Submit"), ("Esc", "Cancel")],
        ViewState::TransactionDetail(_) => &[("Esc", "Back")],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::LightCyan)));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    spans.extend([
        Span::styled("?", Style::default().fg(Color::LightCyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::LightCyan)),
        Span::raw(" Quit"),
    ]);
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(64, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  j / k      Move selection (vim)"),
        Line::from("  Enter / l  Open"),
        Line::from("  Esc / h    Back / close"),
        Line::from(""),
        Line::from("Wallets"),
        Line::from("  d          Load example wallets"),
        Line::from("  a          Add wallet (name, type, scan)"),
        Line::from("  s          Scan an address"),
        Line::from(""),
        Line::from("Wallet detail"),
        Line::from("  o / Tab    Toggle Recent / Largest"),
        Line::from("  g          Open section"),
        Line::from("  c          Copy address"),
        Line::from("  r          Show address QR"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn kv_line(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<14}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn short_addr(value: &str) -> String {
    let value = value.trim();
    if value.chars().count() <= 16 {
        return value.to_string();
    }
    let start: String = value.chars().take(8).collect();
    let end: String = value
        .chars()
        .rev()
        .take(6)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}..{}", start, end)
}

fn short_hash(value: &str, len: usize) -> String {
    if value.chars().count() <= len {
        return value.to_string();
    }
    format!("{}…", value.chars().take(len).collect::<String>())
}
