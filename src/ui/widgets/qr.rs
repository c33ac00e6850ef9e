//! Unicode QR code widget for the address display screen

use qrcode::render::unicode;
use qrcode::QrCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Render `data` as QR rows, two modules per terminal cell vertically.
/// Returns None when the data does not fit in a QR code.
pub fn qr_lines(data: &str) -> Option<Vec<String>> {
    let code = QrCode::new(data.as_bytes()).ok()?;
    let rendered = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build();
    Some(rendered.lines().map(str::to_string).collect())
}

/// Centered QR code; falls back to the raw text when it cannot be encoded
/// or the area is too small.
pub struct QrCodeWidget<'a> {
    data: &'a str,
    style: Style,
}

impl<'a> QrCodeWidget<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            style: Style::default().fg(Color::White).bg(Color::Black),
        }
    }
}

impl<'a> Widget for QrCodeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = qr_lines(self.data).unwrap_or_default();
        let width = lines.first().map(|l| l.chars().count()).unwrap_or(0) as u16;
        let height = lines.len() as u16;

        if lines.is_empty() || width > area.width || height > area.height {
            buf.set_stringn(area.x, area.y, self.data, area.width as usize, self.style);
            return;
        }

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        for (row, line) in lines.iter().enumerate() {
            buf.set_string(x, y + row as u16, line, self.style);
        }
    }
}
