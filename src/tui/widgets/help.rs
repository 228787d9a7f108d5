//! Help popup widget - displays keyboard and mouse shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width and height of the help popup
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 16;

/// Hover section entries
const HOVER_KEYS: [(&str, &str); 3] = [
    ("Mouse", "Hover a cell"),
    ("Arrows or h/j/k/l", "Move hover"),
    ("Esc", "Clear hover"),
];

/// General section entries
const GENERAL_KEYS: [(&str, &str); 3] = [
    ("r", "Reload data"),
    ("q / Ctrl+C", "Quit"),
    ("?", "Toggle help"),
];

/// Help popup widget showing keyboard shortcuts
pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }

    fn render_section(
        &self,
        title: &str,
        entries: &[(&str, &str)],
        rows: &[Rect],
        buf: &mut Buffer,
    ) {
        let header = Line::from(vec![Span::styled(
            title.to_string(),
            Style::default()
                .fg(self.theme.count())
                .add_modifier(Modifier::BOLD),
        )]);
        Paragraph::new(header)
            .alignment(Alignment::Left)
            .render(rows[0], buf);

        let sep = "─".repeat(rows[1].width as usize);
        buf.set_string(
            rows[1].x,
            rows[1].y,
            &sep,
            Style::default().fg(self.theme.muted()),
        );

        for (row, (key, desc)) in rows[2..].iter().zip(entries) {
            render_keybinding(*row, buf, key, desc, self.theme);
        }
    }
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let title = format!(" rhythmview v{} ", VERSION);
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // [0] Padding
            Constraint::Length(1), // [1] Hover header
            Constraint::Length(1), // [2] Separator
            Constraint::Length(1), // [3] Mouse
            Constraint::Length(1), // [4] Arrows
            Constraint::Length(1), // [5] Esc
            Constraint::Length(1), // [6] Padding
            Constraint::Length(1), // [7] General header
            Constraint::Length(1), // [8] Separator
            Constraint::Length(1), // [9] r
            Constraint::Length(1), // [10] q
            Constraint::Length(1), // [11] ?
            Constraint::Length(1), // [12] Close hint
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

        self.render_section("Hover", &HOVER_KEYS, &chunks[1..6], buf);
        self.render_section("General", &GENERAL_KEYS, &chunks[7..12], buf);

        let hint = Line::from(vec![Span::styled(
            "Press ? to close",
            Style::default().fg(self.theme.muted()),
        )]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[12], buf);
    }
}

/// Render a single keybinding line
fn render_keybinding(area: Rect, buf: &mut Buffer, key: &str, desc: &str, theme: Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("  {:<20}", key),
            Style::default().fg(theme.accent()),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.text())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Left)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_popup_centered_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup_area = HelpPopup::centered_area(area);

        assert_eq!(popup_area.width, POPUP_WIDTH);
        assert_eq!(popup_area.height, POPUP_HEIGHT);
        assert_eq!(popup_area.x, (100 - POPUP_WIDTH) / 2);
        assert_eq!(popup_area.y, (50 - POPUP_HEIGHT) / 2);
    }

    #[test]
    fn test_help_popup_small_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let popup_area = HelpPopup::centered_area(area);

        assert_eq!(popup_area.width, 30);
        assert_eq!(popup_area.height, 10);
    }

    #[test]
    fn test_help_lists_reload() {
        let area = Rect::new(0, 0, POPUP_WIDTH, POPUP_HEIGHT);
        let mut buf = Buffer::empty(area);
        HelpPopup::default().render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf.cell(pos).unwrap().symbol().to_string())
            .collect();
        assert!(text.contains("Reload data"));
        assert!(text.contains("Clear hover"));
    }
}
