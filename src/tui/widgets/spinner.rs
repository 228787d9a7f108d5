//! Loading spinner shown while the profile payload is fetched

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// App branding
const APP_NAME: &str = "rhythmview";
const TAGLINE: &str = "When do you write reviews?";

/// Loading spinner widget
pub struct Spinner<'a> {
    frame: usize,
    source: &'a str,
    theme: Theme,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: usize, source: &'a str, theme: Theme) -> Self {
        Self {
            frame,
            source,
            theme,
        }
    }

    /// Get the current spinner character
    pub fn current_char(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Advance to next frame, returning the new frame index
    pub fn next_frame(frame: usize) -> usize {
        (frame + 1) % SPINNER_FRAMES.len()
    }

    fn message(&self) -> String {
        format!("{} Loading {}...", self.current_char(), self.source)
    }
}

/// x that centres `len` columns in `area`
fn centered_x(area: Rect, len: usize) -> u16 {
    area.x + (area.width.saturating_sub(len as u16)) / 2
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 5 || area.width < 35 {
            return;
        }

        // name, tagline, blank, spinner
        let center_y = area.y + area.height / 2;

        let name_y = center_y.saturating_sub(2);
        buf.set_string(
            centered_x(area, APP_NAME.len()),
            name_y,
            APP_NAME,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        );

        let tag_y = name_y + 1;
        buf.set_string(
            centered_x(area, TAGLINE.len()),
            tag_y,
            TAGLINE,
            Style::default().fg(self.theme.muted()),
        );

        let text = self.message();
        let text: String = text.chars().take(area.width as usize).collect();
        buf.set_string(
            centered_x(area, text.chars().count()),
            tag_y + 2,
            &text,
            Style::default().fg(self.theme.accent()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frames() {
        assert_eq!(SPINNER_FRAMES.len(), 10);
    }

    #[test]
    fn test_spinner_current_char() {
        let spinner = Spinner::new(0, "stdin", Theme::Dark);
        assert_eq!(spinner.current_char(), '⠋');

        let spinner = Spinner::new(5, "stdin", Theme::Dark);
        assert_eq!(spinner.current_char(), '⠴');
    }

    #[test]
    fn test_spinner_wraps() {
        let spinner = Spinner::new(10, "stdin", Theme::Dark);
        assert_eq!(spinner.current_char(), '⠋'); // 10 % 10 = 0
    }

    #[test]
    fn test_next_frame() {
        assert_eq!(Spinner::next_frame(0), 1);
        assert_eq!(Spinner::next_frame(9), 0);
    }

    #[test]
    fn test_message_names_source() {
        let spinner = Spinner::new(0, "user u-abc", Theme::Dark);
        assert_eq!(spinner.message(), "⠋ Loading user u-abc...");
    }

    #[test]
    fn test_render_small_area_is_noop() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        Spinner::new(0, "stdin", Theme::Dark).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
