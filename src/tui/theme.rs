//! Terminal theme detection and color definitions

use ratatui::style::Color;

use super::widgets::color_scale::Rgb;
use crate::services::ThemeChoice;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Resolve a configured choice, probing the terminal only for `Auto`
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::detect(),
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::Light => Self::Light,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (titles, spinner, help popup border and keys)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (axis labels, hints, fallback line)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Count/number highlight
    pub fn count(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Heatmap colour for a zero count
    pub fn heatmap_low(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0x2d, 0x33, 0x3b),
            Self::Light => Rgb::new(0xeb, 0xed, 0xf0),
        }
    }

    /// Heatmap colour for the busiest slot
    pub fn heatmap_high(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0xff, 0x6b, 0x35),
            Self::Light => Rgb::new(0xc2, 0x41, 0x0c),
        }
    }
}
