//! Review rhythm panel: title, grid with axes and tooltip, legend, summary

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::axis::{day_name, Axes};
use super::color_scale::{ColorDomain, ColorScale};
use super::heatmap::{HeatmapGrid, HoverState};
use super::layout::GridLayout;
use super::legend::Legend;
use super::tooltip::Tooltip;
use crate::services::BinnedRhythm;
use crate::tui::theme::Theme;
use crate::types::{Result, RhythmError};

/// Line shown in place of the grid when there is nothing to draw
pub const FALLBACK_TEXT: &str = "Review rhythm not available";

const TITLE: &str = "Review Rhythm";

/// Rows above the grid (title + blank)
const HEADER_ROWS: u16 = 2;

/// What the panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Grid(BinnedRhythm),
    /// No usable data; optional upstream reason
    Unavailable(Option<String>),
}

impl PanelContent {
    /// Map a binning result onto panel content. Only "nothing to draw"
    /// errors become content; real failures are handed back.
    pub fn from_result(result: Result<BinnedRhythm>) -> Result<Self> {
        match result {
            Ok(binned) => Ok(Self::Grid(binned)),
            Err(RhythmError::MissingData) => Ok(Self::Unavailable(None)),
            Err(RhythmError::Unavailable(reason)) => Ok(Self::Unavailable(Some(reason))),
            Err(e) => Err(e),
        }
    }

    pub fn binned(&self) -> Option<&BinnedRhythm> {
        match self {
            Self::Grid(binned) => Some(binned),
            Self::Unavailable(_) => None,
        }
    }
}

/// Summary line under the grid
pub fn summary_text(binned: &BinnedRhythm) -> String {
    let total = binned.grid.total();
    let mut text = format!("{} reviews", total);
    if let Some(peak) = binned.grid.peak() {
        text.push_str(&format!(
            " · busiest {} {:02}:00 ({})",
            day_name(peak.day as usize),
            peak.hour,
            peak.count
        ));
    }
    if !binned.warnings.is_empty() {
        text.push_str(&format!(" · {} entries skipped", binned.warnings.len()));
    }
    text
}

/// Whole review rhythm panel
pub struct RhythmPanel<'a> {
    content: &'a PanelContent,
    hover: HoverState,
    layout: GridLayout,
    theme: Theme,
    source: Option<&'a str>,
}

impl<'a> RhythmPanel<'a> {
    pub fn new(content: &'a PanelContent, layout: GridLayout, theme: Theme) -> Self {
        Self {
            content,
            hover: HoverState::default(),
            layout,
            theme,
            source: None,
        }
    }

    pub fn with_hover(mut self, hover: HoverState) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Where the grid origin lands for a given panel area.
    /// The app uses this to translate mouse positions into grid coordinates.
    pub fn grid_area(area: Rect, layout: &GridLayout) -> Rect {
        let width = layout.width().min(area.width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + HEADER_ROWS.min(area.height);
        Rect {
            x,
            y,
            width,
            height: layout.height().min(area.height.saturating_sub(HEADER_ROWS)),
        }
    }

    /// Rows needed for the full panel with a grid
    pub fn height(layout: &GridLayout) -> u16 {
        // header + grid + blank + legend + summary
        HEADER_ROWS + layout.height() + 3
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            TITLE,
            Style::default()
                .fg(self.theme.accent())
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(source) = self.source {
            spans.push(Span::styled(
                format!("  {}", source),
                Style::default().fg(self.theme.muted()),
            ));
        }
        Paragraph::new(Line::from(spans)).render(
            Rect {
                height: 1.min(area.height),
                ..area
            },
            buf,
        );
    }

    fn render_fallback(&self, reason: Option<&str>, area: Rect, buf: &mut Buffer) {
        if area.height <= HEADER_ROWS {
            return;
        }
        let mut text = FALLBACK_TEXT.to_string();
        if let Some(reason) = reason {
            text.push_str(&format!(" ({})", reason));
        }
        let line: String = text.chars().take(area.width as usize).collect();
        buf.set_string(
            area.x,
            area.y + HEADER_ROWS,
            line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_grid(&self, binned: &BinnedRhythm, area: Rect, buf: &mut Buffer) {
        let scale = ColorScale::new(
            ColorDomain::for_grid(&binned.grid),
            self.theme.heatmap_low(),
            self.theme.heatmap_high(),
        );
        let grid_area = Self::grid_area(area, &self.layout);

        Axes::new(self.layout, Style::default().fg(self.theme.muted())).render(grid_area, buf);
        HeatmapGrid::new(&binned.grid, scale, self.layout)
            .with_hover(self.hover)
            .render(grid_area, buf);
        if let Some(tooltip) = Tooltip::for_hover(&self.hover, &self.layout, self.theme) {
            tooltip.render(grid_area, buf);
        }

        let below = grid_area.y + grid_area.height + 1;
        let bottom = area.y + area.height;
        if below < bottom {
            Legend::new(scale, Style::default().fg(self.theme.muted())).render(
                Rect::new(grid_area.x, below, grid_area.width, 1),
                buf,
            );
        }
        if below + 1 < bottom {
            let summary: String = summary_text(binned)
                .chars()
                .take(grid_area.width as usize)
                .collect();
            buf.set_string(
                grid_area.x,
                below + 1,
                summary,
                Style::default().fg(self.theme.count()),
            );
        }
    }
}

impl Widget for RhythmPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_title(area, buf);
        match self.content {
            PanelContent::Grid(binned) => self.render_grid(binned, area, buf),
            PanelContent::Unavailable(reason) => {
                self.render_fallback(reason.as_deref(), area, buf)
            }
        }
    }
}
