//! Hover tooltip: anchor computation and overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::axis::day_name;
use super::heatmap::HoverState;
use super::layout::GridLayout;
use crate::tui::theme::Theme;
use crate::types::RhythmCell;

/// Derives the tooltip anchor from hover state; holds no state of its own
pub struct TooltipPositioner;

impl TooltipPositioner {
    /// Horizontal centre of the hovered cell, one row above its top edge.
    /// Relative to the grid origin, like every [`GridLayout`] coordinate.
    pub fn anchor(hover: &HoverState, layout: &GridLayout) -> Option<(u16, u16)> {
        let cell = hover.current()?;
        let (x, y) = layout.cell_origin(cell.day as usize, cell.hour as usize);
        Some((x + layout.cell_width / 2, y.saturating_sub(1)))
    }
}

/// Tooltip text for a cell, e.g. `Thu 14:00 · 3 reviews`
pub fn tooltip_text(cell: &RhythmCell) -> String {
    let noun = if cell.count == 1 { "review" } else { "reviews" };
    format!(
        "{} {:02}:00 · {} {}",
        day_name(cell.day as usize),
        cell.hour,
        cell.count,
        noun
    )
}

/// One-line tooltip centred on an anchor, kept inside the render area
pub struct Tooltip {
    cell: RhythmCell,
    anchor: (u16, u16),
    theme: Theme,
}

impl Tooltip {
    /// None when nothing is hovered
    pub fn for_hover(hover: &HoverState, layout: &GridLayout, theme: Theme) -> Option<Self> {
        let anchor = TooltipPositioner::anchor(hover, layout)?;
        let cell = hover.current()?;
        Some(Self {
            cell,
            anchor,
            theme,
        })
    }

    /// Left edge of the label so it is centred on the anchor but stays inside
    /// `width` columns
    fn label_x(anchor_x: u16, label_width: u16, width: u16) -> u16 {
        let centred = anchor_x.saturating_sub(label_width / 2);
        centred.min(width.saturating_sub(label_width))
    }
}

impl Widget for Tooltip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (ax, ay) = self.anchor;
        if ay >= area.height || area.width == 0 {
            return;
        }

        let label = format!(" {} ", tooltip_text(&self.cell));
        let label_width = (label.chars().count() as u16).min(area.width);
        let x = area.x + Self::label_x(ax, label_width, area.width);
        let text: String = label.chars().take(label_width as usize).collect();

        let style = Style::default()
            .fg(self.theme.text())
            .bg(self.theme.heatmap_low().into())
            .add_modifier(Modifier::BOLD);
        buf.set_string(x, area.y + ay, text, style);
    }
}
