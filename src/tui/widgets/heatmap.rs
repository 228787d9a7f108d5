//! 7x24 review rhythm heatmap widget and its hover state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::color_scale::ColorScale;
use super::layout::GridLayout;
use crate::types::{RhythmCell, RhythmGrid, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Glyph for a regular cell
const CELL_GLYPH: &str = "██";

/// Glyph for the hovered cell (distinct shape, not only a colour change)
const HOVER_GLYPH: &str = "▓▓";

/// How far the hovered cell is lifted towards white
const HOVER_BRIGHTEN: f64 = 0.35;

/// The single hovered cell, if any.
///
/// Two transitions only: `enter` replaces whatever was hovered, `leave`
/// clears it. A rebuilt grid starts from `HoverState::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<RhythmCell>,
}

impl HoverState {
    /// Hover (day, hour). Out-of-range coordinates leave the state untouched.
    /// Returns true when the hovered cell changed.
    pub fn enter(&mut self, grid: &RhythmGrid, day: usize, hour: usize) -> bool {
        match grid.cell(day, hour) {
            Some(cell) if self.current != Some(cell) => {
                self.current = Some(cell);
                true
            }
            _ => false,
        }
    }

    /// Clear the hover. Returns true when something was hovered.
    pub fn leave(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<RhythmCell> {
        self.current
    }

    pub fn is_hovered(&self, day: usize, hour: usize) -> bool {
        self.current
            .is_some_and(|c| c.day as usize == day && c.hour as usize == hour)
    }

    /// Keyboard navigation: step from the hovered cell, clamped to the grid.
    /// With nothing hovered, starts at the peak slot (or Monday 00:00).
    pub fn step(&mut self, grid: &RhythmGrid, d_day: i32, d_hour: i32) -> bool {
        let Some(cell) = self.current else {
            let start = grid.peak().map(|p| (p.day, p.hour)).unwrap_or((0, 0));
            return self.enter(grid, start.0 as usize, start.1 as usize);
        };
        let day = (cell.day as i32 + d_day).clamp(0, DAYS_PER_WEEK as i32 - 1);
        let hour = (cell.hour as i32 + d_hour).clamp(0, HOURS_PER_DAY as i32 - 1);
        self.enter(grid, day as usize, hour as usize)
    }
}

/// Heatmap widget for ratatui
pub struct HeatmapGrid<'a> {
    grid: &'a RhythmGrid,
    scale: ColorScale,
    layout: GridLayout,
    hover: HoverState,
}

impl<'a> HeatmapGrid<'a> {
    pub fn new(grid: &'a RhythmGrid, scale: ColorScale, layout: GridLayout) -> Self {
        Self {
            grid,
            scale,
            layout,
            hover: HoverState::default(),
        }
    }

    pub fn with_hover(mut self, hover: HoverState) -> Self {
        self.hover = hover;
        self
    }

    /// Style for one cell, emphasised when hovered
    fn cell_style(&self, cell: RhythmCell) -> Style {
        let color = self.scale.color(cell.count);
        if self.hover.is_hovered(cell.day as usize, cell.hour as usize) {
            Style::default()
                .fg(color.brighten(HOVER_BRIGHTEN).into())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color.into())
        }
    }
}

impl Widget for HeatmapGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_x = area.x + area.width;
        let max_y = area.y + area.height;

        for cell in self.grid.cells() {
            let (dx, dy) = self
                .layout
                .cell_origin(cell.day as usize, cell.hour as usize);
            let x = area.x + dx;
            let y = area.y + dy;
            if y >= max_y || x + self.layout.cell_width > max_x {
                continue;
            }

            let glyph = if self.hover.is_hovered(cell.day as usize, cell.hour as usize) {
                HOVER_GLYPH
            } else {
                CELL_GLYPH
            };
            let style = self.cell_style(cell);
            for row in 0..self.layout.cell_height {
                if y + row < max_y {
                    buf.set_string(x, y + row, glyph, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::color_scale::{ColorDomain, Rgb};
    use proptest::prelude::*;
    use ratatui::style::Color;

    const C0: Rgb = Rgb::new(10, 10, 10);
    const C1: Rgb = Rgb::new(250, 100, 50);

    fn grid_with(entries: &[(usize, usize, u64)]) -> RhythmGrid {
        let mut counts = [[0u64; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for &(d, h, c) in entries {
            counts[d][h] = c;
        }
        RhythmGrid::from_counts(counts)
    }

    fn render(grid: &RhythmGrid, hover: HoverState) -> Buffer {
        let layout = GridLayout::default();
        let scale = ColorScale::new(ColorDomain::for_grid(grid), C0, C1);
        let area = Rect::new(0, 0, layout.width(), layout.height());
        let mut buf = Buffer::empty(area);
        HeatmapGrid::new(grid, scale, layout)
            .with_hover(hover)
            .render(area, &mut buf);
        buf
    }

    // ========== HoverState ==========

    #[test]
    fn test_enter_then_leave() {
        let grid = grid_with(&[(3, 14, 2)]);
        let mut hover = HoverState::default();
        assert!(hover.current().is_none());

        assert!(hover.enter(&grid, 3, 14));
        let cell = hover.current().unwrap();
        assert_eq!((cell.day, cell.hour, cell.count), (3, 14, 2));

        assert!(hover.leave());
        assert!(hover.current().is_none());
        assert!(!hover.leave());
    }

    #[test]
    fn test_enter_overwrites_previous() {
        let grid = grid_with(&[]);
        let mut hover = HoverState::default();
        hover.enter(&grid, 0, 0);
        hover.enter(&grid, 5, 7);
        assert!(!hover.is_hovered(0, 0));
        assert!(hover.is_hovered(5, 7));
        let hovered = grid
            .cells()
            .filter(|c| hover.is_hovered(c.day as usize, c.hour as usize))
            .count();
        assert_eq!(hovered, 1);
    }

    #[test]
    fn test_enter_same_cell_is_no_change() {
        let grid = grid_with(&[]);
        let mut hover = HoverState::default();
        assert!(hover.enter(&grid, 1, 1));
        assert!(!hover.enter(&grid, 1, 1));
    }

    #[test]
    fn test_enter_out_of_range_ignored() {
        let grid = grid_with(&[]);
        let mut hover = HoverState::default();
        hover.enter(&grid, 2, 2);
        assert!(!hover.enter(&grid, 7, 0));
        assert!(!hover.enter(&grid, 0, 24));
        assert!(hover.is_hovered(2, 2));
    }

    #[test]
    fn test_step_starts_at_peak() {
        let grid = grid_with(&[(4, 20, 9)]);
        let mut hover = HoverState::default();
        hover.step(&grid, 0, 1);
        assert!(hover.is_hovered(4, 20));
    }

    #[test]
    fn test_step_starts_at_origin_without_data() {
        let grid = grid_with(&[]);
        let mut hover = HoverState::default();
        hover.step(&grid, 1, 0);
        assert!(hover.is_hovered(0, 0));
    }

    #[test]
    fn test_step_clamps_to_edges() {
        let grid = grid_with(&[]);
        let mut hover = HoverState::default();
        hover.enter(&grid, 6, 23);
        assert!(!hover.step(&grid, 1, 1));
        assert!(hover.is_hovered(6, 23));
        hover.step(&grid, -10, -30);
        assert!(hover.is_hovered(0, 0));
    }

    // ========== Rendering ==========

    #[test]
    fn test_render_cell_positions_and_colours() {
        let grid = grid_with(&[(0, 9, 5)]);
        let buf = render(&grid, HoverState::default());
        let layout = GridLayout::default();

        let (x, y) = layout.cell_origin(0, 9);
        let hot = buf.cell((x, y)).unwrap();
        assert_eq!(hot.symbol(), "█");
        assert_eq!(hot.fg, Color::Rgb(250, 100, 50));

        let (x, y) = layout.cell_origin(6, 0);
        let cold = buf.cell((x, y)).unwrap();
        assert_eq!(cold.fg, Color::Rgb(10, 10, 10));
    }

    #[test]
    fn test_render_gaps_are_blank() {
        let grid = grid_with(&[]);
        let buf = render(&grid, HoverState::default());
        let layout = GridLayout::default();
        let (x, y) = layout.cell_origin(0, 0);
        assert_eq!(buf.cell((x + 2, y)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((x, y + 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_render_all_zero_grid_is_low_colour() {
        let grid = grid_with(&[]);
        let buf = render(&grid, HoverState::default());
        let layout = GridLayout::default();
        for cell in grid.cells() {
            let (x, y) = layout.cell_origin(cell.day as usize, cell.hour as usize);
            assert_eq!(buf.cell((x, y)).unwrap().fg, Color::Rgb(10, 10, 10));
        }
    }

    #[test]
    fn test_render_hovered_cell_emphasised() {
        let grid = grid_with(&[(3, 14, 4)]);
        let mut hover = HoverState::default();
        hover.enter(&grid, 3, 14);
        let buf = render(&grid, hover);
        let (x, y) = GridLayout::default().cell_origin(3, 14);
        let cell = buf.cell((x, y)).unwrap();
        assert_eq!(cell.symbol(), "▓");
        assert!(cell.modifier.contains(Modifier::BOLD));
        assert_ne!(cell.fg, Color::Rgb(250, 100, 50));
    }

    #[test]
    fn test_render_clips_to_area() {
        let grid = grid_with(&[]);
        let layout = GridLayout::default();
        let scale = ColorScale::new(ColorDomain::for_grid(&grid), C0, C1);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        // Must not panic when the area is smaller than the grid
        HeatmapGrid::new(&grid, scale, layout).render(area, &mut buf);
        assert_eq!(buf.cell((4, 2)).unwrap().symbol(), "█");
    }

    // ========== Properties ==========

    proptest! {
        #[test]
        fn prop_hover_is_last_valid_enter(
            enters in prop::collection::vec((0usize..10, 0usize..30), 0..40)
        ) {
            let grid = grid_with(&[(2, 5, 3), (6, 23, 1)]);
            let mut hover = HoverState::default();
            let mut expected = None;
            for &(day, hour) in &enters {
                hover.enter(&grid, day, hour);
                if day < DAYS_PER_WEEK && hour < HOURS_PER_DAY {
                    expected = Some((day, hour));
                }
            }

            let hovered: Vec<(usize, usize)> = grid
                .cells()
                .map(|c| (c.day as usize, c.hour as usize))
                .filter(|&(d, h)| hover.is_hovered(d, h))
                .collect();
            prop_assert_eq!(hovered.len(), usize::from(expected.is_some()));
            prop_assert_eq!(
                hover.current().map(|c| (c.day as usize, c.hour as usize)),
                expected
            );
        }
    }
}
