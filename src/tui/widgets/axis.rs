//! Day-of-week and hour-of-day tick labels

use chrono::Weekday;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::layout::GridLayout;
use crate::types::{DAYS_PER_WEEK, HOURS_PER_DAY};

/// Grid rows, Monday first
pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Three-letter abbreviation for a zero-based grid row
pub fn day_name(day: usize) -> String {
    WEEKDAYS
        .get(day)
        .map(|w| w.to_string())
        .unwrap_or_else(|| "???".to_string())
}

/// A tick label at a position relative to the grid origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub text: String,
    pub x: u16,
    pub y: u16,
}

/// Produces axis labels from the same layout the heatmap uses
#[derive(Debug, Clone, Copy)]
pub struct AxisLabeler {
    layout: GridLayout,
}

impl AxisLabeler {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    /// One label per day row, in the left gutter at the row's centre
    pub fn day_labels(&self) -> Vec<AxisLabel> {
        (0..DAYS_PER_WEEK)
            .map(|day| AxisLabel {
                text: day_name(day),
                x: 0,
                y: self.layout.row_center_y(day),
            })
            .collect()
    }

    /// Labels every `hour_stride` hours, at the column's left edge on row 0
    pub fn hour_labels(&self) -> Vec<AxisLabel> {
        (0..HOURS_PER_DAY)
            .step_by(self.layout.hour_stride.max(1) as usize)
            .map(|hour| AxisLabel {
                text: format!("{:02}", hour),
                x: self.layout.column_x(hour),
                y: 0,
            })
            .collect()
    }
}

/// Renders both axes
pub struct Axes {
    labeler: AxisLabeler,
    style: Style,
}

impl Axes {
    pub fn new(layout: GridLayout, style: Style) -> Self {
        Self {
            labeler: AxisLabeler::new(layout),
            style,
        }
    }
}

impl Widget for Axes {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels = self
            .labeler
            .day_labels()
            .into_iter()
            .chain(self.labeler.hour_labels());
        for label in labels {
            let x = area.x + label.x;
            let y = area.y + label.y;
            if y >= area.y + area.height || x >= area.x + area.width {
                continue;
            }
            let room = (area.x + area.width - x) as usize;
            let text: String = label.text.chars().take(room).collect();
            buf.set_string(x, y, text, self.style);
        }
    }
}
