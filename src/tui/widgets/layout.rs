//! Shared coordinate system for the rhythm grid, its axes and tooltip
//!
//! Every position is relative to the top-left corner of the area the grid is
//! rendered into. Widgets add the area offset themselves.

use crate::services::settings::DEFAULT_HOUR_STRIDE;
use crate::types::{DAYS_PER_WEEK, HOURS_PER_DAY};

/// Cell and gutter dimensions in terminal columns/rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cell_width: u16,
    pub cell_height: u16,
    /// Blank columns between hour columns
    pub col_gap: u16,
    /// Blank rows between day rows
    pub row_gap: u16,
    /// Left gutter before hour 0 (holds day labels)
    pub hour_gutter: u16,
    /// Top gutter above Monday (hour labels + tooltip row)
    pub day_gutter: u16,
    /// Label every n-th hour
    pub hour_stride: u8,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cell_width: 2,
            cell_height: 1,
            col_gap: 1,
            row_gap: 1,
            hour_gutter: 4, // "Mon "
            day_gutter: 2,
            hour_stride: DEFAULT_HOUR_STRIDE,
        }
    }
}

impl GridLayout {
    pub fn with_hour_stride(mut self, stride: u8) -> Self {
        self.hour_stride = stride.max(1);
        self
    }

    fn col_pitch(&self) -> u16 {
        self.cell_width + self.col_gap
    }

    fn row_pitch(&self) -> u16 {
        self.cell_height + self.row_gap
    }

    /// Left edge of an hour column
    pub fn column_x(&self, hour: usize) -> u16 {
        self.hour_gutter + hour as u16 * self.col_pitch()
    }

    /// Top edge of a day row
    pub fn row_y(&self, day: usize) -> u16 {
        self.day_gutter + day as u16 * self.row_pitch()
    }

    /// Top-left corner of cell (day, hour)
    pub fn cell_origin(&self, day: usize, hour: usize) -> (u16, u16) {
        (self.column_x(hour), self.row_y(day))
    }

    /// Vertical centre of a day row
    pub fn row_center_y(&self, day: usize) -> u16 {
        self.row_y(day) + self.cell_height.saturating_sub(1) / 2
    }

    /// Total width including the left gutter
    pub fn width(&self) -> u16 {
        self.hour_gutter + HOURS_PER_DAY as u16 * self.col_pitch() - self.col_gap
    }

    /// Total height including the top gutter
    pub fn height(&self) -> u16 {
        self.day_gutter + DAYS_PER_WEEK as u16 * self.row_pitch() - self.row_gap
    }

    /// Cell under a relative coordinate; gutters and gaps map to None
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let dx = x.checked_sub(self.hour_gutter)?;
        let dy = y.checked_sub(self.day_gutter)?;

        let hour = (dx / self.col_pitch()) as usize;
        let day = (dy / self.row_pitch()) as usize;
        if hour >= HOURS_PER_DAY || day >= DAYS_PER_WEEK {
            return None;
        }
        if dx % self.col_pitch() >= self.cell_width || dy % self.row_pitch() >= self.cell_height {
            return None;
        }
        Some((day, hour))
    }
}
