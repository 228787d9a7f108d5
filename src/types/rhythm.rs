//! Review rhythm data model: sparse API input and the dense 7x24 grid

use serde::Serialize;
use std::collections::BTreeMap;

/// Rows in the grid (Monday..Sunday)
pub const DAYS_PER_WEEK: usize = 7;

/// Columns in the grid (00..23)
pub const HOURS_PER_DAY: usize = 24;

/// Total cells in a dense grid
pub const CELL_COUNT: usize = DAYS_PER_WEEK * HOURS_PER_DAY;

/// Sparse `{day: {hour: count}}` mapping as delivered by the profile API.
///
/// Day keys are 1-indexed (Monday = 1), hour keys 0-indexed. JSON object keys
/// are always strings. Each day's value is kept as raw JSON (normally an
/// `{hour: count}` object) until binning decides whether it is usable.
pub type RawRhythmInput = BTreeMap<String, serde_json::Value>;

/// One (day, hour) slot of the dense grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RhythmCell {
    /// Zero-based day, Monday = 0
    pub day: u8,
    /// Hour of day, 0..=23
    pub hour: u8,
    pub count: u64,
}

/// Dense, zero-filled review counts for every (day, hour) pair.
///
/// Immutable once built; a new payload always produces a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhythmGrid {
    counts: [[u64; HOURS_PER_DAY]; DAYS_PER_WEEK],
    max_count: u64,
}

impl RhythmGrid {
    /// Build a grid from dense counts. `max_count` is floored at 1 so an
    /// all-zero grid still yields a non-degenerate colour domain.
    pub fn from_counts(counts: [[u64; HOURS_PER_DAY]; DAYS_PER_WEEK]) -> Self {
        let max_count = counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
            .max(1);
        Self { counts, max_count }
    }

    /// Count at (day, hour), or None when out of range
    pub fn count(&self, day: usize, hour: usize) -> Option<u64> {
        self.counts.get(day).and_then(|row| row.get(hour)).copied()
    }

    /// Cell at (day, hour), or None when out of range
    pub fn cell(&self, day: usize, hour: usize) -> Option<RhythmCell> {
        self.count(day, hour).map(|count| RhythmCell {
            day: day as u8,
            hour: hour as u8,
            count,
        })
    }

    /// All 168 cells in day-major, hour-minor order
    pub fn cells(&self) -> impl Iterator<Item = RhythmCell> + '_ {
        self.counts.iter().enumerate().flat_map(|(day, row)| {
            row.iter().enumerate().map(move |(hour, &count)| RhythmCell {
                day: day as u8,
                hour: hour as u8,
                count,
            })
        })
    }

    /// Largest count in the grid, never below 1
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// First busiest cell in day-major order; None when every count is zero
    pub fn peak(&self) -> Option<RhythmCell> {
        let mut peak: Option<RhythmCell> = None;
        for cell in self.cells() {
            match &peak {
                None if cell.count > 0 => peak = Some(cell),
                Some(best) if cell.count > best.count => peak = Some(cell),
                _ => {}
            }
        }
        peak
    }
}

/// Non-fatal problems found while binning; the offending entry is skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BinWarning {
    /// Day key outside 1..=7 or not an integer
    InvalidDay { key: String },
    /// Day entry whose value is not an `{hour: count}` object
    InvalidDayValue { key: String, value: String },
    /// Hour key outside 0..=23 or not an integer
    InvalidHour { day: String, key: String },
    /// Count that is not a non-negative integer
    InvalidCount {
        day: String,
        hour: String,
        value: String,
    },
}

impl std::fmt::Display for BinWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDay { key } => write!(f, "skipped day {:?}", key),
            Self::InvalidDayValue { key, value } => {
                write!(f, "skipped day {} with non-object value {}", key, value)
            }
            Self::InvalidHour { day, key } => write!(f, "skipped hour {:?} of day {}", key, day),
            Self::InvalidCount { day, hour, value } => {
                write!(f, "skipped count {} at day {} hour {}", value, day, hour)
            }
        }
    }
}
