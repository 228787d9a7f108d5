//! Sparse-to-dense binning of review rhythm data
//!
//! The API keys days 1..=7 (Monday = 1) and hours 0..=23. Binning is the only
//! place that normalises those keys into zero-based grid coordinates; every
//! other component addresses cells by `(day, hour)` with Monday = 0.

use serde_json::Value;
use tracing::warn;

use crate::types::{
    extract_rhythm, BinWarning, RawRhythmInput, Result, RhythmError, RhythmGrid, DAYS_PER_WEEK,
    HOURS_PER_DAY,
};

/// Dense grid plus the entries that had to be skipped to build it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinnedRhythm {
    pub grid: RhythmGrid,
    pub warnings: Vec<BinWarning>,
}

/// Converts sparse `{day: {hour: count}}` maps into a [`RhythmGrid`]
pub struct RhythmBinner;

impl RhythmBinner {
    /// Bin a sparse input into a dense 7x24 grid.
    ///
    /// Malformed keys, day values and counts never abort the build: the entry is skipped,
    /// logged, and reported in [`BinnedRhythm::warnings`]. Keys that name the
    /// same slot (`"9"` and `"09"`) are summed.
    pub fn bin(input: &RawRhythmInput) -> BinnedRhythm {
        let mut counts = [[0u64; HOURS_PER_DAY]; DAYS_PER_WEEK];
        let mut warnings = Vec::new();

        for (day_key, day_value) in input {
            let day = match parse_day(day_key) {
                Ok(day) => day,
                Err(e) => {
                    warn!("{}, skipping day entry", e);
                    warnings.push(BinWarning::InvalidDay {
                        key: day_key.clone(),
                    });
                    continue;
                }
            };
            let Some(hours) = day_value.as_object() else {
                warn!(
                    "day {} holds {} instead of an hour map, skipping",
                    day_key, day_value
                );
                warnings.push(BinWarning::InvalidDayValue {
                    key: day_key.clone(),
                    value: day_value.to_string(),
                });
                continue;
            };

            for (hour_key, value) in hours {
                let hour = match parse_hour(hour_key) {
                    Ok(hour) => hour,
                    Err(e) => {
                        warn!("{} (day {}), skipping", e, day_key);
                        warnings.push(BinWarning::InvalidHour {
                            day: day_key.clone(),
                            key: hour_key.clone(),
                        });
                        continue;
                    }
                };

                let Some(count) = parse_count(value) else {
                    warn!(
                        "invalid count {} at day {} hour {}, skipping",
                        value, day_key, hour_key
                    );
                    warnings.push(BinWarning::InvalidCount {
                        day: day_key.clone(),
                        hour: hour_key.clone(),
                        value: value.to_string(),
                    });
                    continue;
                };

                let slot = &mut counts[day][hour];
                *slot = slot.saturating_add(count);
            }
        }

        BinnedRhythm {
            grid: RhythmGrid::from_counts(counts),
            warnings,
        }
    }

    /// Extract the rhythm section from a payload and bin it.
    /// Fails with `MissingData`/`Unavailable` when there is nothing to draw.
    pub fn bin_payload(payload: &Value) -> Result<BinnedRhythm> {
        let input = extract_rhythm(payload)?;
        Ok(Self::bin(&input))
    }
}

/// "1".."7" -> 0..=6
fn parse_day(key: &str) -> Result<usize> {
    match key.trim().parse::<i64>() {
        Ok(d) if (1..=DAYS_PER_WEEK as i64).contains(&d) => Ok((d - 1) as usize),
        _ => Err(RhythmError::InvalidDay(key.to_string())),
    }
}

/// "0".."23" -> 0..=23
fn parse_hour(key: &str) -> Result<usize> {
    match key.trim().parse::<i64>() {
        Ok(h) if (0..HOURS_PER_DAY as i64).contains(&h) => Ok(h as usize),
        _ => Err(RhythmError::InvalidHour(key.to_string())),
    }
}

/// Non-negative integer, or a float with no fractional part
fn parse_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Some(f as u64),
        _ => None,
    }
}
