//! Day chips for the date selector.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateChip {
    /// `YYYY-MM-DD`, the value sent in the search payload.
    pub iso: String,
    /// "Today" for the first chip, short weekday name otherwise.
    pub weekday: String,
    pub day_of_month: u32,
    pub month: String,
}

/// The `days` consecutive calendar days starting at `today`.
pub fn upcoming_date_chips(today: NaiveDate, days: usize) -> Vec<DateChip> {
    (0..days as u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(index, day)| DateChip {
            iso: day.format("%Y-%m-%d").to_string(),
            weekday: if index == 0 { "Today".to_string() } else { day.format("%a").to_string() },
            day_of_month: day.day(),
            month: day.format("%b").to_string(),
        })
        .collect()
}
