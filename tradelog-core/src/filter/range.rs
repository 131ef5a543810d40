//! Date ranges and the dashboard's relative-range presets.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Fully open range (all time).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Relative range presets from the dashboard's date-range selector.
///
/// Resolution takes the reference date explicitly — there is no clock
/// read anywhere in this crate, so identical inputs always resolve to
/// identical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangePreset {
    Today,
    /// Trailing 7 calendar days.
    Week,
    /// Calendar month to date.
    Month,
    /// Trailing 90 calendar days.
    Last90,
    YearToDate,
    /// Same day one year back through today.
    LastYear,
    #[serde(other)]
    All,
}

impl RangePreset {
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        let until_today = |start: NaiveDate| DateRange::new(Some(start), Some(today));
        match self {
            RangePreset::Today => until_today(today),
            RangePreset::Week => until_today(today - Duration::days(7)),
            RangePreset::Month => until_today(today.with_day(1).unwrap_or(today)),
            RangePreset::Last90 => until_today(today - Duration::days(90)),
            RangePreset::YearToDate => until_today(today.with_ordinal(1).unwrap_or(today)),
            RangePreset::LastYear => {
                until_today(today.checked_sub_months(Months::new(12)).unwrap_or(today))
            }
            RangePreset::All => DateRange::all(),
        }
    }
}
