//! Journal JSON loading and invariant checks.
//!
//! The wire format is the camelCase schema of the domain types. Stored
//! day-level `pnl` values can drift from their trade lists (imports,
//! hand edits); loading normalizes them so the `pnl == Σ trades` the
//! analytics layer relies on holds unconditionally.

use crate::domain::day::DailyPnL;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("invalid journal JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("day {date}: stored pnl {stored} does not match sum of trades {computed}")]
    PnlMismatch {
        date: NaiveDate,
        stored: f64,
        computed: f64,
    },
}

/// Parse a journal and normalize each day's `pnl` to the sum of its
/// trades.
pub fn journal_from_json(json: &str) -> Result<Vec<DailyPnL>, JournalError> {
    let mut days: Vec<DailyPnL> = serde_json::from_str(json)?;
    for day in &mut days {
        day.recompute_pnl();
    }
    Ok(days)
}

/// Strict check: error on the first day whose stored `pnl` disagrees
/// with its trades. Use after mutations that bypass the `DailyPnL`
/// mutators.
pub fn validate_journal(days: &[DailyPnL]) -> Result<(), JournalError> {
    for day in days {
        if !day.is_consistent() {
            let computed = day.trades.iter().map(|t| t.pnl).sum();
            return Err(JournalError::PnlMismatch {
                date: day.date,
                stored: day.pnl,
                computed,
            });
        }
    }
    Ok(())
}
