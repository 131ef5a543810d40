//! The filtering pipeline: day-level range test, per-trade predicate,
//! flatten, chronological sort.

use super::criteria::FilterCriteria;
use super::range::DateRange;
use crate::domain::day::DailyPnL;
use crate::domain::session::SessionTable;
use crate::domain::trade::Trade;
use std::collections::BTreeSet;

/// Apply the full filter to a journal and return the surviving trades,
/// flattened across days.
///
/// Every predicate is ANDed. Unknown session keys apply no constraint;
/// a trade whose `time` does not parse fails any concrete session test
/// (it has no hour to be inside the window).
pub fn filter_trades<'a>(
    days: &'a [DailyPnL],
    criteria: &FilterCriteria,
    sessions: &SessionTable,
) -> Vec<&'a Trade> {
    days.iter()
        .filter(|day| criteria.range.contains(day.date))
        .flat_map(|day| day.trades.iter())
        .filter(|trade| trade_matches(trade, criteria, sessions))
        .collect()
}

fn trade_matches(trade: &Trade, criteria: &FilterCriteria, sessions: &SessionTable) -> bool {
    if let Some(tag) = &criteria.strategy {
        if !trade.tags.iter().any(|t| t == tag) {
            return false;
        }
    }

    if let Some(key) = &criteria.session {
        // "all" and unknown keys are no constraint.
        if key != "all" {
            if let Some(window) = sessions.find(key) {
                match trade.hour() {
                    Some(hour) if window.contains(hour) => {}
                    _ => return false,
                }
            }
        }
    }

    if let Some(account) = &criteria.account {
        if trade.account.as_deref() != Some(account.as_str()) {
            return false;
        }
    }

    if let Some(symbol) = &criteria.symbol {
        if &trade.symbol != symbol {
            return false;
        }
    }

    if !criteria.side.matches(trade.side) {
        return false;
    }

    criteria.outcome.matches(trade.outcome())
}

/// Stable sort by `(date, time)` ascending. Equal keys keep journal
/// order, so repeated runs produce identical sequences.
pub fn sort_chronological(trades: &mut [&Trade]) {
    trades.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Day-level P&L summed over a date range (the home-page period cards).
pub fn pnl_in_range(days: &[DailyPnL], range: &DateRange) -> f64 {
    days.iter()
        .filter(|day| range.contains(day.date))
        .map(|day| day.pnl)
        .sum()
}

/// Distinct filterable values present in a journal, for populating
/// filter selectors. Sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetValues {
    pub strategies: Vec<String>,
    pub symbols: Vec<String>,
    pub accounts: Vec<String>,
}

impl FacetValues {
    pub fn collect(days: &[DailyPnL]) -> Self {
        let mut strategies = BTreeSet::new();
        let mut symbols = BTreeSet::new();
        let mut accounts = BTreeSet::new();

        for trade in days.iter().flat_map(|d| d.trades.iter()) {
            for tag in &trade.tags {
                strategies.insert(tag.clone());
            }
            symbols.insert(trade.symbol.clone());
            if let Some(account) = &trade.account {
                accounts.insert(account.clone());
            }
        }

        Self {
            strategies: strategies.into_iter().collect(),
            symbols: symbols.into_iter().collect(),
            accounts: accounts.into_iter().collect(),
        }
    }
}
