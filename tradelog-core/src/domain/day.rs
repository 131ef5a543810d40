//! DailyPnL — a calendar day's trades and their summed P&L.

use super::trade::Trade;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal day: the date, its trades, and the day's realized P&L.
///
/// Invariant: `pnl` equals the sum of `trades[].pnl`. Constructors
/// compute it and the mutators recompute it in the same call, so there
/// is no observable state with a stale sum. Deserialized records may
/// carry a drifted `pnl`; `loader::journal_from_json` normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPnL {
    pub date: NaiveDate,
    pub pnl: f64,
    pub trades: Vec<Trade>,
}

impl DailyPnL {
    /// Build a day from its trades, computing `pnl`.
    pub fn new(date: NaiveDate, trades: Vec<Trade>) -> Self {
        let pnl = trades.iter().map(|t| t.pnl).sum();
        Self { date, pnl, trades }
    }

    pub fn push_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
        self.recompute_pnl();
    }

    /// Remove the trade with the given id, if present.
    pub fn remove_trade(&mut self, id: &str) -> Option<Trade> {
        let idx = self.trades.iter().position(|t| t.id == id)?;
        let removed = self.trades.remove(idx);
        self.recompute_pnl();
        Some(removed)
    }

    /// Re-derive `pnl` from the trade list.
    pub fn recompute_pnl(&mut self) {
        self.pnl = self.trades.iter().map(|t| t.pnl).sum();
    }

    /// True when the stored `pnl` matches the sum of trades.
    pub fn is_consistent(&self) -> bool {
        let computed: f64 = self.trades.iter().map(|t| t.pnl).sum();
        (self.pnl - computed).abs() < 1e-9
    }
}
