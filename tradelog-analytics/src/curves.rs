//! Equity and drawdown time-series over the sorted trade sequence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tradelog_core::domain::Trade;

/// Cumulative pnl after each trade, 1-indexed for chart axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub index: usize,
    pub equity: f64,
    pub date: NaiveDate,
}

/// Negated running drawdown after each trade; always <= 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownPoint {
    pub index: usize,
    pub drawdown: f64,
    pub date: NaiveDate,
}

pub fn equity_curve(sorted_trades: &[&Trade]) -> Vec<EquityPoint> {
    let mut cumulative = 0.0;
    sorted_trades
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            cumulative += trade.pnl;
            EquityPoint {
                index: i + 1,
                equity: cumulative,
                date: trade.date,
            }
        })
        .collect()
}

pub fn drawdown_curve(sorted_trades: &[&Trade]) -> Vec<DrawdownPoint> {
    let mut peak = 0.0_f64;
    let mut cumulative = 0.0_f64;
    sorted_trades
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            cumulative += trade.pnl;
            if cumulative > peak {
                peak = cumulative;
            }
            DrawdownPoint {
                index: i + 1,
                drawdown: -(peak - cumulative),
                date: trade.date,
            }
        })
        .collect()
}
