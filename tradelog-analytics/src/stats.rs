//! Summary statistics — pure functions that compute journal metrics.
//!
//! Every metric is a pure function: trade slice in, scalar out. Empty
//! inputs yield 0, never NaN or infinity.

use serde::{Deserialize, Serialize};
use tradelog_core::domain::Trade;

/// Aggregate statistics for a filtered trade set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_pnl: f64,
    /// Percentage of trades with positive pnl, 0..=100.
    pub win_rate: f64,
    pub avg_risk_reward: f64,
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub break_even_trades: usize,
    /// Mean pnl over winners; 0 with no winners.
    pub avg_win: f64,
    /// Mean pnl over losers, kept negative; 0 with no losers.
    pub avg_loss: f64,
    pub largest_win: f64,
    /// Most negative losing pnl; 0 with no losers.
    pub largest_loss: f64,
    /// Gross profit / |gross loss|; 0 when losses sum to 0.
    pub profit_factor: f64,
    /// Peak-to-trough drop of the cumulative pnl walk, >= 0.
    pub max_drawdown: f64,
}

impl SummaryStats {
    /// Compute all metrics. `trades` must already be chronologically
    /// sorted — max drawdown is path-dependent.
    pub fn compute(trades: &[&Trade]) -> Self {
        let total = trades.len();
        let winners: Vec<f64> = trades.iter().filter(|t| t.is_winner()).map(|t| t.pnl).collect();
        let losers: Vec<f64> = trades.iter().filter(|t| t.pnl < 0.0).map(|t| t.pnl).collect();
        let break_even = total - winners.len() - losers.len();

        Self {
            total_pnl: trades.iter().map(|t| t.pnl).sum(),
            win_rate: win_rate(trades),
            avg_risk_reward: mean(&trades.iter().map(|t| t.risk_reward).collect::<Vec<_>>()),
            total_trades: total,
            winning_trades: winners.len(),
            losing_trades: losers.len(),
            break_even_trades: break_even,
            avg_win: mean(&winners),
            avg_loss: mean(&losers),
            largest_win: winners.iter().cloned().fold(0.0, f64::max),
            largest_loss: losers.iter().cloned().fold(0.0, f64::min),
            profit_factor: profit_factor(trades),
            max_drawdown: max_drawdown(trades),
        }
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// Win rate as a percentage. 0 for an empty set.
pub fn win_rate(trades: &[&Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let winners = trades.iter().filter(|t| t.is_winner()).count();
    winners as f64 / trades.len() as f64 * 100.0
}

/// Gross profit over absolute gross loss.
///
/// 0 when there are no losses — the ratio must not propagate infinity
/// into serialized output.
pub fn profit_factor(trades: &[&Trade]) -> f64 {
    let gross_profit: f64 = trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).sum();
    let gross_loss: f64 = trades
        .iter()
        .filter(|t| t.pnl < 0.0)
        .map(|t| t.pnl.abs())
        .sum();
    if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else {
        0.0
    }
}

/// Maximum drawdown of the cumulative pnl walk, as a positive amount.
///
/// Single left-to-right scan over the chronologically sorted sequence:
/// running peak starts at 0, drawdown at each step is peak minus
/// cumulative. The result is path-dependent — the same trades in a
/// different order give a different drawdown.
pub fn max_drawdown(sorted_trades: &[&Trade]) -> f64 {
    let mut peak = 0.0_f64;
    let mut cumulative = 0.0_f64;
    let mut max_dd = 0.0_f64;

    for trade in sorted_trades {
        cumulative += trade.pnl;
        if cumulative > peak {
            peak = cumulative;
        }
        let dd = peak - cumulative;
        if dd > max_dd {
            max_dd = dd;
        }
    }
    max_dd
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
