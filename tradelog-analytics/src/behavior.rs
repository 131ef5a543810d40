//! Behavioral series — how performance conditions on recent history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tradelog_core::domain::Trade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StreakKind {
    AfterWins,
    AfterLosses,
}

/// Average performance of trades taken right after an N-long win or
/// loss streak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakBucket {
    /// Display label, e.g. `"After 2 Wins"`. Length 4 is labeled
    /// `"4+"` but the scan checks exactly four trades back.
    pub name: String,
    pub kind: StreakKind,
    pub streak_len: usize,
    pub avg_pnl: f64,
    pub trades: usize,
}

/// Streak-conditioned performance over the chronologically sorted
/// sequence.
///
/// For each N in 1..=4, a trade at index i contributes to "after N
/// wins" when the previous N trades all have positive pnl, and to
/// "after N losses" when all are negative (a break-even trade breaks
/// both streaks). Contributions for different N overlap on purpose: a
/// trade after three straight wins also counts after one and two.
/// Empty buckets are omitted; order is wins-then-losses per length.
pub fn streak_performance(sorted_trades: &[&Trade]) -> Vec<StreakBucket> {
    let mut buckets = Vec::new();

    for streak_len in 1..=4usize {
        let mut after_wins: Vec<f64> = Vec::new();
        let mut after_losses: Vec<f64> = Vec::new();

        for i in streak_len..sorted_trades.len() {
            let window = &sorted_trades[i - streak_len..i];
            if window.iter().all(|t| t.is_winner()) {
                after_wins.push(sorted_trades[i].pnl);
            }
            if window.iter().all(|t| t.pnl < 0.0) {
                after_losses.push(sorted_trades[i].pnl);
            }
        }

        let win_label = streak_label(streak_len, "Win", "Wins");
        let loss_label = streak_label(streak_len, "Loss", "Losses");

        if !after_wins.is_empty() {
            buckets.push(StreakBucket {
                name: format!("After {win_label}"),
                kind: StreakKind::AfterWins,
                streak_len,
                avg_pnl: crate::stats::mean(&after_wins),
                trades: after_wins.len(),
            });
        }
        if !after_losses.is_empty() {
            buckets.push(StreakBucket {
                name: format!("After {loss_label}"),
                kind: StreakKind::AfterLosses,
                streak_len,
                avg_pnl: crate::stats::mean(&after_losses),
                trades: after_losses.len(),
            });
        }
    }

    buckets
}

fn streak_label(len: usize, singular: &str, plural: &str) -> String {
    match len {
        1 => format!("1 {singular}"),
        4 => format!("4+ {plural}"),
        n => format!("{n} {plural}"),
    }
}

/// First chronological trade of each day vs everything after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstTradeBucket {
    pub name: String,
    pub avg_pnl: f64,
    pub trades: usize,
    pub win_rate: f64,
}

/// Always two rows ("First Trade of Day", "Subsequent Trades"),
/// zeroed when the input is empty.
pub fn first_trade_split(sorted_trades: &[&Trade]) -> Vec<FirstTradeBucket> {
    let mut by_day: BTreeMap<chrono::NaiveDate, Vec<f64>> = BTreeMap::new();
    for trade in sorted_trades {
        by_day.entry(trade.date).or_default().push(trade.pnl);
    }

    let mut first: Vec<f64> = Vec::new();
    let mut subsequent: Vec<f64> = Vec::new();
    for pnls in by_day.values() {
        if let Some((head, rest)) = pnls.split_first() {
            first.push(*head);
            subsequent.extend_from_slice(rest);
        }
    }

    let bucket = |name: &str, pnls: &[f64]| FirstTradeBucket {
        name: name.to_owned(),
        avg_pnl: crate::stats::mean(pnls),
        trades: pnls.len(),
        win_rate: if pnls.is_empty() {
            0.0
        } else {
            pnls.iter().filter(|p| **p > 0.0).count() as f64 / pnls.len() as f64 * 100.0
        },
    };

    vec![
        bucket("First Trade of Day", &first),
        bucket("Subsequent Trades", &subsequent),
    ]
}
