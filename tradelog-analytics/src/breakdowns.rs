//! Breakdown series — grouping + per-group aggregates over the
//! filtered trade set.
//!
//! Every series is the same shape: a key function fans each trade out
//! to zero or more group keys, an accumulator folds pnl/count/wins per
//! key, and the fold lands in a `BTreeMap` so iteration order (and
//! therefore serialized output) is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tradelog_core::domain::{SessionTable, Trade, TradeSide};

/// Per-group running aggregate shared by all breakdowns.
#[derive(Debug, Clone, Copy, Default)]
struct Acc {
    pnl: f64,
    trades: usize,
    wins: usize,
}

impl Acc {
    fn add(&mut self, trade: &Trade) {
        self.pnl += trade.pnl;
        self.trades += 1;
        if trade.is_winner() {
            self.wins += 1;
        }
    }

    fn avg_pnl(&self) -> f64 {
        if self.trades == 0 {
            0.0
        } else {
            self.pnl / self.trades as f64
        }
    }

    fn win_rate(&self) -> f64 {
        if self.trades == 0 {
            0.0
        } else {
            self.wins as f64 / self.trades as f64 * 100.0
        }
    }
}

/// Fold trades into per-key accumulators. The key function may emit
/// several keys per trade (multi-membership fan-out, e.g. one per
/// strategy tag) or none (trade skipped for this dimension).
fn group_by<'a, K, I, F>(trades: &[&'a Trade], keys: F) -> BTreeMap<K, Acc>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: Fn(&'a Trade) -> I,
{
    let mut groups: BTreeMap<K, Acc> = BTreeMap::new();
    for trade in trades {
        for key in keys(trade) {
            groups.entry(key).or_default().add(trade);
        }
    }
    groups
}

// ─── Strategy ───────────────────────────────────────────────────────

/// A trade contributes once per tag it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBucket {
    pub name: String,
    pub pnl: f64,
    pub trades: usize,
}

/// Per-tag totals, sorted by pnl descending (tag name breaks ties).
pub fn by_strategy(trades: &[&Trade]) -> Vec<StrategyBucket> {
    let groups = group_by(trades, |t| t.tags.iter().map(String::as_str));
    let mut out: Vec<StrategyBucket> = groups
        .into_iter()
        .map(|(name, acc)| StrategyBucket {
            name: name.to_owned(),
            pnl: acc.pnl,
            trades: acc.trades,
        })
        .collect();
    out.sort_by(|a, b| b.pnl.partial_cmp(&a.pnl).unwrap_or(std::cmp::Ordering::Equal));
    out
}

// ─── Hour of day ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    /// 0..=23.
    pub hour: u32,
    pub pnl: f64,
    pub avg_pnl: f64,
    pub trades: usize,
}

/// Dense 24-entry series; hours without trades stay zeroed. Trades
/// with an unparseable `time` have no hour and are skipped.
pub fn by_hour(trades: &[&Trade]) -> Vec<HourBucket> {
    let groups = group_by(trades, |t| t.hour());
    (0..24)
        .map(|hour| {
            let acc = groups.get(&hour).copied().unwrap_or_default();
            HourBucket {
                hour,
                pnl: acc.pnl,
                avg_pnl: acc.avg_pnl(),
                trades: acc.trades,
            }
        })
        .collect()
}

// ─── Day of week ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOfWeekBucket {
    /// Display name, `"Sunday"`..`"Saturday"`.
    pub day: String,
    pub avg_pnl: f64,
    pub total_pnl: f64,
    pub trades: usize,
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sparse series in Sunday..Saturday order; only days with trades.
pub fn by_day_of_week(trades: &[&Trade]) -> Vec<DayOfWeekBucket> {
    use chrono::Datelike;
    let groups = group_by(trades, |t| {
        Some(t.date.weekday().num_days_from_sunday())
    });
    groups
        .into_iter()
        .map(|(day_index, acc)| DayOfWeekBucket {
            day: DAY_NAMES[day_index as usize].to_owned(),
            avg_pnl: acc.avg_pnl(),
            total_pnl: acc.pnl,
            trades: acc.trades,
        })
        .collect()
}

// ─── Symbol ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolBucket {
    pub symbol: String,
    pub pnl: f64,
    pub trades: usize,
    pub win_rate: f64,
}

/// Per-symbol totals, sorted by pnl descending (symbol breaks ties).
pub fn by_symbol(trades: &[&Trade]) -> Vec<SymbolBucket> {
    let groups = group_by(trades, |t| Some(t.symbol.as_str()));
    let mut out: Vec<SymbolBucket> = groups
        .into_iter()
        .map(|(symbol, acc)| SymbolBucket {
            symbol: symbol.to_owned(),
            pnl: acc.pnl,
            trades: acc.trades,
            win_rate: acc.win_rate(),
        })
        .collect();
    out.sort_by(|a, b| b.pnl.partial_cmp(&a.pnl).unwrap_or(std::cmp::Ordering::Equal));
    out
}

// ─── Session ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBucket {
    /// Session display name, or `"Other"` for trades outside every
    /// window.
    pub session: String,
    pub pnl: f64,
    pub avg_pnl: f64,
    pub trades: usize,
    pub win_rate: f64,
}

/// First-match-wins assignment against the table; output follows table
/// order with `Other` last, observed sessions only.
pub fn by_session(trades: &[&Trade], table: &SessionTable) -> Vec<SessionBucket> {
    // Keyed by table position so the BTreeMap ordering is the table
    // ordering; trades outside every window sort after the table.
    let groups = group_by(trades, |t| {
        let slot = t
            .hour()
            .and_then(|h| table.windows.iter().position(|w| w.contains(h)))
            .unwrap_or(table.windows.len());
        Some(slot)
    });
    groups
        .into_iter()
        .map(|(slot, acc)| SessionBucket {
            session: table
                .windows
                .get(slot)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| "Other".to_owned()),
            pnl: acc.pnl,
            avg_pnl: acc.avg_pnl(),
            trades: acc.trades,
            win_rate: acc.win_rate(),
        })
        .collect()
}

// ─── Side ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideBucket {
    pub direction: String,
    pub pnl: f64,
    pub trades: usize,
    pub win_rate: f64,
    pub avg_pnl: f64,
}

/// Always two rows: Long then Short, zeroed when empty.
pub fn by_side(trades: &[&Trade]) -> Vec<SideBucket> {
    [TradeSide::Long, TradeSide::Short]
        .into_iter()
        .map(|side| {
            let mut acc = Acc::default();
            for trade in trades.iter().filter(|t| t.side == side) {
                acc.add(trade);
            }
            SideBucket {
                direction: match side {
                    TradeSide::Long => "Long".to_owned(),
                    TradeSide::Short => "Short".to_owned(),
                },
                pnl: acc.pnl,
                trades: acc.trades,
                win_rate: acc.win_rate(),
                avg_pnl: acc.avg_pnl(),
            }
        })
        .collect()
}

// ─── Risk:reward distribution ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RrBucket {
    pub range: String,
    pub trades: usize,
    pub avg_pnl: f64,
}

/// Lower bound inclusive, upper exclusive, last bucket unbounded.
const RR_BUCKETS: [(f64, f64, &str); 6] = [
    (0.0, 0.5, "0-0.5"),
    (0.5, 1.0, "0.5-1"),
    (1.0, 1.5, "1-1.5"),
    (1.5, 2.0, "1.5-2"),
    (2.0, 3.0, "2-3"),
    (3.0, f64::INFINITY, "3+"),
];

/// Fixed six-bucket distribution; every row present, zeroed when
/// empty. Each trade lands in exactly one bucket.
pub fn by_risk_reward(trades: &[&Trade]) -> Vec<RrBucket> {
    let groups = group_by(trades, |t| {
        RR_BUCKETS
            .iter()
            .position(|(min, max, _)| t.risk_reward >= *min && t.risk_reward < *max)
    });
    RR_BUCKETS
        .iter()
        .enumerate()
        .map(|(i, (_, _, label))| {
            let acc = groups.get(&i).copied().unwrap_or_default();
            RrBucket {
                range: (*label).to_owned(),
                trades: acc.trades,
                avg_pnl: acc.avg_pnl(),
            }
        })
        .collect()
}
