//! The full analytics report: filter once, sort once, derive every
//! series from that single chronological sequence.

use crate::behavior::{self, FirstTradeBucket, StreakBucket};
use crate::breakdowns::{
    self, DayOfWeekBucket, HourBucket, RrBucket, SessionBucket, SideBucket, StrategyBucket,
    SymbolBucket,
};
use crate::curves::{self, DrawdownPoint, EquityPoint};
use crate::stats::SummaryStats;
use serde::{Deserialize, Serialize};
use tradelog_core::domain::{DailyPnL, SessionTable};
use tradelog_core::filter::{filter_trades, sort_chronological, FilterCriteria};

/// Everything the dashboard renders for one filter selection.
///
/// Deterministic: identical `(days, criteria, sessions)` inputs
/// produce identical reports, byte for byte once serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub stats: SummaryStats,
    pub strategy: Vec<StrategyBucket>,
    pub hourly: Vec<HourBucket>,
    pub day_of_week: Vec<DayOfWeekBucket>,
    pub symbols: Vec<SymbolBucket>,
    pub sessions: Vec<SessionBucket>,
    pub sides: Vec<SideBucket>,
    pub risk_reward: Vec<RrBucket>,
    pub streaks: Vec<StreakBucket>,
    pub first_trade: Vec<FirstTradeBucket>,
    pub equity_curve: Vec<EquityPoint>,
    pub drawdown_curve: Vec<DrawdownPoint>,
}

impl AnalyticsReport {
    /// Run the whole pipeline. The input is borrowed read-only; every
    /// series in the output is freshly allocated.
    pub fn compute(
        days: &[DailyPnL],
        criteria: &FilterCriteria,
        sessions: &SessionTable,
    ) -> Self {
        let mut trades = filter_trades(days, criteria, sessions);
        sort_chronological(&mut trades);

        Self {
            stats: SummaryStats::compute(&trades),
            strategy: breakdowns::by_strategy(&trades),
            hourly: breakdowns::by_hour(&trades),
            day_of_week: breakdowns::by_day_of_week(&trades),
            symbols: breakdowns::by_symbol(&trades),
            sessions: breakdowns::by_session(&trades, sessions),
            sides: breakdowns::by_side(&trades),
            risk_reward: breakdowns::by_risk_reward(&trades),
            streaks: behavior::streak_performance(&trades),
            first_trade: behavior::first_trade_split(&trades),
            equity_curve: curves::equity_curve(&trades),
            drawdown_curve: curves::drawdown_curve(&trades),
        }
    }
}
