//! Tradelog Analytics — pure derived statistics over a filtered journal.
//!
//! Every function here is a pure transformation: journal + filter
//! criteria + session table in, plain serializable data out. No I/O,
//! no clock reads, no mutation of input; empty inputs degrade to
//! zeros, never to NaN, infinity, or a panic.

pub mod behavior;
pub mod breakdowns;
pub mod curves;
pub mod report;
pub mod stats;

pub use behavior::{FirstTradeBucket, StreakBucket, StreakKind};
pub use breakdowns::{
    DayOfWeekBucket, HourBucket, RrBucket, SessionBucket, SideBucket, StrategyBucket, SymbolBucket,
};
pub use curves::{DrawdownPoint, EquityPoint};
pub use report::AnalyticsReport;
pub use stats::SummaryStats;
