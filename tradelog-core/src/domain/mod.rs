//! Domain types for the trading journal.

pub mod day;
pub mod session;
pub mod trade;

pub use day::DailyPnL;
pub use session::{SessionTable, SessionWindow};
pub use trade::{Outcome, Trade, TradeSide};

/// Symbol type alias
pub type Symbol = String;
