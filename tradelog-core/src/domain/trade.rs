//! Trade — an executed position close-out as recorded in the journal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Long,
    Short,
}

/// Outcome classification derived from the pnl sign.
///
/// Exactly one of these holds for any trade: `pnl > 0` is a win,
/// `pnl < 0` a loss, `pnl == 0` break-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    BreakEven,
}

/// A single journaled trade.
///
/// Wire schema is camelCase JSON; `date` serializes as ISO `YYYY-MM-DD`
/// (chronological order on `NaiveDate` equals lexicographic order on
/// that format). `time` stays a raw `HH:MM` string — hour extraction is
/// lenient, and malformed values degrade rather than fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    // ── Identification ──
    pub id: String,
    pub symbol: String,
    pub side: TradeSide,

    // ── When ──
    pub date: NaiveDate,
    /// Exchange-local time of day, `HH:MM`.
    pub time: String,

    // ── Execution ──
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: f64,

    // ── Result ──
    pub pnl: f64,
    /// Realized reward/risk ratio, non-negative.
    pub risk_reward: f64,

    // ── Annotations ──
    /// Strategy labels. Order is irrelevant for aggregation but
    /// preserved for display.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Minutes between entry and exit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Trade {
    pub fn outcome(&self) -> Outcome {
        if self.pnl > 0.0 {
            Outcome::Win
        } else if self.pnl < 0.0 {
            Outcome::Loss
        } else {
            Outcome::BreakEven
        }
    }

    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }

    /// Hour-of-day component of `time`, if it parses as `HH:MM`-ish.
    ///
    /// Lenient: anything before the first `:` is tried as an hour.
    /// Returns `None` for malformed input or hours outside 0..=23.
    pub fn hour(&self) -> Option<u32> {
        let head = self.time.split(':').next()?;
        match head.trim().parse::<u32>() {
            Ok(h) if h < 24 => Some(h),
            _ => None,
        }
    }

    /// Composite chronological sort key.
    ///
    /// `time` is compared as a string; for zero-padded `HH:MM` that is
    /// chronological. Equal keys must keep their input order (callers
    /// use a stable sort).
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, self.time.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            id: "t-1".into(),
            symbol: "NQ".into(),
            side: TradeSide::Long,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            time: "09:45".into(),
            entry_price: 18000.0,
            exit_price: 18025.0,
            quantity: 2.0,
            pnl: 1000.0,
            risk_reward: 2.5,
            tags: vec!["breakout".into(), "a-plus".into()],
            notes: Some("clean open drive".into()),
            account: Some("apex-1".into()),
            duration: Some(12),
        }
    }

    #[test]
    fn outcome_by_pnl_sign() {
        let mut t = sample_trade();
        assert_eq!(t.outcome(), Outcome::Win);
        assert!(t.is_winner());
        t.pnl = -50.0;
        assert_eq!(t.outcome(), Outcome::Loss);
        assert!(!t.is_winner());
        t.pnl = 0.0;
        assert_eq!(t.outcome(), Outcome::BreakEven);
        assert!(!t.is_winner());
    }

    #[test]
    fn hour_extraction() {
        let mut t = sample_trade();
        assert_eq!(t.hour(), Some(9));
        t.time = "23:59".into();
        assert_eq!(t.hour(), Some(23));
        t.time = "7".into();
        assert_eq!(t.hour(), Some(7));
    }

    #[test]
    fn hour_extraction_malformed() {
        let mut t = sample_trade();
        t.time = "noonish".into();
        assert_eq!(t.hour(), None);
        t.time = "25:00".into();
        assert_eq!(t.hour(), None);
        t.time = String::new();
        assert_eq!(t.hour(), None);
    }

    #[test]
    fn serde_camel_case_roundtrip() {
        let t = sample_trade();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"entryPrice\""));
        assert!(json.contains("\"riskReward\""));
        assert!(json.contains("\"date\":\"2024-03-05\""));
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn serde_optional_fields_default() {
        let json = r#"{
            "id": "x", "symbol": "ES", "side": "short",
            "date": "2024-01-02", "time": "10:00",
            "entryPrice": 4800.0, "exitPrice": 4795.0, "quantity": 1.0,
            "pnl": -250.0, "riskReward": 0.5
        }"#;
        let t: Trade = serde_json::from_str(json).unwrap();
        assert!(t.tags.is_empty());
        assert_eq!(t.account, None);
        assert_eq!(t.duration, None);
        assert_eq!(t.side, TradeSide::Short);
    }

    #[test]
    fn sort_key_orders_by_date_then_time() {
        let a = sample_trade();
        let mut b = sample_trade();
        b.time = "10:00".into();
        assert!(a.sort_key() < b.sort_key());
        let mut c = sample_trade();
        c.date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        c.time = "16:00".into();
        assert!(c.sort_key() < a.sort_key());
    }
}
