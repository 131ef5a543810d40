//! End-to-end scenarios: journal JSON in, full report out.

use anyhow::Result;
use chrono::NaiveDate;
use tradelog_analytics::{AnalyticsReport, StreakKind};
use tradelog_core::domain::{DailyPnL, SessionTable, Trade, TradeSide};
use tradelog_core::filter::{DateRange, FilterCriteria, OutcomeFilter, RangePreset};
use tradelog_core::loader::journal_from_json;

fn trade(id: &str, date: (i32, u32, u32), time: &str, pnl: f64) -> Trade {
    Trade {
        id: id.into(),
        symbol: "NQ".into(),
        side: TradeSide::Long,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: time.into(),
        entry_price: 18000.0,
        exit_price: 18000.0 + pnl,
        quantity: 1.0,
        pnl,
        risk_reward: 1.5,
        tags: vec!["breakout".into()],
        notes: None,
        account: Some("main".into()),
        duration: Some(10),
    }
}

fn day(date: (i32, u32, u32), trades: Vec<Trade>) -> DailyPnL {
    DailyPnL::new(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(), trades)
}

#[test]
fn known_mix_statistics() {
    // [100, -50, 0] -> total 50, win rate 33.33%, one break-even,
    // profit factor 2.0.
    let days = vec![day(
        (2024, 3, 4),
        vec![
            trade("a", (2024, 3, 4), "09:30", 100.0),
            trade("b", (2024, 3, 4), "10:30", -50.0),
            trade("c", (2024, 3, 4), "11:30", 0.0),
        ],
    )];
    let report = AnalyticsReport::compute(&days, &FilterCriteria::all(), &SessionTable::default());
    assert!((report.stats.total_pnl - 50.0).abs() < 1e-10);
    assert!((report.stats.win_rate - 100.0 / 3.0).abs() < 1e-10);
    assert_eq!(report.stats.break_even_trades, 1);
    assert!((report.stats.profit_factor - 2.0).abs() < 1e-10);
}

#[test]
fn drawdown_depends_on_path_not_distribution() {
    let forward = vec![day(
        (2024, 3, 4),
        vec![
            trade("a", (2024, 3, 4), "09:00", 100.0),
            trade("b", (2024, 3, 4), "10:00", -50.0),
            trade("c", (2024, 3, 4), "11:00", 100.0),
            trade("d", (2024, 3, 4), "12:00", -200.0),
        ],
    )];
    // Same trades, losses front-loaded: walk 100, 50, -150, -50 has
    // its trough 250 below the early peak of 100.
    let shuffled = vec![day(
        (2024, 3, 4),
        vec![
            trade("a", (2024, 3, 4), "09:00", 100.0),
            trade("b", (2024, 3, 4), "10:00", -50.0),
            trade("d", (2024, 3, 4), "11:00", -200.0),
            trade("c", (2024, 3, 4), "12:00", 100.0),
        ],
    )];
    let sessions = SessionTable::default();
    let a = AnalyticsReport::compute(&forward, &FilterCriteria::all(), &sessions);
    let b = AnalyticsReport::compute(&shuffled, &FilterCriteria::all(), &sessions);
    // Same totals, different walks.
    assert!((a.stats.total_pnl - b.stats.total_pnl).abs() < 1e-10);
    assert!((a.stats.max_drawdown - 200.0).abs() < 1e-10);
    assert!((b.stats.max_drawdown - 250.0).abs() < 1e-10);
}

#[test]
fn session_filter_wraps_midnight() {
    let days = vec![day(
        (2024, 3, 4),
        vec![
            trade("night", (2024, 3, 4), "01:00", 80.0),
            trade("morning", (2024, 3, 4), "09:30", -30.0),
        ],
    )];
    let sessions = SessionTable::default();

    let asia = FilterCriteria::all().with_session("asia");
    let report = AnalyticsReport::compute(&days, &asia, &sessions);
    assert_eq!(report.stats.total_trades, 1);
    assert!((report.stats.total_pnl - 80.0).abs() < 1e-10);

    let ny = FilterCriteria::all().with_session("ny");
    let report = AnalyticsReport::compute(&days, &ny, &sessions);
    assert_eq!(report.stats.total_trades, 1);
    assert!((report.stats.total_pnl - (-30.0)).abs() < 1e-10);
}

#[test]
fn unknown_session_key_degrades_to_all() {
    let days = vec![day(
        (2024, 3, 4),
        vec![trade("a", (2024, 3, 4), "09:30", 10.0)],
    )];
    let c = FilterCriteria::all().with_session("zurich");
    let report = AnalyticsReport::compute(&days, &c, &SessionTable::default());
    assert_eq!(report.stats.total_trades, 1);
}

#[test]
fn streak_scenario_average() {
    // pnl sequence [+10, +20, +30, -5]: "after 2 wins" holds the +30
    // and the -5, averaging 12.5.
    let days = vec![day(
        (2024, 3, 4),
        vec![
            trade("a", (2024, 3, 4), "09:00", 10.0),
            trade("b", (2024, 3, 4), "10:00", 20.0),
            trade("c", (2024, 3, 4), "11:00", 30.0),
            trade("d", (2024, 3, 4), "12:00", -5.0),
        ],
    )];
    let report = AnalyticsReport::compute(&days, &FilterCriteria::all(), &SessionTable::default());
    let after_two = report
        .streaks
        .iter()
        .find(|b| b.kind == StreakKind::AfterWins && b.streak_len == 2)
        .expect("after-2-wins bucket");
    assert_eq!(after_two.trades, 2);
    assert!((after_two.avg_pnl - 12.5).abs() < 1e-10);
}

#[test]
fn empty_filtered_set_yields_zeros_everywhere() {
    let days = vec![day(
        (2024, 3, 4),
        vec![trade("a", (2024, 3, 4), "09:30", 100.0)],
    )];
    // A loss-only filter over a winning journal survives nothing.
    let c = FilterCriteria::all().with_outcome(OutcomeFilter::Loss);
    let report = AnalyticsReport::compute(&days, &c, &SessionTable::default());
    assert_eq!(report.stats.total_trades, 0);
    assert_eq!(report.stats.win_rate, 0.0);
    assert_eq!(report.stats.avg_risk_reward, 0.0);
    assert_eq!(report.stats.profit_factor, 0.0);
    assert_eq!(report.stats.avg_win, 0.0);
    assert_eq!(report.stats.avg_loss, 0.0);
    assert_eq!(report.stats.largest_win, 0.0);
    assert_eq!(report.stats.largest_loss, 0.0);
    assert!(report.strategy.is_empty());
    assert!(report.symbols.is_empty());
    assert!(report.sessions.is_empty());
    assert!(report.streaks.is_empty());
    assert!(report.equity_curve.is_empty());
    // The dense exception: 24 zero rows.
    assert_eq!(report.hourly.len(), 24);
    assert!(report.hourly.iter().all(|h| h.trades == 0));
}

#[test]
fn preset_range_is_reference_date_relative() {
    let days = vec![
        day((2024, 3, 1), vec![trade("old", (2024, 3, 1), "09:30", 500.0)]),
        day((2024, 3, 14), vec![trade("new", (2024, 3, 14), "09:30", -100.0)]),
    ];
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let c = FilterCriteria::all().with_range(RangePreset::Week.resolve(today));
    let report = AnalyticsReport::compute(&days, &c, &SessionTable::default());
    assert_eq!(report.stats.total_trades, 1);
    assert!((report.stats.total_pnl - (-100.0)).abs() < 1e-10);

    // Same inputs, same report — no hidden clock.
    let again = AnalyticsReport::compute(&days, &c, &SessionTable::default());
    assert_eq!(report, again);
}

#[test]
fn journal_json_to_report() -> Result<()> {
    let json = r#"[
        {
            "date": "2024-03-04",
            "pnl": 0.0,
            "trades": [
                {
                    "id": "a", "symbol": "NQ", "side": "long",
                    "date": "2024-03-04", "time": "01:00",
                    "entryPrice": 18000.0, "exitPrice": 18040.0,
                    "quantity": 1.0, "pnl": 80.0, "riskReward": 2.0,
                    "tags": ["breakout"], "account": "main"
                },
                {
                    "id": "b", "symbol": "ES", "side": "short",
                    "date": "2024-03-04", "time": "09:45",
                    "entryPrice": 5000.0, "exitPrice": 5010.0,
                    "quantity": 1.0, "pnl": -30.0, "riskReward": 0.4,
                    "tags": ["fade"]
                }
            ]
        }
    ]"#;
    let days = journal_from_json(json)?;
    assert!((days[0].pnl - 50.0).abs() < 1e-10);

    let report = AnalyticsReport::compute(&days, &FilterCriteria::all(), &SessionTable::default());
    assert_eq!(report.stats.total_trades, 2);
    assert_eq!(report.symbols.len(), 2);
    assert_eq!(report.sessions.len(), 2); // Asia and London
    assert_eq!(report.sides[0].trades, 1);
    assert_eq!(report.sides[1].trades, 1);
    Ok(())
}

#[test]
fn date_range_bounds_are_inclusive() {
    let days = vec![
        day((2024, 3, 4), vec![trade("a", (2024, 3, 4), "09:30", 10.0)]),
        day((2024, 3, 5), vec![trade("b", (2024, 3, 5), "09:30", 20.0)]),
        day((2024, 3, 6), vec![trade("c", (2024, 3, 6), "09:30", 40.0)]),
    ];
    let c = FilterCriteria::all().with_range(DateRange::new(
        Some(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()),
        Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
    ));
    let report = AnalyticsReport::compute(&days, &c, &SessionTable::default());
    assert_eq!(report.stats.total_trades, 2);
    assert!((report.stats.total_pnl - 30.0).abs() < 1e-10);
}
