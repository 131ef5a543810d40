//! Tradelog Core — journal domain types, sessions, and the filter pipeline.
//!
//! This crate contains everything upstream of the analytics layer:
//! - Domain types (trades, daily P&L aggregates, session windows)
//! - Filter criteria and the day/trade filtering pipeline
//! - Date-range presets resolved against an explicit reference date
//! - Journal JSON loading with invariant normalization

pub mod domain;
pub mod filter;
pub mod loader;
