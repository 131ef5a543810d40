//! FilterCriteria — caller-supplied, transient filter state.

use super::range::DateRange;
use crate::domain::trade::{Outcome, TradeSide};
use serde::{Deserialize, Serialize};

/// Direction filter. Unknown wire values fall back to `All` so a bad
/// key never breaks the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideFilter {
    Long,
    Short,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    All,
}

impl SideFilter {
    pub fn matches(self, side: TradeSide) -> bool {
        match self {
            SideFilter::Long => side == TradeSide::Long,
            SideFilter::Short => side == TradeSide::Short,
            SideFilter::All => true,
        }
    }
}

/// Win/loss/break-even filter. `"be"` is the wire name for break-even;
/// unknown values fall back to `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeFilter {
    Win,
    Loss,
    #[serde(rename = "be")]
    BreakEven,
    #[default]
    #[serde(other)]
    All,
}

impl OutcomeFilter {
    pub fn matches(self, outcome: Outcome) -> bool {
        match self {
            OutcomeFilter::Win => outcome == Outcome::Win,
            OutcomeFilter::Loss => outcome == Outcome::Loss,
            OutcomeFilter::BreakEven => outcome == Outcome::BreakEven,
            OutcomeFilter::All => true,
        }
    }
}

/// The full filter state. `Default` is the no-constraint filter:
/// open date range, every selector on "all".
///
/// String selectors use `None` for "all". A session key that is not in
/// the caller's `SessionTable` also applies no constraint — the
/// pipeline is total and degrades permissively on bad input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub range: DateRange,
    pub strategy: Option<String>,
    pub session: Option<String>,
    pub account: Option<String>,
    pub symbol: Option<String>,
    pub side: SideFilter,
    pub outcome: OutcomeFilter,
}

impl FilterCriteria {
    /// No constraints at all.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_strategy(mut self, tag: &str) -> Self {
        self.strategy = Some(tag.into());
        self
    }

    pub fn with_session(mut self, key: &str) -> Self {
        self.session = Some(key.into());
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_account(mut self, account: &str) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_side(mut self, side: SideFilter) -> Self {
        self.side = side;
        self
    }

    pub fn with_outcome(mut self, outcome: OutcomeFilter) -> Self {
        self.outcome = outcome;
        self
    }
}
