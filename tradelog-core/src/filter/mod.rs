//! Filter criteria and the day/trade filtering pipeline.

pub mod criteria;
pub mod pipeline;
pub mod range;

pub use criteria::{FilterCriteria, OutcomeFilter, SideFilter};
pub use pipeline::{filter_trades, pnl_in_range, sort_chronological, FacetValues};
pub use range::{DateRange, RangePreset};
