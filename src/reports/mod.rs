//! Reports module for the expense ledger
//!
//! The aggregation engine: time window resolution, filtering, the spending
//! summary, the monthly trend and the combined view model. All of it is pure
//! and takes "now" as an argument.

pub mod filter;
pub mod summary;
pub mod trend;
pub mod view;
pub mod window;

pub use filter::{filter_and_sort, filter_in_window};
pub use summary::{category_breakdown, daily_average, summarize, top_category, CategoryTotal, Summary};
pub use trend::{month_label, monthly_trend, MonthKey, MonthlyBucket, MonthlyTrend, TREND_MONTHS};
pub use view::DerivedView;
pub use window::{resolve_window, TimeWindow};
