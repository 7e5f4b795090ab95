//! Reporting engine
//!
//! Pure computations over transaction and budget snapshots: totals and
//! category breakdowns, the monthly trend, budget insights and the summary
//! dashboard. Nothing in here performs I/O except writing an export to a
//! caller-supplied writer.

pub mod aggregation;
pub mod dashboard;
pub mod insights;
pub mod trend;

pub use aggregation::{
    balance, category_breakdown, category_sums, total, BreakdownReport, CategoryTotal,
    DISPLAY_BREAKDOWN_LIMIT,
};
pub use dashboard::{DashboardPeriod, DashboardSummary};
pub use insights::{BudgetInsight, BudgetInsightReport, InsightStatus};
pub use trend::{
    bucket_by_month, bucket_recent_months, MonthBucket, MonthlyTrendReport, TREND_WINDOW,
};
