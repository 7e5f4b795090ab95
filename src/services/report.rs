//! Report service
//!
//! Pulls a consistent snapshot from a [`RecordSource`] and hands it to the
//! pure reporting engine.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SpendscopeResult;
use crate::models::{MonthKey, TransactionType};
use crate::reports::{
    BreakdownReport, BudgetInsightReport, DashboardPeriod, DashboardSummary, MonthlyTrendReport,
};
use crate::storage::RecordSource;

/// Service producing reports from any record source
pub struct ReportService<'a, S: RecordSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: RecordSource + ?Sized> ReportService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Headline totals, top categories and recent activity
    pub fn summary(
        &self,
        period: DashboardPeriod,
        today: NaiveDate,
        top_n: usize,
        recent_n: usize,
    ) -> SpendscopeResult<DashboardSummary> {
        let transactions = self.source.fetch_transactions()?;
        Ok(DashboardSummary::generate(
            &transactions,
            period,
            today,
            top_n,
            recent_n,
        ))
    }

    /// Per-category breakdown of one transaction type over a period
    pub fn breakdown(
        &self,
        kind: TransactionType,
        period: DashboardPeriod,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> SpendscopeResult<BreakdownReport> {
        let transactions = self.source.fetch_transactions()?;
        let in_period: Vec<_> = period
            .filter(&transactions, today)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            fetched = transactions.len(),
            in_period = in_period.len(),
            %period,
            "breakdown snapshot"
        );

        Ok(BreakdownReport::generate(
            &in_period,
            kind,
            limit,
            period.label(),
        ))
    }

    /// Income and expense per month for the most recent `window` months
    pub fn trend(&self, window: usize) -> SpendscopeResult<MonthlyTrendReport> {
        let transactions = self.source.fetch_transactions()?;
        Ok(MonthlyTrendReport::generate(&transactions, window))
    }

    /// Budget versus actual spending for one month
    pub fn insights(&self, month: MonthKey) -> SpendscopeResult<BudgetInsightReport> {
        let transactions = self.source.fetch_transactions()?;
        let budgets = self.source.fetch_budgets(Some(month))?;
        Ok(BudgetInsightReport::evaluate(month, &budgets, &transactions))
    }
}
