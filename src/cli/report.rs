//! CLI commands for reports
//!
//! Summary, category breakdown, monthly trend and budget insights, printed to
//! the terminal or exported to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::OutputStyle;
use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::MonthKey;
use crate::reports::DashboardPeriod;
use crate::services::ReportService;
use crate::storage::Storage;

use super::transaction::{parse_kind, parse_month};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals, balance, top categories and recent transactions
    #[command(alias = "dashboard")]
    Summary {
        /// Period: week, month, year or all
        #[arg(short, long, default_value = "all")]
        period: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per category for one transaction type
    Breakdown {
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,

        /// Period: week, month, year or all
        #[arg(short, long, default_value = "all")]
        period: String,

        /// Show top N categories only (defaults to the configured limit)
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expenses for the most recent months
    Trend {
        /// Number of months to show (defaults to the configured window)
        #[arg(short, long)]
        months: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget versus actual spending for a month
    Insights {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendscopeResult<()> {
    let service = ReportService::new(storage);
    let today = chrono::Local::now().date_naive();
    let style = OutputStyle::from(settings);

    match cmd {
        ReportCommands::Summary { period, output } => {
            let period: DashboardPeriod = period.parse()?;
            let summary =
                service.summary(period, today, settings.dashboard_top, settings.recent_count)?;

            match output {
                Some(path) => {
                    summary.export_csv(create_output(&path)?)?;
                    println!("Summary exported to: {}", path.display());
                }
                None => println!("{}", summary.format_terminal(&style)),
            }
        }

        ReportCommands::Breakdown {
            kind,
            period,
            top,
            output,
        } => {
            let kind = parse_kind(&kind)?;
            let period: DashboardPeriod = period.parse()?;
            let limit = top.unwrap_or(settings.breakdown_limit);
            let report = service.breakdown(kind, period, today, Some(limit))?;

            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Breakdown exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(&style)),
            }
        }

        ReportCommands::Trend { months, output } => {
            let report = service.trend(months.unwrap_or(settings.trend_months))?;

            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Trend exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(&style)),
            }
        }

        ReportCommands::Insights { month, output } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => MonthKey::current(),
            };
            let report = service.insights(month)?;

            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Insights exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(&style)),
            }
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> SpendscopeResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SpendscopeError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
