use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendscope::cli::{
    handle_budget_command, handle_category_command, handle_report_command,
    handle_transaction_command,
};
use spendscope::config::{paths::SpendscopePaths, settings::Settings};
use spendscope::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendscope",
    version,
    about = "Personal finance tracking with budget insights",
    long_about = "spendscope records income and expenses against a fixed set of \
                  categories, keeps monthly per-category budgets, and reports \
                  category breakdowns, a monthly trend and budget-versus-actual \
                  insights from the command line."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(spendscope::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(spendscope::cli::BudgetCommands),

    /// Category registry commands
    #[command(subcommand)]
    Category(spendscope::cli::CategoryCommands),

    /// Summary, breakdown, trend and insight reports
    #[command(subcommand)]
    Report(spendscope::cli::ReportCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = SpendscopePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing spendscope at: {}", paths.base_dir().display());
            spendscope::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'spendscope category list' to see the available categories.");
        }
        Some(Commands::Config) => {
            println!("spendscope Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Breakdown limit:  {}", settings.breakdown_limit);
            println!("  Dashboard top N:  {}", settings.dashboard_top);
            println!("  Recent count:     {}", settings.recent_count);
            println!("  Trend months:     {}", settings.trend_months);
            println!("  Date format:      {}", settings.date_format);
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("spendscope - personal finance tracking with budget insights");
            println!();
            println!("Run 'spendscope --help' for usage information.");
        }
    }

    Ok(())
}
