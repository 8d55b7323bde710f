use crate::core::forecast::MAX_HORIZON_DAYS;
use crate::export::{ExportFormat, ExportTarget};
use clap::{ArgAction, Parser, Subcommand, value_parser};

/// Command-line interface definition for rTimecast
/// CLI application to forecast working hours from a time log
#[derive(Parser)]
#[command(
    name = "rtimecast",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time forecasting CLI: predict working hours, breaks and departure times from your time log",
    long_about = None
)]
pub struct Cli {
    /// Override the entries file (JSON array of time entries)
    #[arg(global = true, long = "entries", value_name = "FILE")]
    pub entries: Option<String>,

    /// Override the configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty entries file
    Init,

    /// Inspect or upgrade the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Show yesterday, today and tomorrow (actual or predicted)
    Predict {
        #[arg(long = "json", help = "Print the predictions as JSON")]
        json: bool,
    },

    /// Show the last days of history followed by the forecast
    Forecast {
        /// Number of days to forecast after today
        #[arg(
            long = "days",
            short = 'd',
            value_name = "N",
            value_parser = value_parser!(u32).range(..=MAX_HORIZON_DAYS as i64)
        )]
        days: Option<u32>,

        #[arg(long = "json", help = "Print the series as JSON")]
        json: bool,

        #[arg(long = "forecast-only", help = "Hide historical points")]
        forecast_only: bool,
    },

    /// Weekly analytics
    Summary {
        /// Week offset relative to the current week (0 = this week, -1 = last week)
        #[arg(long = "week", short = 'w', default_value_t = 0, allow_negative_numbers = true)]
        week: i64,

        /// Also show the totals of the last N weeks
        #[arg(long = "weeks", value_name = "N", value_parser = value_parser!(u32).range(..=520))]
        weeks: Option<u32>,

        /// Show the four-week block `OFFSET` blocks from the current one (0 = current)
        #[arg(long = "month", short = 'm', value_name = "OFFSET", allow_negative_numbers = true)]
        month: Option<i64>,
    },

    /// Export entries, predictions or the forecast series
    Export {
        #[arg(long, value_enum, default_value = "forecast")]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Number of days to forecast after today
        #[arg(
            long = "days",
            short = 'd',
            value_name = "N",
            value_parser = value_parser!(u32).range(..=MAX_HORIZON_DAYS as i64)
        )]
        days: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
