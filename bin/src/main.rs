//! vantage CLI - Build Alpha Vantage requests and parse their responses.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "vantage")]
#[command(about = "Build Alpha Vantage requests and parse their responses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress log output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a saved time series response
    Parse {
        /// JSON file holding the response body
        file: PathBuf,

        /// Decode rows in the adjusted shape
        #[arg(short, long)]
        adjusted: bool,

        /// Endpoint the response came from (e.g., daily-adjusted); sets the row shape
        #[arg(long, conflicts_with = "adjusted")]
        function: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sort points oldest first instead of keeping payload order
        #[arg(long)]
        sort: bool,
    },

    /// Build an indicator request and print its query
    Query {
        /// Indicator function code (e.g., stochrsi, macd)
        indicator: String,

        /// Ticker symbol
        symbol: String,

        /// Sampling interval (1min, 5min, 15min, 30min, 60min, daily, weekly, monthly)
        #[arg(short, long)]
        interval: Option<String>,

        /// Window length
        #[arg(short, long)]
        time_period: Option<u32>,

        /// Price field (open, high, low, close)
        #[arg(short, long)]
        series_type: Option<String>,

        /// Extra parameter as name=value (e.g., fastkperiod=7); repeatable
        #[arg(short, long = "param")]
        params: Vec<String>,
    },

    /// List supported indicators
    Indicators {
        /// Search pattern
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show an indicator's parameters and defaults
    Info {
        /// Indicator function code
        indicator: String,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Parse {
            file,
            adjusted,
            function,
            format,
            output,
            sort,
        } => commands::parse::parse_file(
            &file,
            adjusted,
            function.as_deref(),
            format,
            output.as_deref(),
            sort,
        ),
        Commands::Query {
            indicator,
            symbol,
            interval,
            time_period,
            series_type,
            params,
        } => commands::query::build_query(
            &indicator,
            &symbol,
            interval.as_deref(),
            time_period,
            series_type.as_deref(),
            &params,
        ),
        Commands::Indicators { search } => commands::indicators::list_indicators(search.as_deref()),
        Commands::Info { indicator } => commands::info::show_info(&indicator),
    }
}
