mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::portfolio::PortfolioArgs;
use commands::schedule::ScheduleArgs;

/// Loan amortization schedules with decimal precision
#[derive(Parser)]
#[command(
    name = "lend",
    version,
    about = "Loan amortization schedules with decimal precision",
    long_about = "Builds loan amortization schedules from principal, rate, payment \
                  frequency, and installment count. The default method is the flat \
                  convention (interest computed once over the equivalent-month \
                  horizon); declining-balance annuity and simple-interest alternates \
                  are available behind an explicit flag."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the amortization schedule for a loan
    Schedule(ScheduleArgs),
    /// Summarize a loan book
    Portfolio(PortfolioArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Portfolio(args) => commands::portfolio::run_portfolio(args),
        Commands::Version => {
            println!("lend {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
