use clap::Args;
use serde_json::Value;

use lending_core::portfolio::{analyze_portfolio, LoanPosition};

use crate::input;

/// Arguments for loan-book statistics
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON or YAML file with an array of loan positions
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loans: Vec<LoanPosition> = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file is required for portfolio analysis".into());
    };

    let summary =
        analyze_portfolio(&loans).ok_or("no loan positions in input; nothing to summarize")?;
    Ok(serde_json::to_value(summary)?)
}
