use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::schedule::{build_schedule, LoanRequest, Method, PaymentFrequency, RateBasis};

use crate::input;

/// Arguments for schedule building
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount lent
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Rate as a percentage (10 means 10%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Basis of the rate: per-period (monthly) or annual
    #[arg(long, default_value = "period")]
    pub rate_basis: RateBasisArg,

    /// Installment cadence: daily, weekly, biweekly, monthly
    #[arg(long)]
    pub frequency: Option<PaymentFrequency>,

    /// Number of installments
    #[arg(long)]
    pub installments: Option<u32>,

    /// First-installment anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Amortization method; anything but the alternates resolves to flat
    #[arg(long)]
    pub method: Option<MethodArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RateBasisArg {
    Period,
    Annual,
}

impl From<RateBasisArg> for RateBasis {
    fn from(value: RateBasisArg) -> Self {
        match value {
            RateBasisArg::Period => RateBasis::Period,
            RateBasisArg::Annual => RateBasis::Annual,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    FlatMonthly,
    Annuity,
    Simple,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::FlatMonthly => Method::FlatMonthly,
            MethodArg::Annuity => Method::Annuity,
            MethodArg::Simple => Method::Simple,
        }
    }
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanRequest {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            rate_percent: args
                .rate
                .ok_or("--rate is required (or provide --input)")?,
            rate_basis: args.rate_basis.into(),
            frequency: args
                .frequency
                .ok_or("--frequency is required (or provide --input)")?,
            installments: args
                .installments
                .ok_or("--installments is required (or provide --input)")?,
            start_date: args.start_date,
            method: args.method.map(Into::into),
        }
    };

    let schedule = build_schedule(&request)?;
    Ok(serde_json::to_value(schedule)?)
}
