//! Book-level statistics over originated loans.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// One loan as seen by the portfolio view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPosition {
    pub principal: Money,
    pub outstanding_balance: Money,
}

/// Aggregate figures over a loan book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub loan_count: u32,
    pub total_outstanding: Money,
    pub average_principal: Money,
    /// Sample standard deviation of principals; zero with fewer than 2 loans
    pub principal_std_dev: Decimal,
}

/// Summarize a loan book. Returns `None` for an empty book.
pub fn analyze_portfolio(loans: &[LoanPosition]) -> Option<PortfolioSummary> {
    if loans.is_empty() {
        return None;
    }

    let n_dec = Decimal::from(loans.len() as u64);
    let total_outstanding: Money = loans.iter().map(|l| l.outstanding_balance).sum();
    let mean: Decimal = loans.iter().map(|l| l.principal).sum::<Decimal>() / n_dec;

    let principal_std_dev = if loans.len() < 2 {
        Decimal::ZERO
    } else {
        let sum_sq: Decimal = loans
            .iter()
            .map(|l| (l.principal - mean) * (l.principal - mean))
            .sum();
        let variance = sum_sq / (n_dec - Decimal::ONE);
        variance.sqrt().unwrap_or(Decimal::ZERO)
    };

    Some(PortfolioSummary {
        loan_count: loans.len() as u32,
        total_outstanding,
        average_principal: mean,
        principal_std_dev,
    })
}
