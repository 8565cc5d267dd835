//! Loan amortization schedules.
//!
//! The primary method is a flat convention: total interest is computed once
//! over the loan's equivalent-month horizon and divided evenly across
//! installments, so every installment carries the same payment and the same
//! principal/interest split. Two textbook alternates (declining-balance
//! annuity and simple interest) are kept for compatibility and must be
//! selected explicitly; everything else resolves to the flat method.

mod annuity;
mod dates;
mod flat;
mod rates;
mod simple;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LendingError;
use crate::types::{Money, Rate};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How often installments fall due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentFrequency {
    /// Month-equivalence factor for the flat method: how many months one
    /// installment period counts for. 30-day months; 13 weeks = 3 months.
    pub fn month_factor(&self) -> Decimal {
        match self {
            PaymentFrequency::Daily => Decimal::ONE / dec!(30),
            PaymentFrequency::Weekly => dec!(3) / dec!(13),
            PaymentFrequency::Biweekly => Decimal::ONE / dec!(2),
            PaymentFrequency::Monthly => Decimal::ONE,
        }
    }

    /// Periods per year, used only when the alternate methods convert an
    /// annual rate. Note this table (360/52/26/12) does not agree with
    /// `month_factor` (30-day months, 13 weeks = 3 months); the two
    /// conventions are inherited per method and intentionally not unified.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Daily => 360,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Biweekly => 26,
            PaymentFrequency::Monthly => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Daily => "daily",
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = LendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(PaymentFrequency::Daily),
            "weekly" => Ok(PaymentFrequency::Weekly),
            "biweekly" => Ok(PaymentFrequency::Biweekly),
            "monthly" => Ok(PaymentFrequency::Monthly),
            other => Err(LendingError::InvalidInput {
                field: "frequency".into(),
                reason: format!(
                    "'{other}' is not one of daily, weekly, biweekly, monthly"
                ),
            }),
        }
    }
}

/// Whether the supplied rate is already per the computation's internal
/// period or an annual figure to be converted via compounding.
///
/// For the flat method, `Period` always means monthly regardless of the
/// stated payment frequency. This is a domain convention, not a unit
/// conversion; do not generalize it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    #[default]
    Period,
    Annual,
}

/// Amortization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Flat interest over the equivalent-month horizon (the default).
    FlatMonthly,
    /// Declining balance with a constant payment (French annuity).
    Annuity,
    /// Flat per-period interest on the original principal.
    Simple,
}

impl Method {
    /// Default-resolution rule: only the two alternates may be selected
    /// explicitly; anything else (including no selection) is the flat
    /// method.
    pub fn resolve(requested: Option<Method>) -> Method {
        match requested {
            Some(Method::Annuity) => Method::Annuity,
            Some(Method::Simple) => Method::Simple,
            _ => Method::FlatMonthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::FlatMonthly => "flat_monthly",
            Method::Annuity => "annuity",
            Method::Simple => "simple",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Input type
// ---------------------------------------------------------------------------

/// Loan parameters as supplied by the caller. Immutable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount lent
    pub principal: Money,
    /// Rate as a percentage (10 means 10%)
    pub rate_percent: Decimal,
    /// Basis of `rate_percent`; defaults to per-period
    #[serde(default)]
    pub rate_basis: RateBasis,
    /// Installment cadence
    pub frequency: PaymentFrequency,
    /// Number of installments
    pub installments: u32,
    /// First-installment anchor; defaults to the current date at call time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Requested method; resolved through [`Method::resolve`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Loan-level figures. All monetary fields rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Method the schedule was built with
    pub method: Method,
    /// Normalized principal
    pub principal: Money,
    /// Effective monthly rate in percent for the flat method; the
    /// per-period rate for the alternates
    pub rate_pct: Rate,
    /// Equivalent-months factor times installment count (flat method only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_months: Option<Decimal>,
    /// Number of installments
    pub installments: u32,
    /// Installment cadence
    pub frequency: PaymentFrequency,
    /// Per-installment payment amount
    pub payment: Money,
    /// Interest over the whole loan
    pub total_interest: Money,
    /// Principal plus total interest
    pub total_payable: Money,
    /// First-installment anchor date
    pub start_date: NaiveDate,
}

/// One installment. Rows are generated once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentRow {
    /// Installment index, 1-based
    pub installment: u32,
    /// Due date
    pub due_date: NaiveDate,
    /// Payment amount
    pub payment: Money,
    /// Interest portion
    pub interest: Money,
    /// Principal portion
    pub principal: Money,
    /// Remaining balance after this payment
    pub balance: Money,
}

/// Complete result: summary plus the ordered installment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub summary: ScheduleSummary,
    pub plan: Vec<InstallmentRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the amortization schedule for a loan request.
///
/// Pure over its inputs; the current date is read only when `start_date`
/// is absent. Fails with a validation error before producing any rows.
pub fn build_schedule(request: &LoanRequest) -> LendingResult<LoanSchedule> {
    validate_request(request)?;

    let start_date = request.start_date.unwrap_or_else(dates::today);

    match Method::resolve(request.method) {
        Method::FlatMonthly => flat::build(request, start_date),
        Method::Annuity => annuity::build(request, start_date),
        Method::Simple => simple::build(request, start_date),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_request(request: &LoanRequest) -> LendingResult<()> {
    if request.principal <= Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "principal".into(),
            reason: "must be a positive amount".into(),
        });
    }
    if request.installments == 0 {
        return Err(LendingError::InvalidInput {
            field: "installments".into(),
            reason: "must be greater than zero".into(),
        });
    }
    if request.rate_percent < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "rate_percent".into(),
            reason: "must not be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_from_str() {
        assert_eq!(
            "biweekly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Biweekly
        );
        assert_eq!(
            "Monthly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Monthly
        );

        let err = "yearly".parse::<PaymentFrequency>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("frequency"));
    }

    #[test]
    fn test_month_factor_table() {
        assert_eq!(PaymentFrequency::Monthly.month_factor(), Decimal::ONE);
        assert_eq!(
            PaymentFrequency::Biweekly.month_factor(),
            Decimal::ONE / dec!(2)
        );
        // 13 weekly installments span exactly 3 equivalent months
        let weekly = PaymentFrequency::Weekly.month_factor() * dec!(13);
        assert!((weekly - dec!(3)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_method_resolution_defaults_to_flat() {
        assert_eq!(Method::resolve(None), Method::FlatMonthly);
        assert_eq!(Method::resolve(Some(Method::FlatMonthly)), Method::FlatMonthly);
        assert_eq!(Method::resolve(Some(Method::Annuity)), Method::Annuity);
        assert_eq!(Method::resolve(Some(Method::Simple)), Method::Simple);
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let base = LoanRequest {
            principal: dec!(1000),
            rate_percent: dec!(5),
            rate_basis: RateBasis::Period,
            frequency: PaymentFrequency::Monthly,
            installments: 6,
            start_date: None,
            method: None,
        };

        let mut bad = base.clone();
        bad.principal = Decimal::ZERO;
        assert!(build_schedule(&bad).unwrap_err().is_validation());

        let mut bad = base.clone();
        bad.installments = 0;
        assert!(build_schedule(&bad).unwrap_err().is_validation());

        let mut bad = base;
        bad.rate_percent = dec!(-1);
        assert!(build_schedule(&bad).unwrap_err().is_validation());
    }
}
