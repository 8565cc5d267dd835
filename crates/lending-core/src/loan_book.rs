//! Origination: the calculate-and-persist entry point.
//!
//! The schedule itself is pure; persistence lives behind [`LoanStore`] so
//! hosts can plug in whatever data store they run. Validation failures
//! surface before the store is touched and are distinguishable from
//! storage failures by error variant.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::schedule::{build_schedule, LoanRequest, LoanSchedule, PaymentFrequency};
use crate::types::Money;
use crate::LendingResult;

/// Record persisted when a loan is originated. The outstanding balance
/// starts at the full principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub customer_reference: String,
    pub principal: Money,
    pub rate_percent: Decimal,
    pub installments: u32,
    pub frequency: PaymentFrequency,
    pub outstanding_balance: Money,
    pub start_date: NaiveDate,
}

/// Persistence seam for originated loans. Implementations translate their
/// backend's failures into [`LendingError::Storage`].
pub trait LoanStore {
    fn insert(&mut self, record: LoanRecord) -> LendingResult<()>;
}

/// Vec-backed store for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryLoanBook {
    records: Vec<LoanRecord>,
}

impl InMemoryLoanBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LoanRecord] {
        &self.records
    }
}

impl LoanStore for InMemoryLoanBook {
    fn insert(&mut self, record: LoanRecord) -> LendingResult<()> {
        self.records.push(record);
        Ok(())
    }
}

/// Build the schedule for a request and persist the originated loan.
/// Returns the stored record alongside the calculation result. The
/// calculate-only entry point is [`build_schedule`] itself.
pub fn originate<S: LoanStore>(
    store: &mut S,
    customer_reference: &str,
    request: &LoanRequest,
) -> LendingResult<(LoanRecord, LoanSchedule)> {
    if customer_reference.trim().is_empty() {
        return Err(LendingError::InvalidInput {
            field: "customer_reference".into(),
            reason: "must not be empty".into(),
        });
    }

    let schedule = build_schedule(request)?;

    let record = LoanRecord {
        customer_reference: customer_reference.to_string(),
        principal: request.principal,
        rate_percent: request.rate_percent,
        installments: request.installments,
        frequency: request.frequency,
        outstanding_balance: request.principal,
        start_date: schedule.summary.start_date,
    };
    store.insert(record.clone())?;

    Ok((record, schedule))
}
