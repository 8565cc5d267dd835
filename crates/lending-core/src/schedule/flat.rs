//! Flat-monthly amortization, the primary method.
//!
//! Interest is computed once over the loan's equivalent-month horizon and
//! split evenly across installments. Payment, interest portion, and
//! principal portion are all constant; the balance declines by the same
//! amount every period. Interest is never compounded per installment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{dates, rates, InstallmentRow, LoanRequest, LoanSchedule, Method, ScheduleSummary};
use crate::types::round_money;
use crate::LendingResult;

pub(super) fn build(request: &LoanRequest, start_date: NaiveDate) -> LendingResult<LoanSchedule> {
    let n = request.installments;
    let n_dec = Decimal::from(n);

    let monthly_rate = rates::monthly_rate(request.rate_percent, request.rate_basis);
    let equivalent_months = n_dec * request.frequency.month_factor();

    // Flat convention: one interest figure for the whole horizon
    let total_interest = request.principal * monthly_rate * equivalent_months;
    let total_payable = request.principal + total_interest;
    let payment = total_payable / n_dec;

    let interest_per_installment = total_interest / n_dec;
    let principal_per_installment = payment - interest_per_installment;

    let mut plan = Vec::with_capacity(n as usize);
    let mut balance = request.principal;

    for k in 1..=n {
        // Balance is rounded each step and fed forward; the final row
        // closes at exactly zero, absorbing accumulated rounding drift.
        balance = if k == n {
            Decimal::ZERO
        } else {
            round_money(balance - principal_per_installment).max(Decimal::ZERO)
        };

        plan.push(InstallmentRow {
            installment: k,
            due_date: dates::due_date(start_date, request.frequency, k)?,
            payment: round_money(payment),
            interest: round_money(interest_per_installment),
            principal: round_money(principal_per_installment),
            balance,
        });
    }

    Ok(LoanSchedule {
        summary: ScheduleSummary {
            method: Method::FlatMonthly,
            principal: round_money(request.principal),
            rate_pct: round_money(monthly_rate * dec!(100)),
            equivalent_months: Some(round_money(equivalent_months)),
            installments: n,
            frequency: request.frequency,
            payment: round_money(payment),
            total_interest: round_money(total_interest),
            total_payable: round_money(total_payable),
            start_date,
        },
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{PaymentFrequency, RateBasis};

    fn request(principal: Decimal, rate: Decimal, n: u32) -> LoanRequest {
        LoanRequest {
            principal,
            rate_percent: rate,
            rate_basis: RateBasis::Period,
            frequency: PaymentFrequency::Monthly,
            installments: n,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            method: None,
        }
    }

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        let schedule = build(&request(dec!(1200), dec!(0), 12), dates_start()).unwrap();
        assert_eq!(schedule.summary.payment, dec!(100.00));
        assert_eq!(schedule.summary.total_interest, dec!(0.00));
        assert_eq!(schedule.summary.total_payable, dec!(1200.00));
        for row in &schedule.plan {
            assert_eq!(row.interest, dec!(0.00));
            assert_eq!(row.principal, dec!(100.00));
        }
    }

    #[test]
    fn test_monthly_interest_is_flat_not_compounded() {
        // 10000 at 2% monthly over 6 months: interest = 10000 * 0.02 * 6
        let schedule = build(&request(dec!(10000), dec!(2), 6), dates_start()).unwrap();
        assert_eq!(schedule.summary.total_interest, dec!(1200.00));
        assert_eq!(schedule.summary.equivalent_months, Some(dec!(6.00)));
        // interest portion identical on every row
        for row in &schedule.plan {
            assert_eq!(row.interest, dec!(200.00));
        }
    }

    #[test]
    fn test_residual_cent_drift_closes_at_zero() {
        // 100 over 3 installments: 33.333... per period rounds up each
        // step, which would leave a stray cent without the final close-out
        let schedule = build(&request(dec!(100), dec!(0), 3), dates_start()).unwrap();
        let balances: Vec<Decimal> = schedule.plan.iter().map(|r| r.balance).collect();
        assert_eq!(balances, vec![dec!(66.67), dec!(33.34), dec!(0)]);
    }

    fn dates_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }
}
