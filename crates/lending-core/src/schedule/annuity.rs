//! Declining-balance alternate: constant payment solved from the
//! present-value annuity formula, interest recalculated against the
//! shrinking balance each period. Compatibility method; must be selected
//! explicitly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{dates, rates, InstallmentRow, LoanRequest, LoanSchedule, Method, ScheduleSummary};
use crate::types::round_money;
use crate::LendingResult;

pub(super) fn build(request: &LoanRequest, start_date: NaiveDate) -> LendingResult<LoanSchedule> {
    let n = request.installments;
    let n_dec = Decimal::from(n);

    let rate = rates::rate_per_period(request.rate_percent, request.rate_basis, request.frequency);

    // PMT = P * r * (1+r)^n / ((1+r)^n - 1), degenerating to P/n at r = 0
    let payment = if rate.is_zero() {
        request.principal / n_dec
    } else {
        let one_plus_r = Decimal::ONE + rate;
        let mut growth = Decimal::ONE;
        for _ in 0..n {
            growth *= one_plus_r;
        }
        (request.principal * rate * growth) / (growth - Decimal::ONE)
    };

    let mut plan = Vec::with_capacity(n as usize);
    let mut balance = request.principal;
    let mut total_interest = Decimal::ZERO;

    for k in 1..=n {
        let interest = balance * rate;
        let principal_portion = payment - interest;
        total_interest += interest;

        balance = if k == n {
            Decimal::ZERO
        } else {
            round_money(balance - principal_portion).max(Decimal::ZERO)
        };

        plan.push(InstallmentRow {
            installment: k,
            due_date: dates::due_date(start_date, request.frequency, k)?,
            payment: round_money(payment),
            interest: round_money(interest),
            principal: round_money(principal_portion),
            balance,
        });
    }

    Ok(LoanSchedule {
        summary: ScheduleSummary {
            method: Method::Annuity,
            principal: round_money(request.principal),
            rate_pct: round_money(rate * dec!(100)),
            equivalent_months: None,
            installments: n,
            frequency: request.frequency,
            payment: round_money(payment),
            total_interest: round_money(total_interest),
            total_payable: round_money(payment * n_dec),
            start_date,
        },
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{PaymentFrequency, RateBasis};

    fn request(rate_percent: Decimal) -> LoanRequest {
        LoanRequest {
            principal: dec!(10000),
            rate_percent,
            rate_basis: RateBasis::Period,
            frequency: PaymentFrequency::Monthly,
            installments: 12,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            method: Some(Method::Annuity),
        }
    }

    #[test]
    fn test_payment_matches_annuity_formula() {
        // 10000 at 1% per period over 12: PMT = 888.4878...
        let schedule = build(&request(dec!(1)), start()).unwrap();
        assert_eq!(schedule.summary.payment, dec!(888.49));
        assert_eq!(schedule.summary.total_payable, dec!(10661.85));
    }

    #[test]
    fn test_interest_declines_with_balance() {
        let schedule = build(&request(dec!(1)), start()).unwrap();
        let first = &schedule.plan[0];
        let last = &schedule.plan[11];
        assert_eq!(first.interest, dec!(100.00));
        assert!(last.interest < first.interest);
        assert!(last.principal > first.principal);
        assert_eq!(last.balance, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_degenerates_to_even_split() {
        let schedule = build(&request(dec!(0)), start()).unwrap();
        assert_eq!(schedule.summary.payment, dec!(833.33));
        assert_eq!(schedule.summary.total_interest, dec!(0.00));
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }
}
