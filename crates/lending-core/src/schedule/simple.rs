//! Simple-interest alternate: flat per-period interest on the original
//! principal, even principal reduction. Compatibility method; must be
//! selected explicitly.

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

    let interest_per_period = request.principal * rate;
    let total_interest = interest_per_period * n_dec;
    let payment = (request.principal + total_interest) / n_dec;
    let principal_per_installment = request.principal / n_dec;

    let mut plan = Vec::with_capacity(n as usize);
    let mut balance = request.principal;

    for k in 1..=n {
        balance = if k == n {
            Decimal::ZERO
        } else {
            round_money(balance - principal_per_installment).max(Decimal::ZERO)
        };

        plan.push(InstallmentRow {
            installment: k,
            due_date: dates::due_date(start_date, request.frequency, k)?,
            payment: round_money(payment),
            interest: round_money(interest_per_period),
            principal: round_money(principal_per_installment),
            balance,
        });
    }

    Ok(LoanSchedule {
        summary: ScheduleSummary {
            method: Method::Simple,
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
