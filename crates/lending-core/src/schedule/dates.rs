//! Due-date stepping.

use chrono::{Days, Local, Months, NaiveDate};

use super::PaymentFrequency;
use crate::error::LendingError;
use crate::LendingResult;

/// Current local date, used when a request carries no start date.
pub(super) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date of installment `k` (1-based): the start date advanced by `k`
/// period-units. Monthly stepping is calendar-correct: the day of month is
/// clamped when the target month is shorter, never a fixed 30-day block.
pub(super) fn due_date(
    start: NaiveDate,
    frequency: PaymentFrequency,
    k: u32,
) -> LendingResult<NaiveDate> {
    let stepped = match frequency {
        PaymentFrequency::Daily => start.checked_add_days(Days::new(u64::from(k))),
        PaymentFrequency::Weekly => start.checked_add_days(Days::new(7 * u64::from(k))),
        PaymentFrequency::Biweekly => start.checked_add_days(Days::new(14 * u64::from(k))),
        PaymentFrequency::Monthly => start.checked_add_months(Months::new(k)),
    };

    stepped.ok_or_else(|| {
        LendingError::DateError(format!(
            "cannot represent {frequency} installment {k} from {start}"
        ))
    })
}
