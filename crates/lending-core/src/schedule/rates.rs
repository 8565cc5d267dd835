//! Rate normalization.
//!
//! Rates arrive as percentages. The flat method works on an effective
//! monthly rate; the alternates work on a per-payment-period rate. Annual
//! figures are converted by compounding, never by straight division.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{PaymentFrequency, RateBasis};
use crate::types::Rate;

const NEWTON_ITERATIONS: u32 = 30;
const NEWTON_TOLERANCE: Decimal = dec!(0.0000000000001);

/// Effective monthly rate as a decimal fraction, for the flat method.
/// A `Period` rate is taken as monthly directly; an `Annual` rate is
/// compounded down: (1 + r)^(1/12) - 1.
pub(super) fn monthly_rate(rate_percent: Decimal, basis: RateBasis) -> Rate {
    let r = rate_percent / dec!(100);
    match basis {
        RateBasis::Period => r,
        RateBasis::Annual => nth_root(Decimal::ONE + r, 12) - Decimal::ONE,
    }
}

/// Per-payment-period rate, for the annuity and simple methods. An
/// `Annual` rate divides into the frequency's per-year period count
/// (360/52/26/12) by compounding.
pub(super) fn rate_per_period(
    rate_percent: Decimal,
    basis: RateBasis,
    frequency: PaymentFrequency,
) -> Rate {
    let r = rate_percent / dec!(100);
    match basis {
        RateBasis::Period => r,
        RateBasis::Annual => {
            nth_root(Decimal::ONE + r, frequency.periods_per_year()) - Decimal::ONE
        }
    }
}

/// Newton's method for the nth root of A.
/// x_{k+1} = ((n-1)*x_k + A / x_k^(n-1)) / n
fn nth_root(a: Decimal, n: u32) -> Decimal {
    if a <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if a == Decimal::ONE {
        return Decimal::ONE;
    }
    let n_dec = Decimal::from(n);
    let n_minus_1 = n_dec - Decimal::ONE;

    // For values near 1 (growth factors), first-order start converges fast
    let mut x = a;
    if a > dec!(0.5) && a < dec!(2.0) {
        x = Decimal::ONE + (a - Decimal::ONE) / n_dec;
    }

    for _ in 0..NEWTON_ITERATIONS {
        let mut x_pow = Decimal::ONE;
        for _ in 0..(n - 1) {
            x_pow *= x;
        }
        if x_pow.is_zero() {
            break;
        }
        let x_new = (n_minus_1 * x + a / x_pow) / n_dec;
        if (x_new - x).abs() < NEWTON_TOLERANCE {
            return x_new;
        }
        x = x_new;
    }
    x
}
