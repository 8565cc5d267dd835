use rust_decimal::{Decimal, RoundingStrategy};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Round a monetary value to 2 decimal places, half up. Applied at the
/// point a value enters the output; intermediate arithmetic stays unrounded
/// except the running balance, which is rounded each step and fed forward.
pub fn round_money(value: Decimal) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2499.995)), dec!(2500.00));
        assert_eq!(round_money(dec!(1923.0769230769)), dec!(1923.08));
        assert_eq!(round_money(dec!(0.004)), dec!(0.00));
    }
}
