//! Shared arithmetic for slab calculations.
//!
//! Calculations never round; amounts are rounded to paise only when they
//! are presented.

use rust_decimal::{Decimal, RoundingStrategy};

/// `rate_percent` percent of `amount`, unrounded.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(100000), dec!(4.44)), dec!(4440));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate_percent: Decimal,
) -> Decimal {
    amount * rate_percent / Decimal::ONE_HUNDRED
}

/// Rounds to two decimal places (paise), midpoints away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_paise;
///
/// assert_eq!(round_to_paise(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_to_paise(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_to_paise(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
