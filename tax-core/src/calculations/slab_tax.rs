//! Progressive slab tax computation.
//!
//! Each slab's marginal rate applies only to the portion of income that
//! falls inside that slab, never to the whole income. Income exactly on a
//! boundary is absorbed entirely by the lower slab.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::compute_tax;
//! use tax_core::{SlabTable, TaxSlab};
//!
//! let table = SlabTable::new(vec![
//!     TaxSlab::bounded(dec!(800000), dec!(3.75)),
//!     TaxSlab::bounded(dec!(900000), dec!(4.44)),
//!     TaxSlab::unbounded(dec!(30)),
//! ])
//! .unwrap();
//!
//! assert_eq!(compute_tax(dec!(850000), &table), dec!(32220));
//! ```

use rust_decimal::Decimal;

use super::common::percent_of;
use crate::models::{Income, SlabCharge, SlabTable, TaxResult};

/// Tax owed on `income` under `slabs`.
///
/// No rounding is applied. A negative income owes nothing.
pub fn compute_tax(
    income: Decimal,
    slabs: &SlabTable,
) -> Decimal {
    allocate(income, slabs).map(|charge| charge.tax).sum()
}

/// Walks the table, yielding the charge for each slab that receives income.
///
/// Stops as soon as the income is fully allocated.
fn allocate(
    income: Decimal,
    slabs: &SlabTable,
) -> impl Iterator<Item = SlabCharge> + '_ {
    let mut remaining = income;

    slabs
        .ranges()
        .map_while(move |(lower_bound, upper_bound, rate_percent)| {
            if remaining <= Decimal::ZERO {
                return None;
            }

            let width = match upper_bound {
                Some(upper) => remaining.min(upper - lower_bound),
                None => remaining,
            };
            remaining -= width;

            Some(SlabCharge {
                lower_bound,
                upper_bound,
                rate_percent,
                taxable_amount: width,
                tax: percent_of(width, rate_percent),
            })
        })
}

/// Calculator bound to one slab table.
#[derive(Debug, Clone, Copy)]
pub struct SlabTaxCalculator<'a> {
    slabs: &'a SlabTable,
}

impl<'a> SlabTaxCalculator<'a> {
    pub fn new(slabs: &'a SlabTable) -> Self {
        Self { slabs }
    }

    pub fn tax(
        &self,
        income: &Income,
    ) -> Decimal {
        compute_tax(income.amount(), self.slabs)
    }

    pub fn result(
        &self,
        income: &Income,
    ) -> TaxResult {
        TaxResult::new(income.amount(), self.tax(income))
    }

    /// Per-slab charges for `income`, in table order.
    ///
    /// Slabs above the income are omitted. The charges sum to [`Self::tax`].
    pub fn breakdown(
        &self,
        income: &Income,
    ) -> Vec<SlabCharge> {
        allocate(income.amount(), self.slabs).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::RegimeTables;
    use crate::TaxSlab;

    fn old() -> &'static SlabTable {
        &RegimeTables::builtin().old
    }

    fn new() -> &'static SlabTable {
        &RegimeTables::builtin().new
    }

    fn income(value: Decimal) -> Income {
        Income::new(value).unwrap()
    }

    // =========================================================================
    // Old regime scenarios
    // =========================================================================

    #[test]
    fn old_regime_zero_income_owes_nothing() {
        assert_eq!(compute_tax(dec!(0), old()), dec!(0));
    }

    #[test]
    fn old_regime_first_slab_boundary() {
        assert_eq!(compute_tax(dec!(800000), old()), dec!(30000));
    }

    #[test]
    fn old_regime_ten_lakh() {
        assert_eq!(compute_tax(dec!(1000000), old()), dec!(39440));
    }

    #[test]
    fn old_regime_twenty_lakh_reaches_top_slab() {
        assert_eq!(compute_tax(dec!(2000000), old()), dec!(227610));
    }

    // =========================================================================
    // New regime scenarios
    // =========================================================================

    #[test]
    fn new_regime_tax_free_up_to_twelve_lakh() {
        assert_eq!(compute_tax(dec!(1200000), new()), dec!(0));
    }

    #[test]
    fn new_regime_fifteen_lakh() {
        assert_eq!(compute_tax(dec!(1500000), new()), dec!(19200));
    }

    // =========================================================================
    // Structural properties
    // =========================================================================

    #[test]
    fn negative_income_owes_nothing() {
        assert_eq!(compute_tax(dec!(-100), old()), dec!(0));
    }

    #[test]
    fn tax_is_non_negative_and_non_decreasing() {
        for table in [old(), new()] {
            let mut previous = Decimal::ZERO;
            let mut amount = Decimal::ZERO;
            while amount <= dec!(3000000) {
                let tax = compute_tax(amount, table);
                assert!(tax >= Decimal::ZERO, "negative tax at {amount}");
                assert!(tax >= previous, "tax decreased at {amount}");
                previous = tax;
                amount += dec!(12500);
            }
        }
    }

    #[test]
    fn tax_is_continuous_at_every_boundary() {
        let step = dec!(0.01);
        for table in [old(), new()] {
            let ranges: Vec<_> = table.ranges().collect();
            for pair in ranges.windows(2) {
                let (_, Some(boundary), _) = pair[0] else {
                    continue;
                };
                let below = compute_tax(boundary - step, table);
                let at = compute_tax(boundary, table);
                let above = compute_tax(boundary + step, table);

                assert_eq!(at - below, step * pair[0].2 / dec!(100));
                assert_eq!(above - at, step * pair[1].2 / dec!(100));
            }
        }
    }

    #[test]
    fn marginal_rate_above_finite_bounds_is_top_rate() {
        for table in [old(), new()] {
            let base = compute_tax(dec!(5000000), table);
            let next = compute_tax(dec!(5000100), table);

            assert_eq!(next - base, dec!(100) * table.top_rate_percent() / dec!(100));
        }
    }

    #[test]
    fn maximum_income_at_full_rate_stays_in_range() {
        let table = SlabTable::new(vec![
            TaxSlab::bounded(dec!(0.01), dec!(100)),
            TaxSlab::unbounded(dec!(100)),
        ])
        .unwrap();

        assert_eq!(compute_tax(Income::MAX, &table), Income::MAX);
    }

    #[test]
    fn maximum_income_under_builtin_tables() {
        let tax = SlabTaxCalculator::new(old()).tax(&income(Income::MAX));

        assert_eq!(tax, dec!(77610) + dec!(999999998500000) * dec!(0.30));
    }

    #[test]
    fn fractional_income_is_not_rounded() {
        let table = SlabTable::new(vec![TaxSlab::unbounded(dec!(10))]).unwrap();

        assert_eq!(compute_tax(dec!(0.05), &table), dec!(0.005));
    }

    // =========================================================================
    // SlabTaxCalculator
    // =========================================================================

    #[test]
    fn result_carries_income_after_tax() {
        let result = SlabTaxCalculator::new(old()).result(&income(dec!(1000000)));

        assert_eq!(
            result,
            TaxResult {
                income: dec!(1000000),
                tax_owed: dec!(39440),
                income_after_tax: dec!(960560),
            }
        );
    }

    #[test]
    fn breakdown_lists_only_slabs_receiving_income() {
        let charges = SlabTaxCalculator::new(old()).breakdown(&income(dec!(1000000)));

        assert_eq!(
            charges,
            vec![
                SlabCharge {
                    lower_bound: dec!(0),
                    upper_bound: Some(dec!(800000)),
                    rate_percent: dec!(3.75),
                    taxable_amount: dec!(800000),
                    tax: dec!(30000),
                },
                SlabCharge {
                    lower_bound: dec!(800000),
                    upper_bound: Some(dec!(900000)),
                    rate_percent: dec!(4.44),
                    taxable_amount: dec!(100000),
                    tax: dec!(4440),
                },
                SlabCharge {
                    lower_bound: dec!(900000),
                    upper_bound: Some(dec!(1000000)),
                    rate_percent: dec!(5),
                    taxable_amount: dec!(100000),
                    tax: dec!(5000),
                },
            ]
        );
    }

    #[test]
    fn breakdown_includes_unbounded_remainder() {
        let charges = SlabTaxCalculator::new(new()).breakdown(&income(dec!(2000000)));

        let last = charges.last().unwrap();
        assert_eq!(last.upper_bound, None);
        assert_eq!(last.taxable_amount, dec!(500000));
        assert_eq!(last.tax, dec!(150000));
    }

    #[test]
    fn breakdown_sums_to_total_tax() {
        let calculator = SlabTaxCalculator::new(old());
        let income = income(dec!(1734567.89));

        let total: Decimal = calculator.breakdown(&income).iter().map(|c| c.tax).sum();

        assert_eq!(total, calculator.tax(&income));
    }

    #[test]
    fn breakdown_of_zero_income_is_empty() {
        let charges = SlabTaxCalculator::new(old()).breakdown(&Income::ZERO);

        assert!(charges.is_empty());
    }
}
