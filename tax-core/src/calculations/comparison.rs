//! Side-by-side comparison of the old and new regimes for one income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SlabTaxCalculator;
use crate::RegimeTables;
use crate::models::{Income, Regime, TaxResult};

/// Tax under both regimes for the same income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub income: Income,
    pub old: TaxResult,
    pub new: TaxResult,
    /// Absolute difference between the two tax amounts.
    pub tax_difference: Decimal,
}

impl RegimeComparison {
    pub fn compare(
        income: &Income,
        tables: &RegimeTables,
    ) -> Self {
        let old = SlabTaxCalculator::new(&tables.old).result(income);
        let new = SlabTaxCalculator::new(&tables.new).result(income);
        let tax_difference = (new.tax_owed - old.tax_owed).abs();

        debug!(
            %income,
            old_tax = %old.tax_owed,
            new_tax = %new.tax_owed,
            %tax_difference,
            "compared regimes"
        );

        Self {
            income: *income,
            old,
            new,
            tax_difference,
        }
    }

    pub fn result(
        &self,
        regime: Regime,
    ) -> &TaxResult {
        match regime {
            Regime::Old => &self.old,
            Regime::New => &self.new,
        }
    }

    /// The regime with the lower tax, or `None` when both are equal.
    pub fn cheaper_regime(&self) -> Option<Regime> {
        match self.new.tax_owed.cmp(&self.old.tax_owed) {
            std::cmp::Ordering::Less => Some(Regime::New),
            std::cmp::Ordering::Greater => Some(Regime::Old),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn compare(value: Decimal) -> RegimeComparison {
        RegimeComparison::compare(&Income::new(value).unwrap(), RegimeTables::builtin())
    }

    #[test]
    fn compare_fifteen_lakh() {
        let comparison = compare(dec!(1500000));

        assert_eq!(comparison.new.tax_owed, dec!(19200));
        assert_eq!(comparison.old.tax_owed, dec!(77610));
        assert_eq!(comparison.tax_difference, dec!(58410));
        assert_eq!(comparison.cheaper_regime(), Some(Regime::New));
    }

    #[test]
    fn compare_zero_income_is_a_tie() {
        let comparison = compare(dec!(0));

        assert_eq!(comparison.tax_difference, dec!(0));
        assert_eq!(comparison.cheaper_regime(), None);
    }

    #[test]
    fn difference_is_absolute() {
        let tables = RegimeTables::builtin();
        let swapped = RegimeTables {
            old: tables.new.clone(),
            new: tables.old.clone(),
        };

        let comparison =
            RegimeComparison::compare(&Income::new(dec!(1500000)).unwrap(), &swapped);

        assert_eq!(comparison.tax_difference, dec!(58410));
        assert_eq!(comparison.cheaper_regime(), Some(Regime::Old));
    }

    #[test]
    fn income_after_tax_per_regime() {
        let comparison = compare(dec!(2000000));

        assert_eq!(comparison.old.income_after_tax, dec!(1772390));
        assert_eq!(comparison.result(Regime::New).income_after_tax, dec!(1830800));
        assert_eq!(comparison.income.amount(), dec!(2000000));
    }
}
