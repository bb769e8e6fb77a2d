//! Built-in slab tables for the old and new regimes.
//!
//! The tables are built once on first access and shared read-only for the
//! rest of the process.

use std::sync::LazyLock;

use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::{Regime, SlabTable, TaxSlab};

/// One slab table per regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeTables {
    pub old: SlabTable,
    pub new: SlabTable,
}

static BUILTIN: LazyLock<RegimeTables> = LazyLock::new(|| RegimeTables {
    old: SlabTable::new(old_regime_slabs()).expect("built-in old regime table is valid"),
    new: SlabTable::new(new_regime_slabs()).expect("built-in new regime table is valid"),
});

impl RegimeTables {
    /// The statutory tables shipped with the crate.
    pub fn builtin() -> &'static RegimeTables {
        &BUILTIN
    }

    pub fn get(
        &self,
        regime: Regime,
    ) -> &SlabTable {
        match regime {
            Regime::Old => &self.old,
            Regime::New => &self.new,
        }
    }
}

fn old_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab::bounded(dec!(800000), dec!(3.75)),
        TaxSlab::bounded(dec!(900000), dec!(4.44)),
        TaxSlab::bounded(dec!(1000000), dec!(5)),
        TaxSlab::bounded(dec!(1100000), dec!(5.91)),
        TaxSlab::bounded(dec!(1200000), dec!(6.67)),
        TaxSlab::bounded(dec!(1300000), dec!(7.69)),
        TaxSlab::bounded(dec!(1400000), dec!(8.57)),
        TaxSlab::bounded(dec!(1500000), dec!(9.33)),
        TaxSlab::unbounded(dec!(30)),
    ]
}

fn new_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab::bounded(dec!(1200000), dec!(0)),
        TaxSlab::bounded(dec!(1300000), dec!(5.77)),
        TaxSlab::bounded(dec!(1400000), dec!(6.43)),
        TaxSlab::bounded(dec!(1500000), dec!(7)),
        TaxSlab::unbounded(dec!(30)),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let tables = RegimeTables::builtin();

        assert_eq!(tables.old.len(), 9);
        assert_eq!(tables.new.len(), 5);
    }

    #[test]
    fn builtin_top_rate_is_thirty_percent() {
        let tables = RegimeTables::builtin();

        assert_eq!(tables.old.top_rate_percent(), dec!(30));
        assert_eq!(tables.new.top_rate_percent(), dec!(30));
    }

    #[test]
    fn new_regime_first_slab_is_tax_free_to_twelve_lakh() {
        let first = RegimeTables::builtin().new.slabs()[0];

        assert_eq!(first, TaxSlab::bounded(dec!(1200000), dec!(0)));
    }

    #[test]
    fn get_selects_table_by_regime() {
        let tables = RegimeTables::builtin();

        assert_eq!(tables.get(Regime::Old), &tables.old);
        assert_eq!(tables.get(Regime::New), &tables.new);
    }
}
