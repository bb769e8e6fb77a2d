mod income;
mod regime;
mod slab_table;
mod tax_result;
mod tax_slab;

pub use income::{Income, InvalidInputError};
pub use regime::Regime;
pub use slab_table::{SlabTable, SlabTableError};
pub use tax_result::{SlabCharge, TaxResult};
pub use tax_slab::TaxSlab;
