pub mod calculations;
pub mod models;
pub mod regimes;

pub use calculations::{RegimeComparison, SlabTaxCalculator, compute_tax};
pub use models::*;
pub use regimes::RegimeTables;
