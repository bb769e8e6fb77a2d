//! Tax calculation logic for slab-based income tax regimes.
//!
//! This module provides the progressive slab calculator and the comparison
//! of the two regimes built on top of it.

pub mod common;
pub mod comparison;
pub mod slab_tax;

pub use comparison::RegimeComparison;
pub use slab_tax::{SlabTaxCalculator, compute_tax};
