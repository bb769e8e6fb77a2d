//! Ordered slab tables and their structural invariant.
//!
//! A [`SlabTable`] partitions the non-negative income line into contiguous
//! ranges starting at zero. Every slab except the last has a finite upper
//! bound, bounds strictly increase, and the last slab is unbounded. Tables
//! can only be obtained through [`SlabTable::new`], so any table handed to
//! the calculator already satisfies the invariant.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::TaxSlab;

/// Reasons a sequence of slabs does not form a valid table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlabTableError {
    #[error("slab table has no slabs")]
    Empty,

    #[error("slab {index} has non-positive upper bound {bound}")]
    NonPositiveBound { index: usize, bound: Decimal },

    #[error("slab {index} upper bound {bound} does not exceed previous bound {previous}")]
    NonIncreasingBound {
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    #[error("unbounded slab at position {index} is not the last slab")]
    UnboundedSlabNotLast { index: usize },

    #[error("last slab must be unbounded")]
    MissingUnboundedSlab,

    #[error("slab {index} has rate {rate}% outside 0..=100")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// A validated, immutable sequence of [`TaxSlab`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabTable {
    slabs: Vec<TaxSlab>,
}

impl SlabTable {
    /// Validates `slabs` and wraps them in a table.
    ///
    /// # Errors
    ///
    /// Returns the first [`SlabTableError`] found, scanning in table order.
    pub fn new(slabs: Vec<TaxSlab>) -> Result<Self, SlabTableError> {
        if slabs.is_empty() {
            return Err(SlabTableError::Empty);
        }

        let last = slabs.len() - 1;
        let mut previous = Decimal::ZERO;

        for (index, slab) in slabs.iter().enumerate() {
            if slab.rate_percent < Decimal::ZERO || slab.rate_percent > Decimal::ONE_HUNDRED {
                return Err(SlabTableError::RateOutOfRange {
                    index,
                    rate: slab.rate_percent,
                });
            }

            match slab.upper_bound {
                Some(bound) if bound <= Decimal::ZERO => {
                    return Err(SlabTableError::NonPositiveBound { index, bound });
                }
                Some(bound) if bound <= previous => {
                    return Err(SlabTableError::NonIncreasingBound {
                        index,
                        bound,
                        previous,
                    });
                }
                Some(_) if index == last => return Err(SlabTableError::MissingUnboundedSlab),
                Some(bound) => previous = bound,
                None if index != last => {
                    return Err(SlabTableError::UnboundedSlabNotLast { index });
                }
                None => {}
            }
        }

        Ok(Self { slabs })
    }

    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    /// Never true for a table built by [`SlabTable::new`].
    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Marginal rate of the unbounded top slab.
    pub fn top_rate_percent(&self) -> Decimal {
        self.slabs
            .last()
            .map(|slab| slab.rate_percent)
            .unwrap_or(Decimal::ZERO)
    }

    /// Iterates `(lower_bound, upper_bound, rate_percent)` for each slab.
    pub fn ranges(&self) -> impl Iterator<Item = (Decimal, Option<Decimal>, Decimal)> + '_ {
        let mut lower = Decimal::ZERO;
        self.slabs.iter().map(move |slab| {
            let range = (lower, slab.upper_bound, slab.rate_percent);
            if let Some(upper) = slab.upper_bound {
                lower = upper;
            }
            range
        })
    }
}
