use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{Regime, RegimeTables, SlabTable, SlabTableError, TaxSlab};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading slab tables.
#[derive(Debug, Error)]
pub enum SlabTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown regime '{regime}' on row {row} (expected 'old' or 'new')")]
    UnknownRegime { regime: String, row: usize },

    #[error("no slabs defined for the {0}")]
    MissingRegime(Regime),

    #[error("invalid {regime} table: {source}")]
    InvalidTable {
        regime: Regime,
        #[source]
        source: SlabTableError,
    },
}

impl From<csv::Error> for SlabTableLoaderError {
    fn from(err: csv::Error) -> Self {
        SlabTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a slab table CSV file.
///
/// - `regime`: `old` or `new` (case-insensitive)
/// - `upper_bound`: upper limit of the slab; empty for the unbounded top slab
/// - `rate_percent`: marginal rate as a percentage (e.g. `5.77`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub regime: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for regime slab tables from CSV.
///
/// Rows of each regime are taken in file order; regimes may be interleaved.
/// Both regimes must be present and each must form a valid [`SlabTable`].
pub struct SlabTableLoader;

impl SlabTableLoader {
    /// Parse slab records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SlabRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records by regime and validate each group as a table.
    pub fn build(records: &[SlabRecord]) -> Result<RegimeTables, SlabTableLoaderError> {
        let mut old = Vec::new();
        let mut new = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let regime = Regime::parse(&record.regime).ok_or_else(|| {
                SlabTableLoaderError::UnknownRegime {
                    regime: record.regime.clone(),
                    row: index + 1,
                }
            })?;

            let slab = TaxSlab {
                upper_bound: record.upper_bound,
                rate_percent: record.rate_percent,
            };
            match regime {
                Regime::Old => old.push(slab),
                Regime::New => new.push(slab),
            }
        }

        Ok(RegimeTables {
            old: Self::table(Regime::Old, old)?,
            new: Self::table(Regime::New, new)?,
        })
    }

    fn table(
        regime: Regime,
        slabs: Vec<TaxSlab>,
    ) -> Result<SlabTable, SlabTableLoaderError> {
        if slabs.is_empty() {
            return Err(SlabTableLoaderError::MissingRegime(regime));
        }
        debug!(regime = regime.as_str(), slabs = slabs.len(), "validating slab table");
        SlabTable::new(slabs).map_err(|source| SlabTableLoaderError::InvalidTable { regime, source })
    }

    /// Parse and build tables from any reader.
    pub fn load<R: Read>(reader: R) -> Result<RegimeTables, SlabTableLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records)
    }

    /// Read tables from a CSV file on disk.
    pub fn load_from_file(path: &Path) -> Result<RegimeTables, SlabTableLoaderError> {
        let file = File::open(path).map_err(|source| SlabTableLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::load(file)?;

        info!(
            path = %path.display(),
            old_slabs = tables.old.len(),
            new_slabs = tables.new.len(),
            "loaded slab tables"
        );
        Ok(tables)
    }
}
