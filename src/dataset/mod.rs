//! The loaded division dataset.
//!
//! A `Dataset` is built once from static JSON, validated, and treated as
//! immutable afterwards. It owns the records in their original file order
//! and an index from lookup key to record.

pub mod error;
pub mod loader;

use std::collections::HashMap;
use std::fmt;

use crate::division::{
    Division, DivisionKey, DivisionType, ALL_DIVISION_TYPES, DIVISION_TYPE_COUNT,
};

pub use error::DatasetError;
pub use loader::{load_dataset, parse_dataset};

/// Which on-disk schema a dataset was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetVersion {
    /// Bare array of `{name, city, population, type}` districts.
    Legacy,
    /// `{ "$schema"?, "divisions": [...] }` wrapper.
    Current,
}

/// Which field identifies a division for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Id,
    Name,
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::Id => f.write_str("id"),
            KeyMode::Name => f.write_str("name"),
        }
    }
}

/// A validated, immutable sequence of divisions.
#[derive(Debug, Clone)]
pub struct Dataset {
    version: DatasetVersion,
    key_mode: KeyMode,
    divisions: Vec<Division>,
    index: HashMap<DivisionKey, usize>,
}

impl Dataset {
    /// Validates `divisions` and builds the key index.
    ///
    /// Fails on the first record that violates the data model, on a
    /// mixture of id-keyed and name-keyed records, and on duplicate keys.
    pub fn new(version: DatasetVersion, divisions: Vec<Division>) -> Result<Self, DatasetError> {
        if divisions.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (index, division) in divisions.iter().enumerate() {
            validate_division(index, division)?;
        }

        let with_id = divisions.iter().filter(|d| d.id.is_some()).count();
        let key_mode = if with_id == divisions.len() {
            KeyMode::Id
        } else if with_id == 0 {
            KeyMode::Name
        } else {
            return Err(DatasetError::MixedKeys {
                with_id,
                without_id: divisions.len() - with_id,
            });
        };

        let mut index = HashMap::with_capacity(divisions.len());
        for (i, division) in divisions.iter().enumerate() {
            let key = division.key();
            if let Some(first) = index.insert(key.clone(), i) {
                return Err(DatasetError::DuplicateKey {
                    key,
                    first,
                    second: i,
                });
            }
        }

        Ok(Dataset {
            version,
            key_mode,
            divisions,
            index,
        })
    }

    /// Builds a current-version dataset from in-memory records.
    pub fn from_divisions(divisions: Vec<Division>) -> Result<Self, DatasetError> {
        Self::new(DatasetVersion::Current, divisions)
    }

    pub fn version(&self) -> DatasetVersion {
        self.version
    }

    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Returns all divisions in file order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    /// Returns true when the dataset holds no divisions.
    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// Looks up a division by its key.
    pub fn get(&self, key: &DivisionKey) -> Option<&Division> {
        self.index.get(key).map(|&i| &self.divisions[i])
    }

    /// Returns every division whose name is exactly `name`, in file order.
    ///
    /// On a name-keyed dataset this is at most one record.
    pub fn find_by_name(&self, name: &str) -> Vec<&Division> {
        self.divisions.iter().filter(|d| d.name == name).collect()
    }

    /// Counts divisions per kind, in kind order, skipping empty kinds.
    pub fn summary(&self) -> Vec<(DivisionType, usize)> {
        let mut counts = [0usize; DIVISION_TYPE_COUNT];
        for division in &self.divisions {
            counts[division.kind as usize] += 1;
        }
        ALL_DIVISION_TYPES
            .iter()
            .zip(counts)
            .filter(|(_, n)| *n > 0)
            .map(|(t, n)| (*t, n))
            .collect()
    }
}

/// Checks the per-record invariants of the data model.
fn validate_division(index: usize, division: &Division) -> Result<(), DatasetError> {
    if division.name.trim().is_empty() {
        return Err(DatasetError::EmptyName { index });
    }

    if division.population == 0 {
        return Err(DatasetError::NonPositivePopulation {
            name: division.name.clone(),
        });
    }

    if let Some(area) = division.area {
        if !area.is_finite() || area < 0.0 {
            return Err(DatasetError::NegativeArea {
                name: division.name.clone(),
                area,
            });
        }
    }

    if let Some(coord) = division.coord {
        let lat_ok = coord.lat.is_finite() && (-90.0..=90.0).contains(&coord.lat);
        let lon_ok = coord.lon.is_finite() && (-180.0..=180.0).contains(&coord.lon);
        if !lat_ok || !lon_ok {
            return Err(DatasetError::CoordinateOutOfRange {
                name: division.name.clone(),
                lat: coord.lat,
                lon: coord.lon,
            });
        }
    }

    Ok(())
}
