//! JSON dataset loading.
//!
//! Two on-disk versions exist: the legacy bare array of districts and the
//! current `{"divisions": [...]}` document. Both are parsed into raw
//! records that mirror the file, then converted into [`Division`]s and
//! validated by [`Dataset::new`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{Dataset, DatasetError, DatasetVersion};
use crate::division::{Coord, Division, DivisionType};

/// One entry of the legacy district array.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyRecord {
    name: String,
    city: String,
    population: u64,
    #[serde(rename = "type")]
    kind: String,
}

/// One entry of the current `divisions` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DivisionRecord {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    population: u64,
    area: f64,
    #[serde(rename = "type")]
    kind: String,
    link: String,
    #[serde(default)]
    highlights: Option<Vec<String>>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    image_attribution: Option<String>,
    #[serde(default)]
    info: Option<String>,
    #[serde(default)]
    first_level_division: Option<String>,
}

/// The current-version wrapper. `$schema` and other top-level keys are ignored.
#[derive(Debug, Deserialize)]
struct DivisionsDocument {
    divisions: Vec<Value>,
}

/// Reads and validates a dataset file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&data)?;
    log::info!(
        "loaded {} divisions from {} ({:?} schema, keyed by {})",
        dataset.len(),
        path.display(),
        dataset.version(),
        dataset.key_mode()
    );
    Ok(dataset)
}

/// Parses and validates a dataset from a JSON string.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let document: Value = serde_json::from_str(json)?;

    match document {
        Value::Array(items) => {
            let divisions = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| parse_legacy(index, item))
                .collect::<Result<Vec<_>, _>>()?;
            Dataset::new(DatasetVersion::Legacy, divisions)
        }
        Value::Object(_) => {
            let document: DivisionsDocument = serde_json::from_value(document)?;
            let divisions = document
                .divisions
                .into_iter()
                .enumerate()
                .map(|(index, item)| parse_current(index, item))
                .collect::<Result<Vec<_>, _>>()?;
            Dataset::new(DatasetVersion::Current, divisions)
        }
        other => Err(DatasetError::InvalidShape(json_kind(&other))),
    }
}

fn parse_legacy(index: usize, item: Value) -> Result<Division, DatasetError> {
    let record: LegacyRecord =
        serde_json::from_value(item).map_err(|source| DatasetError::Record { index, source })?;

    let kind = DivisionType::from_label(&record.kind)
        .filter(|t| t.is_legacy())
        .ok_or_else(|| DatasetError::InvalidType {
            index,
            value: record.kind.clone(),
        })?;

    let mut division = Division::new(record.name, record.population, kind);
    division.first_level_division = Some(record.city);
    Ok(division)
}

fn parse_current(index: usize, item: Value) -> Result<Division, DatasetError> {
    let record: DivisionRecord =
        serde_json::from_value(item).map_err(|source| DatasetError::Record { index, source })?;

    let kind = DivisionType::from_label(&record.kind).ok_or_else(|| DatasetError::InvalidType {
        index,
        value: record.kind.clone(),
    })?;

    let coord = match (record.lat, record.lon) {
        (Some(lat), Some(lon)) => Some(Coord::new(lat, lon)),
        (None, None) => None,
        _ => return Err(DatasetError::PartialCoordinates { name: record.name }),
    };

    Ok(Division {
        id: record.id,
        name: record.name,
        population: record.population,
        area: Some(record.area),
        kind,
        link: Some(record.link),
        highlights: record.highlights.unwrap_or_default(),
        coord,
        image: record.image,
        image_attribution: record.image_attribution,
        info: record.info,
        first_level_division: record.first_level_division,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
