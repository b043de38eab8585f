// crates/geodiv-core/src/model/convert.rs
//! **Normalizer:** loosely typed source entries -> [`GeoRecord`].
//!
//! The source is lenient by contract. Nothing in here fails on a bad field;
//! each field falls back to its default instead:
//!
//! | field              | source key         | default      |
//! |--------------------|--------------------|--------------|
//! | `name`             | `name`             | `""`         |
//! | `adcode`           | `adcode`           | `0`          |
//! | `level`            | `level`            | `Unknown`    |
//! | `center`           | `center`           | `[0, 0]`     |
//! | `centroid`         | `centroid`         | `[0, 0]`     |
//! | `parent_ref`       | `parent.adcode`    | `None`       |
//! | `ancestor_routes`  | `acroutes`         | `[]`         |
//! | `child_count`      | `childrenNum`      | `0`          |
//! | `sub_feature_index`| `subFeatureIndex`  | `0`          |
//!
//! Entries that are not JSON objects produce no record at all.

use super::record::{Coord, GeoRecord, Level, ParentRef};
use crate::error::{GeoError, Result};
use serde_json::{Map, Value};

/// Reads an integer the way the source writes them. Integral floats such as
/// `110000.0` are accepted; strings and fractional numbers are not.
fn as_integer(v: Option<&Value>) -> Option<i64> {
    let v = v?;
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    let f = v.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn as_coord(v: Option<&Value>) -> Coord {
    match v.and_then(Value::as_array).map(Vec::as_slice) {
        Some([lng, lat, ..]) => match (lng.as_f64(), lat.as_f64()) {
            (Some(lng), Some(lat)) => Coord::new(lng, lat),
            _ => Coord::ORIGIN,
        },
        _ => Coord::ORIGIN,
    }
}

fn as_parent(v: Option<&Value>) -> Option<ParentRef> {
    let obj = v?.as_object()?;
    match as_integer(obj.get("adcode")) {
        Some(adcode) if adcode != 0 => Some(ParentRef { adcode }),
        _ => None,
    }
}

fn as_routes(v: Option<&Value>) -> Vec<i64> {
    v.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|i| as_integer(Some(i))).collect())
        .unwrap_or_default()
}

fn record_from_map(obj: &Map<String, Value>) -> GeoRecord {
    GeoRecord {
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        adcode: as_integer(obj.get("adcode")).unwrap_or(0),
        level: obj
            .get("level")
            .and_then(Value::as_str)
            .map(Level::from_label)
            .unwrap_or(Level::Unknown),
        center: as_coord(obj.get("center")),
        centroid: as_coord(obj.get("centroid")),
        parent_ref: as_parent(obj.get("parent")),
        ancestor_routes: as_routes(obj.get("acroutes")),
        child_count: as_integer(obj.get("childrenNum")).unwrap_or(0),
        sub_feature_index: as_integer(obj.get("subFeatureIndex")).unwrap_or(0),
    }
}

/// Normalizes one raw entry. Returns `None` for anything that is not an
/// object (null, numbers, strings, arrays).
pub fn normalize_entry(entry: &Value) -> Option<GeoRecord> {
    entry.as_object().map(record_from_map)
}

/// Flattens a whole dataset into records, in source traversal order.
///
/// The dataset must be a JSON object (its values are the entries) or an
/// array of entries. An entry carrying a `children` array is a wrapper: its
/// children are normalized and the wrapper itself is dropped. Only that one
/// level of nesting is unfolded.
pub fn flatten_dataset(dataset: &Value) -> Result<Vec<GeoRecord>> {
    let entries: Box<dyn Iterator<Item = &Value> + '_> = match dataset {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        Value::Null => return Err(GeoError::load("dataset is missing (null)")),
        other => {
            return Err(GeoError::load(format!(
                "dataset must be a mapping of entries, found {}",
                json_kind(other)
            )))
        }
    };

    let mut out = Vec::new();
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            tracing::trace!(kind = json_kind(entry), "skipping non-object dataset entry");
            continue;
        };
        match obj.get("children").and_then(Value::as_array) {
            Some(children) => {
                for child in children {
                    match normalize_entry(child) {
                        Some(rec) => out.push(rec),
                        None => tracing::trace!(
                            kind = json_kind(child),
                            "skipping non-object child entry"
                        ),
                    }
                }
            }
            None => out.push(record_from_map(obj)),
        }
    }
    Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
