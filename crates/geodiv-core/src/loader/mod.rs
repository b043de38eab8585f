// crates/geodiv-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers: JSON datasets go through the normalizer, binary snapshots
//! are decoded straight into records.

use crate::error::{GeoError, Result};
use crate::model::convert::flatten_dataset;
use crate::model::GeoRecord;
use bincode::Options;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

/// Bumped whenever [`GeoRecord`]'s binary layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Refuse snapshots that would decode to more than this many bytes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub version: u32,
    pub records: Vec<GeoRecord>,
}

pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

/// Reads and parses a JSON dataset (`.json` or `.json.gz`).
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Value> {
    let reader = common_io::open_stream(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes a binary snapshot written by [`builder::write_snapshot`].
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Vec<GeoRecord>> {
    let mut reader = common_io::open_stream(path.as_ref())?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_snapshot(&data)
}

pub(crate) fn decode_snapshot(data: &[u8]) -> Result<Vec<GeoRecord>> {
    let snapshot: Snapshot = snapshot_options().deserialize(data)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(GeoError::InvalidData(format!(
            "snapshot version {} is not supported (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }
    Ok(snapshot.records)
}

/// Loads normalized records from any supported file, choosing the parser by
/// file name.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<GeoRecord>> {
    let path = path.as_ref();
    if common_io::is_snapshot(path) {
        read_snapshot(path)
    } else {
        flatten_dataset(&read_dataset(path)?)
    }
}
