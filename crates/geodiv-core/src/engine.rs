// crates/geodiv-core/src/engine.rs
//! The query-facing engine and its load lifecycle.
//!
//! An engine is built in one synchronous pass and ends up either `Loaded`
//! (every query works) or `Failed` (every query returns
//! [`GeoError::NotLoaded`]). There is no reload; a failed instance is
//! replaced by constructing a new one. Nothing mutates after construction,
//! so a `GeoSearch` can be shared across threads freely.

use crate::common::GeoStats;
use crate::error::{GeoError, Result};
use crate::loader;
use crate::model::convert::flatten_dataset;
use crate::model::{GeoIndex, GeoRecord, Level, SearchOptions, SearchResult};
use crate::path;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
enum LoadState {
    Loaded(GeoIndex),
    Failed { reason: String },
}

/// Substring search over one administrative-division dataset.
#[derive(Debug, Clone)]
pub struct GeoSearch {
    state: LoadState,
}

impl GeoSearch {
    /// Builds an engine from an already-parsed dataset.
    ///
    /// Never fails outright: a `null` or non-mapping dataset produces an
    /// instance in [`Status::Failed`]. Use [`GeoSearch::try_new`] to get the
    /// load error instead.
    pub fn new(dataset: &Value) -> Self {
        Self::from_outcome(flatten_dataset(dataset))
    }

    pub fn try_new(dataset: &Value) -> Result<Self> {
        Self::new(dataset).into_result()
    }

    /// Builds an engine from records that are already normalized, e.g. ones
    /// decoded from a snapshot.
    pub fn from_records(records: Vec<GeoRecord>) -> Self {
        Self::from_outcome(Ok(records))
    }

    /// Parses serialized JSON, then builds.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_outcome(
            serde_json::from_slice::<Value>(bytes)
                .map_err(GeoError::from)
                .and_then(|v| flatten_dataset(&v)),
        )
    }

    pub fn from_reader<R: Read>(reader: R) -> Self {
        Self::from_outcome(
            serde_json::from_reader::<_, Value>(reader)
                .map_err(GeoError::from)
                .and_then(|v| flatten_dataset(&v)),
        )
    }

    /// Loads a JSON dataset or binary snapshot from disk (see
    /// [`loader::load_records`]).
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        Self::from_outcome(loader::load_records(path))
    }

    pub fn try_load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_path(path).into_result()
    }

    /// Loads the dataset shipped in this crate's `data/` directory.
    pub fn load_default() -> Self {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "info.json"
    }

    fn from_outcome(outcome: Result<Vec<GeoRecord>>) -> Self {
        let state = match outcome {
            Ok(records) => {
                let index = GeoIndex::from_records(records);
                let stats = index.stats();
                tracing::info!(
                    provinces = stats.provinces,
                    cities = stats.cities,
                    districts = stats.districts,
                    total = stats.total,
                    "geographic index built"
                );
                LoadState::Loaded(index)
            }
            Err(err) => {
                let reason = match err.into_load() {
                    GeoError::Load { reason } => reason,
                    other => other.to_string(),
                };
                tracing::error!(%reason, "geographic dataset failed to load");
                LoadState::Failed { reason }
            }
        };
        GeoSearch { state }
    }

    pub fn status(&self) -> Status {
        match self.state {
            LoadState::Loaded(_) => Status::Loaded,
            LoadState::Failed { .. } => Status::Failed,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status() == Status::Loaded
    }

    /// The error this instance failed with, if it did.
    pub fn load_error(&self) -> Option<GeoError> {
        match &self.state {
            LoadState::Loaded(_) => None,
            LoadState::Failed { reason } => Some(GeoError::load(reason.clone())),
        }
    }

    /// `Ok(self)` when loaded, the load error otherwise.
    pub fn into_result(self) -> Result<Self> {
        match self.load_error() {
            None => Ok(self),
            Some(err) => Err(err),
        }
    }

    /// The underlying index; the gate every query goes through.
    pub fn index(&self) -> Result<&GeoIndex> {
        match &self.state {
            LoadState::Loaded(index) => Ok(index),
            LoadState::Failed { .. } => Err(GeoError::NotLoaded),
        }
    }

    /// Substring search; see [`GeoIndex::search`].
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchResult<'_>>> {
        Ok(self.index()?.search(query, options))
    }

    /// Exact lookup. Non-positive and unknown codes give `Ok(None)`.
    pub fn get_by_code(&self, adcode: i64) -> Result<Option<&GeoRecord>> {
        Ok(self.index()?.get_by_code(adcode))
    }

    /// Exact lookup from text, e.g. a command-line argument. Anything that
    /// does not parse as an integer gives `Ok(None)`.
    pub fn get_by_code_str(&self, adcode: &str) -> Result<Option<&GeoRecord>> {
        let index = self.index()?;
        Ok(adcode
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|code| index.get_by_code(code)))
    }

    /// Exact lookup from a loosely typed value. Only integral JSON numbers
    /// can match.
    pub fn get_by_code_value(&self, adcode: &Value) -> Result<Option<&GeoRecord>> {
        let index = self.index()?;
        let code = adcode.as_i64().or_else(|| {
            adcode
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        });
        Ok(code.and_then(|c| index.get_by_code(c)))
    }

    /// Display path of any record, resolved against this engine's index.
    pub fn resolve_path(&self, record: &GeoRecord) -> Result<String> {
        Ok(path::resolve_path(self.index()?, record))
    }

    pub fn get_stats(&self) -> Result<GeoStats> {
        Ok(self.index()?.stats())
    }

    pub fn records(&self) -> Result<&[GeoRecord]> {
        Ok(self.index()?.records())
    }

    pub fn records_at(&self, level: Level) -> Result<impl Iterator<Item = &GeoRecord> + '_> {
        Ok(self.index()?.records_at(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Value {
        json!({
            "110000": { "name": "Beijing", "adcode": 110000, "level": "province" },
            "110100": {
                "name": "Chaoyang", "adcode": 110100, "level": "city",
                "parent": { "adcode": 110000 }
            }
        })
    }

    #[test]
    fn loads_and_answers() {
        let engine = GeoSearch::new(&dataset());
        assert_eq!(engine.status(), Status::Loaded);
        let hits = engine.search("Chaoyang", &SearchOptions::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_path, "Beijing > Chaoyang");
    }

    #[test]
    fn null_dataset_fails_permanently() {
        assert!(matches!(GeoSearch::try_new(&Value::Null), Err(GeoError::Load { .. })));

        let engine = GeoSearch::new(&Value::Null);
        assert_eq!(engine.status(), Status::Failed);
        assert!(matches!(engine.load_error(), Some(GeoError::Load { .. })));
        assert!(matches!(
            engine.search("x", &SearchOptions::default()),
            Err(GeoError::NotLoaded)
        ));
        assert!(matches!(engine.get_by_code(110000), Err(GeoError::NotLoaded)));
        assert!(matches!(engine.get_stats(), Err(GeoError::NotLoaded)));
        let rec = GeoRecord::new("x", 1, Level::City);
        assert!(matches!(engine.resolve_path(&rec), Err(GeoError::NotLoaded)));
    }

    #[test]
    fn malformed_bytes_fail_to_load() {
        let engine = GeoSearch::from_slice(b"{ not json");
        match engine.load_error() {
            Some(GeoError::Load { reason }) => assert!(reason.contains("JSON")),
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn reader_and_slice_agree() {
        let bytes = serde_json::to_vec(&dataset()).unwrap();
        let a = GeoSearch::from_slice(&bytes);
        let b = GeoSearch::from_reader(bytes.as_slice());
        assert_eq!(a.get_stats().unwrap(), b.get_stats().unwrap());
    }

    #[test]
    fn textual_and_dynamic_codes() {
        let engine = GeoSearch::new(&dataset());
        assert!(engine.get_by_code_str(" 110000 ").unwrap().is_some());
        assert!(engine.get_by_code_str("beijing").unwrap().is_none());
        assert!(engine.get_by_code_str("1.5").unwrap().is_none());
        assert!(engine.get_by_code_value(&json!(110100)).unwrap().is_some());
        assert!(engine.get_by_code_value(&json!(110100.0)).unwrap().is_some());
        assert!(engine.get_by_code_value(&json!("110100")).unwrap().is_none());
        assert!(engine.get_by_code_value(&json!(-1)).unwrap().is_none());
        assert!(engine.get_by_code_value(&json!(null)).unwrap().is_none());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeoSearch>();
    }
}
