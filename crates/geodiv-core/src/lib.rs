// crates/geodiv-core/src/lib.rs
//! # geodiv-core
//!
//! Substring lookup over a static province / city / district dataset.
//!
//! The dataset is normalized once into [`GeoRecord`]s, indexed by level and
//! adcode, and queried through [`GeoSearch`]:
//!
//! ```rust
//! use geodiv_core::prelude::*;
//! use serde_json::json;
//!
//! let engine = GeoSearch::try_new(&json!({
//!     "110000": { "name": "Beijing", "adcode": 110000, "level": "province" },
//!     "110100": {
//!         "name": "Chaoyang", "adcode": 110100, "level": "city",
//!         "parent": { "adcode": 110000 }
//!     }
//! }))?;
//!
//! let hits = engine.search("Chaoyang", &SearchOptions::default())?;
//! assert_eq!(hits[0].full_path, "Beijing > Chaoyang");
//! # Ok::<(), geodiv_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod path;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::GeoStats;
pub use crate::engine::{GeoSearch, Status};
pub use crate::error::{GeoDbError, GeoError, Result};
pub use crate::model::{
    Coord, GeoIndex, GeoRecord, Level, MatchType, ParentRef, SearchOptions, SearchResult,
    SearchScope,
};
pub use crate::path::PATH_SEPARATOR;
