//! geodiv prelude: bring common types and traits into scope for demos.

pub use crate::common::GeoStats;
pub use crate::engine::{GeoSearch, Status};
pub use crate::error::{GeoError, Result};
pub use crate::model::{
    Coord, GeoRecord, Level, MatchType, SearchOptions, SearchResult, SearchScope,
};
pub use crate::traits::{AdcodeLookup, NameMatch};

#[cfg(feature = "builder")]
pub use crate::loader::builder::CompressionMode;
