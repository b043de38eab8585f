// crates/geodiv-core/src/model/mod.rs
pub mod convert;
pub mod index;
pub mod record;
pub mod search;

pub use index::{GeoIndex, LevelTable};
pub use record::{Coord, GeoRecord, Level, ParentRef};
pub use search::{MatchType, SearchOptions, SearchResult, SearchScope};

#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = ".bin.gz";
