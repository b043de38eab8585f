// crates/geodiv-core/src/error.rs
use thiserror::Error;

/// Errors raised by the geodiv engine and its loaders.
///
/// Only [`GeoError::Load`] and [`GeoError::NotLoaded`] ever reach callers of
/// the query surface. The remaining variants describe I/O and codec failures
/// inside the loader; the engine folds them into `Load` when it is built.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The dataset was missing, not a mapping, or could not be parsed.
    #[error("geographic dataset failed to load: {reason}")]
    Load { reason: String },

    /// A query was issued against an instance that never finished loading.
    #[error("geographic data is not loaded; the search service is unavailable")]
    NotLoaded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot codec error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl GeoError {
    pub(crate) fn load(reason: impl Into<String>) -> Self {
        GeoError::Load {
            reason: reason.into(),
        }
    }

    /// Wraps any other error as a load failure, keeping its message.
    pub(crate) fn into_load(self) -> Self {
        match self {
            GeoError::Load { .. } => self,
            other => GeoError::load(other.to_string()),
        }
    }
}

/// Historical alias kept for callers that spell it the long way.
pub type GeoDbError = GeoError;

pub type Result<T> = std::result::Result<T, GeoError>;
