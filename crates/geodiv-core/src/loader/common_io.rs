// crates/geodiv-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn is_gzip(path: &Path) -> bool {
    file_name(path).ends_with(".gz")
}

/// `*.bin` and `*.bin.gz` files hold binary snapshots; anything else is JSON.
pub fn is_snapshot(path: &Path) -> bool {
    let name = file_name(path);
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("{}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), gzip = is_gzip(path), "opening dataset");

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
