// crates/geodiv-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::{snapshot_options, SNAPSHOT_VERSION};
use crate::engine::GeoSearch;
use crate::error::{GeoError, Result};
use crate::model::GeoRecord;
use bincode::Options;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Borrowing twin of `Snapshot`; encodes to the same bytes.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    records: &'a [GeoRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the crate can write it, plain otherwise.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }

    /// The mode the loader will expect for `path`: gzip iff the name ends
    /// in `.gz`.
    pub fn for_path(path: &Path) -> Self {
        if super::common_io::is_gzip(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Normalizes `source_path` once and writes the records as a snapshot.
/// Returns the number of records written.
pub fn build_snapshot(
    source_path: &Path,
    out_path: &Path,
    compression: CompressionMode,
) -> Result<usize> {
    tracing::info!(
        source = %source_path.display(),
        out = %out_path.display(),
        ?compression,
        "building snapshot"
    );
    let records = super::load_records(source_path)?;
    write_snapshot(out_path, &records, compression)?;
    Ok(records.len())
}

/// Writes records to disk in the snapshot format read by
/// [`super::read_snapshot`].
///
/// `compression` must agree with the file name (see
/// [`CompressionMode::for_path`]); otherwise nothing is written and
/// `InvalidData` is returned, since the loader picks its decoder by name.
pub fn write_snapshot(
    path: &Path,
    records: &[GeoRecord],
    compression: CompressionMode,
) -> Result<()> {
    let expected = CompressionMode::for_path(path);
    if compression != expected {
        return Err(GeoError::InvalidData(format!(
            "{} needs {:?} compression, got {:?}",
            path.display(),
            expected,
            compression
        )));
    }

    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        records,
    };
    let mut writer = BufWriter::new(File::create(path)?);

    match compression {
        CompressionMode::None => {
            snapshot_options().serialize_into(&mut writer, &snapshot)?;
        }
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            let mut encoder = GzEncoder::new(&mut writer, Compression::default());
            snapshot_options().serialize_into(&mut encoder, &snapshot)?;
            encoder.finish()?;
        }
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(GeoError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    writer.flush()?;
    tracing::debug!(path = %path.display(), records = records.len(), "snapshot written");
    Ok(())
}

impl GeoSearch {
    /// Persists the loaded records so later runs can skip normalization.
    pub fn save_snapshot(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        write_snapshot(path.as_ref(), self.records()?, compression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_snapshot;
    use crate::model::Level;

    fn records() -> Vec<GeoRecord> {
        vec![
            GeoRecord::new("北京市", 110000, Level::Province),
            GeoRecord::new("朝阳区", 110105, Level::District).with_parent(110100),
            GeoRecord::new("海外", 900000, Level::Unknown),
        ]
    }

    #[test]
    fn plain_snapshot_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.bin");
        write_snapshot(&path, &records(), CompressionMode::None).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), records());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.bin.gz");
        write_snapshot(&path, &records(), CompressionMode::Gzip).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), records());
    }

    #[test]
    fn mode_follows_the_file_name() {
        assert_eq!(CompressionMode::for_path(Path::new("a.bin")), CompressionMode::None);
        assert_eq!(CompressionMode::for_path(Path::new("a.BIN.GZ")), CompressionMode::Gzip);
    }

    #[test]
    fn mode_and_name_must_agree() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("geo.bin");
        let err = write_snapshot(&plain, &records(), CompressionMode::Gzip).unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));
        assert!(!plain.exists());

        let gz = dir.path().join("geo.bin.gz");
        let err = write_snapshot(&gz, &records(), CompressionMode::None).unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));
        assert!(!gz.exists());
    }

    #[test]
    fn failed_engine_has_nothing_to_save() {
        let dir = tempfile::tempdir().unwrap();
        let engine = GeoSearch::new(&serde_json::Value::Null);
        let err = engine
            .save_snapshot(dir.path().join("x.bin"), CompressionMode::None)
            .unwrap_err();
        assert!(matches!(err, GeoError::NotLoaded));
    }
}
