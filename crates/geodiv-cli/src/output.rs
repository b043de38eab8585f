//! Plain-text rendering of query results.

use anyhow::bail;
use geodiv_core::{GeoRecord, GeoSearch, GeoStats, SearchResult};
use std::fmt::Write;

fn coords(rec: &GeoRecord) -> String {
    format!("[{}, {}]", rec.center.lng, rec.center.lat)
}

/// One line per hit: `name (level, adcode)  path  [lng, lat]`.
pub fn result_line(hit: &SearchResult<'_>) -> String {
    format!(
        "{} ({}, {})  {}  {}",
        hit.name(),
        hit.level(),
        hit.adcode(),
        hit.full_path,
        coords(hit.record)
    )
}

pub fn record_details(rec: &GeoRecord, path: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", rec.name);
    let _ = writeln!(out, "Adcode: {}", rec.adcode);
    let _ = writeln!(out, "Level: {}", rec.level);
    let _ = writeln!(out, "Path: {path}");
    let _ = writeln!(out, "Center: {}", coords(rec));
    let _ = writeln!(out, "Centroid: [{}, {}]", rec.centroid.lng, rec.centroid.lat);
    if let Some(parent) = rec.parent_adcode() {
        let _ = writeln!(out, "Parent: {parent}");
    }
    let _ = write!(out, "Children: {}", rec.child_count);
    out
}

/// Renders the record behind `adcode` as details or JSON. An adcode that
/// matches nothing is an error so the process exits non-zero.
pub fn code_report(engine: &GeoSearch, adcode: &str, json: bool) -> anyhow::Result<String> {
    let Some(rec) = engine.get_by_code_str(adcode)? else {
        bail!("No place found for adcode: {adcode}");
    };
    if json {
        return Ok(serde_json::to_string_pretty(rec)?);
    }
    let path = engine.resolve_path(rec)?;
    Ok(record_details(rec, &path))
}

pub fn stats_block(stats: &GeoStats) -> String {
    let mut out = String::from("Database statistics:\n");
    let _ = writeln!(out, "  Provinces: {}", stats.provinces);
    let _ = writeln!(out, "  Cities: {}", stats.cities);
    let _ = writeln!(out, "  Districts: {}", stats.districts);
    let _ = write!(out, "  Total: {}", stats.total);
    if stats.unclassified() > 0 {
        let _ = write!(out, " ({} without a known level)", stats.unclassified());
    }
    out
}
