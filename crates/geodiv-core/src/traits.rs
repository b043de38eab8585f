// crates/geodiv-core/src/traits.rs
use crate::model::{GeoRecord, Level};

/// Name-based matching for types that expose a canonical display name.
///
/// Matching is literal: case-sensitive substring containment,
/// no folding. Only ordering is locale-aware (see [`crate::text`]).
///
/// # Examples
/// ```rust
/// use geodiv_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("朝阳区").name_contains("朝阳"));
/// assert!(!Place("Chaoyang").name_contains("chaoyang"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str().contains(q)
    }
}

impl NameMatch for GeoRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Exact lookup by administrative code.
///
/// The path resolver is written against this trait rather than against the
/// index, so any source of records keyed by adcode can feed it.
pub trait AdcodeLookup {
    /// Looks `adcode` up in one level's table.
    fn lookup_in(&self, level: Level, adcode: i64) -> Option<&GeoRecord>;

    /// Looks `adcode` up across levels: province, then city, then district.
    /// Non-positive codes never match.
    fn lookup(&self, adcode: i64) -> Option<&GeoRecord> {
        if adcode <= 0 {
            return None;
        }
        Level::INDEXED
            .iter()
            .find_map(|level| self.lookup_in(*level, adcode))
    }
}
