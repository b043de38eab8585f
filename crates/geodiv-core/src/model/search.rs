// crates/geodiv-core/src/model/search.rs
use super::index::GeoIndex;
use super::record::{GeoRecord, Level};
use crate::text::compare_keyed;
use crate::traits::NameMatch;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which records a search scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SearchScope {
    #[default]
    All,
    Level(Level),
}

impl SearchScope {
    /// Lenient parse: `province`, `city` and `district` select a level,
    /// everything else (including `all` and typos) scans every record.
    pub fn parse_lenient(s: &str) -> Self {
        match Level::from_label(s) {
            Level::Unknown => SearchScope::All,
            level => SearchScope::Level(level),
        }
    }
}

impl FromStr for SearchScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SearchScope::parse_lenient(s))
    }
}

impl From<&str> for SearchScope {
    fn from(s: &str) -> Self {
        SearchScope::parse_lenient(s)
    }
}

impl From<Level> for SearchScope {
    fn from(level: Level) -> Self {
        match level {
            Level::Unknown => SearchScope::All,
            level => SearchScope::Level(level),
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::All => f.write_str("all"),
            SearchScope::Level(level) => level.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub scope: SearchScope,
}

impl SearchOptions {
    pub fn scoped(scope: impl Into<SearchScope>) -> Self {
        SearchOptions {
            scope: scope.into(),
        }
    }
}

/// How a result matched. Containment is the only matcher there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Contains,
}

/// A matching record with its display path.
///
/// Serializes as the record's own fields plus `similarity`, `matchType` and
/// `fullPath`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub record: &'a GeoRecord,
    pub similarity: f64,
    pub match_type: MatchType,
    pub full_path: &'a str,
}

impl<'a> SearchResult<'a> {
    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    pub fn adcode(&self) -> i64 {
        self.record.adcode
    }

    pub fn level(&self) -> Level {
        self.record.level
    }
}

impl GeoIndex {
    fn scan_ids(&self, scope: SearchScope) -> Box<dyn Iterator<Item = usize> + '_> {
        match scope {
            SearchScope::Level(level) => match self.table(level) {
                Some(table) => Box::new(table.ids()),
                None => Box::new(0..self.records().len()),
            },
            SearchScope::All => Box::new(0..self.records().len()),
        }
    }

    /// Case-sensitive substring search over names.
    ///
    /// The query is trimmed first; a blank query matches nothing. Results are
    /// unique by adcode (first hit in scan order wins) and ordered by name
    /// with [`crate::text::compare_names`] semantics.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult<'_>> {
        let q = query.trim();
        if q.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut hits: Vec<usize> = self
            .scan_ids(options.scope)
            .filter(|&id| self.records()[id].name_contains(q))
            .filter(|&id| seen.insert(self.records()[id].adcode))
            .collect();

        hits.sort_by(|&a, &b| {
            compare_keyed(
                (self.sort_key(a), self.records()[a].name.as_str()),
                (self.sort_key(b), self.records()[b].name.as_str()),
            )
        });

        tracing::trace!(query = q, scope = %options.scope, hits = hits.len(), "search");

        hits.into_iter()
            .map(|id| SearchResult {
                record: &self.records()[id],
                similarity: 1.0,
                match_type: MatchType::Contains,
                full_path: self.full_path(id),
            })
            .collect()
    }
}
