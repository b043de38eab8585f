// crates/geodiv-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative level of a record.
///
/// Anything the source labels with a value other than the three known tiers
/// (or does not label at all) becomes [`Level::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    City,
    District,
    Unknown,
}

impl Level {
    pub const INDEXED: [Level; 3] = [Level::Province, Level::City, Level::District];

    /// Strict parse of a source label. Returns `Unknown` for anything else.
    pub fn from_label(label: &str) -> Self {
        match label {
            "province" => Level::Province,
            "city" => Level::City,
            "district" => Level::District,
            _ => Level::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::City => "city",
            Level::District => "district",
            Level::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::from_label(s))
    }
}

/// Longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coord {
    pub lng: f64,
    pub lat: f64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { lng: 0.0, lat: 0.0 };

    pub fn new(lng: f64, lat: f64) -> Self {
        Coord { lng, lat }
    }
}

impl From<[f64; 2]> for Coord {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Coord { lng, lat }
    }
}

impl From<Coord> for [f64; 2] {
    fn from(c: Coord) -> Self {
        [c.lng, c.lat]
    }
}

/// Back-reference to the immediate administrative parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub adcode: i64,
}

/// A normalized administrative division.
///
/// Built once by [`crate::model::convert::normalize_entry`] and never mutated
/// afterwards. Serializes to the same camelCase shape the source uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    pub name: String,
    pub adcode: i64,
    pub level: Level,
    pub center: Coord,
    pub centroid: Coord,
    #[serde(rename = "parent")]
    pub parent_ref: Option<ParentRef>,
    #[serde(rename = "acroutes")]
    pub ancestor_routes: Vec<i64>,
    #[serde(rename = "childrenNum")]
    pub child_count: i64,
    pub sub_feature_index: i64,
}

impl GeoRecord {
    /// A record carrying only the identifying fields; everything else takes
    /// its normalizer default.
    pub fn new(name: impl Into<String>, adcode: i64, level: Level) -> Self {
        GeoRecord {
            name: name.into(),
            adcode,
            level,
            center: Coord::ORIGIN,
            centroid: Coord::ORIGIN,
            parent_ref: None,
            ancestor_routes: Vec::new(),
            child_count: 0,
            sub_feature_index: 0,
        }
    }

    pub fn with_parent(mut self, adcode: i64) -> Self {
        self.parent_ref = Some(ParentRef { adcode });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_adcode(&self) -> Option<i64> {
        self.parent_ref.map(|p| p.adcode)
    }
}
