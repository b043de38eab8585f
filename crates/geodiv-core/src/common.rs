use serde::{Deserialize, Serialize};

/// Per-level record counts of a loaded index.
///
/// `total` counts every normalized record, including records whose level was
/// not recognized. Those are kept in the flat list but in no level table, so
/// `provinces + cities + districts <= total` and callers must not assume
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoStats {
    pub provinces: usize,
    pub cities: usize,
    pub districts: usize,
    pub total: usize,
}

impl GeoStats {
    /// Records that sit in the flat list only.
    pub fn unclassified(&self) -> usize {
        self.total
            .saturating_sub(self.provinces + self.cities + self.districts)
    }
}
