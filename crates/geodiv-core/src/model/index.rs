// crates/geodiv-core/src/model/index.rs
use super::record::{GeoRecord, Level};
use crate::common::GeoStats;
use crate::path;
use crate::text::collation_key;
use crate::traits::AdcodeLookup;
use std::collections::HashMap;

/// One level's adcode table.
///
/// Behaves like an insertion-ordered map: a repeated adcode replaces the
/// stored record id but keeps the slot of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct LevelTable {
    by_code: HashMap<i64, usize>,
    order: Vec<i64>,
}

impl LevelTable {
    fn insert(&mut self, adcode: i64, id: usize) {
        if self.by_code.insert(adcode, id).is_none() {
            self.order.push(adcode);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, adcode: i64) -> Option<usize> {
        self.by_code.get(&adcode).copied()
    }

    /// Record ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().filter_map(|code| self.by_code.get(code).copied())
    }
}

/// The tiered index: three level tables over one flat record list.
///
/// Built once from normalized records and read-only afterwards. Record ids
/// are positions in `records`; `full_paths` and `sort_keys` are parallel to
/// it and filled at build time.
#[derive(Debug, Clone, Default)]
pub struct GeoIndex {
    /// Every normalized record, in source traversal order.
    records: Vec<GeoRecord>,
    provinces: LevelTable,
    cities: LevelTable,
    districts: LevelTable,
    full_paths: Vec<String>,
    sort_keys: Vec<String>,
}

impl GeoIndex {
    pub fn from_records(records: Vec<GeoRecord>) -> Self {
        let mut provinces = LevelTable::default();
        let mut cities = LevelTable::default();
        let mut districts = LevelTable::default();

        for (id, rec) in records.iter().enumerate() {
            let table = match rec.level {
                Level::Province => &mut provinces,
                Level::City => &mut cities,
                Level::District => &mut districts,
                Level::Unknown => continue,
            };
            table.insert(rec.adcode, id);
        }

        let mut index = GeoIndex {
            records,
            provinces,
            cities,
            districts,
            full_paths: Vec::new(),
            sort_keys: Vec::new(),
        };

        let full_paths = index
            .records
            .iter()
            .map(|rec| path::resolve_path(&index, rec))
            .collect();
        let sort_keys = index
            .records
            .iter()
            .map(|rec| collation_key(&rec.name))
            .collect();
        index.full_paths = full_paths;
        index.sort_keys = sort_keys;

        index
    }

    pub fn table(&self, level: Level) -> Option<&LevelTable> {
        match level {
            Level::Province => Some(&self.provinces),
            Level::City => Some(&self.cities),
            Level::District => Some(&self.districts),
            Level::Unknown => None,
        }
    }

    /// All records in source order, including unknown-level ones.
    pub fn records(&self) -> &[GeoRecord] {
        &self.records
    }

    /// One level's records in table order. Empty for [`Level::Unknown`].
    pub fn records_at(&self, level: Level) -> impl Iterator<Item = &GeoRecord> + '_ {
        self.table(level)
            .into_iter()
            .flat_map(LevelTable::ids)
            .map(move |id| &self.records[id])
    }

    pub fn record(&self, id: usize) -> Option<&GeoRecord> {
        self.records.get(id)
    }

    pub(crate) fn full_path(&self, id: usize) -> &str {
        &self.full_paths[id]
    }

    pub(crate) fn sort_key(&self, id: usize) -> &str {
        &self.sort_keys[id]
    }

    /// Exact lookup; province table first, then city, then district.
    pub fn get_by_code(&self, adcode: i64) -> Option<&GeoRecord> {
        self.lookup(adcode)
    }

    pub fn stats(&self) -> GeoStats {
        GeoStats {
            provinces: self.provinces.len(),
            cities: self.cities.len(),
            districts: self.districts.len(),
            total: self.records.len(),
        }
    }
}

impl AdcodeLookup for GeoIndex {
    fn lookup_in(&self, level: Level, adcode: i64) -> Option<&GeoRecord> {
        self.table(level)?.get(adcode).map(|id| &self.records[id])
    }
}
