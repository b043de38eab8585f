#![allow(unused)]
//! Shared fixtures for the geodiv-core integration tests.

use geodiv_core::prelude::*;
use serde_json::{json, Value};

/// The dataset bundled with the crate.
pub const BUNDLED: &str = include_str!("../../data/info.json");

pub fn bundled_value() -> Value {
    serde_json::from_str(BUNDLED).expect("bundled dataset is valid JSON")
}

pub fn bundled() -> GeoSearch {
    GeoSearch::try_new(&bundled_value()).expect("bundled dataset loads")
}

/// A small mixed-shape dataset: flat entries, a wrapper with children,
/// junk entries, and one record with an unrecognized level.
pub fn mixed_value() -> Value {
    json!({
        "110000": {
            "name": "Beijing", "adcode": 110000, "level": "province",
            "center": [116.405285, 39.904989]
        },
        "110100": {
            "name": "Chaoyang", "adcode": 110100, "level": "city",
            "parent": { "adcode": 110000 }
        },
        "wrap": {
            "name": "ignored wrapper", "adcode": 1, "level": "province",
            "children": [
                { "name": "Haidian", "adcode": 110108, "level": "district",
                  "parent": { "adcode": 110100 } },
                { "name": "Chaoyang", "adcode": 220104, "level": "district",
                  "parent": { "adcode": 220100 } },
                "not an object",
                { "name": "Orphan Town", "adcode": 990101, "level": "district",
                  "parent": { "adcode": 990100 } }
            ]
        },
        "overseas": { "name": "Overseas Chinese", "adcode": 900000, "level": "overseas" },
        "nothing": null,
        "number": 5
    })
}

pub fn mixed() -> GeoSearch {
    GeoSearch::try_new(&mixed_value()).expect("mixed dataset loads")
}

pub fn all() -> SearchOptions {
    SearchOptions::default()
}
