//! End-to-end behaviour of the query surface against the fixtures.

mod common;
use common::*;
use geodiv_core::prelude::*;
use geodiv_core::text::compare_names;

#[test]
fn chaoyang_scenario_builds_the_parent_path() {
    let engine = GeoSearch::try_new(&serde_json::json!({
        "a": { "name": "Beijing", "adcode": 110000, "level": "province" },
        "b": { "name": "Chaoyang", "adcode": 110100, "level": "city",
               "parent": { "adcode": 110000 } }
    }))
    .unwrap();

    let hits = engine.search("Chaoyang", &all()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_path, "Beijing > Chaoyang");
}

#[test]
fn empty_and_unknown_queries_return_nothing() {
    let engine = mixed();
    assert!(engine.search("", &all()).unwrap().is_empty());
    assert!(engine.search("zz_no_such_place", &all()).unwrap().is_empty());
}

#[test]
fn absent_code_is_none() {
    let engine = mixed();
    assert!(engine.get_by_code(999999).unwrap().is_none());
}

#[test]
fn null_dataset_scenario() {
    let err = GeoSearch::try_new(&serde_json::Value::Null).unwrap_err();
    assert!(matches!(err, GeoError::Load { .. }));

    let engine = GeoSearch::new(&serde_json::Value::Null);
    assert!(matches!(engine.search("Beijing", &all()), Err(GeoError::NotLoaded)));
}

#[test]
fn stats_count_unrecognized_levels_in_total_only() {
    let stats = mixed().get_stats().unwrap();
    assert_eq!(stats.provinces, 1);
    assert_eq!(stats.cities, 1);
    assert_eq!(stats.districts, 3);
    assert_eq!(stats.total, 6);
    assert!(stats.provinces + stats.cities + stats.districts < stats.total);
}

#[test]
fn wrapper_is_not_a_record() {
    let engine = mixed();
    assert!(engine.search("ignored wrapper", &all()).unwrap().is_empty());
    assert!(engine.get_by_code(1).unwrap().is_none());
}

#[test]
fn invalid_scope_scans_everything() {
    let engine = mixed();
    let everything = engine.search("a", &all()).unwrap();
    let invalid = engine.search("a", &SearchOptions::scoped("invalid")).unwrap();
    assert_eq!(everything, invalid);
    assert!(everything.iter().any(|h| h.level() == Level::Unknown));
}

#[test]
fn level_scope_filters_results() {
    let engine = mixed();
    let cities = engine.search("Chaoyang", &SearchOptions::scoped("city")).unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].adcode(), 110100);

    let districts = engine.search("Chaoyang", &SearchOptions::scoped(Level::District)).unwrap();
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].adcode(), 220104);
}

#[test]
fn paths_degrade_at_the_first_missing_ancestor() {
    let engine = mixed();
    let haidian = engine.search("Haidian", &all()).unwrap();
    assert_eq!(haidian[0].full_path, "Beijing > Chaoyang > Haidian");

    let orphan = engine.search("Orphan", &all()).unwrap();
    assert_eq!(orphan[0].full_path, "Orphan Town");
}

#[test]
fn resolve_path_works_for_records_outside_the_index() {
    let engine = mixed();
    let probe = GeoRecord::new("Sanlitun", 110105001, Level::Unknown).with_parent(110100);
    assert_eq!(engine.resolve_path(&probe).unwrap(), "Beijing > Chaoyang > Sanlitun");
}

#[test]
fn records_at_lists_one_level() {
    let engine = mixed();
    let names: Vec<_> = engine
        .records_at(Level::District)
        .unwrap()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Haidian", "Chaoyang", "Orphan Town"]);
    assert_eq!(engine.records_at(Level::Unknown).unwrap().count(), 0);
}

#[test]
fn bundled_dataset_counts() {
    let stats = bundled().get_stats().unwrap();
    assert_eq!(
        (stats.provinces, stats.cities, stats.districts, stats.total),
        (5, 4, 9, 18)
    );
}

#[test]
fn bundled_chaoyang_spans_three_levels_of_paths() {
    let engine = bundled();
    let hits = engine.search("朝阳", &all()).unwrap();
    let paths: Vec<_> = hits.iter().map(|h| h.full_path).collect();
    assert_eq!(hits.len(), 3);
    assert!(paths.contains(&"北京市 > 朝阳区"));
    assert!(paths.contains(&"吉林省 > 长春市 > 朝阳区"));
    assert!(paths.contains(&"辽宁省 > 朝阳市"));
    assert!(hits
        .windows(2)
        .all(|w| compare_names(w[0].name(), w[1].name()).is_le()));

    let districts = engine.search("朝阳", &SearchOptions::scoped("district")).unwrap();
    assert_eq!(districts.len(), 2);
}

#[test]
fn bundled_shenzhen_district_has_full_path() {
    let engine = bundled();
    let nanshan = engine.get_by_code(440305).unwrap().unwrap();
    assert_eq!(engine.resolve_path(nanshan).unwrap(), "广东省 > 深圳市 > 南山区");
    assert_eq!(nanshan.center, Coord::new(113.92943, 22.531221));
}

#[test]
fn results_sort_by_collation_not_code_point() {
    let engine = GeoSearch::try_new(&serde_json::json!([
        { "name": "Zürich", "adcode": 1, "level": "city" },
        { "name": "avenue", "adcode": 2, "level": "city" },
        { "name": "Bavaria", "adcode": 3, "level": "province" }
    ]))
    .unwrap();
    let names: Vec<_> = engine
        .search("a", &all())
        .unwrap()
        .iter()
        .map(|h| h.name())
        .collect();
    assert_eq!(names, ["avenue", "Bavaria"]);

    let names: Vec<_> = engine
        .search("r", &all())
        .unwrap()
        .iter()
        .map(|h| h.name())
        .collect();
    assert_eq!(names, ["Bavaria", "Zürich"]);

    let names: Vec<_> = engine
        .search("u", &all())
        .unwrap()
        .iter()
        .map(|h| h.name())
        .collect();
    assert_eq!(names, ["avenue"]);
}

#[test]
fn names_differing_only_in_case_put_lowercase_first() {
    let engine = GeoSearch::try_new(&serde_json::json!([
        { "name": "Paris", "adcode": 1, "level": "city" },
        { "name": "paris", "adcode": 2, "level": "city" }
    ]))
    .unwrap();
    let names: Vec<_> = engine
        .search("aris", &all())
        .unwrap()
        .iter()
        .map(|h| h.name())
        .collect();
    assert_eq!(names, ["paris", "Paris"]);
}

#[test]
fn concurrent_readers_see_identical_results() {
    let engine = bundled();
    let expected = engine.search("区", &all()).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(engine.search("区", &all()).unwrap(), expected);
            });
        }
    });
}

#[test]
fn engines_are_independent() {
    let a = bundled();
    let b = GeoSearch::new(&serde_json::Value::Null);
    assert!(a.is_loaded());
    assert!(!b.is_loaded());
    assert_eq!(a.get_stats().unwrap().total, 18);
}
