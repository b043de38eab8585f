//! Advanced usage example for geodiv-rs
//!
//! Client-side patterns built on top of the engine: batch queries, grouping
//! results by level, and filtering by a coordinate bounding box. The engine
//! itself has no geospatial queries; the box filter is plain caller code.

use geodiv_core::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;

/// Longitude/latitude rectangle, inclusive on every edge.
struct BoundingBox {
    min: Coord,
    max: Coord,
}

impl BoundingBox {
    fn contains(&self, c: Coord) -> bool {
        (self.min.lng..=self.max.lng).contains(&c.lng)
            && (self.min.lat..=self.max.lat).contains(&c.lat)
    }
}

fn main() -> Result<()> {
    println!("=== geodiv-rs Advanced Usage Example ===\n");

    let engine = GeoSearch::load_default().into_result()?;
    let all = SearchOptions::default();

    // 1. Batch queries
    println!("--- 1. Batch search ---");
    for q in ["北京", "上海", "广州", "深圳", "朝阳"] {
        println!("   {q}: {} results", engine.search(q, &all)?.len());
    }
    println!();

    // 2. Group hits by level
    println!("--- 2. Results for \"区\" grouped by level ---");
    let mut by_level: BTreeMap<&str, usize> = BTreeMap::new();
    for hit in engine.search("区", &all)? {
        *by_level.entry(hit.level().as_str()).or_default() += 1;
    }
    for (level, count) in &by_level {
        println!("   {level}: {count}");
    }
    println!();

    // 3. Bounding box around Beijing (lng 115-117, lat 39-41)
    println!("--- 3. Bounding box lng 115..117, lat 39..41 ---");
    let bbox = BoundingBox {
        min: Coord::new(115.0, 39.0),
        max: Coord::new(117.0, 41.0),
    };
    let inside: Vec<_> = engine
        .records()?
        .iter()
        .filter(|r| bbox.contains(r.center))
        .collect();
    println!("   {} places inside", inside.len());
    for rec in inside {
        println!(
            "   - {} [{}, {}]  {}",
            rec.name,
            rec.center.lng,
            rec.center.lat,
            engine.resolve_path(rec)?
        );
    }
    println!();

    // 4. Throughput
    println!("--- 4. Timing ---");
    let queries = ["北京", "上海", "广州", "深圳", "杭州", "成都", "武汉", "西安", "南京", "重庆"];
    let start = Instant::now();
    for q in queries {
        engine.search(q, &all)?;
    }
    let elapsed = start.elapsed();
    println!("   {} queries in {:?} ({:?} each)", queries.len(), elapsed, elapsed / queries.len() as u32);
    println!();

    // 5. Integrity
    println!("--- 5. Level tables vs. flat list ---");
    let stats = engine.get_stats()?;
    println!(
        "   {} + {} + {} of {} records indexed by level ({} unclassified)",
        stats.provinces,
        stats.cities,
        stats.districts,
        stats.total,
        stats.unclassified()
    );

    Ok(())
}
