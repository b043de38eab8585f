//! Basic usage example for geodiv-rs
//!
//! This example demonstrates how to:
//! - Load the bundled administrative-division dataset
//! - Read per-level statistics
//! - Search one level or all levels by substring
//! - Look a place up by adcode

use geodiv_core::prelude::*;

fn print_hits(hits: &[SearchResult<'_>]) {
    for (i, hit) in hits.iter().enumerate() {
        println!("   {}. {} ({})", i + 1, hit.name(), hit.adcode());
        println!(
            "      center: [{}, {}]",
            hit.record.center.lng, hit.record.center.lat
        );
        println!("      path: {}", hit.full_path);
    }
}

fn main() -> Result<()> {
    println!("=== geodiv-rs Basic Usage Example ===\n");

    let engine = GeoSearch::load_default().into_result()?;

    // Example 1: Statistics
    println!("--- Example 1: Dataset statistics ---");
    let stats = engine.get_stats()?;
    println!("   provinces: {}", stats.provinces);
    println!("   cities:    {}", stats.cities);
    println!("   districts: {}", stats.districts);
    println!("   total:     {}\n", stats.total);

    // Example 2: One level at a time
    println!("--- Example 2: Search provinces for \"广东\" ---");
    print_hits(&engine.search("广东", &SearchOptions::scoped(Level::Province))?);
    println!();

    println!("--- Example 3: Search cities for \"深圳\" ---");
    print_hits(&engine.search("深圳", &SearchOptions::scoped(Level::City))?);
    println!();

    println!("--- Example 4: Search districts for \"朝阳\" ---");
    print_hits(&engine.search("朝阳", &SearchOptions::scoped(Level::District))?);
    println!();

    // Example 5: Every level
    println!("--- Example 5: Search all levels for \"北京\" ---");
    for (i, hit) in engine.search("北京", &SearchOptions::default())?.iter().enumerate() {
        println!("   {}. {} ({}) - {}", i + 1, hit.name(), hit.level(), hit.adcode());
        println!("      path: {}", hit.full_path);
    }
    println!();

    // Example 6: Exact lookup
    println!("--- Example 6: Lookup adcode 110000 ---");
    match engine.get_by_code(110000)? {
        Some(rec) => {
            println!("   name:     {}", rec.name);
            println!("   level:    {}", rec.level);
            println!("   center:   [{}, {}]", rec.center.lng, rec.center.lat);
            println!("   children: {}", rec.child_count);
        }
        None => println!("   not found"),
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
