//! Error handling example for geodiv-rs
//!
//! Only two things are errors: a dataset that fails to load, and querying an
//! instance that never loaded. Bad queries and bad codes are not errors.

use geodiv_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geodiv-rs Error Handling Example ===\n");

    // Example 1: Loading failures
    println!("--- Example 1: Datasets that fail to load ---");
    for (label, bytes) in [
        ("null", &b"null"[..]),
        ("a number", &b"42"[..]),
        ("truncated JSON", &b"{\"110000\": "[..]),
    ] {
        let engine = GeoSearch::from_slice(bytes);
        match engine.load_error() {
            Some(err) => println!("  {label}: {err}"),
            None => println!("  {label}: loaded?"),
        }

        // Example 2: The instance stays unusable
        match engine.search("北京", &SearchOptions::default()) {
            Err(GeoError::NotLoaded) => println!("    search -> {}", GeoError::NotLoaded),
            other => println!("    search -> unexpected {other:?}"),
        }
    }
    println!();

    match GeoSearch::load_from_path("/no/such/info.json").into_result() {
        Ok(_) => println!("  missing file loaded?"),
        Err(e) => println!("  missing file: {e}\n"),
    }

    let engine = GeoSearch::load_default().into_result()?;

    // Example 3: Inputs that degrade to empty results
    println!("--- Example 3: Lenient inputs ---");
    println!("  search(\"\")          -> {} results", engine.search("", &SearchOptions::default())?.len());
    println!(
        "  search(\"北京\", type=invalid) -> {} results",
        engine.search("北京", &SearchOptions::scoped("invalid"))?.len()
    );
    for code in [999_999, 0, -1] {
        println!("  get_by_code({code}) -> {:?}", engine.get_by_code(code)?.map(|r| &r.name));
    }
    println!(
        "  get_by_code_str(\"abc\") -> {:?}",
        engine.get_by_code_str("abc")?.map(|r| &r.name)
    );

    Ok(())
}
