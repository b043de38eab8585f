// crates/geodiv-core/src/path.rs
//! Display paths such as `北京市 > 北京城区 > 朝阳区`.
//!
//! Ancestry is not stored as a tree. Each record only knows its parent's
//! adcode, so a path is rebuilt by chained lookups. The walk stops after two
//! ancestors (province > city > district is the deepest chain the data has)
//! and stops early at the first code that does not resolve.

use crate::model::GeoRecord;
use crate::traits::AdcodeLookup;

pub const PATH_SEPARATOR: &str = " > ";

/// Number of ancestors the walk will visit above the record itself.
pub const MAX_ANCESTOR_DEPTH: usize = 2;

/// Names from the root-most resolved ancestor down to `record` itself.
pub fn ancestor_names<'a, L>(lookup: &'a L, record: &'a GeoRecord) -> Vec<&'a str>
where
    L: AdcodeLookup + ?Sized,
{
    let mut parts = vec![record.name.as_str()];
    let mut current = record;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        let Some(parent) = current.parent_adcode().and_then(|code| lookup.lookup(code)) else {
            break;
        };
        parts.push(parent.name.as_str());
        current = parent;
    }
    parts.reverse();
    parts
}

/// Joins [`ancestor_names`] with [`PATH_SEPARATOR`].
pub fn resolve_path<L>(lookup: &L, record: &GeoRecord) -> String
where
    L: AdcodeLookup + ?Sized,
{
    ancestor_names(lookup, record).join(PATH_SEPARATOR)
}
