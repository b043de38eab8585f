// crates/geodiv-core/src/text.rs
use std::cmp::Ordering;

/// Convert a name into its collation key.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `北京` -> `Bei Jing`, `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
///
/// Han names therefore order by their romanization and accented Latin names
/// sort next to their unaccented spelling, instead of landing after `z` the
/// way a plain code-point comparison puts them.
///
/// # Examples
///
/// ```rust
/// use geodiv_core::text::collation_key;
///
/// assert_eq!(collation_key("Łódź"), "lodz");
/// assert_eq!(collation_key("Zürich"), "zurich");
/// ```
pub fn collation_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Locale-aware name comparison: collation keys first, then case with
/// lowercase ahead of uppercase (`paris` < `Paris`), then raw text so that
/// distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| compare_case(a, b))
}

/// Same as [`compare_names`] when both keys are already computed.
#[inline]
pub(crate) fn compare_keyed(a: (&str, &str), b: (&str, &str)) -> Ordering {
    a.0.cmp(b.0).then_with(|| compare_case(a.1, b.1))
}

/// Tie-break for names with equal keys.
fn compare_case(a: &str, b: &str) -> Ordering {
    flip_case(a).cmp(&flip_case(b)).then_with(|| a.cmp(b))
}

fn flip_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
