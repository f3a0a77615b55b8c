// crates/citydb-core/src/text.rs
use deunicode::deunicode;

/// Normalize a name into a fold key for matching.
///
/// Transliterates Unicode to ASCII and lowercases, so `"São Paulo"`,
/// `"SAO PAULO"` and `"sao paulo"` all fold to the same key.
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_ascii_lowercase()
}

/// Accent-insensitive and case-insensitive equality on folded form.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
