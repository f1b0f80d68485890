// crates/meteomap-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use meteomap_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Lleida"), "lleida");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality after [`fold_key`] on both sides.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
