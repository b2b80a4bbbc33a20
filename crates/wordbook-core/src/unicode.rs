//! Case folding used for suggestion ordering and matching.

/// Comparison key for a dictionary word.
///
/// Lower-cases each character on its own (`char::to_lowercase`), so a folded
/// key may be longer than the original (e.g. "İ" folds to "i̇"). Folding never
/// depends on position: a prefix folds to a prefix of the folded word, which
/// is not true of `str::to_lowercase` and its word-final "ς".
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Normalize a user-supplied prefix: trim surrounding whitespace, then fold.
///
/// Returns `None` when nothing is left to match against.
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}
