//! Case-insensitive string helpers.
//!
//! Identifiers and markers are compared after full Unicode lowercasing, so
//! `"JSONAOT"`, `"JsonAot"` and `"jsonaot"` are the same key.

/// Fold a string to the key used for case-insensitive comparison.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Reduce a possibly qualified or generic name to its last identifier
/// (e.g., `"global::System.Text.JsonAot<T>"` -> `"JsonAot"`).
pub fn simple_name(name: &str) -> &str {
    let name = name.split('<').next().unwrap_or(name).trim();
    let name = name.rsplit("::").next().unwrap_or(name);
    name.rsplit('.').next().unwrap_or(name).trim()
}
