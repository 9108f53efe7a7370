//! Name deduplication.

use indexmap::IndexMap;
use jsonaot_core::fold_case;

/// Keep one name per case-insensitive value, in first-seen order.
///
/// The first occurrence decides both the casing and the position:
/// `["Foo", "foo", "Bar"]` becomes `["Foo", "Bar"]`.
pub fn dedup<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: IndexMap<String, String> = IndexMap::new();
    for name in names {
        let name = name.into();
        seen.entry(fold_case(&name)).or_insert(name);
    }
    seen.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_casing() {
        assert_eq!(dedup(["Foo", "foo", "Bar"]), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_dedup_is_stable_not_sorted() {
        assert_eq!(
            dedup(["Zeta", "alpha", "ZETA", "Mid", "ALPHA"]),
            vec!["Zeta", "alpha", "Mid"]
        );
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_dedup_unicode_case() {
        assert_eq!(dedup(["Ärger", "äRGER"]), vec!["Ärger"]);
    }
}
