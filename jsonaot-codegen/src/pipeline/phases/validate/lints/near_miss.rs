//! Lint for attributes that match the marker without being `[JsonAot]`.

use jsonaot_core::{eq_ignore_case, simple_name};

use super::super::Lint;
use crate::pipeline::{Diagnostic, FoundType};

/// Attribute names the generated handler declares.
const CANONICAL: [&str; 2] = ["JsonAot", "JsonAotAttribute"];

/// Lint that warns when a type qualified through an attribute other than
/// `[JsonAot]`, e.g. `[JsonAotIgnore]` or a third-party `[JsonApi...]`.
///
/// The type still qualifies; the warning only points out the loose match.
pub struct NearMissLint;

impl Lint for NearMissLint {
    fn name(&self) -> &'static str {
        "near-miss"
    }

    fn check(&self, found: &[FoundType], diagnostics: &mut Vec<Diagnostic>) {
        for ty in found {
            let name = simple_name(&ty.annotation);
            if CANONICAL.iter().any(|c| eq_ignore_case(c, name)) {
                continue;
            }
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "type '{}' qualified through attribute '{}', not [JsonAot]",
                        ty.name, ty.annotation
                    ),
                )
                .at(ty.location()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &str, annotation: &str) -> FoundType {
        FoundType {
            name: name.to_string(),
            namespace: String::new(),
            kind: "class",
            annotation: annotation.to_string(),
            path: "Models.cs".into(),
            line: 3,
        }
    }

    #[test]
    fn test_canonical_names_pass() {
        let mut diagnostics = Vec::new();
        NearMissLint.check(
            &[
                found("A", "JsonAot"),
                found("B", "JsonAotAttribute"),
                found("C", "JSONHandler.JsonAot"),
                found("D", "jsonaot"),
            ],
            &mut diagnostics,
        );

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_near_miss_warns() {
        let mut diagnostics = Vec::new();
        NearMissLint.check(&[found("Order", "JsonApiResource")], &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("JsonApiResource"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Models.cs:3"));
    }
}
