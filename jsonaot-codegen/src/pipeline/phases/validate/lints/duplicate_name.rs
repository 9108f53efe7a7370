//! Lint for type names that collapse into one registration.

use std::collections::HashMap;

use jsonaot_core::fold_case;

use super::super::Lint;
use crate::pipeline::{Diagnostic, FoundType};

/// Lint that notes types dropped by case-insensitive deduplication.
///
/// Two `Order` classes in different namespaces, or `Order` and `order`,
/// share one handler entry; only the first one found is registered.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn check(&self, found: &[FoundType], diagnostics: &mut Vec<Diagnostic>) {
        let mut first: HashMap<String, &FoundType> = HashMap::new();

        for ty in found {
            match first.get(&fold_case(&ty.name)) {
                Some(kept) => diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "type '{}' shares its name with '{}' at {}; only the first is registered",
                            ty.name,
                            kept.name,
                            kept.location()
                        ),
                    )
                    .at(ty.location()),
                ),
                None => {
                    first.insert(fold_case(&ty.name), ty);
                }
            }
        }
    }
}
