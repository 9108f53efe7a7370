//! Collect phase - walks declaration trees for annotated types.

use eyre::Result;

use crate::pipeline::{CompilationContext, FoundType, Phase};

/// Phase that gathers every marker-annotated type, in file order and then
/// document order.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Find types carrying the marker annotation"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut found = Vec::new();

        for unit in &ctx.units {
            for m in unit.walk(&ctx.marker) {
                found.push(FoundType {
                    name: m.decl.name.clone(),
                    namespace: m.namespace,
                    kind: m.decl.kind.as_str(),
                    annotation: m.annotation.name().to_string(),
                    path: unit.path.clone(),
                    line: m.decl.line,
                });
            }
        }

        ctx.found = found;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use jsonaot_manifest::ScanConfig;
    use jsonaot_syntax::SourceParser;

    use super::*;

    fn context_with(marker: &str, files: &[(&str, &str)]) -> CompilationContext {
        let mut ctx = CompilationContext::new(ScanConfig {
            marker: marker.to_string(),
            ..ScanConfig::default()
        });
        let mut parser = SourceParser::new().unwrap();
        for (path, text) in files {
            ctx.units.push(parser.parse(Path::new(path), text).unwrap());
        }
        ctx
    }

    #[test]
    fn test_collect_across_files_in_order() {
        let mut ctx = context_with(
            "JsonA",
            &[
                ("A.cs", "[JsonAot] class Alpha { }\nclass Beta { }"),
                ("B.cs", "namespace N { [JsonAot] record Gamma(int X); }"),
            ],
        );

        CollectPhase.run(&mut ctx).unwrap();

        let names: Vec<_> = ctx.found.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
        assert_eq!(ctx.found[1].namespace, "N");
        assert_eq!(ctx.found[1].kind, "record");
        assert_eq!(ctx.found[1].location(), "B.cs:1");
    }

    #[test]
    fn test_marker_casing_has_no_effect() {
        let mut lower = context_with("jsona", &[("A.cs", "[JsonAot] class Alpha { }")]);
        let mut upper = context_with("JSONA", &[("A.cs", "[JsonAot] class Alpha { }")]);

        CollectPhase.run(&mut lower).unwrap();
        CollectPhase.run(&mut upper).unwrap();

        assert_eq!(lower.found, upper.found);
        assert_eq!(lower.found.len(), 1);
    }

    #[test]
    fn test_custom_marker() {
        let mut ctx = context_with(
            "Serializable",
            &[("A.cs", "[JsonAot] class Alpha { }\n[Serializable] class Beta { }")],
        );

        CollectPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.found.len(), 1);
        assert_eq!(ctx.found[0].name, "Beta");
    }
}
