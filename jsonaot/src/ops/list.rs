//! List operation - scan without writing.

use eyre::{Context, Result};
use jsonaot_codegen::pipeline::{LoggingPlugin, Pipeline};
use jsonaot_manifest::ScanConfig;

use crate::reports::ListReport;

/// Execute the list operation.
pub fn list(scan: ScanConfig) -> Result<ListReport> {
    let pipeline = Pipeline::new().plugin(LoggingPlugin::new());
    let ctx = pipeline.run(scan).wrap_err("Pipeline failed")?;

    Ok(ListReport {
        files: ctx.units.len(),
        types: ctx.found,
        names: ctx.names,
        diagnostics: ctx.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_keeps_case_duplicates_but_registers_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("A.cs"), "[JsonAot] class Foo { }\n").unwrap();
        fs::write(
            temp.path().join("B.cs"),
            "namespace Lower\n{\n    [jsonaot] class foo { }\n}\n",
        )
        .unwrap();

        let report = list(ScanConfig {
            root: temp.path().to_path_buf(),
            ..ScanConfig::default()
        })
        .unwrap();

        let found: Vec<_> = report
            .types
            .iter()
            .map(|t| (t.name.as_str(), t.namespace.as_str(), t.line))
            .collect();
        assert_eq!(found, vec![("Foo", "", 1), ("foo", "Lower", 3)]);
        assert_eq!(report.names, vec!["Foo"]);
        assert_eq!(report.files, 2);
    }
}
