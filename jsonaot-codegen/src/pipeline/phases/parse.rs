//! Parse phase - builds a declaration tree per file.

use eyre::Result;
use jsonaot_syntax::SourceParser;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that parses every loaded file.
///
/// A file the parser produces no tree for is skipped with a warning. Files
/// with syntax errors or bytes that are not UTF-8 are kept, with a warning,
/// since declarations outside the broken part are still usable.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Parse source files into declaration trees"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut parser = SourceParser::new()?;

        for file in std::mem::take(&mut ctx.sources) {
            let location = file.path.display().to_string();
            match parser.parse_file(&file) {
                Ok(unit) => {
                    if unit.lossy {
                        ctx.add_diagnostic(
                            Diagnostic::warning(
                                self.name(),
                                "file is not valid UTF-8; invalid bytes were replaced",
                            )
                            .at(location.clone()),
                        );
                    }
                    if unit.recovered {
                        ctx.add_diagnostic(
                            Diagnostic::warning(
                                self.name(),
                                "file has syntax errors; declarations were recovered where possible",
                            )
                            .at(location),
                        );
                    }
                    ctx.units.push(unit);
                }
                Err(err) => {
                    tracing::warn!(path = %location, error = %err, "skipping file");
                    ctx.add_diagnostic(
                        Diagnostic::warning(self.name(), format!("skipped: {}", err))
                            .at(location),
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jsonaot_manifest::ScanConfig;
    use jsonaot_syntax::SourceFile;

    use super::*;

    fn source(path: &str, bytes: &[u8]) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_invalid_utf8_file_is_kept_with_warning() {
        let mut ctx = CompilationContext::new(ScanConfig::default());
        ctx.sources = vec![
            source("Latin.cs", b"// caf\xE9\n[JsonAot] class Latin { }\n"),
            source("Good.cs", b"[JsonAot] class Good { }"),
        ];

        ParsePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.units.len(), 2);
        assert!(ctx.units[0].lossy);
        assert!(!ctx.units[1].lossy);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics[0].location.as_deref(), Some("Latin.cs"));
        assert!(ctx.diagnostics[0].message.contains("UTF-8"));
    }

    #[test]
    fn test_recovered_file_is_kept_with_warning() {
        let mut ctx = CompilationContext::new(ScanConfig::default());
        ctx.sources = vec![source("Half.cs", b"namespace A { [JsonAot] class Kept { }")];

        ParsePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.units.len(), 1);
        assert!(ctx.units[0].recovered);
        assert!(ctx.diagnostics[0].message.contains("syntax errors"));
    }
}
