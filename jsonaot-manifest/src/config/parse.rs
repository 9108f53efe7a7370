//! Manifest parsing from files and strings.

use std::str::FromStr;

use miette::SourceSpan;

use super::{DEFAULT_FILENAME, Manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate values that deserialize fine but cannot drive a scan.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let scan = &manifest.scan;

    if scan.marker.trim().is_empty() {
        return Err(ctx.validation_error(
            "marker must not be empty",
            key_span(ctx.src(), "marker"),
        ));
    }

    if scan.extensions.is_empty() {
        return Err(ctx.validation_error(
            "at least one file extension is required",
            key_span(ctx.src(), "extensions"),
        ));
    }

    if let Some(ext) = scan.extensions.iter().find(|ext| ext.starts_with('.')) {
        return Err(ctx.validation_error(
            format!("extension '{}' must not start with a dot", ext),
            key_span(ctx.src(), "extensions"),
        ));
    }

    if manifest.output.artifact.as_os_str().is_empty() {
        return Err(ctx.validation_error(
            "artifact path must not be empty",
            key_span(ctx.src(), "artifact"),
        ));
    }

    Ok(())
}

/// Find the `key = value` line for `key` and return its span.
fn key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, trimmed.trim_end().len())));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::WriteMode;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();

        assert_eq!(manifest.scan.root, PathBuf::from("."));
        assert_eq!(manifest.scan.extensions, vec!["cs".to_string()]);
        assert_eq!(manifest.scan.exclude, vec!["bin".to_string(), "obj".to_string()]);
        assert_eq!(manifest.scan.marker, "JsonA");
        assert_eq!(manifest.output.artifact, PathBuf::from("JSONHandler.cs"));
        assert_eq!(manifest.output.entry_point, PathBuf::from("Program.cs"));
        assert_eq!(manifest.output.mode, WriteMode::Overwrite);
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [scan]
            root = "src"
            extensions = ["cs", "csx"]
            exclude = []
            marker = "Serializable"

            [output]
            artifact = "Generated/Handler.cs"
            entry_point = "App.cs"
            mode = "append"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.scan.root, PathBuf::from("src"));
        assert_eq!(manifest.scan.extensions, vec!["cs", "csx"]);
        assert!(manifest.scan.exclude.is_empty());
        assert_eq!(manifest.scan.marker, "Serializable");
        assert_eq!(
            manifest.output.artifact,
            PathBuf::from("Generated/Handler.cs")
        );
        assert_eq!(manifest.output.entry_point, PathBuf::from("App.cs"));
        assert_eq!(manifest.output.mode, WriteMode::Append);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let manifest = Manifest::from_str("[scan]\nmarker = \"Aot\"\n").unwrap();

        assert_eq!(manifest.scan.marker, "Aot");
        assert_eq!(manifest.scan.extensions, vec!["cs".to_string()]);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str("[scan]\nmarkers = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_mode_is_parse_error() {
        let err = Manifest::from_str("[output]\nmode = \"merge\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_marker_rejected_with_span() {
        let src = "[scan]\nmarker = \"  \"\n";
        let err = Manifest::from_str(src).unwrap_err();

        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "marker must not be empty");
                let span = span.expect("span should point at the marker line");
                assert_eq!(span.offset(), 7);
                assert_eq!(span.len(), "marker = \"  \"".len());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let err = Manifest::from_str("[scan]\nextensions = [\".cs\"]\n").unwrap_err();

        match *err {
            Error::Validation { message, .. } => {
                assert_eq!(message, "extension '.cs' must not start with a dot");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_extensions_rejected() {
        let err = Manifest::from_str("[scan]\nextensions = []\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_key_span_missing_key() {
        assert!(key_span("[scan]\n", "marker").is_none());
        // prefix of another key must not match
        assert!(key_span("markers = 1\n", "marker").is_none());
    }

    #[test]
    fn test_key_span_finds_assignment_line() {
        let src = "[scan]\nmarkers_note = 1\n  marker = \"\"\n";

        let span = key_span(src, "marker").unwrap();

        assert_eq!(span.offset(), 26);
        assert_eq!(span.len(), "marker = \"\"".len());
        assert!(key_span(src, "root").is_none());
    }
}
