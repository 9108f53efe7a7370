//! Import lines for the program entry point.

use std::{fs, io, path::Path};

use eyre::{Result, WrapErr};
use jsonaot_core::write_atomic;

/// Lines placed at the top of the entry point so the handler's static
/// `Serialize` / `Deserialize` are usable everywhere.
pub const IMPORT_LINES: [&str; 2] = [
    "global using static JSONHandler.JSONHandler; // Streamline serialization and deserialization",
    "global using JSONHandler;",
];

/// What [`add_imports`] did to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Added,
    /// Both lines were already there.
    AlreadyPresent,
    /// The entry point does not exist; nothing was written.
    Missing,
}

/// Prepend [`IMPORT_LINES`] to the file at `path`.
///
/// The rest of the file is kept line for line.
pub fn add_imports(path: &Path) -> Result<ImportOutcome> {
    let existing = match fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "entry point not found, imports not added");
            return Ok(ImportOutcome::Missing);
        }
        Err(err) => {
            return Err(err).wrap_err_with(|| format!("failed to read '{}'", path.display()));
        }
    };

    if has_imports(&existing) {
        tracing::debug!(path = %path.display(), "imports already present");
        return Ok(ImportOutcome::AlreadyPresent);
    }

    let mut content = String::with_capacity(existing.len() + 128);
    for line in IMPORT_LINES.iter().copied().chain(existing.lines()) {
        content.push_str(line);
        content.push('\n');
    }

    write_atomic(path, &content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "added imports to entry point");
    Ok(ImportOutcome::Added)
}

fn has_imports(content: &str) -> bool {
    let static_using = IMPORT_LINES[0]
        .split("//")
        .next()
        .unwrap_or(IMPORT_LINES[0])
        .trim();
    let mut found = [false; 2];
    for line in content.lines().map(str::trim) {
        found[0] |= line.starts_with(static_using);
        found[1] |= line == IMPORT_LINES[1];
    }
    found[0] && found[1]
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_add_imports_prepends_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Program.cs");
        fs::write(&path, "using System;\n\nConsole.WriteLine(\"hi\");\n").unwrap();

        assert_eq!(add_imports(&path).unwrap(), ImportOutcome::Added);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "global using static JSONHandler.JSONHandler; // Streamline serialization and deserialization\n\
             global using JSONHandler;\n\
             using System;\n\
             \n\
             Console.WriteLine(\"hi\");\n"
        );
    }

    #[test]
    fn test_add_imports_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Program.cs");
        fs::write(&path, "class Program { }").unwrap();

        assert_eq!(add_imports(&path).unwrap(), ImportOutcome::Added);
        let first = fs::read_to_string(&path).unwrap();

        assert_eq!(add_imports(&path).unwrap(), ImportOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_add_imports_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Program.cs");

        assert_eq!(add_imports(&path).unwrap(), ImportOutcome::Missing);
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_imports_are_completed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Program.cs");
        fs::write(&path, "global using JSONHandler;\n").unwrap();

        assert_eq!(add_imports(&path).unwrap(), ImportOutcome::Added);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("global using JSONHandler;").count(), 2);
    }
}
