//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::Path;

use crate::error::CliError;

/// Fail early with a readable message when a named file is missing
pub fn ensure_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_ensure_file_accepts_existing_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(ensure_file(file.path()).is_ok());
    }

    #[test]
    fn test_ensure_file_rejects_missing_file() {
        let err = ensure_file(Path::new("/nonexistent/readings.txt")).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/readings.txt");
    }
}
