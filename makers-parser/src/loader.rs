//! Makefile loading
//!
//! `MakefileLoader` reads the whole input into memory and runs the scanner over it.
//! Used by the CLI and by tests that want to go through the same path.
//!
//! # Example
//!
//! ```rust
//! use makers_parser::{LoaderError, MakefileLoader};
//!
//! fn main() -> Result<(), LoaderError> {
//!     let makefile = MakefileLoader::from_path("Makefile")?.load();
//!     for target in &makefile.targets {
//!         println!("{}", target.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
//! rejected, so a stray Latin-1 byte in a recipe does not stop the scan.

use crate::extraction::extract_str;
use crate::target::Makefile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error that can occur when reading a Makefile
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Input file does not exist: '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("Unable to read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Makefile text plus the label it will be reported under.
#[derive(Debug, Clone)]
pub struct MakefileLoader {
    label: String,
    source: String,
}

impl MakefileLoader {
    /// Read a Makefile from disk. The label is the path as given.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
            _ => LoaderError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            },
        })?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %path.display(), bytes = bytes.len(), "read makefile");
        Ok(MakefileLoader {
            label: path.display().to_string(),
            source,
        })
    }

    pub fn from_string(label: impl Into<String>, source: impl Into<String>) -> Self {
        MakefileLoader {
            label: label.into(),
            source: source.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan the loaded text
    pub fn load(&self) -> Makefile {
        Makefile::new(self.label.clone(), extract_str(&self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_string_keeps_label() {
        let makefile = MakefileLoader::from_string("inline", "all:\n# Everything\n").load();
        assert_eq!(makefile.source, "inline");
        assert_eq!(makefile.target_names(), vec!["all"]);
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, "fmt:\n# Formats the code\n").unwrap();

        let loader = MakefileLoader::from_path(&path).unwrap();
        assert_eq!(loader.label(), path.display().to_string());
        assert_eq!(loader.load().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_outside_targets_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, b"# Copyright \xa9 2020\n\nbuild:\n# Builds it\n\n").unwrap();

        let makefile = MakefileLoader::from_path(&path).unwrap().load();
        assert_eq!(makefile.target_names(), vec!["build"]);
        assert_eq!(makefile.targets[0].documentation, " Builds it\n");
    }

    #[test]
    fn test_invalid_utf8_in_documentation_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, b"dist:\n# Packages \xff release\n").unwrap();

        let makefile = MakefileLoader::from_path(&path).unwrap().load();
        assert_eq!(makefile.targets[0].documentation, " Packages \u{FFFD} release\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.mk");
        match MakefileLoader::from_path(&path) {
            Err(LoaderError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = MakefileLoader::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Unreadable { .. }));
        assert!(err.to_string().starts_with("Unable to read"));
    }
}
