//! Error types for rendering and publishing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The Makefile had no target with a comment block under it
    #[error("Makefile ({0}) contains no documented targets")]
    NoDocumentedTargets(String),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Unable to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
