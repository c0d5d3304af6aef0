//! Writing rendered documents to disk
//!
//! Documents are written one after the other. The first failure is returned as
//! is; files written before it stay on disk.

use crate::error::PublishError;
use crate::render::RenderedSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Create `dir` and its parents if they do not exist yet.
pub fn prepare_output_dir(dir: &Path) -> Result<(), PublishError> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating output directory");
    fs::create_dir_all(dir).map_err(|source| PublishError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write every document of `set` into `dir`, returning the written paths in order.
pub fn publish(set: &RenderedSet, dir: &Path) -> Result<Vec<PathBuf>, PublishError> {
    let mut written = Vec::with_capacity(set.len());
    for document in set.iter() {
        let path = dir.join(&document.name);
        write_document(&path, document.contents.as_bytes())?;
        info!(path = %path.display(), "wrote document");
        written.push(path);
    }
    Ok(written)
}

fn write_document(path: &Path, contents: &[u8]) -> Result<(), PublishError> {
    let to_error = |source| PublishError::Write {
        path: path.to_path_buf(),
        source,
    };
    // The handle is dropped, and the file closed, on every path out of here.
    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(contents).map_err(to_error)?;
    file.flush().map_err(to_error)
}
