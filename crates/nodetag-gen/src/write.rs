use std::fs;
use std::io::Write;
use std::path::Path;

use nodetag_error::{Error, Result};
use tempfile::NamedTempFile;

use crate::Artifact;

/// Write every artifact into `dir`.
///
/// Each file is staged in a temporary file inside `dir` and renamed into place,
/// so readers never observe a half-written artifact. Files whose contents are
/// already up to date are left untouched to keep build scripts from
/// re-triggering.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| {
        Error::from(err)
            .with_operation("write::create_dir")
            .with_context("dir", dir.display().to_string())
    })?;

    for artifact in artifacts {
        let path = dir.join(&artifact.name);
        if fs::read(&path).is_ok_and(|existing| existing == artifact.contents.as_bytes()) {
            tracing::debug!(path = %path.display(), "artifact unchanged");
            continue;
        }
        write_atomic(dir, &path, artifact.contents.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = artifact.contents.len(), "artifact written");
    }
    Ok(())
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let wrap = |err: std::io::Error| {
        Error::from(err)
            .with_operation("write::write_atomic")
            .with_context("path", path.display().to_string())
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(wrap)?;
    staged.write_all(bytes).map_err(wrap)?;
    staged.as_file().sync_all().map_err(wrap)?;
    staged.persist(path).map_err(|err| wrap(err.error))?;
    Ok(())
}
