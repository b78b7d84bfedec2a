//! All-or-nothing writes of a `FilePlan`.
//!
//! Every output is first staged as a temporary file next to its destination,
//! then the temporaries are persisted (renamed) one by one. A failure while
//! staging leaves nothing visible; a failure while persisting removes what was
//! already persisted along with the package directory created for this plan.
//! Mirrored parent directories are left in place.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{core::explode::FilePlan, error::ExplodeError};

/// Write every file of `plan`.
pub fn commit_plan(plan: &FilePlan) -> Result<(), ExplodeError> {
    let created_dir = match &plan.package_dir {
        Some(dir) if !dir.exists() => Some(dir.as_path()),
        _ => None,
    };

    let result = stage(plan).and_then(persist);
    if result.is_err() {
        if let Some(dir) = created_dir {
            remove_dir(dir);
        }
    }
    result
}

fn stage(plan: &FilePlan) -> Result<Vec<(NamedTempFile, &Path)>, ExplodeError> {
    let mut staged = Vec::with_capacity(plan.files.len());
    for file in &plan.files {
        let parent = file
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(|e| ExplodeError::write(parent, e))?;

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| ExplodeError::write(&file.path, e))?;
        temp.write_all(file.contents.as_bytes())
            .map_err(|e| ExplodeError::write(&file.path, e))?;
        staged.push((temp, file.path.as_path()));
    }
    Ok(staged)
}

fn persist(staged: Vec<(NamedTempFile, &Path)>) -> Result<(), ExplodeError> {
    let mut persisted: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (temp, path) in staged {
        if let Err(e) = temp.persist(path) {
            for done in &persisted {
                if let Err(err) = fs::remove_file(done) {
                    tracing::warn!(path = %done.display(), error = %err, "rollback failed");
                }
            }
            return Err(ExplodeError::write(path, e.error));
        }
        persisted.push(path.to_path_buf());
    }
    Ok(())
}

fn remove_dir(dir: &Path) {
    if let Err(err) = fs::remove_dir_all(dir) {
        tracing::warn!(path = %dir.display(), error = %err, "rollback failed");
    }
}
