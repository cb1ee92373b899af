use crate::error::{PrepareError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Recursively copy `from` into a new directory `to`.
/// Fails if `to` already exists; symlinks are followed.
pub fn copy_dir_all<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    fs::create_dir(to).map_err(|e| {
        PrepareError::io(to, format!("Failed to create directory: {:?}", to), e)
    })?;

    let entries = fs::read_dir(from).map_err(|e| {
        PrepareError::io(from, format!("Failed to read directory: {:?}", from), e)
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            PrepareError::io(from, format!("Failed to read entry in: {:?}", from), e)
        })?;
        let src_path = entry.path();
        let dest_path = to.join(entry.file_name());

        let metadata = fs::metadata(&src_path).map_err(|e| {
            PrepareError::io(&src_path, format!("Failed to read metadata for: {:?}", src_path), e)
        })?;

        if metadata.is_dir() {
            copy_dir_all(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| {
                PrepareError::io(
                    &src_path,
                    format!("Failed to copy file from {:?} to {:?}", src_path, dest_path),
                    e,
                )
            })?;
        }
    }

    Ok(())
}

/// Copy the tree at `from` to `to` so that `to` only appears once the copy is complete.
///
/// The tree is first written to a hidden sibling staging directory and then renamed
/// into place. A failed copy removes the staging directory and leaves `to` absent.
pub fn copy_tree_staged<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    ensure_source_dir(from)?;
    if to.exists() {
        return Err(PrepareError::AlreadyExists(to.to_path_buf()));
    }

    let parent = to.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| {
        PrepareError::io(parent, format!("Failed to create directory: {:?}", parent), e)
    })?;

    let staging = staging_path(to);
    debug!("Staging copy of {} in {}", from.display(), staging.display());

    if let Err(e) = copy_dir_all(from, &staging) {
        discard_staging(&staging);
        return Err(e);
    }

    if let Err(e) = fs::rename(&staging, to) {
        discard_staging(&staging);
        return Err(PrepareError::io(
            to,
            format!("Failed to rename {:?} to {:?}", staging, to),
            e,
        ));
    }

    Ok(())
}

/// Move the directory `from` to `to`: a rename when possible, otherwise copy then delete.
pub fn move_dir<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    if !from.exists() {
        return Err(PrepareError::NotFound(from.to_path_buf()));
    }
    if to.exists() {
        return Err(PrepareError::AlreadyExists(to.to_path_buf()));
    }

    if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PrepareError::io(parent, format!("Failed to create directory: {:?}", parent), e)
        })?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if from.is_dir() => {
            // Typically a cross-device rename
            debug!(
                "Rename of {} failed ({}), falling back to copy and delete",
                from.display(),
                e
            );
            move_by_copy(from, to)
        }
        Err(e) => Err(PrepareError::io(
            from,
            format!("Failed to move {:?} to {:?}", from, to),
            e,
        )),
    }
}

fn move_by_copy(from: &Path, to: &Path) -> Result<()> {
    copy_tree_staged(from, to)?;
    fs::remove_dir_all(from).map_err(|e| {
        PrepareError::io(from, format!("Failed to remove moved directory: {:?}", from), e)
    })
}

/// Copy a single file into `dest_dir`, keeping its file name. Returns the new path.
pub fn copy_file_into<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest_dir: Q) -> Result<PathBuf> {
    let src_path = source.as_ref();

    if !src_path.is_file() {
        return Err(PrepareError::NotFound(src_path.to_path_buf()));
    }

    let file_name = src_path
        .file_name()
        .ok_or_else(|| PrepareError::NotFound(src_path.to_path_buf()))?;
    let dest_path = dest_dir.as_ref().join(file_name);

    fs::copy(src_path, &dest_path).map_err(|e| {
        PrepareError::io(
            src_path,
            format!("Failed to copy file from {:?} to {:?}", src_path, dest_path),
            e,
        )
    })?;

    Ok(dest_path)
}

fn ensure_source_dir(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        PrepareError::io(path, format!("Failed to read metadata for: {:?}", path), e)
    })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(PrepareError::NotADirectory(path.to_path_buf()))
    }
}

fn staging_path(to: &Path) -> PathBuf {
    let name = to
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tree".to_string());
    to.with_file_name(format!(".{}.staging-{}", name, Uuid::new_v4().simple()))
}

fn discard_staging(staging: &Path) {
    if staging.exists() {
        if let Err(e) = fs::remove_dir_all(staging) {
            warn!("Failed to remove staging directory {}: {}", staging.display(), e);
        }
    }
}
