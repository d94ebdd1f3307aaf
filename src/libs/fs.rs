//! Filesystem helpers for the library copier

use super::error::CopyError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Remove a file or directory tree, ignoring every error (including not found)
pub fn remove_if_exists(path: &Path) {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return;
    };
    let _ = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
}

/// Recursively copy the directory `src` to `dest`, creating parents as needed
///
/// Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<usize, CopyError> {
    let metadata = match fs::metadata(src) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CopyError::SourceMissing(src.to_path_buf()));
        }
        Err(e) => return Err(CopyError::io("read", src, e)),
    };
    if !metadata.is_dir() {
        return Err(CopyError::SourceNotDirectory(src.to_path_buf()));
    }

    let mut files = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        // WalkDir yields paths prefixed with `src`
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| CopyError::io("create", &target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| CopyError::io("create", parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| CopyError::io("copy", entry.path(), e))?;
            files += 1;
        }
    }
    Ok(files)
}
