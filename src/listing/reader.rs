//! Entry Reader - reads filesystem metadata for a path and its children

use std::fs;
use std::path::Path;

use crate::error::ListError;

use super::entry::Entry;

/// What one path resolves to: a single file entry, or the immediate
/// children of a directory.
#[derive(Debug)]
pub enum Listing {
    File(Entry),
    Dir(Vec<Entry>),
}

/// Read metadata for `path`.
///
/// Files become a singleton [`Listing::File`]; directories yield their
/// immediate children, unfiltered and in readdir order. Symlinks given as
/// operands are followed when they point at directories, but entries
/// inside a directory are described by lstat and never followed.
pub fn read_path(path: &Path) -> Result<Listing, ListError> {
    let meta = fs::symlink_metadata(path).map_err(|e| ListError::from_io(path, e))?;

    if meta.is_dir() {
        return read_dir_entries(path).map(Listing::Dir);
    }

    if meta.file_type().is_symlink() {
        if let Ok(target) = fs::metadata(path) {
            if target.is_dir() {
                return read_dir_entries(path).map(Listing::Dir);
            }
        }
    }

    Ok(Listing::File(Entry::from_metadata(path, &meta)))
}

/// Read the immediate children of a directory.
///
/// Children that vanish between readdir and stat are skipped; failure to
/// open the directory itself is the caller's problem.
pub fn read_dir_entries(path: &Path) -> Result<Vec<Entry>, ListError> {
    let reader = fs::read_dir(path).map_err(|e| ListError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in reader.filter_map(|e| e.ok()) {
        let child = dir_entry.path();
        if let Ok(meta) = fs::symlink_metadata(&child) {
            entries.push(Entry::from_metadata(&child, &meta));
        }
    }
    Ok(entries)
}
