//! Entry - metadata record for one filesystem object

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Metadata for a single filesystem object, captured from one lstat call.
///
/// Entries are never mutated after construction; a listing builds them,
/// sorts them, prints them, and drops them.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub is_dir: bool,
    /// Raw permission/type bits as the filesystem reports them.
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub modified: DateTime<Local>,
}

impl Entry {
    /// Build an entry for `path` from already-fetched metadata.
    pub fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let (mode, nlink, uid, gid) = ownership_fields(meta);
        let modified = meta
            .modified()
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| DateTime::<Local>::from(SystemTime::UNIX_EPOCH));

        Self {
            name,
            path: path.to_path_buf(),
            size: meta.len(),
            is_dir: meta.is_dir(),
            mode,
            nlink,
            uid,
            gid,
            modified,
        }
    }

    /// Whether the entry name marks it as hidden.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Name as displayed: directories carry a `/` suffix.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(unix)]
fn ownership_fields(meta: &Metadata) -> (u32, u64, u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (meta.mode(), meta.nlink(), meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn ownership_fields(_meta: &Metadata) -> (u32, u64, u32, u32) {
    (0, 0, 0, 0)
}
