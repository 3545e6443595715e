//! Traversal driver - walks operand paths and feeds listings to a sink

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ListError;

use super::config::ListOptions;
use super::entry::Entry;
use super::filter::apply_hidden_filter;
use super::reader::{Listing, read_dir_entries, read_path};
use super::sort::sort_entries;

/// Callback for listing output - receives each listing as it is produced.
pub trait ListingSink {
    /// A single file operand.
    fn entry(&mut self, entry: &Entry) -> io::Result<()>;

    /// One directory's filtered, sorted children. `header` asks for a
    /// `path:` line before the listing.
    fn directory(&mut self, path: &Path, entries: &[Entry], header: bool) -> io::Result<()>;

    /// A path that could not be read. Traversal continues afterwards.
    fn error(&mut self, path: &Path, err: &ListError) -> io::Result<()>;

    /// Called once after all paths have been processed.
    fn finish(&mut self) -> io::Result<()>;
}

/// Walks each operand path, applying filter and sort, and descends
/// depth-first when recursion is enabled.
///
/// Listings stream to the sink one directory at a time; nothing is
/// retained between top-level paths.
pub struct ListWalker {
    options: ListOptions,
}

impl ListWalker {
    pub fn new(options: ListOptions) -> Self {
        Self { options }
    }

    /// Process every operand in order and return the number of paths that
    /// failed. A bad path is reported through the sink and never aborts
    /// the remaining paths.
    pub fn run<S: ListingSink>(&self, paths: &[PathBuf], sink: &mut S) -> io::Result<usize> {
        let headers = self.options.recursive || paths.len() > 1;
        let mut failures = 0;

        for path in paths {
            match read_path(path) {
                Ok(Listing::File(entry)) => sink.entry(&entry)?,
                Ok(Listing::Dir(entries)) => {
                    self.walk_dir(path, entries, headers, &mut failures, sink)?;
                }
                Err(err) => {
                    failures += 1;
                    sink.error(path, &err)?;
                }
            }
        }

        sink.finish()?;
        Ok(failures)
    }

    /// Emit one directory's listing, then its subdirectories depth-first.
    /// The parent's listing always prints before any child's.
    fn walk_dir<S: ListingSink>(
        &self,
        path: &Path,
        entries: Vec<Entry>,
        header: bool,
        failures: &mut usize,
        sink: &mut S,
    ) -> io::Result<()> {
        let mut entries = apply_hidden_filter(entries, self.options.all);
        sort_entries(&mut entries, self.options.sort_by_size);
        sink.directory(path, &entries, header)?;

        if self.options.recursive {
            // is_dir comes from lstat, so symlinked directories are never
            // descended into and readdir never yields "." or ".."
            for entry in entries.iter().filter(|e| e.is_dir) {
                match read_dir_entries(&entry.path) {
                    Ok(children) => {
                        self.walk_dir(&entry.path, children, true, failures, sink)?;
                    }
                    Err(err) => {
                        *failures += 1;
                        sink.error(&entry.path, &err)?;
                    }
                }
            }
        }

        Ok(())
    }
}
