//! Configuration for directory listing

/// Configuration for listing behavior.
///
/// Built once from the command line and read-only afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Use the long listing format (permissions, size, mtime).
    pub long: bool,
    /// Include entries whose name starts with `.`.
    pub all: bool,
    /// Sort by file size, largest first, instead of by name.
    pub sort_by_size: bool,
    /// Descend into subdirectories depth-first.
    pub recursive: bool,
}
