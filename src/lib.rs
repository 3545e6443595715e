//! lsr - a small ls clone with long, size-sorted, and recursive listings

pub mod error;
pub mod listing;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ListError;
pub use listing::{
    Entry, ListOptions, ListWalker, Listing, ListingSink, apply_hidden_filter, read_dir_entries,
    read_path, sort_entries,
};
pub use output::{JsonFormatter, TextFormatter};
