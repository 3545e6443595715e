//! Directory listing core
//!
//! One traversal step reads a path (`reader`), drops hidden names
//! (`filter`), orders what is left (`sort`), and hands the listing to an
//! output sink. `walker` drives those steps per operand path and descends
//! depth-first when recursion is on.

mod config;
mod entry;
mod filter;
mod reader;
mod sort;
mod walker;

pub use config::ListOptions;
pub use entry::Entry;
pub use filter::apply_hidden_filter;
pub use reader::{Listing, read_dir_entries, read_path};
pub use sort::sort_entries;
pub use walker::{ListWalker, ListingSink};
