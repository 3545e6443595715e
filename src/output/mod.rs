//! Listing output
//!
//! Two sinks over the same traversal:
//!
//! - `format` - streaming short/long text, the default surface
//! - `json` - buffered `--json` document

mod format;
mod json;

pub use format::{
    TextFormatter, format_mtime, mode_string, render_long, render_short, total_blocks,
};
pub use json::JsonFormatter;
