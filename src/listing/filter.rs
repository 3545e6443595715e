//! Hidden-entry filtering

use super::entry::Entry;

/// Drop entries whose name starts with `.` unless `all` is set.
///
/// Applies to directory children only; explicitly named operands bypass
/// this. Order is preserved.
pub fn apply_hidden_filter(entries: Vec<Entry>, all: bool) -> Vec<Entry> {
    if all {
        return entries;
    }
    entries.into_iter().filter(|e| !e.is_hidden()).collect()
}
