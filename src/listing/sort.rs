//! Listing order

use std::cmp::Reverse;

use super::entry::Entry;

/// Order a listing: ascending by name, or descending by size when
/// `by_size` is set.
///
/// The size pass runs over a name-sorted listing with a stable sort, so
/// equal sizes keep name order.
pub fn sort_entries(entries: &mut [Entry], by_size: bool) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    if by_size {
        entries.sort_by_key(|e| Reverse(e.size));
    }
}
