//! JSON output formatting

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ListError;
use crate::listing::{Entry, ListingSink};

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonListing {
    File {
        entry: Entry,
    },
    Dir {
        path: PathBuf,
        entries: Vec<Entry>,
    },
}

/// Buffering JSON sink - collects every listing and serializes one
/// pretty-printed document on `finish`.
///
/// Unlike the streaming text sink this has to hold all listings in
/// memory. Per-path failures still go to `err` as plain text.
pub struct JsonFormatter<W: Write, E: Write> {
    out: W,
    err: E,
    listings: Vec<JsonListing>,
}

impl<W: Write, E: Write> JsonFormatter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            listings: Vec::new(),
        }
    }
}

impl<W: Write, E: Write> ListingSink for JsonFormatter<W, E> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        self.listings.push(JsonListing::File {
            entry: entry.clone(),
        });
        Ok(())
    }

    fn directory(&mut self, path: &Path, entries: &[Entry], _header: bool) -> io::Result<()> {
        self.listings.push(JsonListing::Dir {
            path: path.to_path_buf(),
            entries: entries.to_vec(),
        });
        Ok(())
    }

    fn error(&mut self, path: &Path, err: &ListError) -> io::Result<()> {
        writeln!(self.err, "lsr: cannot access '{}': {}", path.display(), err)
    }

    fn finish(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.listings)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
