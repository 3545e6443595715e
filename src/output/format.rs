//! Text output - short and long listing formats

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Duration, Local};

use crate::error::ListError;
use crate::listing::{Entry, ListingSink};

/// Render the 10-character permission string (`drwxr-xr-x`) for raw mode
/// bits. Falls back to the `is_dir` flag when the filesystem reports no
/// type bits (non-unix platforms).
pub fn mode_string(mode: u32, is_dir: bool) -> String {
    let type_char = match mode & 0o170000 {
        0o140000 => b's',
        0o120000 => b'l',
        0o100000 => b'-',
        0o060000 => b'b',
        0o040000 => b'd',
        0o020000 => b'c',
        0o010000 => b'p',
        _ => {
            if is_dir {
                b'd'
            } else {
                b'-'
            }
        }
    };

    let mut buf = [b'-'; 10];
    buf[0] = type_char;

    let bits: [(u32, u8); 9] = [
        (0o400, b'r'),
        (0o200, b'w'),
        (0o100, b'x'),
        (0o040, b'r'),
        (0o020, b'w'),
        (0o010, b'x'),
        (0o004, b'r'),
        (0o002, b'w'),
        (0o001, b'x'),
    ];
    for (i, (bit, ch)) in bits.iter().enumerate() {
        if mode & bit != 0 {
            buf[i + 1] = *ch;
        }
    }

    // setuid/setgid/sticky replace the execute column
    if mode & 0o4000 != 0 {
        buf[3] = if buf[3] == b'x' { b's' } else { b'S' };
    }
    if mode & 0o2000 != 0 {
        buf[6] = if buf[6] == b'x' { b's' } else { b'S' };
    }
    if mode & 0o1000 != 0 {
        buf[9] = if buf[9] == b'x' { b't' } else { b'T' };
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Format a modification time the way ls does: hour and minute for
/// entries touched within the last year, the year otherwise.
pub fn format_mtime(modified: &DateTime<Local>) -> String {
    let year_ago = Local::now() - Duration::days(365);
    if *modified < year_ago {
        modified.format("%b %d  %Y").to_string()
    } else {
        modified.format("%b %d %H:%M").to_string()
    }
}

/// Block count for the `total:` line, assuming 1024-byte blocks.
pub fn total_blocks(entries: &[Entry]) -> u64 {
    entries.iter().map(|e| e.size.div_ceil(1024)).sum()
}

/// Short form: the display name only.
pub fn render_short(entry: &Entry) -> String {
    entry.display_name()
}

/// Long form: one aligned row per entry, columns sized to the widest
/// value in this listing.
pub fn render_long(entries: &[Entry]) -> Vec<String> {
    let rows: Vec<[String; 6]> = entries
        .iter()
        .map(|e| {
            [
                mode_string(e.mode, e.is_dir),
                e.nlink.to_string(),
                e.uid.to_string(),
                e.gid.to_string(),
                e.size.to_string(),
                format_mtime(&e.modified),
            ]
        })
        .collect();

    let mut widths = [0usize; 6];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    rows.iter()
        .zip(entries)
        .map(|(row, entry)| {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(widths) {
                line.push_str(&format!("{:>width$} ", cell));
            }
            line.push_str(&entry.display_name());
            line
        })
        .collect()
}

/// Streaming text sink - writes each listing as it arrives.
///
/// Listings go to `out`, per-path failures to `err`, so the two surfaces
/// can be captured independently.
pub struct TextFormatter<W: Write, E: Write> {
    long: bool,
    out: W,
    err: E,
    printed: bool,
}

impl<W: Write, E: Write> TextFormatter<W, E> {
    pub fn new(long: bool, out: W, err: E) -> Self {
        Self {
            long,
            out,
            err,
            printed: false,
        }
    }
}

impl<W: Write, E: Write> ListingSink for TextFormatter<W, E> {
    fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        if self.long {
            for line in render_long(std::slice::from_ref(entry)) {
                writeln!(self.out, "{}", line)?;
            }
        } else {
            writeln!(self.out, "{}", render_short(entry))?;
        }
        self.printed = true;
        Ok(())
    }

    fn directory(&mut self, path: &Path, entries: &[Entry], header: bool) -> io::Result<()> {
        if self.printed {
            writeln!(self.out)?;
        }
        if header {
            writeln!(self.out, "{}:", path.display())?;
        }
        if self.long {
            writeln!(self.out, "total: {}", total_blocks(entries))?;
            for line in render_long(entries) {
                writeln!(self.out, "{}", line)?;
            }
        } else {
            for entry in entries {
                writeln!(self.out, "{}", render_short(entry))?;
            }
        }
        self.printed = true;
        Ok(())
    }

    fn error(&mut self, path: &Path, err: &ListError) -> io::Result<()> {
        writeln!(self.err, "lsr: cannot access '{}': {}", path.display(), err)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
