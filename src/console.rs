//! Console rendering and the stderr error sink.

use std::io::{self, Write};

use fpick_core::{ErrorSink, Listing};

/// Reports errors on stderr and counts them.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    reported: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl ErrorSink for ConsoleSink {
    fn report_error(&mut self, message: &str) {
        self.reported += 1;
        eprintln!("Error: {message}");
    }
}

/// Print a listing with its indices.
pub fn write_listing(out: &mut impl Write, listing: &Listing) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current Directory: {}", listing.directory().display())?;
    writeln!(out, "{}", "-".repeat(50))?;

    if listing.is_empty() {
        writeln!(out, "(empty)")?;
    }
    for (index, entry) in listing.iter() {
        let kind = if entry.is_dir() { "📁 Folder" } else { "📄 File" };
        writeln!(out, "{index}. {kind}: {}", entry.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpick_core::Entry;

    #[test]
    fn test_write_listing() {
        let listing = Listing::new("/data", vec![Entry::directory("docs"), Entry::file("a.txt")]);
        let mut out = Vec::new();
        write_listing(&mut out, &listing).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Current Directory: /data"));
        assert!(text.contains("0. 📁 Folder: docs"));
        assert!(text.contains("1. 📄 File: a.txt"));
    }
}
