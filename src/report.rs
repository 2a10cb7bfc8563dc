//! Text report formatting.

use std::io::{self, Write};

use colored::Colorize;

use crate::engine::{DocFile, LinkError};
use crate::messages;

/// Streams the per-file report as the verification sequences are consumed.
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Delimiter line emitted before the first error of a file.
    pub fn file_header(&mut self, file: &DocFile) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("--- {} ---", file.path.display()).bold()
        )
    }

    /// One line per broken link: `line <N or ?>: <href> (<message>)`.
    pub fn link_error(&mut self, error: &LinkError) -> io::Result<()> {
        let line = error
            .link
            .position
            .map(|position| position.line.to_string())
            .unwrap_or_else(|| "?".to_string());
        writeln!(
            self.out,
            "line {}: {} ({})",
            line,
            error.link.href,
            messages::message(error.code)
        )
    }

    /// Single line for a file with no broken links.
    pub fn file_ok(&mut self, file: &DocFile) -> io::Result<()> {
        writeln!(self.out, "{} {}", file.path.display(), "[OK]".green())
    }
}
