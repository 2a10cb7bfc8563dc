//! Link-checking engine: file scanning and link verification.
//!
//! The CLI layer talks to the engine exclusively through the [`LinkEngine`]
//! trait so the drivers and the report formatter can be exercised against a
//! stub in tests. [`FsEngine`] is the filesystem-backed implementation.

mod markdown;
mod scanner;
mod verify;

use clap::ValueEnum;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use scanner::FsEngine;

/// Markdown dialect used when extracting links and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MdType {
    /// Standard CommonMark.
    #[default]
    Commonmark,
    /// CommonMark plus GitHub extensions (tables, strikethrough, task
    /// lists, footnotes).
    Gfm,
}

impl MdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MdType::Commonmark => "commonmark",
            MdType::Gfm => "gfm",
        }
    }
}

impl std::fmt::Display for MdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options governing a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root directory; glob patterns and discovered paths are relative to it.
    pub base_path: PathBuf,
    /// Case-sensitive glob matching.
    pub case_sensitive: bool,
    /// Dialect used to parse the scanned files.
    pub md_type: MdType,
}

/// A documentation file discovered by the scanner, path relative to the
/// scan base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    pub path: PathBuf,
}

/// Source position of a link within its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
}

/// A link discovered in a documentation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub position: Option<Position>,
}

/// One scanned file together with the links found in it.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub file: DocFile,
    pub links: Vec<Link>,
}

/// Outcome codes for the file-reference part of a link check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCheckCode {
    Success,
    /// The target file does not exist.
    NotExists,
    /// The target resolves outside the base directory.
    OutsideBase,
    /// The link points at the file it appears in.
    SameFile,
}

/// Outcome codes for the anchor part of a link check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorCheckCode {
    /// The href ends in `#` with nothing after it.
    EmptyAnchor,
    /// The target is a binary file; anchors cannot address it.
    BinaryFile,
    /// The target has no file extension, so the anchor kind is unknowable.
    Undiscoverable,
    /// Heading anchor against a non-document file.
    UnsupportedFiletype,
    HeadingMatch,
    /// No heading in the target produces this anchor slug.
    HeadingFail,
    LineMatch,
    /// The referenced line is past the end of the target.
    LineFail,
    /// The line reference does not parse as a valid line number.
    LineInvalid,
    /// Multi-line range whose start is not below its end.
    LineRangeInvalid,
}

/// Tagged check outcome; the tag selects which message table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCode {
    File(FileCheckCode),
    Anchor(AnchorCheckCode),
}

/// A failed link check, as yielded by [`LinkEngine::verify`].
#[derive(Debug, Clone)]
pub struct LinkError {
    pub code: CheckCode,
    pub link: Link,
}

/// The engine contract consumed by the lint driver.
///
/// Both operations return lazily-consumed sequences: files are read and
/// parsed one at a time as the outer iterator advances, and links are
/// checked one at a time as the inner iterator advances.
pub trait LinkEngine {
    /// Discover documentation files matching the given globs and extract
    /// their links.
    fn scan<'a>(
        &'a self,
        include_globs: &[String],
        exclude_globs: &[String],
        options: &ScanOptions,
    ) -> Result<Box<dyn Iterator<Item = ScanEntry> + 'a>>;

    /// Check the links of one scanned file, yielding an error per broken
    /// link.
    fn verify<'a>(
        &'a self,
        base_path: &'a Path,
        file: &'a DocFile,
        links: &'a [Link],
    ) -> Box<dyn Iterator<Item = LinkError> + 'a>;
}
