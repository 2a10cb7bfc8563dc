//! Filesystem-backed engine implementation.

use std::fs;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{markdown, verify, DocFile, Link, LinkEngine, LinkError, MdType, ScanEntry, ScanOptions};
use crate::error::{LintError, Result};

/// Engine that scans and verifies against the local filesystem.
pub struct FsEngine {
    /// Dialect applied when parsing link targets during verification; the
    /// verify contract only carries the base path.
    md_type: MdType,
}

impl FsEngine {
    pub fn new(md_type: MdType) -> Self {
        Self { md_type }
    }
}

impl Default for FsEngine {
    fn default() -> Self {
        Self::new(MdType::default())
    }
}

fn build_matchers(patterns: &[String], case_sensitive: bool) -> Result<Vec<GlobMatcher>> {
    patterns
        .iter()
        .map(|pattern| {
            GlobBuilder::new(pattern)
                .case_insensitive(!case_sensitive)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|source| LintError::Glob {
                    pattern: pattern.clone(),
                    source,
                })
        })
        .collect()
}

fn matches(matchers: &[GlobMatcher], path: &Path) -> bool {
    matchers.iter().any(|m| m.is_match(path))
}

impl LinkEngine for FsEngine {
    fn scan<'a>(
        &'a self,
        include_globs: &[String],
        exclude_globs: &[String],
        options: &ScanOptions,
    ) -> Result<Box<dyn Iterator<Item = ScanEntry> + 'a>> {
        let include = build_matchers(include_globs, options.case_sensitive)?;
        let exclude = build_matchers(exclude_globs, options.case_sensitive)?;

        let base_path = options.base_path.clone();
        let md_type = options.md_type;

        // Each entry is matched and read only when the caller pulls it.
        let walker = WalkDir::new(&base_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Box::new(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    return None;
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let relative = entry.path().strip_prefix(&base_path).ok()?.to_path_buf();
            if !matches(&include, &relative) || matches(&exclude, &relative) {
                return None;
            }

            let absolute = entry.into_path();
            let content = match fs::read_to_string(&absolute) {
                Ok(content) => content,
                Err(err) => {
                    warn!(path = %absolute.display(), error = %err, "skipping unreadable file");
                    return None;
                }
            };
            let links = markdown::extract_links(&content, md_type);
            debug!(path = %relative.display(), links = links.len(), "scanned file");
            Some(ScanEntry {
                file: DocFile { path: relative },
                links,
            })
        })))
    }

    fn verify<'a>(
        &'a self,
        base_path: &'a Path,
        file: &'a DocFile,
        links: &'a [Link],
    ) -> Box<dyn Iterator<Item = LinkError> + 'a> {
        Box::new(
            links
                .iter()
                .filter_map(move |link| verify::check_link(base_path, file, link, self.md_type)),
        )
    }
}
