//! Per-link verification against the filesystem.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::{markdown, AnchorCheckCode, CheckCode, DocFile, FileCheckCode, Link, LinkError, MdType};

/// GitHub-style line anchors: `L10` or `L10-L20`.
static LINE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L(\d+)(?:-L(\d+))?$").unwrap());

const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdown", "markdown"];

/// Bytes probed for a NUL when deciding whether a target is binary.
const BINARY_PROBE_LEN: usize = 8192;

/// Check a single link. Returns `None` for healthy links and for links this
/// engine does not cover (external URLs, directory references).
pub(crate) fn check_link(
    base_path: &Path,
    file: &DocFile,
    link: &Link,
    md_type: MdType,
) -> Option<LinkError> {
    let href = link.href.trim();
    if href.is_empty() || has_scheme(href) {
        return None;
    }

    let (target, fragment) = match href.split_once('#') {
        Some((target, fragment)) => (target, Some(fragment)),
        None => (href, None),
    };

    let own_path = normalize(&base_path.join(&file.path));

    // Pure anchor: the target is the containing file itself.
    if target.is_empty() {
        return fragment
            .and_then(|fragment| check_anchor(&own_path, fragment, md_type))
            .map(|code| fail(CheckCode::Anchor(code), link));
    }

    if target.ends_with('/') {
        return None;
    }

    let resolved = if let Some(rooted) = target.strip_prefix('/') {
        normalize(&base_path.join(rooted))
    } else {
        let containing_dir = own_path.parent().unwrap_or(base_path);
        normalize(&containing_dir.join(target))
    };

    if resolved == own_path {
        return Some(fail(CheckCode::File(FileCheckCode::SameFile), link));
    }
    if !resolved.starts_with(normalize(base_path)) {
        return Some(fail(CheckCode::File(FileCheckCode::OutsideBase), link));
    }
    if !resolved.is_file() {
        return Some(fail(CheckCode::File(FileCheckCode::NotExists), link));
    }

    fragment
        .and_then(|fragment| check_anchor(&resolved, fragment, md_type))
        .map(|code| fail(CheckCode::Anchor(code), link))
}

fn fail(code: CheckCode, link: &Link) -> LinkError {
    LinkError {
        code,
        link: link.clone(),
    }
}

/// Check an anchor fragment against an existing target file. Returns `None`
/// when the anchor resolves.
fn check_anchor(target: &Path, fragment: &str, md_type: MdType) -> Option<AnchorCheckCode> {
    if fragment.is_empty() {
        return Some(AnchorCheckCode::EmptyAnchor);
    }

    let bytes = match fs::read(target) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %target.display(), error = %err, "skipping unreadable link target");
            return None;
        }
    };
    if is_binary(&bytes) {
        return Some(AnchorCheckCode::BinaryFile);
    }
    let content = String::from_utf8_lossy(&bytes);

    if let Some(captures) = LINE_ANCHOR.captures(fragment) {
        let start = captures.get(1).and_then(|m| m.as_str().parse::<usize>().ok());
        let end = match captures.get(2) {
            Some(m) => match m.as_str().parse::<usize>() {
                Ok(line) => Some(line),
                Err(_) => return Some(AnchorCheckCode::LineInvalid),
            },
            None => None,
        };
        let start = match start {
            Some(line) if line > 0 => line,
            _ => return Some(AnchorCheckCode::LineInvalid),
        };
        if let Some(end) = end {
            if start >= end {
                return Some(AnchorCheckCode::LineRangeInvalid);
            }
        }
        let line_count = content.lines().count();
        if end.unwrap_or(start) > line_count {
            return Some(AnchorCheckCode::LineFail);
        }
        return None;
    }

    match target.extension().and_then(|ext| ext.to_str()) {
        None => Some(AnchorCheckCode::Undiscoverable),
        Some(ext) if !is_document_extension(ext) => Some(AnchorCheckCode::UnsupportedFiletype),
        Some(_) => {
            if markdown::heading_slugs(&content, md_type).contains(fragment) {
                None
            } else {
                Some(AnchorCheckCode::HeadingFail)
            }
        }
    }
}

fn is_document_extension(ext: &str) -> bool {
    DOCUMENT_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_PROBE_LEN).any(|&b| b == 0)
}

/// `foo://`, `mailto:`, protocol-relative `//host` and friends.
fn has_scheme(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    match href.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Fold `.` and `..` components without touching the filesystem, so
/// outside-base detection depends only on the link text.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
