//! Default glob sets and the override-vs-extend merge policy.

use crate::cli::LintArgs;

/// Files checked when `--include` is not given.
pub const DEFAULT_INCLUDE_GLOBS: &[&str] = &["**/*.md", "**/*.mdown", "**/*.markdown"];

/// Directories skipped when `--exclude` is not given.
pub const DEFAULT_EXCLUDE_GLOBS: &[&str] = &[
    "**/node_modules/**",
    "**/.venv/**",
    "**/venv/**",
    "**/vendor/**",
];

/// A non-empty user list replaces the defaults outright; otherwise the
/// defaults are kept and the extend list is appended after them.
fn merge(user: &[String], extend: &[String], defaults: &[&str]) -> Vec<String> {
    if !user.is_empty() {
        return user.to_vec();
    }
    defaults
        .iter()
        .map(|glob| glob.to_string())
        .chain(extend.iter().cloned())
        .collect()
}

pub fn effective_include_globs(args: &LintArgs) -> Vec<String> {
    merge(&args.include, &args.include_extend, DEFAULT_INCLUDE_GLOBS)
}

pub fn effective_exclude_globs(args: &LintArgs) -> Vec<String> {
    merge(&args.exclude, &args.exclude_extend, DEFAULT_EXCLUDE_GLOBS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_when_nothing_supplied() {
        assert_eq!(
            merge(&[], &[], DEFAULT_INCLUDE_GLOBS),
            strings(&["**/*.md", "**/*.mdown", "**/*.markdown"])
        );
    }

    #[test]
    fn test_extend_appends_after_defaults() {
        assert_eq!(
            merge(&[], &strings(&["**/*.txt"]), DEFAULT_INCLUDE_GLOBS),
            strings(&["**/*.md", "**/*.mdown", "**/*.markdown", "**/*.txt"])
        );
    }

    #[test]
    fn test_user_list_overrides_defaults_and_extend() {
        assert_eq!(
            merge(
                &strings(&["**/*.md"]),
                &strings(&["**/*.txt"]),
                DEFAULT_INCLUDE_GLOBS
            ),
            strings(&["**/*.md"])
        );
    }

    #[test]
    fn test_exclude_defaults_cover_dependency_dirs() {
        let excludes = merge(&[], &[], DEFAULT_EXCLUDE_GLOBS);
        assert!(excludes.contains(&"**/node_modules/**".to_string()));
        assert!(excludes.contains(&"**/vendor/**".to_string()));
        assert_eq!(excludes.len(), 4);
    }
}
