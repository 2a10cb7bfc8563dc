//! The lint driver: one linear pass from merged globs to an exit code.

use std::io::Write;

use tracing::debug;

use crate::cli::LintArgs;
use crate::engine::{LinkEngine, ScanOptions};
use crate::error::{LintError, Result};
use crate::globs::{effective_exclude_globs, effective_include_globs};
use crate::report::TextReporter;

/// Run the `lint` subcommand against the given engine, writing the report
/// to `out`. Returns the process exit code; environment and configuration
/// failures surface as errors and are mapped by [`LintError::exit_code`].
pub fn run_lint<E: LinkEngine, W: Write>(args: &LintArgs, engine: &E, out: &mut W) -> Result<u8> {
    let include_globs = effective_include_globs(args);
    let exclude_globs = effective_exclude_globs(args);
    let options = ScanOptions {
        base_path: args.base_path(),
        case_sensitive: args.case_sensitive,
        md_type: args.md_type,
    };

    debug!(
        include = ?include_globs,
        exclude = ?exclude_globs,
        base_path = %options.base_path.display(),
        case_sensitive = options.case_sensitive,
        md_type = %options.md_type,
        "resolved lint configuration"
    );

    if !options.base_path.is_dir() {
        return Err(LintError::MissingBaseDir(
            options.base_path.display().to_string(),
        ));
    }

    let mut reporter = TextReporter::new(out);
    let mut scanned_files = 0usize;
    let mut found_any_error = false;

    for entry in engine.scan(&include_globs, &exclude_globs, &options)? {
        scanned_files += 1;
        let mut file_errors = 0usize;

        for error in engine.verify(&options.base_path, &entry.file, &entry.links) {
            if file_errors == 0 {
                reporter.file_header(&entry.file)?;
            }
            file_errors += 1;
            reporter.link_error(&error)?;
        }

        if file_errors == 0 {
            reporter.file_ok(&entry.file)?;
        } else {
            found_any_error = true;
        }
    }

    if scanned_files == 0 {
        return Err(LintError::NoFilesMatched);
    }

    debug!(files = scanned_files, failed = found_any_error, "lint finished");

    Ok(if found_any_error {
        args.failure_code
    } else {
        args.success_code
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        AnchorCheckCode, CheckCode, DocFile, FileCheckCode, Link, LinkError as EngineLinkError,
        Position, ScanEntry,
    };
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Engine returning canned entries and errors, for driving the report
    /// and exit-code logic without touching markdown or globs.
    struct StubEngine {
        entries: Vec<ScanEntry>,
        errors: HashMap<PathBuf, Vec<EngineLinkError>>,
    }

    impl StubEngine {
        fn new(entries: Vec<ScanEntry>) -> Self {
            Self {
                entries,
                errors: HashMap::new(),
            }
        }

        fn with_errors(mut self, path: &str, errors: Vec<EngineLinkError>) -> Self {
            self.errors.insert(PathBuf::from(path), errors);
            self
        }
    }

    impl LinkEngine for StubEngine {
        fn scan<'a>(
            &'a self,
            _include_globs: &[String],
            _exclude_globs: &[String],
            _options: &ScanOptions,
        ) -> Result<Box<dyn Iterator<Item = ScanEntry> + 'a>> {
            Ok(Box::new(self.entries.clone().into_iter()))
        }

        fn verify<'a>(
            &'a self,
            _base_path: &'a Path,
            file: &'a DocFile,
            _links: &'a [Link],
        ) -> Box<dyn Iterator<Item = EngineLinkError> + 'a> {
            Box::new(
                self.errors
                    .get(&file.path)
                    .cloned()
                    .unwrap_or_default()
                    .into_iter(),
            )
        }
    }

    fn entry(path: &str) -> ScanEntry {
        ScanEntry {
            file: DocFile {
                path: PathBuf::from(path),
            },
            links: Vec::new(),
        }
    }

    fn broken_link(href: &str, line: usize) -> EngineLinkError {
        EngineLinkError {
            code: CheckCode::File(FileCheckCode::NotExists),
            link: Link {
                href: href.to_string(),
                position: Some(Position { line }),
            },
        }
    }

    fn args_for(dir: &TempDir) -> LintArgs {
        LintArgs {
            case_sensitive: false,
            md_type: Default::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            include_extend: Vec::new(),
            exclude_extend: Vec::new(),
            success_code: 0,
            failure_code: 1,
            debug: false,
            directory: Some(dir.path().to_path_buf()),
        }
    }

    fn run(args: &LintArgs, engine: &StubEngine) -> (Result<u8>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let code = run_lint(args, engine, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_missing_base_dir_aborts_before_scan() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(&dir);
        args.directory = Some(dir.path().join("nope"));
        let engine = StubEngine::new(vec![entry("a.md")]);

        let (code, output) = run(&args, &engine);
        assert!(matches!(code, Err(LintError::MissingBaseDir(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_zero_files_is_an_error() {
        let dir = TempDir::new().unwrap();
        let engine = StubEngine::new(Vec::new());

        let (code, _) = run(&args_for(&dir), &engine);
        assert!(matches!(code, Err(LintError::NoFilesMatched)));
    }

    #[test]
    fn test_clean_files_report_ok_and_success_code() {
        let dir = TempDir::new().unwrap();
        let engine = StubEngine::new(vec![entry("README.md"), entry("docs/guide.md")]);

        let (code, output) = run(&args_for(&dir), &engine);
        assert_eq!(code.unwrap(), 0);
        assert_eq!(output, "README.md [OK]\ndocs/guide.md [OK]\n");
    }

    #[test]
    fn test_broken_file_gets_header_and_error_lines() {
        let dir = TempDir::new().unwrap();
        let engine = StubEngine::new(vec![entry("README.md"), entry("docs/guide.md")])
            .with_errors(
                "docs/guide.md",
                vec![broken_link("missing.md", 3), broken_link("gone.md", 9)],
            );

        let (code, output) = run(&args_for(&dir), &engine);
        assert_eq!(code.unwrap(), 1);
        assert_eq!(
            output,
            "README.md [OK]\n\
             --- docs/guide.md ---\n\
             line 3: missing.md (Link references a file that does not exist.)\n\
             line 9: gone.md (Link references a file that does not exist.)\n"
        );
    }

    #[test]
    fn test_configured_exit_codes_are_used() {
        let dir = TempDir::new().unwrap();
        let clean = StubEngine::new(vec![entry("a.md")]);
        let broken = StubEngine::new(vec![entry("a.md")])
            .with_errors("a.md", vec![broken_link("x.md", 1)]);

        let mut args = args_for(&dir);
        args.success_code = 7;
        args.failure_code = 42;

        let (code, _) = run(&args, &clean);
        assert_eq!(code.unwrap(), 7);

        let (code, _) = run(&args, &broken);
        assert_eq!(code.unwrap(), 42);
    }

    #[test]
    fn test_anchor_errors_use_anchor_message_table() {
        let dir = TempDir::new().unwrap();
        let engine = StubEngine::new(vec![entry("a.md")]).with_errors(
            "a.md",
            vec![EngineLinkError {
                code: CheckCode::Anchor(AnchorCheckCode::HeadingFail),
                link: Link {
                    href: "b.md#nope".to_string(),
                    position: None,
                },
            }],
        );

        let (code, output) = run(&args_for(&dir), &engine);
        assert_eq!(code.unwrap(), 1);
        assert!(output.contains("line ?: b.md#nope (Link references a non-existent header.)"));
    }
}
