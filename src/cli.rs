use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::MdType;

#[derive(Parser, Debug)]
#[command(
    name = "doclint",
    version,
    about = "Check documentation files for broken links",
    long_about = "doclint scans a documentation tree for Markdown files and reports links \
                  whose target file, heading anchor, or line reference is broken."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check documentation files under a directory for broken links
    Lint(LintArgs),
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Make glob matching case-sensitive. Defaults to case-insensitive.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Markdown dialect used to parse links and headings
    #[arg(long = "md-type", value_enum, default_value_t = MdType::Commonmark)]
    pub md_type: MdType,

    /// Glob matching files to check, replacing the defaults. Can be given
    /// multiple times.
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob matching files to skip, replacing the defaults. Can be given
    /// multiple times.
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Glob appended to the default include globs. Can be given multiple
    /// times.
    #[arg(long, value_name = "GLOB", conflicts_with = "include")]
    pub include_extend: Vec<String>,

    /// Glob appended to the default exclude globs. Can be given multiple
    /// times.
    #[arg(long, value_name = "GLOB", conflicts_with = "exclude")]
    pub exclude_extend: Vec<String>,

    /// Exit code used when no broken links are found
    #[arg(long, value_name = "CODE", default_value_t = 0)]
    pub success_code: u8,

    /// Exit code used when broken links are found
    #[arg(long, value_name = "CODE", default_value_t = 1)]
    pub failure_code: u8,

    /// Dump the resolved globs and scan options to stderr before scanning
    #[arg(long, hide = true)]
    pub debug: bool,

    /// Base directory to scan. Defaults to the current working directory.
    #[arg(value_name = "directory")]
    pub directory: Option<PathBuf>,
}

impl LintArgs {
    /// Resolve the positional directory against the process working
    /// directory; absolute paths are kept as given.
    pub fn base_path(&self) -> PathBuf {
        match &self.directory {
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => match std::env::current_dir() {
                Ok(cwd) => cwd.join(dir),
                Err(_) => dir.clone(),
            },
        }
    }
}
