pub mod cli;
pub mod engine;
pub mod error;
pub mod globs;
pub mod messages;
pub mod report;
pub mod run;

pub use cli::{Cli, Command, LintArgs};
pub use engine::{
    AnchorCheckCode, CheckCode, DocFile, FileCheckCode, FsEngine, Link, LinkEngine, LinkError,
    MdType, Position, ScanEntry, ScanOptions,
};
pub use error::{LintError, Result};
pub use report::TextReporter;
pub use run::run_lint;
