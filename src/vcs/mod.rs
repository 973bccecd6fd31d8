// Mon Oct 19 2026 - Alex

pub mod excludes;
pub mod git;

pub use excludes::{default_excludes, merge_excludes, DEFAULT_EXCLUDES};
pub use git::GitCli;

use crate::error::Result;

/// The version-control queries the generator needs. Every output is opaque text.
pub trait VersionControl {
    /// One `- <subject>` line per commit in `start..end`.
    fn log(&self, start: &str, end: &str) -> Result<String>;

    /// Diff of `start..end` over the whole tree minus `excludes` (plain glob
    /// patterns, not pathspecs).
    fn diff(&self, start: &str, end: &str, excludes: &[String]) -> Result<String>;

    fn list_refs(&self) -> Result<Vec<String>>;
}
