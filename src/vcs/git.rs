// Mon Oct 19 2026 - Alex

use super::excludes::to_pathspec;
use super::VersionControl;
use crate::config::DEFAULT_GIT;
use crate::error::{ContextError, Result};
use std::path::PathBuf;
use std::process::Command;

pub const LOG_FORMAT: &str = "--pretty=format:- %s";

/// Runs the `git` executable as a blocking child process.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    working_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_GIT.to_string(),
            working_dir: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn log_args(start: &str, end: &str) -> Vec<String> {
        vec![
            "log".to_string(),
            LOG_FORMAT.to_string(),
            format!("{}..{}", start, end),
        ]
    }

    pub fn diff_args(start: &str, end: &str, excludes: &[String]) -> Vec<String> {
        let mut args = vec![
            "diff".to_string(),
            format!("{}..{}", start, end),
            "--".to_string(),
            ".".to_string(),
        ];
        args.extend(excludes.iter().map(|p| to_pathspec(p)));
        args
    }

    pub fn list_refs_args() -> Vec<String> {
        vec![
            "for-each-ref".to_string(),
            "--format=%(refname:short)".to_string(),
            "refs/heads".to_string(),
            "refs/tags".to_string(),
        ]
    }

    /// Shell-pasteable rendering for error messages.
    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns trimmed stdout. A non-zero exit becomes `CommandFailed`.
    pub fn run(&self, args: &[String]) -> Result<String> {
        let command = self.command_line(args);
        log::debug!("running {}", command);

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| ContextError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            log::debug!("{} exited with {}", command, output.status);
            return Err(ContextError::CommandFailed { command, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        log::debug!("{} returned {} bytes", command, stdout.len());
        Ok(stdout)
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%^+,~".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn log(&self, start: &str, end: &str) -> Result<String> {
        self.run(&Self::log_args(start, end))
    }

    fn diff(&self, start: &str, end: &str, excludes: &[String]) -> Result<String> {
        self.run(&Self::diff_args(start, end, excludes))
    }

    fn list_refs(&self) -> Result<Vec<String>> {
        let output = self.run(&Self::list_refs_args())?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::excludes::default_excludes;

    #[test]
    fn test_log_args() {
        let args = GitCli::log_args("v1.2.0", "main");
        assert_eq!(args, vec!["log", "--pretty=format:- %s", "v1.2.0..main"]);
    }

    #[test]
    fn test_diff_args_scope_whole_tree_minus_excludes() {
        let args = GitCli::diff_args("abc123", "def456", &default_excludes());

        assert_eq!(&args[..4], &["diff", "abc123..def456", "--", "."]);
        assert_eq!(args[4], ":(exclude)package-lock.json");
        assert!(args.contains(&":(exclude)*.png".to_string()));
        assert_eq!(args.last().map(String::as_str), Some(":(exclude).git"));
        assert_eq!(args.len(), 4 + 12);
    }

    #[test]
    fn test_command_line_rendering() {
        let git = GitCli::new().with_program("git");
        let line = git.command_line(&GitCli::log_args("a", "b"));
        assert_eq!(line, "git log '--pretty=format:- %s' a..b");
    }

    #[test]
    fn test_pathspecs_are_quoted() {
        let git = GitCli::new();
        let line = git.command_line(&GitCli::diff_args("a", "b", &["*.png".to_string()]));
        assert_eq!(line, "git diff a..b -- . ':(exclude)*.png'");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("HEAD~1"), "HEAD~1");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let git = GitCli::new().with_program("release-context-no-such-binary");
        let err = git.log("a", "b").unwrap_err();

        match err {
            ContextError::Spawn { command, .. } => {
                assert!(command.starts_with("release-context-no-such-binary log"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
