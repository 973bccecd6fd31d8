// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("git command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("could not execute {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output file {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ContextError {
    pub fn is_command_failure(&self) -> bool {
        matches!(self, ContextError::CommandFailed { .. } | ContextError::Spawn { .. })
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_carries_command_and_stderr() {
        let err = ContextError::CommandFailed {
            command: "git log --pretty=format:- %s a..b".to_string(),
            stderr: "fatal: bad revision 'a..b'".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("git log --pretty=format:- %s a..b"));
        assert!(message.contains("fatal: bad revision"));
        assert!(err.is_command_failure());
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = ContextError::WriteOutput {
            path: PathBuf::from("out/release_context.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("out/release_context.md"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_command_failure());
    }
}
