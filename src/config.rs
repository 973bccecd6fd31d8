// Mon Oct 19 2026 - Alex

use crate::error::{ContextError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "release_context.md";
pub const DEFAULT_GIT: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub start: String,
    pub end: String,
    pub notes_file: Option<PathBuf>,
    pub output_file: PathBuf,
    pub system_prompt_file: Option<PathBuf>,
    pub repo_dir: Option<PathBuf>,
    pub git_program: String,
    pub extra_excludes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            notes_file: None,
            output_file: PathBuf::from(DEFAULT_OUTPUT),
            system_prompt_file: None,
            repo_dir: None,
            git_program: DEFAULT_GIT.to_string(),
            extra_excludes: Vec::new(),
        }
    }
}

impl Config {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            ..Self::default()
        }
    }

    pub fn with_notes_file(mut self, notes: PathBuf) -> Self {
        self.notes_file = Some(notes);
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_system_prompt_file(mut self, prompt: PathBuf) -> Self {
        self.system_prompt_file = Some(prompt);
        self
    }

    pub fn with_repo_dir(mut self, repo: PathBuf) -> Self {
        self.repo_dir = Some(repo);
        self
    }

    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    pub fn with_extra_excludes(mut self, patterns: Vec<String>) -> Self {
        self.extra_excludes = patterns;
        self
    }

    /// Commit range in `start..end` form, as handed to git.
    pub fn range(&self) -> String {
        format!("{}..{}", self.start, self.end)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start.trim().is_empty() {
            return Err(ContextError::InvalidConfig("--start must not be empty".to_string()));
        }
        if self.end.trim().is_empty() {
            return Err(ContextError::InvalidConfig("--end must not be empty".to_string()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ContextError::InvalidConfig("--output must not be empty".to_string()));
        }
        if self.git_program.trim().is_empty() {
            return Err(ContextError::InvalidConfig("--git must not be empty".to_string()));
        }
        Ok(())
    }
}
