// Mon Oct 19 2026 - Alex

use crate::config::{Config, DEFAULT_GIT, DEFAULT_OUTPUT};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "release-context")]
#[command(version)]
#[command(about = "Generate release context from git history.", long_about = None)]
pub struct Args {
    /// Start Commit Hash
    #[arg(long, required_unless_present = "list_refs", value_parser = non_blank)]
    pub start: Option<String>,

    /// End Commit Hash
    #[arg(long, required_unless_present = "list_refs", value_parser = non_blank)]
    pub end: Option<String>,

    /// Path to Adhoc Notes Markdown file
    #[arg(long)]
    pub notes: Option<PathBuf>,

    /// Output filename
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Prompt file prepended to the generated context
    #[arg(long)]
    pub system_prompt: Option<PathBuf>,

    /// Repository to run git in (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Extra path pattern to leave out of the diff; may be repeated
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// git executable to invoke
    #[arg(long, default_value = DEFAULT_GIT)]
    pub git: String,

    /// Print local branches and tags, then exit
    #[arg(long, conflicts_with_all = ["start", "end", "notes", "system_prompt"])]
    pub list_refs: bool,

    /// Log verbosity: off, error, warn, info, debug or trace
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Suppress progress messages and the spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print a JSON run summary on success
    #[arg(long)]
    pub json_output: bool,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("reference must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

impl Args {
    /// Human status lines on stdout. Off with `--quiet`, and with
    /// `--json-output` so stdout stays parseable.
    pub fn status_lines(&self) -> bool {
        !self.quiet && !self.json_output
    }

    /// `None` when `--list-refs` was given instead of a range.
    pub fn to_config(&self) -> Option<Config> {
        let (start, end) = match (&self.start, &self.end) {
            (Some(start), Some(end)) => (start.clone(), end.clone()),
            _ => return None,
        };

        let mut config = Config::new(start, end)
            .with_output_file(self.output.clone())
            .with_git_program(self.git.clone())
            .with_extra_excludes(self.excludes.clone());

        if let Some(notes) = &self.notes {
            config = config.with_notes_file(notes.clone());
        }
        if let Some(prompt) = &self.system_prompt {
            config = config.with_system_prompt_file(prompt.clone());
        }
        if let Some(repo) = &self.repo {
            config = config.with_repo_dir(repo.clone());
        }

        Some(config)
    }
}
