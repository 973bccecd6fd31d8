// Mon Oct 19 2026 - Alex

use crate::config::Config;
use crate::document::ReleaseDocument;
use crate::error::{ContextError, Result};
use crate::notes::{read_notes, read_system_prompt, NotesStatus};
use crate::ui::errors::ErrorDisplay;
use crate::ui::progress::ProgressSpinner;
use crate::vcs::{merge_excludes, VersionControl};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GeneratedContext {
    pub document: ReleaseDocument,
    pub rendered: String,
    pub notes_status: NotesStatus,
    pub system_prompt: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub start: String,
    pub end: String,
    pub output: PathBuf,
    pub commit_count: usize,
    pub diff_bytes: usize,
    pub notes_status: NotesStatus,
    pub system_prompt: bool,
}

/// Notes, log, diff, write. Strictly in that order; the first fatal error
/// stops the run before anything is written.
pub struct ContextGenerator<V: VersionControl> {
    vcs: V,
    display: ErrorDisplay,
    show_progress: bool,
}

impl<V: VersionControl> ContextGenerator<V> {
    pub fn new(vcs: V) -> Self {
        Self {
            vcs,
            display: ErrorDisplay::new(),
            show_progress: false,
        }
    }

    pub fn with_display(mut self, display: ErrorDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.display.format_warning(message));
    }

    fn spinner(&self, message: &str) -> Option<ProgressSpinner> {
        self.show_progress.then(|| ProgressSpinner::new(message))
    }

    pub fn generate(&self, config: &Config) -> Result<GeneratedContext> {
        config.validate()?;

        let notes = read_notes(config.notes_file.as_deref());
        if let Some(warning) = &notes.warning {
            self.warn(warning);
        }
        log::debug!("notes: {:?}, {} bytes", notes.status, notes.content.len());

        let prompt = read_system_prompt(config.system_prompt_file.as_deref())?;
        if let Some(warning) = &prompt.warning {
            self.warn(warning);
        }

        let spinner = self.spinner(&format!("Reading commit log {}", config.range()));
        let log = self.vcs.log(&config.start, &config.end)?;
        log::debug!("log: {} lines", log.lines().count());

        if let Some(spinner) = &spinner {
            spinner.set_message(&format!("Collecting diff {}", config.range()));
        }
        let excludes = merge_excludes(&config.extra_excludes);
        let diff = self.vcs.diff(&config.start, &config.end, &excludes)?;
        log::debug!("diff: {} bytes", diff.len());

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let document = ReleaseDocument::new(notes.content, log, diff);
        let rendered = document.render_with_prompt(prompt.content.as_deref());

        Ok(GeneratedContext {
            document,
            rendered,
            notes_status: notes.status,
            system_prompt: prompt.content.is_some(),
        })
    }

    pub fn run(&self, config: &Config) -> Result<RunSummary> {
        let generated = self.generate(config)?;
        write_output(&config.output_file, &generated.rendered)?;

        Ok(RunSummary {
            start: config.start.clone(),
            end: config.end.clone(),
            output: config.output_file.clone(),
            commit_count: generated.document.commit_count(),
            diff_bytes: generated.document.diff.len(),
            notes_status: generated.notes_status,
            system_prompt: generated.system_prompt,
        })
    }
}

/// Overwrites `path`. No fallback location and no retry.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ContextError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
