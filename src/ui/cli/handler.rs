// Mon Oct 19 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::generator::{ContextGenerator, RunSummary};
use crate::ui::errors::ErrorDisplay;
use crate::vcs::{GitCli, VersionControl};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

pub struct CommandHandler {
    display: ErrorDisplay,
}

impl CommandHandler {
    pub fn with_display(display: ErrorDisplay) -> Self {
        Self { display }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        if args.list_refs {
            return self.handle_list_refs(&args);
        }

        let config = args
            .to_config()
            .context("--start and --end are required unless --list-refs is given")?;
        self.handle_generate(&args, &config)
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        env_logger::Builder::new()
            .filter_level(args.log_level)
            .format_timestamp(None)
            .try_init()
            .context("failed to initialise logging")?;

        Ok(())
    }

    fn git_for(program: &str, repo: Option<&Path>) -> GitCli {
        let git = GitCli::new().with_program(program);
        match repo {
            Some(repo) => git.with_working_dir(repo),
            None => git,
        }
    }

    fn handle_generate(&self, args: &Args, config: &Config) -> anyhow::Result<()> {
        if args.status_lines() {
            println!("{}", format!("Generating context from {} to {}...", config.start, config.end).cyan());
        }

        let git = Self::git_for(&config.git_program, config.repo_dir.as_deref());
        let generator = ContextGenerator::new(git)
            .with_display(self.display.clone())
            .with_progress(!args.quiet);

        let summary = generator.run(config)?;
        self.report(args, &summary)
    }

    fn report(&self, args: &Args, summary: &RunSummary) -> anyhow::Result<()> {
        if args.json_output {
            let json = serde_json::to_string_pretty(summary).context("failed to serialize run summary")?;
            println!("{}", json);
        } else if args.status_lines() {
            println!("{}", format!("Successfully wrote context to {}", summary.output.display()).green());
        }

        log::info!(
            "{} commits, {} diff bytes, notes {:?}",
            summary.commit_count,
            summary.diff_bytes,
            summary.notes_status
        );
        Ok(())
    }

    fn handle_list_refs(&self, args: &Args) -> anyhow::Result<()> {
        let refs = Self::git_for(&args.git, args.repo.as_deref()).list_refs()?;
        for name in refs {
            println!("{}", name);
        }
        Ok(())
    }
}
