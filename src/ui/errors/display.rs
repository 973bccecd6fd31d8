// Mon Oct 19 2026 - Alex

use colored::Colorize;
use std::error::Error;

/// Renders errors and warnings for stderr.
#[derive(Debug, Clone)]
pub struct ErrorDisplay {
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            color_enabled: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    pub fn format(&self, error: &(dyn Error + 'static)) -> String {
        let mut output = String::new();

        let header = if self.color_enabled {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };

        output.push_str(&format!("{} {}", header, error));

        let mut source = error.source();
        let mut depth = 1;

        while let Some(cause) = source {
            let prefix = if self.color_enabled {
                format!("  {} ", "→".yellow())
            } else {
                "  -> ".to_string()
            };

            output.push_str(&format!("\n{}Caused by: {}", prefix, cause));
            source = cause.source();
            depth += 1;

            if depth > 10 {
                output.push_str("\n  ... (cause chain truncated)");
                break;
            }
        }

        output
    }

    pub fn print(&self, error: &(dyn Error + 'static)) {
        eprintln!("{}", self.format(error));
    }

    pub fn format_warning(&self, message: &str) -> String {
        if self.color_enabled {
            format!("{} {}", "Warning:".yellow().bold(), message)
        } else {
            format!("Warning: {}", message)
        }
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
