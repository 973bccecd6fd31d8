// Mon Oct 19 2026 - Alex

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod notes;
pub mod ui;
pub mod vcs;

pub use config::Config;
pub use document::ReleaseDocument;
pub use error::{ContextError, Result};
pub use generator::{ContextGenerator, GeneratedContext, RunSummary};
pub use vcs::{GitCli, VersionControl};
