// Mon Oct 19 2026 - Alex

pub mod cli;
pub mod errors;
pub mod progress;

pub use cli::{Args, CommandHandler};
pub use errors::ErrorDisplay;
pub use progress::ProgressSpinner;
