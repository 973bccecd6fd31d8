// Mon Oct 19 2026 - Alex

pub mod spinner;

pub use spinner::ProgressSpinner;
