//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod config;
mod header;
mod open;

pub use check::run_check;
pub use completions::run_completions;
pub use config::run_config;
pub use header::run_header;
pub use open::run_open;
