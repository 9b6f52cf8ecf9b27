//! CLI commands module.

mod config;
mod create;
mod edit;
mod gist;
mod list;
mod util;

pub use config::ConfigCommand;
pub use create::CreateCommand;
pub use edit::EditCommand;
pub use gist::GistCommand;
pub use list::ListCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
