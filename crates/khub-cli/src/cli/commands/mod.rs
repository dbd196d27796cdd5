//! CLI command handlers. Each command is in its own file.

mod config_path;
mod resolve;
mod resolvers;

pub use config_path::run_config_path;
pub use resolve::run_resolve;
pub use resolvers::run_resolvers;
