//! Tooling Layer
//!
//! Command-line front end and the interactive prompts behind `rate`.

pub mod cli;
pub mod prompt;

pub use cli::{Cli, CliContext, Commands};
pub use prompt::{DialoguerPrompter, PromptAction, Prompter};
