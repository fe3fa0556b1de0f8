//! CLI command implementations.

pub mod args;
pub mod output;

pub mod folders;
pub mod list;
pub mod push;
pub mod settings;
pub mod validate;

pub use args::{Cli, Commands};
pub use output::Output;
