pub mod args;
pub mod commands;
pub mod error;
pub mod files;

pub use error::{CliError, Result};
