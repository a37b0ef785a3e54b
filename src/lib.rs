pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod github;
pub mod host;
pub mod inputs;
pub mod pipeline;
pub mod report;
pub mod runner;

pub use error::{LintCheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
mod test_fixtures;
