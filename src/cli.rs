use clap::Parser;

use crate::inputs::Inputs;

#[derive(Parser, Debug)]
#[command(name = "lint-check-run")]
#[command(author, version, about = "Lint source files and report findings as a GitHub check run")]
#[command(long_about = "Lint the files matched by a pattern and publish the findings as \
    annotations on a GitHub check run for the current commit.\n\n\
    Every input can also be supplied through the Actions environment.\n\n\
    Exit codes:\n  \
    0 - Check run completed (its conclusion carries the lint verdict)\n  \
    1 - Missing input or runtime error")]
pub struct Cli {
    /// Files to lint; several patterns may be given on separate lines
    #[arg(long, env = "INPUT_PATTERN")]
    pub pattern: Option<String>,

    /// Base lint configuration file
    #[arg(long, env = "INPUT_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Token used to create and update the check run
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit the check run is attached to
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Leave the check run in progress when linting fails after it was opened
    #[arg(long)]
    pub leave_running_on_error: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The raw inputs, not yet validated.
    #[must_use]
    pub fn inputs(&self) -> Inputs {
        Inputs {
            pattern: self.pattern.clone(),
            config_file: self.config_file.clone(),
            token: self.token.clone(),
            repository: self.repository.clone(),
            sha: self.sha.clone(),
            api_url: self.api_url.clone(),
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
