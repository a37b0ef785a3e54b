use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lint_check_run::cli::Cli;
use lint_check_run::config::FileConfigResolver;
use lint_check_run::discovery::GlobDiscovery;
use lint_check_run::engine::PatternEngine;
use lint_check_run::github::{CheckRunReporter, ReqwestClient};
use lint_check_run::host;
use lint_check_run::inputs::Configuration;
use lint_check_run::pipeline::Pipeline;
use lint_check_run::{EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            host::set_failed(&e.to_string());
            EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> lint_check_run::Result<()> {
    // Inputs are validated before anything touches the network.
    let config = Configuration::from_inputs(cli.inputs())?;
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let reporter = CheckRunReporter::new(
        ReqwestClient::new()?,
        &config.api_url,
        config.credential.clone(),
        config.context.clone(),
    );
    let pipeline = Pipeline::new(
        &root,
        GlobDiscovery::new(&root),
        FileConfigResolver::new(&root),
        PatternEngine::new(),
        reporter,
    )
    .with_close_on_error(!cli.leave_running_on_error);

    let verdict = pipeline.run(&config)?;
    info!(
        conclusion = verdict.conclusion().as_str(),
        "{}",
        verdict.summary()
    );
    Ok(())
}
