//! AHP Engine CLI
//!
//! Loads a decision document, evaluates it and prints the report as JSON.
//!
//! # Exit Codes
//! - 0: evaluated successfully
//! - 1: configuration, loading or evaluation failed
//! - 2: `--require-consistent` was given and some judgments are inconsistent

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ahp_engine::adapters::FileDecisionLoader;
use ahp_engine::application::EvaluateDecisionHandler;
use ahp_engine::config::{AppConfig, LoggingConfig};
use ahp_engine::domain::foundation::{DomainError, ErrorCode};
use ahp_engine::ports::DecisionLoader;

/// Evaluate an AHP decision file
#[derive(Parser)]
#[command(name = "ahp-engine")]
#[command(version)]
#[command(about = "Derive AHP priorities, consistency ratios and a ranking from a decision file")]
struct Cli {
    /// Decision document (.yaml, .yml or .json)
    decision_file: PathBuf,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    compact: bool,

    /// Exit with code 2 when any judgment matrix is inconsistent
    #[arg(long)]
    require_consistent: bool,
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    if config.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<bool, DomainError> {
    let loader = FileDecisionLoader::new(config.analysis.limits());
    let model = loader.load(&cli.decision_file)?;

    let outcome = EvaluateDecisionHandler::new().handle(&model)?;

    let rendered = if cli.compact {
        serde_json::to_string(&outcome.report)
    } else {
        serde_json::to_string_pretty(&outcome.report)
    }
    .map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationFailed,
            format!("Failed to render report: {}", e),
        )
    })?;

    println!("{}", rendered);
    Ok(outcome.report.all_consistent)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ahp-engine: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("ahp-engine: invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_logging(&config.logging);

    match run(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) if cli.require_consistent => {
            tracing::warn!(file = %cli.decision_file.display(), "Inconsistent judgments");
            ExitCode::from(2)
        }
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = %e.code, "Evaluation failed: {}", e.message);
            eprintln!("ahp-engine: {}", e);
            ExitCode::FAILURE
        }
    }
}
