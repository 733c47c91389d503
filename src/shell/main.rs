use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{EnvFilter, fmt};

use transition_gate::modules::transitions::use_cases::handle_event::inbound::json::{
    ErrorBody, handle_event,
};
use transition_gate::shell::build_state;
use transition_gate::shell::config::ShellConfig;

/// Classify one lifecycle transition event and print the decision as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Event JSON document to classify; stdin is read when omitted
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ShellConfig::from_env().context("read configuration")?;
    let state = build_state(&config)?;
    let raw = read_input(cli.input.as_deref()).await?;

    match handle_event(&state.handler, &raw).await {
        Ok(decision) => {
            println!("{}", serde_json::to_string(&decision)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string(&ErrorBody::from(&err))?);
            Ok(if err.is_caller_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

async fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read event from {}", path.display())),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("read event from stdin")?;
            Ok(raw)
        }
    }
}
