#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod cli;
mod common;
mod config;
mod geo_lookup;
mod http_handler;
mod keychain;
mod logger;
mod orbit_state;
mod response;
mod skill;
mod storage;
#[cfg(test)]
mod test_fixtures;
mod tle_refresh;

use crate::cli::{Cli, Commands};
use crate::config::SkillConfig;
use crate::keychain::Keychain;
use crate::skill::{RequestEnvelope, SkillDispatcher};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let command = Cli::parse().command();
    let config = SkillConfig::from_env();
    let k = Keychain::new(config).unwrap_or_else(|e| fatal!("Could not build HTTP client: {e}"));

    match command {
        Commands::Handle { file } => run_handle(k, file).await,
        Commands::Refresh => run_refresh(&k).await,
    }
}

/// Reads one request envelope from `path` (or stdin), dispatches it and prints
/// the response envelope to stdout.
async fn run_handle(k: Keychain, path: Option<PathBuf>) -> ExitCode {
    let raw = match read_request(path).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Could not read request: {e}");
            return ExitCode::FAILURE;
        }
    };
    let envelope: RequestEnvelope = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Malformed request envelope: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = SkillDispatcher::new(k);
    match dispatcher.handle(&envelope).await {
        Ok(Some(response)) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Could not serialize response: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run_refresh(k: &Keychain) -> ExitCode {
    match tle_refresh::refresh_elements(k).await {
        Ok(record) => {
            info!("Stored elements of {}", record.sat_cat_number());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Element refresh failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn read_request(path: Option<PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await
            .map_err(std::io::Error::other)?,
    }
}
