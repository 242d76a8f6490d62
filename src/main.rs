#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when handlers stay generic over the storage seam
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

use crate::cli::Cli;
use crate::cli::Command;
use crate::config::Config;
use crate::storage::Storage;

mod aliases;
mod cli;
mod commands;
mod config;
mod launcher;
mod resolver;
mod storage;
mod template;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "goto=info";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let cli = Cli::parse();

    let config = match cli.context {
        Some(context) => Config::with_context(context),
        None => Config::from_env(),
    };

    tracing::debug!(
        "Opening alias storage [context={} path={}]",
        config.context,
        config.database_path.display()
    );

    let storage = storage::setup(&config).await?;

    // the pool closes before exit on every path, failed commands included
    let result = run(&cli.command, &storage).await;

    storage.close().await;

    result
}

/// Dispatch the parsed command against the storage
async fn run<S: Storage>(command: &Command, storage: &S) -> Result<()> {
    match command {
        Command::Alias {
            alias,
            link,
            description,
            tags,
        } => commands::create_alias(storage, alias, link, description.as_deref(), tags).await,
        Command::Ls { limit } => commands::list_aliases(storage, *limit).await,
        Command::Rm { alias } => commands::delete_alias(storage, alias).await,
        Command::Open(arguments) => {
            let token = arguments.first().map_or("", String::as_str);

            commands::launch(storage, token).await
        }
    }
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;
    use tracing_subscriber::EnvFilter;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
