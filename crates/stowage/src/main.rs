//! stowage: take a streamed database backup and publish it to object storage.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use stowage_fetch::HttpSource;
use stowage_pipeline::Backup;
use tracing::error;

use crate::cli::{App, Commands, TakeBackupArg};
use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(app: App) -> Result<()> {
    let config = Config::load(app.config.as_deref()).context("loading configuration")?;

    match app.cmd {
        Commands::TakeBackup(arg) => take_backup(&config, arg).await,
    }
}

async fn take_backup(config: &Config, arg: TakeBackupArg) -> Result<()> {
    let backup = Backup::new(
        HttpSource::new(config.request_options()),
        config.rclone(),
        config.backup_options(),
    );
    backup.take(&arg.src_host, &arg.dest_uri).await?;
    Ok(())
}
