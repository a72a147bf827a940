mod cli;
mod config;

use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use veneer_api::{Api, UserContext, run_scheduled_check};
use veneer_provision::Provisioner;
use veneer_store::{FilesystemStore, RecordStore};
use veneer_upgrade::{HttpReleaseSource, VersionResolver};

use crate::cli::Commands;
use crate::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load(&cli.data_dir.join("config.json")).await?;

    let store = Arc::new(FilesystemStore::new(&cli.data_dir));
    store.initialize().await?;

    let api = Api::new(
        store.clone() as Arc<dyn RecordStore>,
        Arc::new(HttpReleaseSource::new(&config.release_endpoint)),
        VersionResolver::embedded(env!("CARGO_PKG_VERSION")),
    )
    .with_user(UserContext { user: config.user });

    match cli.command {
        Commands::Install => {
            let report = Provisioner::new(store.as_ref()).install().await?;
            print_json(&report)?;
        }
        Commands::Uninstall => {
            let report = Provisioner::new(store.as_ref()).uninstall().await;
            print_json(&report)?;
        }
        Commands::Check { record } => {
            if record {
                print_json(&api.create_upgrade_check_record().await)?;
            } else {
                print_json(&api.upgrade_status().await)?;
            }
        }
        Commands::Suggest {
            category,
            priority,
            record,
        } => {
            if record {
                print_json(&api.create_suggestions_records().await)?;
            } else if category.is_some() || priority.is_some() {
                print_json(&api.filtered_suggestions(category, priority).await)?;
            } else {
                print_json(&api.suggestions().await)?;
            }
        }
        Commands::HelpUpgrade => {
            print_json(&api.upgrade_help())?;
        }
        Commands::Complete { id } => {
            print_json(&api.mark_suggestion_completed(&id).await)?;
        }
        Commands::Scheduled { cadence } => {
            print_json(&run_scheduled_check(&api, cadence.into()).await)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
