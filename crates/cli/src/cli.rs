use std::path::PathBuf;

use veneer_types::{Category, Priority};

#[derive(clap::Parser, Debug)]
#[clap(name = "veneer", about = "Desk theming plugin: suggestions and upgrade checks")]
pub struct Cli {
    /// Data directory holding plugin records and config
    #[clap(long, default_value = "./veneer-data")]
    pub data_dir: PathBuf,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Provision doctypes, desk pages and starter themes
    Install,
    /// Remove plugin pages; settings and themes are preserved
    Uninstall,
    /// Check the release index for a newer version
    Check {
        /// Also append a row to the upgrade-check log
        #[clap(long)]
        record: bool,
    },
    /// Generate improvement suggestions from the current settings
    Suggest {
        /// Filter by category (theme, performance, accessibility, ux, general)
        #[clap(long)]
        category: Option<Category>,
        /// Filter by priority (high, medium, low)
        #[clap(long)]
        priority: Option<Priority>,
        /// Persist the generated suggestions as pending records
        #[clap(long)]
        record: bool,
    },
    /// Print upgrade instructions
    HelpUpgrade,
    /// Mark a stored suggestion as completed
    Complete {
        /// Record id returned by `suggest --record`
        id: veneer_store::RecordId,
    },
    /// Run a scheduler callback
    Scheduled {
        #[clap(value_enum)]
        cadence: CadenceArg,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum CadenceArg {
    Daily,
    Weekly,
}

impl From<CadenceArg> for veneer_api::Cadence {
    fn from(value: CadenceArg) -> Self {
        match value {
            CadenceArg::Daily => veneer_api::Cadence::Daily,
            CadenceArg::Weekly => veneer_api::Cadence::Weekly,
        }
    }
}
