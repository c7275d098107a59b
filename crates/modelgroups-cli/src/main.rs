use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelgroups_core::taxonomy::NamingConvention;
use modelgroups_infrastructure::{ConfigService, FileGroupSettingsRepository, ModelGroupsPaths};

mod commands;
mod logging;

use crate::commands::Context;

#[derive(Parser)]
#[command(name = "modelgroups")]
#[command(about = "Model groups - view and rename the fixed model groups", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to group_settings.json (overrides the config file)
    #[arg(long, global = true)]
    settings_file: Option<PathBuf>,

    /// Which model id scheme to show: desktop or plugin
    #[arg(long, global = true)]
    surface: Option<NamingConvention>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the groups with their current names and models
    Groups,
    /// Rename a group and save
    Rename {
        /// Group id (e.g. g3_flash)
        id: String,
        /// New display name; may be empty
        name: String,
    },
    /// Show friendly names for model ids
    DisplayName {
        #[arg(required = true)]
        model_ids: Vec<String>,
    },
    /// Bucket model ids into the fixed groups
    AutoGroup {
        #[arg(required = true)]
        model_ids: Vec<String>,
    },
    /// Keep only the recommended model ids
    Recommended {
        #[arg(required = true)]
        model_ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let config = config_service.get_config();

    let logs_dir = ModelGroupsPaths::logs_dir().ok();
    let _log_guard = logging::init_tracing(&config.logging, logs_dir.as_deref());

    let settings_file = cli
        .settings_file
        .clone()
        .or_else(|| config.groups.settings_file.as_ref().map(PathBuf::from));
    let repository = match settings_file {
        Some(path) => FileGroupSettingsRepository::with_path(path),
        None => FileGroupSettingsRepository::new()?,
    };
    tracing::debug!("Using group settings at {}", repository.path().display());

    let ctx = Context {
        repository,
        surface: cli.surface.unwrap_or(config.groups.surface),
        json: cli.json,
    };

    match cli.command {
        Commands::Groups => commands::groups::show(&ctx).await?,
        Commands::Rename { id, name } => commands::groups::rename(&ctx, &id, &name).await?,
        Commands::DisplayName { model_ids } => commands::models::display_names(&ctx, &model_ids)?,
        Commands::AutoGroup { model_ids } => commands::models::auto_group(&ctx, &model_ids)?,
        Commands::Recommended { model_ids } => commands::models::recommended(&ctx, &model_ids)?,
    }

    Ok(())
}
