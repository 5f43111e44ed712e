//! tesda-files CLI
//!
//! Command-line front end for the local file catalog: add files, list and
//! search them, preview, export, delete, and wipe.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use tesda_files_db::{CatalogStore, StoreLocation};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings();
    let (db_path, source) = settings::resolve_db_path(
        cli.db,
        std::env::var_os(settings::DB_ENV_VAR),
        &settings,
    );

    let command = match cli.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => {
                    commands::config::run_config_show(&settings, &db_path, source);
                    Ok(())
                }
                ConfigAction::Path => {
                    commands::config::run_config_path();
                    Ok(())
                }
                ConfigAction::SetDb { path } => commands::config::run_config_set_db(path),
                ConfigAction::ClearDb => commands::config::run_config_clear_db(),
            };
        }
        command => command,
    };

    log::debug!("Using catalog database {} ({})", db_path.display(), source);
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;
    rt.block_on(run_store_command(command, StoreLocation::Path(db_path)))
}

/// Open the store, run one command against it, and close it again.
async fn run_store_command(command: Commands, location: StoreLocation) -> Result<(), CliError> {
    if let Commands::Wipe { yes: false } = command {
        if let Some(path) = location.path().filter(|p| !p.exists()) {
            log::warn!("No catalog database found at {}", path.display());
            log::info!("Nothing to wipe.");
            return Ok(());
        }
    }

    let store = CatalogStore::open(location).await?;

    let result = match command {
        Commands::Add { files, mime } => commands::add::run_add(&store, files, mime).await,
        Commands::List { filter, tag, json } => {
            commands::list::run_list(&store, filter.as_deref(), tag.as_deref(), json).await
        }
        Commands::Show { id, lines } => commands::show::run_show(&store, id, lines).await,
        Commands::Export {
            id,
            output,
            data_uri,
            force,
        } => commands::export::run_export(&store, id, output, data_uri, force).await,
        Commands::Delete { id, yes } => commands::delete::run_delete(&store, id, yes).await,
        Commands::Wipe { yes } => commands::wipe::run_wipe(&store, yes).await,
        Commands::Stats => commands::stats::run_stats(&store).await,
        // Handled in `run` before the store is opened.
        Commands::Config { .. } => Ok(()),
    };

    store.close().await?;
    result
}
