use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_catalog::format_size;
use tesda_files_db::CatalogStore;

use crate::CliError;

/// Destroy the catalog database after explicit confirmation.
pub(crate) async fn run_wipe(store: &CatalogStore, yes: bool) -> Result<(), CliError> {
    let stats = store.stats().await?;

    if !yes {
        log::warn!(
            "This will permanently delete ALL {} file(s) in the catalog at:\n  {}",
            stats.records,
            store.location(),
        );
        log::info!("Re-run with --yes to proceed:");
        log::info!("  tesda-files wipe --yes");
        return Ok(());
    }

    store.wipe_all().await?;
    log::info!(
        "{}",
        "Catalog wiped.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path:    {}", store.location());
    log::info!("  Removed: {} file(s), {}", stats.records, format_size(stats.total_bytes));

    // Recreate the empty container so the next listing starts fresh.
    store.reopen().await?;
    super::list::relist(store).await
}
