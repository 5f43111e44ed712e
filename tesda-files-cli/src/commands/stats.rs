use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_catalog::format_size;
use tesda_files_db::CatalogStore;

use crate::CliError;

pub(crate) async fn run_stats(store: &CatalogStore) -> Result<(), CliError> {
    let stats = store.stats().await?;

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database:  {}", store.location());
    crate::log_blank();
    log::info!("  Files:     {:>10}", stats.records);
    log::info!("  Stored:    {:>10}", format_size(stats.total_bytes));

    Ok(())
}
