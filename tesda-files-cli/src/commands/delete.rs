use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_db::CatalogStore;

use crate::CliError;

/// Delete one record after explicit confirmation.
pub(crate) async fn run_delete(store: &CatalogStore, id: i64, yes: bool) -> Result<(), CliError> {
    if !yes {
        match store.list_summaries(None).await?.find(|s| s.id == id) {
            Some(summary) => {
                log::warn!("This will delete #{} {}", summary.id, summary.name);
                log::info!("Re-run with --yes to proceed:");
                log::info!("  tesda-files delete {} --yes", id);
            }
            None => log::info!("No file with id {}. Nothing to delete.", id),
        }
        return Ok(());
    }

    store.delete_record(id).await?;
    log::info!(
        "{}",
        format!("Deleted #{id}.").if_supports_color(Stdout, |t| t.bold())
    );
    super::list::relist(store).await
}
