use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_catalog::RecordSummary;
use tesda_files_db::CatalogStore;

use crate::CliError;

use super::log_record_line;

/// List stored files, newest first.
pub(crate) async fn run_list(
    store: &CatalogStore,
    filter: Option<&str>,
    tag: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let summaries: Vec<RecordSummary> = match tag {
        Some(tag) => store.find_by_tag(tag).await?.collect(),
        None => store.list_summaries(filter).await?.collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| CliError::other(format!("Failed to serialize listing: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    log_summaries(&summaries);
    Ok(())
}

/// Re-read the catalog and print it. Called after every mutating command.
pub(crate) async fn relist(store: &CatalogStore) -> Result<(), CliError> {
    let summaries: Vec<RecordSummary> = store.list_summaries(None).await?.collect();
    crate::log_blank();
    log_summaries(&summaries);
    Ok(())
}

fn log_summaries(summaries: &[RecordSummary]) {
    if summaries.is_empty() {
        log::info!(
            "{}",
            "No files found.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }

    for summary in summaries {
        log_record_line(summary);
    }
    crate::log_blank();
    log::info!("{} file(s)", summaries.len());
}
