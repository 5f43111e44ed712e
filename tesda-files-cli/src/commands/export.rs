use std::path::PathBuf;

use tesda_files_catalog::{data_uri, format_size};
use tesda_files_db::CatalogStore;

use crate::CliError;

/// Write a stored file to disk, or print it as a data: URI.
pub(crate) async fn run_export(
    store: &CatalogStore,
    id: i64,
    output: Option<PathBuf>,
    as_data_uri: bool,
    force: bool,
) -> Result<(), CliError> {
    let record = store.get(id).await?.ok_or(CliError::NotFound(id))?;

    if as_data_uri {
        println!("{}", data_uri(&record.mime_type, &record.blob));
        return Ok(());
    }

    let target = output.unwrap_or_else(|| PathBuf::from(safe_file_name(&record.name)));
    if target.exists() && !force {
        return Err(CliError::other(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    std::fs::write(&target, &record.blob)?;
    log::info!(
        "Exported #{} {} to {} ({})",
        record.id,
        record.name,
        target.display(),
        format_size(record.blob.len() as u64),
    );
    Ok(())
}

/// Stored names come from arbitrary sources; keep only the final component.
fn safe_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or("");
    if last.is_empty() || last == "." || last == ".." {
        "download".to_string()
    } else {
        last.to_string()
    }
}
