use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tesda_files_catalog::{format_size, mime_from_filename, NewFile};
use tesda_files_db::CatalogStore;

use crate::CliError;

/// Store each file independently; one failure does not undo the others.
pub(crate) async fn run_add(
    store: &CatalogStore,
    files: Vec<PathBuf>,
    mime: Option<String>,
) -> Result<(), CliError> {
    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .expect("static pattern"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut added = 0usize;
    let mut failed = 0usize;
    for path in &files {
        pb.set_message(path.display().to_string());
        match ingest(store, path, mime.as_deref()).await {
            Ok((id, name, size)) => {
                added += 1;
                pb.suspend(|| log::info!("Added #{} {} ({})", id, name, format_size(size)));
            }
            Err(e) => {
                failed += 1;
                pb.suspend(|| log::warn!("Failed to add {}: {}", path.display(), e));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if added > 0 {
        super::list::relist(store).await?;
    }

    if failed > 0 {
        return Err(CliError::other(format!(
            "{} of {} file(s) could not be added",
            failed,
            files.len()
        )));
    }
    Ok(())
}

/// Read one file and insert it. Returns the new id, stored name, and size.
async fn ingest(
    store: &CatalogStore,
    path: &Path,
    mime: Option<&str>,
) -> Result<(i64, String, u64), CliError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::other(format!("{} is not a file", path.display())))?;
    let bytes = std::fs::read(path)?;
    let mime_type = mime
        .or_else(|| mime_from_filename(&name))
        .unwrap_or_default()
        .to_string();

    let file = NewFile::new(name.clone(), mime_type, bytes);
    let size = file.size;
    let id = store.insert(file).await?;
    Ok((id, name, size))
}
