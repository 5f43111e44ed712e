//! Async catalog store backed by a dedicated worker thread.
//!
//! The worker owns the SQLite connection and executes one request at a time.
//! Requests travel over an unbounded mpsc channel and each carries a oneshot
//! sender for its result. Writes and reads issued without awaiting each other
//! are not ordered with respect to the caller's intent; await a write before
//! listing if the listing must observe it.

use std::fmt;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tesda_files_catalog::{CatalogStats, FileRecord, NewFile, RecordFilter, RecordSummary};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::{operations, queries, schema};

/// Errors surfaced by [`CatalogStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The container could not be opened or created, or must be reopened.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    /// An insert, delete, or wipe was rejected. Nothing was changed.
    #[error("Write failed: {0}")]
    WriteFailed(String),
    /// A listing or lookup failed. No partial results are returned.
    #[error("Read failed: {0}")]
    ReadFailed(String),
}

impl StoreError {
    fn unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    fn write(e: impl fmt::Display) -> Self {
        Self::WriteFailed(e.to_string())
    }

    fn read(e: impl fmt::Display) -> Self {
        Self::ReadFailed(e.to_string())
    }
}

impl From<schema::SchemaError> for StoreError {
    fn from(e: schema::SchemaError) -> Self {
        Self::StoreUnavailable(e.to_string())
    }
}

/// Where the catalog container lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A SQLite file on disk.
    Path(PathBuf),
    /// A private in-memory database, discarded on wipe or close.
    Memory,
}

impl StoreLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            Self::Memory => None,
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

// ── Listing ─────────────────────────────────────────────────────────────────

/// A finite sequence of catalog records, newest first.
///
/// The rows are read in full inside one read transaction before the listing
/// is returned, so a failed read never yields a partial sequence. Iteration
/// consumes the listing and cannot be restarted; list again to observe later
/// changes.
#[derive(Debug)]
pub struct Listing<T = FileRecord> {
    items: std::vec::IntoIter<T>,
}

impl<T> Listing<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Whether no items remain.
    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }
}

impl<T> Iterator for Listing<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Listing<T> {}

// ── Store Handle ────────────────────────────────────────────────────────────

type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

enum Request {
    Reopen(Reply<()>),
    Insert(NewFile, Reply<i64>),
    List(RecordFilter, Reply<Vec<FileRecord>>),
    ListSummaries(RecordFilter, Reply<Vec<RecordSummary>>),
    FindByTag(String, Reply<Vec<RecordSummary>>),
    Get(i64, Reply<Option<FileRecord>>),
    Delete(i64, Reply<()>),
    Stats(Reply<CatalogStats>),
    Wipe(Reply<()>),
    Close(Reply<()>),
}

/// Handle to an open file catalog.
///
/// Cloning is cheap; clones share the same worker and connection. Lifecycle:
/// [`open`](Self::open) → operations → [`wipe_all`](Self::wipe_all) (needs
/// [`reopen`](Self::reopen)) → [`close`](Self::close).
#[derive(Clone)]
pub struct CatalogStore {
    tx: mpsc::UnboundedSender<Request>,
    location: StoreLocation,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("location", &self.location)
            .finish()
    }
}

impl CatalogStore {
    /// Open the catalog, creating the container and schema if absent.
    pub async fn open(location: StoreLocation) -> Result<Self, StoreError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        let worker_location = location.clone();
        std::thread::Builder::new()
            .name("tesda-files-store".to_string())
            .spawn(move || {
                let mut worker = Worker::new(worker_location);
                let opened = worker.open();
                let ok = opened.is_ok();
                let _ = ready_tx.send(opened);
                if ok {
                    worker.run(rx);
                }
            })
            .map_err(|e| StoreError::unavailable(format!("Failed to start store worker: {e}")))?;

        ready_rx.await.map_err(|_| worker_gone())??;
        log::debug!("Catalog store open at {}", location);
        Ok(Self { tx, location })
    }

    /// Open an in-memory catalog.
    pub async fn open_memory() -> Result<Self, StoreError> {
        Self::open(StoreLocation::Memory).await
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Reopen the container after a wipe. A no-op while the store is open.
    pub async fn reopen(&self) -> Result<(), StoreError> {
        self.call(Request::Reopen).await
    }

    /// Insert a file and return its generated id.
    pub async fn insert(&self, file: NewFile) -> Result<i64, StoreError> {
        self.call(|reply| Request::Insert(file, reply)).await
    }

    /// List records newest first, optionally filtered by name or tag substring.
    pub async fn list(&self, filter: Option<&str>) -> Result<Listing, StoreError> {
        let filter = RecordFilter::new(filter);
        let records = self.call(|reply| Request::List(filter, reply)).await?;
        Ok(Listing::new(records))
    }

    /// Like [`list`](Self::list), without loading file contents.
    pub async fn list_summaries(
        &self,
        filter: Option<&str>,
    ) -> Result<Listing<RecordSummary>, StoreError> {
        let filter = RecordFilter::new(filter);
        let summaries = self.call(|reply| Request::ListSummaries(filter, reply)).await?;
        Ok(Listing::new(summaries))
    }

    /// Records carrying exactly `tag`, newest first.
    pub async fn find_by_tag(&self, tag: &str) -> Result<Listing<RecordSummary>, StoreError> {
        let tag = tag.to_string();
        let summaries = self.call(|reply| Request::FindByTag(tag, reply)).await?;
        Ok(Listing::new(summaries))
    }

    /// Fetch one record with its contents.
    pub async fn get(&self, id: i64) -> Result<Option<FileRecord>, StoreError> {
        self.call(|reply| Request::Get(id, reply)).await
    }

    /// Delete a record. Succeeds when the id does not exist.
    pub async fn delete_record(&self, id: i64) -> Result<(), StoreError> {
        self.call(|reply| Request::Delete(id, reply)).await
    }

    pub async fn stats(&self) -> Result<CatalogStats, StoreError> {
        self.call(Request::Stats).await
    }

    /// Destroy the whole container. The store must be reopened afterwards,
    /// and ids start over from 1.
    pub async fn wipe_all(&self) -> Result<(), StoreError> {
        self.call(Request::Wipe).await
    }

    /// Release the connection and stop the worker. Other clones of this
    /// handle fail with [`StoreError::StoreUnavailable`] afterwards.
    pub async fn close(self) -> Result<(), StoreError> {
        self.call(Request::Close).await
    }

    async fn call<T>(&self, make: impl FnOnce(Reply<T>) -> Request) -> Result<T, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send(make(reply_tx)).map_err(|_| worker_gone())?;
        reply_rx.await.map_err(|_| worker_gone())?
    }
}

fn worker_gone() -> StoreError {
    StoreError::unavailable("Store is closed")
}

// ── Worker ──────────────────────────────────────────────────────────────────

struct Worker {
    location: StoreLocation,
    conn: Option<Connection>,
}

impl Worker {
    fn new(location: StoreLocation) -> Self {
        Self {
            location,
            conn: None,
        }
    }

    fn open(&mut self) -> Result<(), StoreError> {
        if self.conn.is_some() {
            return Ok(());
        }
        let conn = match &self.location {
            StoreLocation::Path(path) => schema::open_database(path)?,
            StoreLocation::Memory => schema::open_memory()?,
        };
        self.conn = Some(conn);
        Ok(())
    }

    fn conn(&self) -> Result<&Connection, StoreError> {
        self.conn
            .as_ref()
            .ok_or_else(|| StoreError::unavailable("Store was wiped and must be reopened"))
    }

    fn run(mut self, mut rx: mpsc::UnboundedReceiver<Request>) {
        while let Some(request) = rx.blocking_recv() {
            if !self.handle(request) {
                break;
            }
        }
        log::debug!("Catalog store worker for {} stopped", self.location);
    }

    /// Execute one request. Returns `false` once the store is closed.
    fn handle(&mut self, request: Request) -> bool {
        // A dropped receiver means the caller stopped waiting; nothing to report.
        match request {
            Request::Reopen(reply) => {
                let _ = reply.send(self.open());
            }
            Request::Insert(file, reply) => {
                let result = self.conn().and_then(|conn| {
                    operations::insert_file(conn, &file).map_err(StoreError::write)
                });
                let _ = reply.send(result);
            }
            Request::List(filter, reply) => {
                let result = self.conn().and_then(|conn| {
                    queries::list_files(conn, &filter).map_err(StoreError::read)
                });
                let _ = reply.send(result);
            }
            Request::ListSummaries(filter, reply) => {
                let result = self.conn().and_then(|conn| {
                    queries::list_summaries(conn, &filter).map_err(StoreError::read)
                });
                let _ = reply.send(result);
            }
            Request::FindByTag(tag, reply) => {
                let result = self.conn().and_then(|conn| {
                    queries::find_files_by_tag(conn, &tag).map_err(StoreError::read)
                });
                let _ = reply.send(result);
            }
            Request::Get(id, reply) => {
                let result = self
                    .conn()
                    .and_then(|conn| queries::get_file(conn, id).map_err(StoreError::read));
                let _ = reply.send(result);
            }
            Request::Delete(id, reply) => {
                let result = self.conn().and_then(|conn| {
                    operations::delete_file(conn, id)
                        .map(|_| ())
                        .map_err(StoreError::write)
                });
                let _ = reply.send(result);
            }
            Request::Stats(reply) => {
                let result = self
                    .conn()
                    .and_then(|conn| queries::catalog_stats(conn).map_err(StoreError::read));
                let _ = reply.send(result);
            }
            Request::Wipe(reply) => {
                let _ = reply.send(self.wipe());
            }
            Request::Close(reply) => {
                self.conn = None;
                let _ = reply.send(Ok(()));
                return false;
            }
        }
        true
    }

    fn wipe(&mut self) -> Result<(), StoreError> {
        if let Some(conn) = self.conn.take() {
            if let Err((conn, e)) = conn.close() {
                self.conn = Some(conn);
                return Err(StoreError::write(e));
            }
        }
        if let StoreLocation::Path(path) = &self.location {
            schema::destroy_database(path).map_err(StoreError::write)?;
        }
        log::debug!("Catalog container at {} destroyed", self.location);
        Ok(())
    }
}
