//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tesda-files")]
#[command(about = "Keep a local catalog of files in an embedded database", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database file (overrides TESDA_FILES_DB and settings)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging (repeat for trace-level messages)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add files to the catalog
    Add {
        /// Files to store
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// MIME type for every file (default: guessed from the extension)
        #[arg(long)]
        mime: Option<String>,
    },

    /// List stored files, newest first
    List {
        /// Case-insensitive substring of a file name or its tags
        filter: Option<String>,

        /// Only files carrying exactly this tag
        #[arg(long, conflicts_with = "filter")]
        tag: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a file's details and a preview of its contents
    Show {
        /// Record id
        id: i64,

        /// Number of text lines to preview
        #[arg(long, default_value_t = 20)]
        lines: usize,
    },

    /// Write a stored file back to disk
    Export {
        /// Record id
        id: i64,

        /// Output path (default: the stored file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a data: URI of the contents instead of writing a file
        #[arg(long, conflicts_with = "output")]
        data_uri: bool,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },

    /// Delete a stored file
    Delete {
        /// Record id
        id: i64,

        /// Confirm the deletion (without this, shows what would be deleted)
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every stored file and the catalog database itself
    Wipe {
        /// Confirm the wipe (without this, shows what would be deleted)
        #[arg(short, long)]
        yes: bool,
    },

    /// Show catalog statistics
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and the resolved database path
    Show,

    /// Print the settings file path
    Path,

    /// Save a default database path
    SetDb {
        /// Database file to use when --db is not given
        path: PathBuf,
    },

    /// Remove the saved database path
    ClearDb,
}
