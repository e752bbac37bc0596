//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the status line for one file and exit
    Render {
        /// File whose infobar to render
        file: PathBuf,
    },
    /// Consume editor events from stdin as JSON lines (default)
    Serve,
}
