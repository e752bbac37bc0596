//! CLI argument definitions
//!
//! Global options shared by every subcommand.

use std::path::PathBuf;

use clap::Parser;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "file-infobar")]
#[command(
    about = "Last-modified timestamp and readable file path for your editor's status bar",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Open project folder, in window order (repeat for multiple folders)
    #[arg(short, long = "folder", global = true, value_name = "DIR")]
    pub(crate) folders: Vec<PathBuf>,

    /// Start with relative-path display off (show absolute paths)
    #[arg(short, long, global = true)]
    pub(crate) absolute: bool,

    /// Emit side effects as JSON lines instead of plain text
    #[arg(short, long, global = true)]
    pub(crate) json: bool,
}
