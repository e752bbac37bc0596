//! Host editor seam
//!
//! The infobar never talks to an editor API directly; everything it needs
//! from the host goes through the [`Host`] trait, so shells and tests can
//! supply their own window state and status output.

pub(crate) mod stdio;

use std::path::PathBuf;

/// Editor events the infobar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    /// A view gained input focus
    ViewActivated,
    /// A view finished saving
    ViewSaved,
    /// The user invoked the relative-path toggle command
    ToggleRelativePath,
}

/// Capabilities the host editor exposes to the infobar
pub(crate) trait Host {
    /// Absolute path of the file backing the active view, if it has one
    fn active_file(&self) -> Option<PathBuf>;

    /// Open project folders, in the order they were added to the window
    fn open_folders(&self) -> Vec<PathBuf>;

    /// Write a value into the named status slot, replacing any previous value
    fn set_status(&mut self, key: &str, value: &str);

    /// Show a transient one-line notification
    fn status_message(&mut self, message: &str);
}

pub(crate) use stdio::StdioHost;
