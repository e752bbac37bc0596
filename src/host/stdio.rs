//! Line-protocol host adapter
//!
//! Consumes editor events as JSON objects, one per line, and emits status
//! side effects on stdout: bare status-line text for terminal consumers, or
//! JSON lines when programmatic output is requested.

use serde::Deserialize;
use std::path::PathBuf;

use super::{Event, Host};
use crate::error::AppError;

/// Host backed by stdin/stdout. Window state is whatever the most recent
/// event lines reported.
#[derive(Debug)]
pub(crate) struct StdioHost {
    active_file: Option<PathBuf>,
    folders: Vec<PathBuf>,
    json: bool,
}

#[derive(Debug, Deserialize)]
struct RawEventLine {
    event: Option<String>,
    file: Option<PathBuf>,
    folders: Option<Vec<PathBuf>>,
}

impl StdioHost {
    pub(crate) fn new(active_file: Option<PathBuf>, folders: Vec<PathBuf>, json: bool) -> Self {
        StdioHost {
            active_file,
            folders,
            json,
        }
    }

    /// Parse one incoming line, fold its window state into the host, and
    /// return the event to dispatch.
    pub(crate) fn apply_line(&mut self, line: &str) -> Result<Event, AppError> {
        let raw: RawEventLine = serde_json::from_str(line)?;

        let event = match raw.event.as_deref() {
            Some("activated") => Event::ViewActivated,
            Some("saved") => Event::ViewSaved,
            Some("toggle") => Event::ToggleRelativePath,
            other => {
                return Err(AppError::UnknownEvent {
                    input: other.unwrap_or_default().to_string(),
                });
            }
        };

        if let Some(folders) = raw.folders {
            self.folders = folders;
        }

        // Focus and save events carry the backing file; a missing field
        // means the view is unsaved and clears the slot.
        match event {
            Event::ViewActivated | Event::ViewSaved => self.active_file = raw.file,
            Event::ToggleRelativePath => {}
        }

        Ok(event)
    }
}

impl Host for StdioHost {
    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn open_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn set_status(&mut self, key: &str, value: &str) {
        if self.json {
            println!(
                "{}",
                serde_json::json!({ "status": { "key": key, "value": value } })
            );
        } else {
            println!("{value}");
        }
    }

    fn status_message(&mut self, message: &str) {
        if self.json {
            println!("{}", serde_json::json!({ "message": message }));
        } else {
            eprintln!("{message}");
        }
    }
}
