//! Event dispatch and status rendering

use std::fs;

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::error::AppError;
use crate::format::{format_datetime, format_path};
use crate::host::{Event, Host};

/// Per-process display state. The relative-path flag lives only as long as
/// the session; it is never written to disk.
#[derive(Debug)]
pub(crate) struct Session {
    relative_path_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(true)
    }
}

impl Session {
    pub(crate) fn new(relative_path_enabled: bool) -> Self {
        Session {
            relative_path_enabled,
        }
    }

    pub(crate) fn handle(
        &mut self,
        event: Event,
        host: &mut dyn Host,
        settings: &Settings,
    ) -> Result<(), AppError> {
        match event {
            Event::ViewActivated | Event::ViewSaved => self.render(host, settings),
            Event::ToggleRelativePath => self.toggle(host, settings),
        }
    }

    /// Flip relative-path display, announce the new state, and re-render.
    fn toggle(&mut self, host: &mut dyn Host, settings: &Settings) -> Result<(), AppError> {
        self.relative_path_enabled = !self.relative_path_enabled;

        let state = if self.relative_path_enabled {
            "enabled"
        } else {
            "disabled"
        };
        host.status_message(&format!("<File Infobar: relative path {state}>"));

        self.render(host, settings)
    }

    /// Render the active file's infobar into the host status slot. A view
    /// with no backing file (new, unsaved) produces no update at all.
    fn render(&self, host: &mut dyn Host, settings: &Settings) -> Result<(), AppError> {
        let Some(file) = host.active_file() else {
            return Ok(());
        };
        let folders = host.open_folders();

        // Modification time follows symlinks, like stat(2)
        let modified = fs::metadata(&file)
            .and_then(|meta| meta.modified())
            .map_err(|source| AppError::Metadata {
                path: file.clone(),
                source,
            })?;
        let modified: DateTime<Local> = modified.into();
        let timestamp = format_datetime(&modified, settings);

        let mut display =
            format_path(&file.to_string_lossy(), &folders, self.relative_path_enabled);

        let is_symlink = fs::symlink_metadata(&file)
            .map_err(|source| AppError::Metadata {
                path: file.clone(),
                source,
            })?
            .file_type()
            .is_symlink();
        if is_symlink {
            let target = fs::canonicalize(&file).map_err(|source| AppError::Symlink {
                path: file.clone(),
                source,
            })?;
            let target = format_path(
                &target.to_string_lossy(),
                &folders,
                self.relative_path_enabled,
            );
            display = format!("{display} {} {target}", settings.symlink_marker);
        }

        let display = format!(
            "{}{display}{}",
            settings.filepath_start_marker, settings.filepath_end_marker
        );
        host.set_status(&settings.status_bar_key, &format!("{timestamp} {display}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Host double that records every side effect
    #[derive(Default)]
    struct RecordingHost {
        active_file: Option<PathBuf>,
        folders: Vec<PathBuf>,
        statuses: Vec<(String, String)>,
        messages: Vec<String>,
    }

    impl Host for RecordingHost {
        fn active_file(&self) -> Option<PathBuf> {
            self.active_file.clone()
        }

        fn open_folders(&self) -> Vec<PathBuf> {
            self.folders.clone()
        }

        fn set_status(&mut self, key: &str, value: &str) {
            self.statuses.push((key.to_string(), value.to_string()));
        }

        fn status_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn fixture() -> (tempfile::TempDir, RecordingHost) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("notes.txt");
        fs::write(&file, "contents").expect("write test file");
        let host = RecordingHost {
            active_file: Some(file),
            folders: vec![dir.path().to_path_buf()],
            ..RecordingHost::default()
        };
        (dir, host)
    }

    #[test]
    fn unsaved_view_produces_no_status_update() {
        let mut host = RecordingHost::default();
        let mut session = Session::default();
        session
            .handle(Event::ViewActivated, &mut host, &Settings::default())
            .unwrap();
        assert!(host.statuses.is_empty());
        assert!(host.messages.is_empty());
    }

    #[test]
    fn render_publishes_under_the_status_bar_key() {
        let (_dir, mut host) = fixture();
        let mut session = Session::default();
        session
            .handle(Event::ViewSaved, &mut host, &Settings::default())
            .unwrap();

        assert_eq!(host.statuses.len(), 1);
        let (key, value) = &host.statuses[0];
        assert_eq!(key, "zFileInfobar");
        // The file was written moments ago, so the date collapses to Today
        assert!(value.starts_with("Today @ "), "got: {value}");
        assert!(value.ends_with("[[ notes.txt ]]"), "got: {value}");
    }

    #[test]
    fn render_wraps_path_in_configured_markers() {
        let (_dir, mut host) = fixture();
        let settings = Settings {
            filepath_start_marker: "(( ".to_string(),
            filepath_end_marker: " ))".to_string(),
            ..Settings::default()
        };
        let mut session = Session::default();
        session
            .handle(Event::ViewActivated, &mut host, &settings)
            .unwrap();
        assert!(host.statuses[0].1.ends_with("(( notes.txt ))"));
    }

    #[test]
    fn toggle_inverts_flag_and_renders_exactly_once() {
        let (_dir, mut host) = fixture();
        let mut session = Session::default();

        session
            .handle(Event::ToggleRelativePath, &mut host, &Settings::default())
            .unwrap();
        assert!(!session.relative_path_enabled);
        assert_eq!(
            host.messages,
            vec!["<File Infobar: relative path disabled>".to_string()]
        );
        assert_eq!(host.statuses.len(), 1);
        // Absolute mode shows the full path again
        assert!(host.statuses[0].1.contains("notes.txt"));
        assert!(!host.statuses[0].1.ends_with("[[ notes.txt ]]"));

        session
            .handle(Event::ToggleRelativePath, &mut host, &Settings::default())
            .unwrap();
        assert!(session.relative_path_enabled);
        assert_eq!(host.messages.len(), 2);
        assert_eq!(
            host.messages[1],
            "<File Infobar: relative path enabled>".to_string()
        );
        assert_eq!(host.statuses.len(), 2);
        assert!(host.statuses[1].1.ends_with("[[ notes.txt ]]"));
    }

    #[test]
    fn toggle_with_unsaved_view_still_notifies() {
        let mut host = RecordingHost::default();
        let mut session = Session::default();
        session
            .handle(Event::ToggleRelativePath, &mut host, &Settings::default())
            .unwrap();
        assert_eq!(host.messages.len(), 1);
        assert!(host.statuses.is_empty());
    }

    #[test]
    fn missing_file_surfaces_a_metadata_error() {
        let mut host = RecordingHost {
            active_file: Some(PathBuf::from("/no/such/file.txt")),
            ..RecordingHost::default()
        };
        let mut session = Session::default();
        let err = session
            .handle(Event::ViewActivated, &mut host, &Settings::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Metadata { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_appends_marker_and_formatted_target() {
        let dir = tempfile::tempdir().expect("create temp dir");
        // Canonicalize so the folder matches the canonicalized link target
        let root = dir.path().canonicalize().expect("canonicalize temp dir");
        let target = root.join("target.txt");
        fs::write(&target, "contents").expect("write target");
        let link = root.join("link.txt");
        std::os::unix::fs::symlink(&target, &link).expect("create symlink");

        let mut host = RecordingHost {
            active_file: Some(link),
            folders: vec![root],
            ..RecordingHost::default()
        };
        let mut session = Session::default();
        session
            .handle(Event::ViewActivated, &mut host, &Settings::default())
            .unwrap();

        assert_eq!(host.statuses.len(), 1);
        assert!(
            host.statuses[0].1.ends_with("[[ link.txt --> target.txt ]]"),
            "got: {}",
            host.statuses[0].1
        );
    }
}
