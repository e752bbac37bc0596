//! Display-path formatting
//!
//! Rewrites the active file's absolute path for the status bar: relative to
//! the window's open project folder(s), with the home directory abbreviated
//! to `~`. All rewriting is literal first-occurrence string replacement over
//! the path text; there is no normalization and no ancestry check.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Format `path` for display given the open project folders, in the order
/// they were added to the window.
pub(crate) fn format_path(path: &str, folders: &[PathBuf], relative_enabled: bool) -> String {
    format_path_with_home(path, folders, relative_enabled, dirs::home_dir().as_deref())
}

/// Core of [`format_path`] with the home directory passed in. `None` skips
/// the `~` abbreviation.
pub(crate) fn format_path_with_home(
    path: &str,
    folders: &[PathBuf],
    relative_enabled: bool,
    home: Option<&Path>,
) -> String {
    let mut path = path.to_string();

    if relative_enabled {
        if folders.len() == 1 {
            // A lone folder is removed wholesale, trailing separator
            // included, wherever its text first occurs in the path.
            let prefix = format!("{}{}", folders[0].display(), MAIN_SEPARATOR);
            path = path.replacen(&prefix, "", 1);
        } else {
            // Several folders: each one in turn has its first occurrence
            // shortened to its base name, so the earliest folder whose path
            // occurs in the text wins.
            for folder in folders {
                let folder_text = folder.display().to_string();
                let folder_name = folder
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                path = path.replacen(&folder_text, &folder_name, 1);
            }
        }
    }

    if let Some(home) = home {
        path = path.replacen(&home.display().to_string(), "~", 1);
    }

    path
}
