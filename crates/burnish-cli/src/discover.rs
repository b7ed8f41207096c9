//! Expands command-line paths into the Rust files to process.

use std::collections::BTreeSet;
use std::sync::Arc;

use burnish_syntax::is_rust_path;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::AppError;

const SKIPPED_DIRECTORIES: &[&str] = &["target"];

/// Collects the files named by `paths`, sorted and deduplicated.
///
/// Files are taken as given. Directories are walked for `.rs` files,
/// skipping build output and hidden directories.
pub(crate) fn rust_files(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>, AppError> {
    let mut files = BTreeSet::new();
    for path in paths {
        if path.is_file() {
            files.insert(path.clone());
        } else if path.is_dir() {
            walk(path, &mut files)?;
        } else {
            return Err(AppError::MissingPath { path: path.clone() });
        }
    }
    Ok(files.into_iter().collect())
}

fn walk(root: &Utf8Path, files: &mut BTreeSet<Utf8PathBuf>) -> Result<(), AppError> {
    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));
    for item in entries {
        let entry = item.map_err(|source| AppError::Walk {
            path: root.to_path_buf(),
            source: Arc::new(source),
        })?;
        if !entry.file_type().is_file() || !is_rust_path(entry.path()) {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|raw| AppError::NonUtf8Path {
                path: raw.display().to_string(),
            })?;
        files.insert(path);
    }
    Ok(())
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| {
            name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name)
        })
}
