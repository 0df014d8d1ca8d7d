/// Directory scanning for one category.
///
/// Failures are handled where they occur: a missing directory is a warning,
/// an unreadable file is logged and skipped. Nothing here aborts the run.
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::AppError;
use crate::model::{CategoryDescriptor, DocumentRecord};
use crate::parser;

pub const DOCUMENT_EXTENSION: &str = ".md";
const README_MARKER: &str = "readme";

/// Whether a directory entry should be treated as a prompt document.
pub fn is_candidate(file_name: &str, is_file: bool) -> bool {
    is_file
        && file_name.ends_with(DOCUMENT_EXTENSION)
        && !file_name.to_lowercase().contains(README_MARKER)
}

/// Records for every eligible file directly under `<root>/<category.key>`,
/// in directory enumeration order. `None` when the directory does not exist.
pub fn scan_category(root: &Path, category: &CategoryDescriptor) -> Option<Vec<DocumentRecord>> {
    let dir = root.join(&category.key);
    info!(category = %category.key, path = %dir.display(), "scanning category");

    if !dir.is_dir() {
        warn!(path = %dir.display(), "category directory not found, skipping");
        return None;
    }

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!(path = %dir.display(), error = %e, "failed to list category directory");
            return Some(Vec::new());
        }
    };

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(path = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        let file_name = entry.file_name();
        let is_file = path.is_file();
        if !is_candidate(&file_name.to_string_lossy(), is_file) {
            continue;
        }

        match process_file(&path, category) {
            Ok(record) => {
                info!(category = %category.key, file = %record.filename, "processed prompt");
                records.push(record);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to process prompt file");
            }
        }
    }

    Some(records)
}

fn process_file(path: &Path, category: &CategoryDescriptor) -> Result<DocumentRecord, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| AppError::io(path, e))?;
    parser::extract_record(&content, path, category, modified)
}
