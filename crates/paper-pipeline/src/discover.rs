use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const DOCUMENT_CLASS_MARKER: &str = "\\documentclass";

/// Find the entry file of a source tree: the first `.tex` file, in
/// filesystem enumeration order, containing a document-class declaration.
/// Unreadable files are skipped and the scan continues.
pub fn find_entry_file(root: &Path) -> Option<PathBuf> {
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("tex") {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) if content.contains(DOCUMENT_CLASS_MARKER) => {
                return Some(path.to_path_buf());
            }
            _ => {}
        }
    }
    None
}
