use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Default extension appended to inclusion targets written without one.
const SOURCE_EXTENSION: &str = "tex";

/// Recursively inline every `\input{...}` / `\include{...}` directive,
/// starting from the entry file, and return the merged text.
///
/// Both directive forms are treated identically. A referenced file is looked
/// up first next to the file that references it, then in the entry file's
/// directory. Directives that resolve to nothing are left in place verbatim.
/// Each distinct file is inlined at most once: revisiting a file (a cyclic
/// include) substitutes the empty string.
pub fn inline_sources(entry: &Path) -> io::Result<String> {
    let root = entry.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    let directive = Regex::new(r"\\(input|include)\{([^}]+)\}").expect("directive pattern");
    let mut visited = HashSet::new();
    inline_file(entry, &root, &directive, &mut visited)
}

fn inline_file(
    path: &Path,
    root: &Path,
    directive: &Regex,
    visited: &mut HashSet<PathBuf>,
) -> io::Result<String> {
    let identity = path.canonicalize()?;
    if !visited.insert(identity) {
        return Ok(String::new());
    }

    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or(root).to_path_buf();

    let mut merged = String::with_capacity(content.len());
    let mut cursor = 0usize;

    for captures in directive.captures_iter(&content) {
        let span = captures.get(0).expect("whole match");
        merged.push_str(&content[cursor..span.start()]);
        cursor = span.end();

        let reference = captures[2].trim();
        match resolve_reference(&base_dir, root, reference) {
            Some(target) => {
                // Unreadable included files collapse to nothing; the run
                // continues with whatever else resolves.
                if let Ok(inlined) = inline_file(&target, root, directive, visited) {
                    merged.push_str(&inlined);
                }
            }
            None => merged.push_str(span.as_str()),
        }
    }

    merged.push_str(&content[cursor..]);
    Ok(merged)
}

fn resolve_reference(base_dir: &Path, root: &Path, reference: &str) -> Option<PathBuf> {
    for dir in [base_dir, root] {
        let mut candidate = dir.join(reference);
        if candidate.extension().is_none() {
            candidate.set_extension(SOURCE_EXTENSION);
        }
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
