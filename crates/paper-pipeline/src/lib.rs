//! Per-document orchestration: discover the entry file, flatten and repair
//! the LaTeX source, render it to Markdown, and split the result into a
//! section-directory tree with flattened figures alongside.

mod discover;
mod error;
mod figures;
mod render;

pub use discover::find_entry_file;
pub use error::{PipelineError, PipelineResult};
pub use figures::copy_figures;
pub use render::{render_with_repair, PandocRenderer, Render, RenderError};

use std::fs;
use std::path::{Path, PathBuf};

use paper_sections::{parse_sections, slugify, write_sections};
use paper_tex::{extract_body, extract_title, inline_sources, sanitize};

/// Name of the flattened Markdown intermediate written next to the output.
const FULL_DOCUMENT_NAME: &str = "full_paper.md";

/// Summary of one completed document run.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub title: String,
    pub output_dir: PathBuf,
    pub sections_dir: PathBuf,
    pub top_level_sections: usize,
    pub figures_copied: usize,
}

/// Process one extracted source tree end to end.
///
/// Output lands under `output_root/{title-slug}/` with `full_paper.md`,
/// `figures/` and `sections/` inside. A stale `sections/` from a previous
/// run is deleted wholesale before the fresh write so no old files survive.
/// Every run builds its state from scratch; nothing is cached across calls.
pub fn process_document(
    source_dir: &Path,
    output_root: &Path,
    renderer: &dyn Render,
) -> PipelineResult<DocumentOutcome> {
    if !source_dir.is_dir() {
        return Err(PipelineError::MissingInput {
            path: source_dir.to_path_buf(),
            expected: "an extracted LaTeX source tree (run the download/extract step first)"
                .to_string(),
        });
    }

    let entry = find_entry_file(source_dir).ok_or_else(|| PipelineError::MissingInput {
        path: source_dir.to_path_buf(),
        expected: "a .tex file containing \\documentclass".to_string(),
    })?;

    let fallback_id = source_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "paper".to_string());

    // Title extraction works on the raw entry source, independent of the
    // sanitizing pipeline below.
    let title = fs::read_to_string(&entry)
        .ok()
        .and_then(|raw| extract_title(&raw))
        .unwrap_or_else(|| fallback_id.clone());

    let merged = inline_sources(&entry)?;
    let sanitized = sanitize(&merged);
    let body = extract_body(&sanitized);
    let markdown = render_with_repair(renderer, &body)
        .map_err(|failure| PipelineError::Render(failure.to_string()))?;

    let mut folder = slugify(&title);
    if folder.is_empty() {
        folder = fallback_id.clone();
    }
    let output_dir = output_root.join(&folder);
    fs::create_dir_all(&output_dir)?;

    fs::write(output_dir.join(FULL_DOCUMENT_NAME), &markdown)?;

    let figures_copied = copy_figures(source_dir, &output_dir.join("figures"))?;

    let sections_dir = output_dir.join("sections");
    if sections_dir.exists() {
        fs::remove_dir_all(&sections_dir)?;
    }
    fs::create_dir_all(&sections_dir)?;

    let sections = parse_sections(&markdown);
    write_sections(&sections, &sections_dir)?;

    Ok(DocumentOutcome {
        title,
        output_dir,
        sections_dir,
        top_level_sections: sections.len(),
        figures_copied,
    })
}
