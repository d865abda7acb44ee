use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use paper_pipeline::{process_document, PipelineError, Render, RenderError};
use tempfile::tempdir;

/// Renderer that fails a configured number of times before succeeding,
/// recording every document it was fed.
struct ScriptedRenderer {
    calls: RefCell<Vec<String>>,
    failures_left: Cell<usize>,
    diagnostic: String,
    output: String,
}

impl ScriptedRenderer {
    fn new(failures: usize, diagnostic: &str, output: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failures_left: Cell::new(failures),
            diagnostic: diagnostic.to_string(),
            output: output.to_string(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Render for ScriptedRenderer {
    fn render(&self, tex: &str) -> Result<String, RenderError> {
        self.calls.borrow_mut().push(tex.to_string());
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(RenderError(self.diagnostic.clone()));
        }
        Ok(self.output.clone())
    }
}

fn write_source(dir: &Path, body: &str) {
    let tex = format!(
        "\\documentclass{{article}}\n\\title{{Sample Paper}}\n\\begin{{document}}\n{body}\\end{{document}}\n"
    );
    fs::write(dir.join("main.tex"), tex).unwrap();
}

#[test]
fn unclosed_brace_triggers_padded_retry() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_source(source.path(), "\\emph{unclosed\n");

    let renderer = ScriptedRenderer::new(1, "unexpected end of input", "# Sample\n\nbody\n");
    let outcome = process_document(source.path(), output.path(), &renderer).unwrap();

    let calls = renderer.calls();
    assert_eq!(calls.len(), 2);
    // First attempt goes out unpadded; the retry carries exactly one
    // closing brace before the end marker.
    assert!(!calls[0].contains("}\n\\end{document}"));
    assert!(calls[1].contains("\n}\n\\end{document}"));
    assert_eq!(outcome.top_level_sections, 1);
}

#[test]
fn balanced_body_is_rendered_exactly_once() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_source(source.path(), "plain text\n");

    let renderer = ScriptedRenderer::new(0, "", "# Sample\n\nbody\n");
    process_document(source.path(), output.path(), &renderer).unwrap();

    assert_eq!(renderer.calls().len(), 1);
}

#[test]
fn render_failure_surfaces_converter_diagnostic() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_source(source.path(), "plain text\n");

    let renderer = ScriptedRenderer::new(9, "Error at line 12: missing \\end", "");
    let failure = process_document(source.path(), output.path(), &renderer).unwrap_err();

    match failure {
        PipelineError::Render(message) => {
            assert!(message.contains("Error at line 12: missing \\end"));
        }
        other => panic!("expected render failure, got {other}"),
    }
}

#[test]
fn output_layout_has_document_figures_and_sections() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_source(source.path(), "text\n");
    fs::create_dir_all(source.path().join("img")).unwrap();
    fs::write(source.path().join("img/plot.png"), "png").unwrap();

    let markdown = "# Introduction\n\nwords\n\n# Conclusion\n\ndone\n\n# Related Work\n\nlater\n";
    let renderer = ScriptedRenderer::new(0, "", markdown);
    let outcome = process_document(source.path(), output.path(), &renderer).unwrap();

    assert_eq!(outcome.title, "Sample Paper");
    let doc_dir = output.path().join("sample-paper");
    assert_eq!(outcome.output_dir, doc_dir);
    assert_eq!(
        fs::read_to_string(doc_dir.join("full_paper.md")).unwrap(),
        markdown
    );
    assert!(doc_dir.join("figures/plot.png").exists());
    assert!(doc_dir.join("sections/0_introduction/0_introduction.md").exists());
    assert!(doc_dir
        .join("sections/2_appendix/0_related-work/0_related-work.md")
        .exists());
}

#[test]
fn rerun_replaces_stale_sections_wholesale() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_source(source.path(), "text\n");

    let renderer = ScriptedRenderer::new(0, "", "# Only\n\nbody\n");
    let outcome = process_document(source.path(), output.path(), &renderer).unwrap();

    let stale = outcome.sections_dir.join("9_stale/9_stale.md");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "left over").unwrap();

    let renderer = ScriptedRenderer::new(0, "", "# Only\n\nbody\n");
    process_document(source.path(), output.path(), &renderer).unwrap();

    assert!(!stale.exists());
    assert!(outcome.sections_dir.join("0_only/0_only.md").exists());
}

#[test]
fn missing_source_directory_is_fatal() {
    let output = tempdir().unwrap();
    let renderer = ScriptedRenderer::new(0, "", "");
    let failure = process_document(Path::new("/nonexistent/paper"), output.path(), &renderer)
        .unwrap_err();
    assert!(matches!(failure, PipelineError::MissingInput { .. }));
    assert!(renderer.calls().is_empty());
}

#[test]
fn source_tree_without_documentclass_is_fatal() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(source.path().join("notes.tex"), "fragment only\n").unwrap();

    let renderer = ScriptedRenderer::new(0, "", "");
    let failure = process_document(source.path(), output.path(), &renderer).unwrap_err();

    match failure {
        PipelineError::MissingInput { expected, .. } => {
            assert!(expected.contains("\\documentclass"));
        }
        other => panic!("expected missing input, got {other}"),
    }
}

#[test]
fn missing_title_falls_back_to_directory_name() {
    let source = tempdir().unwrap();
    let output = tempdir().unwrap();
    let paper_dir = source.path().join("2512.03043");
    fs::create_dir_all(&paper_dir).unwrap();
    fs::write(
        paper_dir.join("main.tex"),
        "\\documentclass{article}\n\\begin{document}\ntext\n\\end{document}\n",
    )
    .unwrap();

    let renderer = ScriptedRenderer::new(0, "", "# Only\n\nbody\n");
    let outcome = process_document(&paper_dir, output.path(), &renderer).unwrap();

    assert_eq!(outcome.title, "2512.03043");
    assert!(output.path().join("251203043").is_dir());
}
