use std::io::Write;
use std::process::{Command, Stdio};

use paper_tex::DocumentBody;
use thiserror::Error;

/// Diagnostic from a failed render attempt, surfaced verbatim.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// The external markup-to-Markdown converter, behind a seam so the retry
/// policy is testable without the real binary.
pub trait Render {
    fn render(&self, tex: &str) -> Result<String, RenderError>;
}

/// Pandoc subprocess renderer. Invoked with fixed structural options: no
/// line wrapping, and the `raw_tex` extension so unrecognized low-level
/// directives pass through instead of failing the parse.
pub struct PandocRenderer {
    program: String,
}

impl PandocRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PandocRenderer {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl Render for PandocRenderer {
    fn render(&self, tex: &str) -> Result<String, RenderError> {
        let mut child = Command::new(&self.program)
            .args(["-f", "latex+raw_tex", "-t", "markdown", "--wrap=none"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| RenderError(format!("failed to start {}: {err}", self.program)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(tex.as_bytes())
                .map_err(|err| RenderError(format!("failed to feed {}: {err}", self.program)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|err| RenderError(format!("failed to run {}: {err}", self.program)))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(RenderError(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ))
        }
    }
}

/// Render the extracted body, retrying once with brace padding.
///
/// Attempts are an ordered list of (document, note) pairs tried in sequence,
/// stopping at the first success. Only the last failure's diagnostic
/// survives. The padded attempt exists only when the body actually has
/// unclosed braces.
pub fn render_with_repair(
    renderer: &dyn Render,
    body: &DocumentBody,
) -> Result<String, RenderError> {
    let mut attempts: Vec<(String, &str)> = vec![(body.document(), "as extracted")];
    if body.unclosed_braces() > 0 {
        attempts.push((body.padded_document(), "padded with closing braces"));
    }

    let mut last_failure = RenderError(String::from("no render attempt was made"));
    for (document, _note) in attempts {
        match renderer.render(&document) {
            Ok(markdown) => return Ok(markdown),
            Err(failure) => last_failure = failure,
        }
    }

    Err(last_failure)
}
