use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input is absent. Never retried; the message names the
    /// missing path and what should have produced it.
    #[error("missing input {path}: expected {expected}")]
    MissingInput { path: PathBuf, expected: String },

    /// The converter failed on every extraction attempt. The message is the
    /// converter's own diagnostic, verbatim.
    #[error("render failed: {0}")]
    Render(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Sections(#[from] paper_sections::SectionError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
