use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type SectionResult<T> = Result<T, SectionError>;
