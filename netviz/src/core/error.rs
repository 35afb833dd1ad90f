//! The error type shared by the loader, the engines and the render backend.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "file \"{}\" not found. Make sure you entered the correct path and filename",
        .path.display()
    )]
    InputNotFound { path: PathBuf },

    #[error("could not access \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the table in {origin} has no rows")]
    EmptyTable { origin: String },

    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("quoted field starting on line {line} is never closed")]
    UnterminatedQuote { line: usize },

    #[error("required column \"{0}\" is missing")]
    MissingColumn(String),

    #[error("device \"{0}\" appears on more than one row")]
    DuplicateDevice(String),

    #[error("invalid inventory layout: {0}")]
    InvalidLayout(String),

    #[error("{program} exited with {}: {stderr}", describe_status(.status))]
    RenderFailed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("could not launch {program}: {source}")]
    RenderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an io error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
