use core::fmt;
use std::path::Path;

use thiserror::Error;

use crate::input::{IStr, IStrError};

/// Errors raised while parsing command line arguments.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: {program} [--json] [--verbose] <input>")]
    Usage { program: String },
    #[error("unsupported argument `{arg}`\nUsage: {program} [--json] [--verbose] <input>")]
    Unsupported { program: String, arg: String },
}

/// Associate the path and, if available, the position of the input which
/// caused the error.
pub(crate) fn error_context<E>(path: &Path, input: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let pos = error
        .downcast_ref::<IStrError>()
        .map(|e| crate::source::pos_from(input.as_data(), e.span()));

    let context = ErrorContext {
        path: path.display().to_string(),
        pos,
    };

    error.context(context)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => self.path.fmt(f),
        }
    }
}
