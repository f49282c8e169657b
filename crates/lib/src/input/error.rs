use core::ops::Range;

use bstr::BStr;
use thiserror::Error;

/// The kind of a parse error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("expected integer")]
    ExpectedInteger,
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("trailing input `{0}`")]
    TrailingInput(&'static BStr),
    #[error("unexpected eof")]
    UnexpectedEof,
    /// Error raised by a custom conversion, see [`from_input!`].
    ///
    /// [`from_input!`]: crate::from_input
    #[error("{0}")]
    Boxed(anyhow::Error),
}

/// Error raised through string processing.
///
/// The span is the byte range in the original input which caused the error.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct IStrError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
