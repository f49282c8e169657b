use core::ops::Range;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bstr::ByteSlice;

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, d).count();

    let column = match memchr::memrchr(NL, d) {
        Some(n) => d.len() - n - 1,
        None => d.len(),
    };

    LineCol::new(line, column)
}

/// Read the input at the given path.
///
/// The contents are leaked since they're needed until the process exits
/// *anyway*, which makes it much easier to hand out `'static` slices of it.
/// Trailing whitespace is trimmed.
pub(crate) fn input(path: &Path) -> Result<IStr> {
    let data = fs::read(path).with_context(|| anyhow!("{}", path.display()))?;
    let data: &'static [u8] = data.leak();
    Ok(IStr::new(data.trim_end()))
}
