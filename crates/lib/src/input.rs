//! Input parser.

mod error;
mod iter;


use core::ops::Range;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Lines;

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// This is a cheap cursor over the input which keeps track of its absolute
/// offset, so that errors can be traced back to a line and column.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self::with_index(data, 0)
    }

    #[inline]
    fn with_index(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if the remaining input only consists of whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Construct an iterator over the remaining lines of input, parsing each
    /// line as `T`.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, T> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next non-blank line as `T`, errors with `Err(IStrError)` if
    /// the line is not a valid value of type `T` or if anything but whitespace
    /// follows it. Returns `Ok(None)` if there are no more lines to process.
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        loop {
            let Some(mut line) = self.split_once(NL) else {
                return Ok(None);
            };

            if line.is_blank() {
                continue;
            }

            let Some(output) = line.try_next()? else {
                return Err(IStrError::new(line.span(), T::error_kind()));
            };

            line.finish()?;
            return Ok(Some(output));
        }
    }

    /// Ensure that nothing but whitespace remains.
    pub fn finish(&mut self) -> Result<()> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        if s == self.data.len() {
            self.advance(s);
            return Ok(());
        }

        let n = self.find(s, u8::is_ascii_whitespace);
        let trailing = BStr::new(self.data.get(s..n).unwrap_or_default());
        let span = self.index.saturating_add(s)..self.index.saturating_add(n);
        Err(IStrError::new(span, ErrorKind::TrailingInput(trailing)))
    }

    /// Split off the next whitespace-delimited word.
    pub fn try_next_word(&mut self) -> Option<IStr> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return None;
        }

        let word = self.slice(s..n)?;
        self.advance(n);
        Some(word)
    }

    /// The span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let rest = *self;
            self.advance(self.data.len());
            return Some(rest);
        };

        let head = self.slice(0..at)?;
        self.advance(at.saturating_add(1));
        Some(head)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;
        Some(Self::with_index(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when a value was expected but none was found.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if there is no more
    /// non-whitespace input.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let start = p.index;

                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                // A partial tuple is an error, not the end of input.
                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Err(IStrError::new(start..p.index, Self::error_kind()));
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn error_kind() -> ErrorKind {
                    ErrorKind::ExpectedInteger
                }

                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let Some(word) = p.try_next_word() else {
                        return Ok(None);
                    };

                    let Ok(string) = from_utf8(word.data) else {
                        return Err(IStrError::new(word.span(), ErrorKind::NotUtf8));
                    };

                    let Ok(n) = string.parse() else {
                        return Err(IStrError::new(word.span(), ErrorKind::NotInteger(string)));
                    };

                    Ok(Some(n))
                }
            }
        )*
    };
}

tuple!(2 => A a, B b);
integer!(i64);

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}
