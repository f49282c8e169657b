/// Helper macro to implement [`FromInput`] for a type by converting it from
/// another parsed value.
///
/// Errors raised in the conversion are reported at the span of the input the
/// value was parsed from.
///
/// [`FromInput`]: crate::input::FromInput
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($($pat:tt)*))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($($pat)*))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let start = p.index();

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => Err($crate::input::IStrError::new(
                        start..p.index(),
                        $crate::input::ErrorKind::Boxed(e),
                    )),
                }
            }
        }
    };
}
