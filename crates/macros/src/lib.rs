use proc_macro::TokenStream;

mod entry;

/// Turn a solver into the `main` function of a binary.
///
/// The solver receives the input file named on the command line and returns
/// the answers to both parts, which are printed by `lib::cli::main`.
///
/// ```ignore
/// use lib::prelude::*;
///
/// #[entry]
/// fn main(mut input: IStr) -> Result<(u64, i64)> {
///     /* .. */
/// }
/// ```
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
