pub mod cli;
pub mod input;
mod macros;
mod source;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::IStr;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use ::macros::entry;
}
