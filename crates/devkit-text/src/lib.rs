//! String manipulation toolkit
//!
//! Every operation takes the whole input and returns a new string.

mod error;
mod transform;

pub use error::{TextError, TextResult};
pub use transform::{replace_all, Transform};
