//! Build a small HTML form from an ordered list of elements

mod builder;
mod error;
mod template;

pub use builder::{ElementKind, FormBuilder, FormElement};
pub use error::{FormError, FormResult};
pub use template::render_form;
