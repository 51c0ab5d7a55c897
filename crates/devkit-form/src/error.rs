use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("No form element with id '{0}'")]
    UnknownElement(String),

    #[error("Unknown element kind '{0}'. Expected one of: input, password, email, checkbox, radio, button")]
    UnknownKind(String),

    #[error("Line {line}: {message}")]
    InvalidSpecLine { line: usize, message: String },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type FormResult<T> = Result<T, FormError>;
