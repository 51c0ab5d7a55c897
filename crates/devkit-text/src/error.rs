use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown transform '{0}'. Available: {1}")]
    UnknownTransform(String, String),
}

pub type TextResult<T> = Result<T, TextError>;
