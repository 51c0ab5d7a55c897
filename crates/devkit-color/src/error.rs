use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}': expected 6 hex digits with an optional leading '#'")]
    InvalidHex(String),

    #[error("Unknown channel '{0}'")]
    UnknownChannel(String),
}

pub type ColorResult<T> = Result<T, ColorError>;
