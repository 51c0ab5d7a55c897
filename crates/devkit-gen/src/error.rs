use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Unknown UUID namespace '{0}'. Expected one of: dns, url, oid, x500")]
    UnknownNamespace(String),

    #[error("Unknown record field '{0}'. Expected one of: name, email, address, phone")]
    UnknownField(String),

    #[error("Unknown QR error correction level '{0}'. Expected one of: L, M, Q, H")]
    UnknownQrLevel(String),

    #[error("Unknown QR output format '{0}'. Expected one of: svg, terminal")]
    UnknownQrFormat(String),

    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GenResult<T> = Result<T, GenError>;
