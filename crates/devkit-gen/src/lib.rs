//! Random and name-based generators, plus QR codes
//!
//! Each generator has a variant taking an explicit RNG so callers (and tests)
//! can seed it, and a convenience wrapper over the thread-local RNG.

mod error;
mod ids;
mod password;
mod qr;
mod records;

pub use error::{GenError, GenResult};
pub use ids::{generate_uuid, namespace_from_name, UuidVersion};
pub use password::{
    generate_password, generate_password_with, PasswordOptions, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use qr::{
    render_qr, render_qr_svg, render_qr_terminal, QrFormat, QrLevel, QrOptions, MAX_QR_SIZE,
    MIN_QR_SIZE,
};
pub use records::{
    format_records, generate_records, generate_records_with, DataRecord, RecordField,
    RecordFields,
};
