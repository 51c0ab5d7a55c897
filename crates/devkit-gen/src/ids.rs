use crate::error::{GenError, GenResult};
use devkit_core::UuidConfig;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UuidVersion {
    /// Random
    V4,
    /// SHA-1 over a namespace and a name
    V5 { namespace: Uuid, name: String },
}

impl UuidVersion {
    /// v5 using the configured namespace and name
    pub fn v5_from_config(config: &UuidConfig) -> GenResult<Self> {
        Ok(UuidVersion::V5 {
            namespace: namespace_from_name(&config.namespace)?,
            name: config.name.clone(),
        })
    }
}

/// Resolve one of the RFC 4122 predefined namespaces by name
pub fn namespace_from_name(name: &str) -> GenResult<Uuid> {
    match name.to_ascii_lowercase().as_str() {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => Err(GenError::UnknownNamespace(name.to_string())),
    }
}

pub fn generate_uuid(version: &UuidVersion) -> Uuid {
    match version {
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V5 { namespace, name } => Uuid::new_v5(namespace, name.as_bytes()),
    }
}
