use crate::error::{GenError, GenResult};
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;

/// One placeholder record; disabled fields are left out entirely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Email,
    Address,
    Phone,
}

impl FromStr for RecordField {
    type Err = GenError;

    fn from_str(s: &str) -> GenResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(RecordField::Name),
            "email" => Ok(RecordField::Email),
            "address" => Ok(RecordField::Address),
            "phone" => Ok(RecordField::Phone),
            _ => Err(GenError::UnknownField(s.to_string())),
        }
    }
}

/// Which fields to fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields {
    pub name: bool,
    pub email: bool,
    pub address: bool,
    pub phone: bool,
}

impl Default for RecordFields {
    fn default() -> Self {
        Self {
            name: true,
            email: true,
            address: true,
            phone: false,
        }
    }
}

impl RecordFields {
    pub fn none() -> Self {
        Self {
            name: false,
            email: false,
            address: false,
            phone: false,
        }
    }

    /// Parse a comma separated list such as `name,phone`
    pub fn parse_list(list: &str) -> GenResult<Self> {
        let mut fields = Self::none();
        for part in list.split(',').filter(|p| !p.trim().is_empty()) {
            match part.parse::<RecordField>()? {
                RecordField::Name => fields.name = true,
                RecordField::Email => fields.email = true,
                RecordField::Address => fields.address = true,
                RecordField::Phone => fields.phone = true,
            }
        }
        Ok(fields)
    }
}

pub fn generate_records_with<R: Rng + ?Sized>(
    count: usize,
    fields: &RecordFields,
    rng: &mut R,
) -> Vec<DataRecord> {
    (0..count)
        .map(|_| DataRecord {
            name: fields
                .name
                .then(|| format!("Name {}", rng.gen_range(0..1000))),
            email: fields
                .email
                .then(|| format!("user{}@example.com", rng.gen_range(0..1000))),
            address: fields
                .address
                .then(|| format!("Address {}, City, Country", rng.gen_range(0..1000))),
            phone: fields
                .phone
                .then(|| format!("+1-{}", rng.gen_range(0..1_000_000_000u32))),
        })
        .collect()
}

pub fn generate_records(count: usize, fields: &RecordFields) -> Vec<DataRecord> {
    generate_records_with(count, fields, &mut rand::thread_rng())
}

/// Render records as pretty JSON or as `Field: value` blocks
pub fn format_records(records: &[DataRecord], json: bool) -> GenResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }

    let blocks: Vec<String> = records
        .iter()
        .map(|record| {
            let mut block = String::new();
            let labelled = [
                ("Name", &record.name),
                ("Email", &record.email),
                ("Address", &record.address),
                ("Phone", &record.phone),
            ];
            for (label, value) in labelled {
                if let Some(value) = value {
                    block.push_str(&format!("{}: {}\n", label, value));
                }
            }
            block
        })
        .collect();

    Ok(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_fields() {
        let records = generate_records(3, &RecordFields::default());
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.name.as_deref().unwrap().starts_with("Name "));
            assert!(record.email.as_deref().unwrap().ends_with("@example.com"));
            assert!(record.address.as_deref().unwrap().ends_with(", City, Country"));
            assert!(record.phone.is_none());
        }
    }

    #[test]
    fn test_parse_field_list() {
        let fields = RecordFields::parse_list("phone, name").unwrap();
        assert!(fields.name && fields.phone);
        assert!(!fields.email && !fields.address);

        assert!(matches!(
            RecordFields::parse_list("name,age"),
            Err(GenError::UnknownField(_))
        ));
    }

    #[test]
    fn test_json_skips_disabled_fields() {
        let fields = RecordFields::parse_list("phone").unwrap();
        let records = generate_records_with(1, &fields, &mut StdRng::seed_from_u64(1));
        let output = format_records(&records, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let object = value[0].as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["phone"].as_str().unwrap().starts_with("+1-"));
    }

    #[test]
    fn test_text_format() {
        let records = vec![
            DataRecord {
                name: Some("Name 1".to_string()),
                email: Some("user2@example.com".to_string()),
                ..DataRecord::default()
            },
            DataRecord {
                phone: Some("+1-5".to_string()),
                ..DataRecord::default()
            },
        ];
        assert_eq!(
            format_records(&records, false).unwrap(),
            "Name: Name 1\nEmail: user2@example.com\n\nPhone: +1-5\n"
        );
    }

    #[test]
    fn test_zero_records() {
        assert!(generate_records(0, &RecordFields::default()).is_empty());
        assert_eq!(format_records(&[], true).unwrap(), "[]");
    }
}
