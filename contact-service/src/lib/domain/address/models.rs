use std::fmt;

use uuid::Uuid;

use crate::domain::contact::models::ContactId;
use crate::domain::validation::ValidationErrors;

pub const MAX_STREET_LENGTH: usize = 200;
pub const MAX_REGION_LENGTH: usize = 100;
pub const MAX_POSTAL_CODE_LENGTH: usize = 10;

/// Address entity, owned by exactly one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub contact_id: ContactId,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

impl Address {
    pub fn new(contact_id: ContactId, fields: AddressFields) -> Self {
        Self {
            id: AddressId::new(),
            contact_id,
            street: fields.street,
            city: fields.city,
            province: fields.province,
            country: fields.country,
            postal_code: fields.postal_code,
        }
    }

    pub fn apply(&mut self, fields: AddressFields) {
        self.street = fields.street;
        self.city = fields.city;
        self.province = fields.province;
        self.country = fields.country;
        self.postal_code = fields.postal_code;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressId(String);

impl AddressId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated mutable fields of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

impl AddressFields {
    pub fn new(
        street: Option<String>,
        city: Option<String>,
        province: Option<String>,
        country: Option<String>,
        postal_code: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let street = errors.optional("street", street, MAX_STREET_LENGTH);
        let city = errors.optional("city", city, MAX_REGION_LENGTH);
        let province = errors.optional("province", province, MAX_REGION_LENGTH);
        let country = errors.required("country", country, MAX_REGION_LENGTH);
        let postal_code = errors.optional("postalCode", postal_code, MAX_POSTAL_CODE_LENGTH);

        errors.finish(Self {
            street,
            city,
            province,
            country,
            postal_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_is_required() {
        let errors = AddressFields::new(
            Some("Jalan".to_string()),
            None,
            None,
            Some("   ".to_string()),
            None,
        )
        .unwrap_err();

        assert_eq!(errors.fields().len(), 1);
        assert!(errors.fields().contains_key("country"));
    }

    #[test]
    fn test_field_lengths() {
        let errors = AddressFields::new(
            Some("s".repeat(201)),
            Some("c".repeat(101)),
            Some("p".repeat(100)),
            Some("Indonesia".to_string()),
            Some("12345678901".to_string()),
        )
        .unwrap_err();

        let fields = errors.fields();
        assert!(fields.contains_key("street"));
        assert!(fields.contains_key("city"));
        assert!(!fields.contains_key("province"));
        assert!(fields.contains_key("postalCode"));
    }

    #[test]
    fn test_apply_replaces_everything() {
        let original = AddressFields::new(
            Some("Jalan".to_string()),
            Some("Jakarta".to_string()),
            Some("DKI".to_string()),
            Some("Indonesia".to_string()),
            Some("12345".to_string()),
        )
        .unwrap();
        let mut address = Address::new(ContactId::from_string("contact-1"), original);

        let replacement =
            AddressFields::new(None, None, None, Some("Japan".to_string()), None).unwrap();
        address.apply(replacement);

        assert_eq!(address.country, "Japan");
        assert_eq!(address.street, None);
        assert_eq!(address.postal_code, None);
        assert_eq!(address.contact_id.as_str(), "contact-1");
    }
}
