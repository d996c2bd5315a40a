use std::fmt;

use uuid::Uuid;

use crate::domain::user::models::Username;
use crate::domain::user::models::MAX_FIELD_LENGTH;
use crate::domain::validation::ValidationErrors;

/// Contact entity, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub owner: Username,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// Build a new contact for `owner` with a freshly generated id.
    pub fn new(owner: Username, fields: ContactFields) -> Self {
        let mut contact = Self {
            id: ContactId::new(),
            owner,
            first_name: String::new(),
            last_name: None,
            email: None,
            phone: None,
        };
        contact.apply(fields);
        contact
    }

    /// Replace every mutable field.
    pub fn apply(&mut self, fields: ContactFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}

/// Contact identifier.
///
/// Generated ids are UUID v4 strings, but any non-empty string taken from a
/// path is accepted for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
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

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated mutable fields of a contact, used for create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFields {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = errors.required("firstName", first_name, MAX_FIELD_LENGTH);
        let last_name = errors.optional("lastName", last_name, MAX_FIELD_LENGTH);
        let email = errors.optional_email("email", email, MAX_FIELD_LENGTH);
        let phone = errors.optional("phone", phone, MAX_FIELD_LENGTH);

        errors.finish(Self {
            first_name,
            last_name,
            email,
            phone,
        })
    }
}

/// Filters and page window for contact search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSearch {
    /// Substring matched against first or last name
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
}

impl ContactSearch {
    pub const DEFAULT_SIZE: u32 = 10;
    pub const MAX_SIZE: u32 = 100;

    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let size = size.unwrap_or(Self::DEFAULT_SIZE);
        if size == 0 || size > Self::MAX_SIZE {
            errors.add(
                "size",
                format!("must be between 1 and {}", Self::MAX_SIZE),
            );
        }

        let blank_to_none = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        errors.finish(Self {
            name: blank_to_none(name),
            email: blank_to_none(email),
            phone: blank_to_none(phone),
            page: page.unwrap_or(0),
            size,
        })
    }

    /// Row offset of the first contact on the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

impl ContactPage {
    pub fn new(contacts: Vec<Contact>, search: &ContactSearch, total: u64) -> Self {
        let size = u64::from(search.size.max(1));
        let total_pages = total.div_ceil(size);

        Self {
            contacts,
            page: search.page,
            size: search.size,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }
}
