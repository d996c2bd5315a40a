use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Field-level validation failures collected while parsing a request.
///
/// Keys are the request field names as clients send them, so the map can be
/// returned verbatim in the error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. The first message for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }

    /// Return `value` if nothing was recorded, otherwise the collected errors.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Validate a mandatory text field.
    ///
    /// Missing and whitespace-only values are rejected, as are values longer
    /// than `max` characters. The returned string is only meaningful when no
    /// error was recorded.
    pub fn required(&mut self, field: &str, value: Option<String>, max: usize) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => {
                self.check_length(field, &value, max);
                value
            }
            _ => {
                self.add(field, "must not be blank");
                String::new()
            }
        }
    }

    /// Validate a field that may be omitted but must not be blank when sent.
    pub fn present(&mut self, field: &str, value: Option<String>, max: usize) -> Option<String> {
        let value = value?;
        Some(self.required(field, Some(value), max))
    }

    /// Validate an optional text field against a length bound.
    pub fn optional(&mut self, field: &str, value: Option<String>, max: usize) -> Option<String> {
        if let Some(value) = &value {
            self.check_length(field, value, max);
        }
        value
    }

    /// Validate an optional email field. Empty strings are accepted as-is.
    pub fn optional_email(
        &mut self,
        field: &str,
        value: Option<String>,
        max: usize,
    ) -> Option<String> {
        let value = self.optional(field, value, max)?;
        if !value.is_empty() && email_address::EmailAddress::from_str(&value).is_err() {
            self.add(field, "must be a well-formed email address");
        }
        Some(value)
    }

    /// Record the error of an already-parsed value object, if any.
    pub fn value<T, E: fmt::Display>(&mut self, field: &str, parsed: Result<T, E>) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e.to_string());
                None
            }
        }
    }

    fn check_length(&mut self, field: &str, value: &str, max: usize) {
        let length = value.chars().count();
        if length > max {
            self.add(
                field,
                format!("must be at most {} characters, got {}", max, length),
            );
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let mut errors = ValidationErrors::new();
        errors.required("firstName", None, 100);
        errors.required("country", Some("   ".to_string()), 100);

        assert_eq!(errors.fields().len(), 2);
        assert_eq!(errors.fields()["firstName"], "must not be blank");
        assert_eq!(errors.fields()["country"], "must not be blank");
    }

    #[test]
    fn test_present_rejects_blank_but_allows_absent() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.present("name", None, 100), None);
        assert!(errors.is_empty());

        errors.present("name", Some("".to_string()), 100);
        errors.present("password", Some("  ".to_string()), 100);
        assert_eq!(errors.fields()["name"], "must not be blank");
        assert_eq!(errors.fields()["password"], "must not be blank");
    }

    #[test]
    fn test_length_bound_counts_characters() {
        let mut errors = ValidationErrors::new();
        let value = errors.required("postalCode", Some("北海道北見市".to_string()), 10);

        assert!(errors.is_empty());
        assert_eq!(value, "北海道北見市");

        errors.optional("postalCode", Some("12345678901".to_string()), 10);
        assert_eq!(
            errors.fields()["postalCode"],
            "must be at most 10 characters, got 11"
        );
    }

    #[test]
    fn test_optional_email() {
        let mut errors = ValidationErrors::new();
        errors.optional_email("email", Some("".to_string()), 100);
        errors.optional_email("email", None, 100);
        assert!(errors.is_empty());

        errors.optional_email("email", Some("not-an-email".to_string()), 100);
        assert!(errors.fields().contains_key("email"));
    }

    #[test]
    fn test_first_message_wins_and_display() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        errors.add("city", "bad");

        assert_eq!(errors.to_string(), "city: bad, name: first");
        assert_eq!(errors.clone().finish(()), Err(errors));
    }
}
