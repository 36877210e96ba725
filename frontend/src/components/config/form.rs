//! Form model and field validation for configuration records.
//!
//! Validation is a pure function from the form's freeform strings to a map of
//! violations, independent of any rendering concern. It is re-run on every
//! field edit and re-evaluated before submission; a record is never sent to
//! the store while any rule fails.

use std::collections::BTreeMap;

use regex::Regex;

use common::model::config::ConfigRecord;
use common::requests::ConfigInput;

const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
const CITY_PATTERN: &str = r"^[A-Za-z\s]*$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Freeform field values as typed into the input controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub is_active: bool,
    pub hobbies: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

/// Checks every field rule and returns the violations keyed by field name.
/// An empty map means the form is submittable.
pub fn validate(form: &ConfigForm) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required".to_string());
    } else if !Regex::new(NAME_PATTERN).unwrap().is_match(&form.name) {
        errors.insert("name", "Name must contain only letters".to_string());
    }

    if form.age.trim().is_empty() {
        errors.insert("age", "Age is required".to_string());
    } else {
        match form.age.trim().parse::<i64>() {
            Ok(age) if age >= 0 => {}
            _ => {
                errors.insert("age", "Age must be a non-negative number".to_string());
            }
        }
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !Regex::new(EMAIL_PATTERN).unwrap().is_match(form.email.trim()) {
        errors.insert("email", "Invalid email format".to_string());
    }

    if !form.city.is_empty() && !Regex::new(CITY_PATTERN).unwrap().is_match(&form.city) {
        errors.insert("city", "City must contain only letters".to_string());
    }

    errors
}

impl ConfigForm {
    /// Builds the wire payload from an accepted form. Blank optional fields
    /// travel as `None` rather than empty strings.
    pub fn to_input(&self) -> ConfigInput {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        ConfigInput {
            name: self.name.trim().to_string(),
            age: self.age.trim().parse().unwrap_or(0),
            email: self.email.trim().to_string(),
            is_active: Some(self.is_active),
            hobbies: optional(&self.hobbies),
            street: optional(&self.street),
            city: optional(&self.city),
            zip_code: optional(&self.zip_code),
        }
    }

    /// Refills the form from a fetched record, re-deriving the comma-joined
    /// hobbies display string from the store's list form.
    pub fn from_record(record: &ConfigRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.to_string(),
            email: record.email.clone(),
            is_active: record.is_active.unwrap_or(false),
            hobbies: record.hobbies_display(),
            street: record.street.clone().unwrap_or_default(),
            city: record.city.clone().unwrap_or_default(),
            zip_code: record.zip_code.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted_form() -> ConfigForm {
        ConfigForm {
            name: "Jane Doe".to_string(),
            age: "30".to_string(),
            email: "jane@example.com".to_string(),
            is_active: true,
            hobbies: "reading, chess".to_string(),
            street: String::new(),
            city: String::new(),
            zip_code: String::new(),
        }
    }

    #[test]
    fn accepted_form_has_no_violations() {
        assert!(validate(&accepted_form()).is_empty());
    }

    #[test]
    fn name_with_digits_or_punctuation_is_rejected() {
        for bad in ["Jane1", "Jane_Doe", "J@ne", "Jane!"] {
            let mut form = accepted_form();
            form.name = bad.to_string();
            assert!(validate(&form).contains_key("name"), "accepted {:?}", bad);
        }
    }

    #[test]
    fn name_with_internal_whitespace_is_accepted() {
        let mut form = accepted_form();
        form.name = "Mary Jane Watson".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let form = ConfigForm::default();
        let errors = validate(&form);
        assert_eq!(errors.get("name").unwrap(), "Name is required");
        assert_eq!(errors.get("age").unwrap(), "Age is required");
        assert_eq!(errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn negative_age_is_rejected_and_zero_accepted() {
        let mut form = accepted_form();
        form.age = "-1".to_string();
        assert!(validate(&form).contains_key("age"));

        form.age = "0".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut form = accepted_form();
        form.age = "thirty".to_string();
        assert!(validate(&form).contains_key("age"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["jane", "jane@", "@example.com", "jane@example", "a b@c.d"] {
            let mut form = accepted_form();
            form.email = bad.to_string();
            assert!(validate(&form).contains_key("email"), "accepted {:?}", bad);
        }
    }

    #[test]
    fn city_is_optional_but_pattern_checked() {
        let mut form = accepted_form();
        assert!(validate(&form).is_empty());

        form.city = "San Francisco".to_string();
        assert!(validate(&form).is_empty());

        form.city = "District 9".to_string();
        assert!(validate(&form).contains_key("city"));
    }

    #[test]
    fn blank_optional_fields_travel_as_none() {
        let input = accepted_form().to_input();
        assert_eq!(input.hobbies.as_deref(), Some("reading, chess"));
        assert!(input.street.is_none());
        assert!(input.city.is_none());
        assert!(input.zip_code.is_none());
        assert_eq!(input.age, 30);
    }

    #[test]
    fn from_record_round_trips_hobbies() {
        let record = ConfigRecord {
            id: 7,
            name: "Jane Doe".to_string(),
            age: 30,
            email: "jane@example.com".to_string(),
            is_active: None,
            // The store splits "a, b" on the bare comma.
            hobbies: vec!["a".to_string(), " b".to_string()],
            street: None,
            city: None,
            zip_code: None,
        };
        let form = ConfigForm::from_record(&record);
        assert_eq!(form.hobbies, "a, b");
        assert!(!form.is_active);
        assert_eq!(form.age, "30");
    }
}
