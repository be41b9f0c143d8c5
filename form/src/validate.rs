use regex::Regex;

use crate::models::{ErrorMap, Field, FormRecord};

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 65;
const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

/// Format check for a single field. Only meaningful for non-empty values;
/// required-ness is a separate pass so an empty mandatory field reports
/// exactly one error.
pub fn validate(field: Field, value: &str) -> Option<String> {
    match field {
        Field::FirstName => (value.chars().count() < MIN_NAME_LEN)
            .then(|| "First name must be at least 2 characters".to_string()),
        Field::LastName => (value.chars().count() < MIN_NAME_LEN)
            .then(|| "Last name must be at least 2 characters".to_string()),
        Field::Age => {
            let valid = value
                .trim()
                .parse::<u32>()
                .is_ok_and(|age| (MIN_AGE..=MAX_AGE).contains(&age));
            (!valid).then(|| "Please enter a valid age (16-65)".to_string())
        }
        Field::Cni => {
            if value.is_empty() {
                return None;
            }
            let pattern = Regex::new(r"^[A-Z]{2}\d{4}$").unwrap();
            let upper = value.to_ascii_uppercase();
            (!pattern.is_match(upper.trim()))
                .then(|| "CNI must be in format: AB1234 (2 letters + 4 digits)".to_string())
        }
        Field::Email => {
            let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
            (!pattern.is_match(value)).then(|| "Please enter a valid email address".to_string())
        }
        Field::University => (value.chars().count() < MIN_NAME_LEN)
            .then(|| "University name must be at least 2 characters".to_string()),
        Field::Message => (value.chars().count() < MIN_MESSAGE_LEN)
            .then(|| "Message must be at least 10 characters".to_string()),
        // phone and the dropdown-backed fields have no format to enforce
        _ => None,
    }
}

/// "<Label> is required" for every empty mandatory field.
pub fn required_errors(record: &FormRecord) -> ErrorMap {
    Field::REQUIRED
        .into_iter()
        .filter(|field| record.get(*field).is_empty())
        .map(|field| (field, format!("{} is required", field.label())))
        .collect()
}

/// Full submit-time pass: required first, then format checks over every
/// field that holds a value. Required entries win on overlap.
pub fn check(record: &FormRecord) -> ErrorMap {
    let mut errors = required_errors(record);

    for field in Field::ALL {
        let value = record.get(field);
        if value.is_empty() || errors.contains_key(&field) {
            continue;
        }
        if let Some(message) = validate(field, value) {
            errors.insert(field, message);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_rejected() {
        assert!(validate(Field::FirstName, "A").is_some());
        assert!(validate(Field::FirstName, "Al").is_none());
        assert!(validate(Field::LastName, "B").is_some());
        assert!(validate(Field::LastName, "B.").is_none());
    }

    #[test]
    fn age_boundaries() {
        assert!(validate(Field::Age, "16").is_none());
        assert!(validate(Field::Age, "65").is_none());
        assert!(validate(Field::Age, "15").is_some());
        assert!(validate(Field::Age, "66").is_some());
        assert!(validate(Field::Age, "abc").is_some());
        assert!(validate(Field::Age, "").is_some());
    }

    #[test]
    fn cni_format() {
        assert!(validate(Field::Cni, "AB1234").is_none());
        assert!(validate(Field::Cni, "ab1234").is_none());
        assert!(validate(Field::Cni, "A1234").is_some());
        assert!(validate(Field::Cni, "AB12345").is_some());
        assert!(validate(Field::Cni, "123456").is_some());
        // empty bypasses the format check, required pass handles it
        assert!(validate(Field::Cni, "").is_none());
    }

    #[test]
    fn email_shape() {
        assert!(validate(Field::Email, "a@b.com").is_none());
        assert!(validate(Field::Email, "amine@fsr.ac.ma").is_none());
        assert!(validate(Field::Email, "not-an-email").is_some());
        assert!(validate(Field::Email, "a@b").is_some());
        assert!(validate(Field::Email, "a b@c.com").is_some());
    }

    #[test]
    fn phone_always_passes() {
        assert!(validate(Field::Phone, "whatever").is_none());
        assert!(validate(Field::Phone, "").is_none());
    }

    #[test]
    fn message_length() {
        assert!(validate(Field::Message, "too short").is_some());
        assert!(validate(Field::Message, "long enough now").is_none());
    }

    #[test]
    fn empty_record_flags_exactly_the_mandatory_fields() {
        let mut record = FormRecord::default();
        record.year = String::new();
        record.subject = String::new();
        let errors = check(&record);

        let keys: Vec<Field> = errors.keys().copied().collect();
        let mut expected = Field::REQUIRED.to_vec();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(errors[&Field::FirstName], "First name is required");
        assert_eq!(errors[&Field::Cni], "CNI is required");
    }

    #[test]
    fn required_error_suppresses_format_error() {
        let record = FormRecord::default();
        let errors = check(&record);
        // empty message is "required", never "must be at least 10 characters"
        assert_eq!(errors[&Field::Message], "Message is required");
    }

    #[test]
    fn valid_record_is_clean() {
        let record = FormRecord {
            first_name: "Amine".into(),
            last_name: "B.".into(),
            age: "21".into(),
            cni: "AB1234".into(),
            email: "a@b.com".into(),
            university: "FSR".into(),
            message: "Interested in joining the vocal section.".into(),
            ..FormRecord::default()
        };
        assert!(check(&record).is_empty());
    }
}
