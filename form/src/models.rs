use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Year code preselected when the form loads.
pub const DEFAULT_YEAR: &str = "freshman";
/// Subject code preselected when the form loads.
pub const DEFAULT_SUBJECT: &str = "theory";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Cni,
    Email,
    Phone,
    University,
    Year,
    OtherYear,
    Instrument,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Age,
        Field::Cni,
        Field::Email,
        Field::Phone,
        Field::University,
        Field::Year,
        Field::OtherYear,
        Field::Instrument,
        Field::Subject,
        Field::Message,
    ];

    /// Fields that must be non-empty before a submission is attempted.
    pub const REQUIRED: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Age,
        Field::Cni,
        Field::Email,
        Field::University,
        Field::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Age => "Age",
            Field::Cni => "CNI",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::University => "University",
            Field::Year => "Academic year",
            Field::OtherYear => "Academic year",
            Field::Instrument => "Instrument",
            Field::Subject => "Interest",
            Field::Message => "Message",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub cni: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub year: String,
    pub other_year: String,
    pub instrument: String,
    pub subject: String,
    pub message: String,
}

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            cni: String::new(),
            email: String::new(),
            phone: String::new(),
            university: String::new(),
            year: DEFAULT_YEAR.to_string(),
            other_year: String::new(),
            instrument: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
            message: String::new(),
        }
    }
}

impl FormRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Cni => &self.cni,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::University => &self.university,
            Field::Year => &self.year,
            Field::OtherYear => &self.other_year,
            Field::Instrument => &self.instrument,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Age => &mut self.age,
            Field::Cni => &mut self.cni,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::University => &mut self.university,
            Field::Year => &mut self.year,
            Field::OtherYear => &mut self.other_year,
            Field::Instrument => &mut self.instrument,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Absence of a key means no error is displayed for that field.
pub type ErrorMap = BTreeMap<Field, String>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Succeeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&Field::FirstName).unwrap(),
            "\"firstName\""
        );
        assert_eq!(serde_json::to_string(&Field::Cni).unwrap(), "\"cni\"");
        assert_eq!(
            serde_json::to_string(&Field::OtherYear).unwrap(),
            "\"otherYear\""
        );
    }

    #[test]
    fn default_record_preselects_dropdowns() {
        let record = FormRecord::default();
        assert_eq!(record.year, "freshman");
        assert_eq!(record.subject, "theory");
        assert!(record.first_name.is_empty());
        assert!(record.message.is_empty());
    }

    #[test]
    fn record_deserializes_from_partial_camel_case() {
        let record: FormRecord =
            serde_json::from_str(r#"{"firstName":"Amine","otherYear":"PhD"}"#).unwrap();
        assert_eq!(record.first_name, "Amine");
        assert_eq!(record.other_year, "PhD");
        assert_eq!(record.year, "freshman");
    }

    #[test]
    fn get_set_round_trip() {
        let mut record = FormRecord::default();
        for field in Field::ALL {
            record.set(field, "x".to_string());
            assert_eq!(record.get(field), "x");
        }
    }
}
