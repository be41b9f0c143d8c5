//! # Google Sheets webhook
//!
//! The club's applications land in a spreadsheet behind a Google Apps
//! Script web app. The script appends one row per POST and answers with a
//! redirect to a result page we never follow.
//!
//! ## Row shape
//!
//! Twelve string columns: timestamp, firstName, lastName, age, cni, email,
//! phone, university, year, instrument, subject, message.
//!
//! - `year`/`subject` are stored as display labels, not form codes, so the
//!   sheet reads well without a legend. Unknown codes pass through as-is.
//! - `phone`/`instrument` are optional on the form; empty values become
//!   "Not provided"/"Not specified" so the columns are never blank.
//! - `timestamp` is Casablanca wall-clock time in a fixed
//!   `MM/DD/YYYY, HH:MM:SS` 24-hour format, independent of server locale.

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Africa::Casablanca;
use reqwest::{redirect::Policy, Client, StatusCode};
use serde::Serialize;
#[cfg(feature = "verbose")]
use tracing::info;

use crate::gateway::{Delivery, GatewayError, SubmissionGateway};
use crate::models::FormRecord;

/// Apps Script web app deployment the club sheet listens on.
pub const SHEETS_URL: &str = "https://script.google.com/macros/s/AKfycbxBFb01VEUaKsRjmEOhoNzdy8pWvcI_XEvW4J4TT2FxjjQmiV1kuygwhRLky7KvhINAEw/exec";

const NO_PHONE: &str = "Not provided";
const NO_INSTRUMENT: &str = "Not specified";
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub timestamp: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub cni: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub year: String,
    pub instrument: String,
    pub subject: String,
    pub message: String,
}

fn year_label(record: &FormRecord) -> String {
    match record.year.as_str() {
        "other" => record.other_year.clone(),
        "freshman" => "1st Year (L1)".to_string(),
        "sophomore" => "2nd Year (L2)".to_string(),
        "junior" => "3rd Year (L3)".to_string(),
        "senior" => "Master's (M1/M2)".to_string(),
        code => code.to_string(),
    }
}

fn subject_label(record: &FormRecord) -> String {
    match record.subject.as_str() {
        "theory" => "Music Theory Lessons".to_string(),
        "instrument" => "Learn an Instrument".to_string(),
        "singing" => "Learn How to Sing".to_string(),
        code => code.to_string(),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

pub fn timestamp_now() -> String {
    Utc::now()
        .with_timezone(&Casablanca)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Render a record into the row the spreadsheet expects.
pub fn build_row(record: &FormRecord, timestamp: String) -> SheetRow {
    SheetRow {
        timestamp,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        age: record.age.clone(),
        cni: record.cni.clone(),
        email: record.email.clone(),
        phone: or_placeholder(&record.phone, NO_PHONE),
        university: record.university.clone(),
        year: year_label(record),
        instrument: or_placeholder(&record.instrument, NO_INSTRUMENT),
        subject: subject_label(record),
        message: record.message.clone(),
    }
}

pub struct SheetsGateway {
    client: Client,
    url: String,
}

impl SheetsGateway {
    pub fn new(url: String) -> Self {
        // The script's redirect target carries nothing useful, skip it
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("HTTP client misconfigured!");

        Self { client, url }
    }
}

impl Default for SheetsGateway {
    fn default() -> Self {
        Self::new(SHEETS_URL.to_string())
    }
}

#[async_trait]
impl SubmissionGateway for SheetsGateway {
    async fn submit(&self, record: &FormRecord) -> Result<Delivery, GatewayError> {
        let row = build_row(record, timestamp_now());

        #[cfg(feature = "verbose")]
        info!("Submitting row: {row:?}");

        let response = self.client.post(&self.url).json(&row).send().await?;

        Ok(classify(response.status()))
    }
}

fn classify(status: StatusCode) -> Delivery {
    if status.is_success() {
        Delivery::Acknowledged
    } else if status.is_redirection() {
        // opaque send: the call completed, the verdict did not come back
        Delivery::Unknown
    } else {
        Delivery::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormRecord {
        FormRecord {
            first_name: "Amine".into(),
            last_name: "B.".into(),
            age: "21".into(),
            cni: "AB1234".into(),
            email: "a@b.com".into(),
            university: "FSR".into(),
            message: "Interested in joining the vocal section.".into(),
            ..FormRecord::default()
        }
    }

    #[test]
    fn year_codes_translate_to_labels() {
        let mut record = sample();
        for (code, label) in [
            ("freshman", "1st Year (L1)"),
            ("sophomore", "2nd Year (L2)"),
            ("junior", "3rd Year (L3)"),
            ("senior", "Master's (M1/M2)"),
        ] {
            record.year = code.to_string();
            assert_eq!(year_label(&record), label);
        }
    }

    #[test]
    fn other_year_resolves_to_free_text() {
        let mut record = sample();
        record.year = "other".into();
        record.other_year = "Engineering cycle".into();
        assert_eq!(year_label(&record), "Engineering cycle");
    }

    #[test]
    fn unknown_codes_pass_through() {
        let mut record = sample();
        record.year = "postdoc".into();
        record.subject = "composition".into();
        assert_eq!(year_label(&record), "postdoc");
        assert_eq!(subject_label(&record), "composition");
    }

    #[test]
    fn optional_fields_get_placeholders() {
        let row = build_row(&sample(), "01/01/2026, 00:00:00".into());
        assert_eq!(row.phone, "Not provided");
        assert_eq!(row.instrument, "Not specified");

        let mut record = sample();
        record.phone = "+212612345678".into();
        record.instrument = "Guitar".into();
        let row = build_row(&record, "01/01/2026, 00:00:00".into());
        assert_eq!(row.phone, "+212612345678");
        assert_eq!(row.instrument, "Guitar");
    }

    #[test]
    fn row_serializes_with_sheet_column_keys() {
        let row = build_row(&sample(), "01/01/2026, 00:00:00".into());
        let json = serde_json::to_string(&row).unwrap();
        let columns = [
            "\"timestamp\"",
            "\"firstName\"",
            "\"lastName\"",
            "\"age\"",
            "\"cni\"",
            "\"email\"",
            "\"phone\"",
            "\"university\"",
            "\"year\"",
            "\"instrument\"",
            "\"subject\"",
            "\"message\"",
        ];
        let positions: Vec<usize> = columns
            .iter()
            .map(|key| json.find(key).unwrap_or_else(|| panic!("missing {key}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn timestamp_shape() {
        let stamp = timestamp_now();
        let pattern =
            regex::Regex::new(r"^\d{2}/\d{2}/\d{4}, \d{2}:\d{2}:\d{2}$").unwrap();
        assert!(pattern.is_match(&stamp), "{stamp}");
    }

    #[test]
    fn status_classification() {
        assert_eq!(classify(StatusCode::OK), Delivery::Acknowledged);
        assert_eq!(classify(StatusCode::FOUND), Delivery::Unknown);
        assert_eq!(classify(StatusCode::BAD_REQUEST), Delivery::Rejected);
        assert_eq!(classify(StatusCode::INTERNAL_SERVER_ERROR), Delivery::Rejected);
    }
}
