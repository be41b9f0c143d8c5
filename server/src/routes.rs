use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use form::{
    gateway::{Delivery, SubmissionGateway},
    models::{Field, FormRecord},
    normalize::normalize,
    validate::check,
};
use serde_json::json;
use tracing::info;

use crate::{error::AppError, state::AppState};

pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Relay a full application to the spreadsheet. The browser already
/// normalizes on keystroke, but records arriving from anywhere else get
/// the same canonical form here.
pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Json(record): Json<FormRecord>,
) -> Result<impl IntoResponse, AppError> {
    let record = normalize_record(record);

    let errors = check(&record);
    if !errors.is_empty() {
        return Err(AppError::Invalid(errors));
    }

    let delivery = state.gateway.submit(&record).await?;
    if delivery == Delivery::Rejected {
        return Err(AppError::UpstreamRejected);
    }

    info!("Application relayed, delivery: {delivery:?}");
    Ok(Json(json!({ "delivery": delivery })))
}

fn normalize_record(mut record: FormRecord) -> FormRecord {
    for field in Field::ALL {
        let canonical = normalize(field, record.get(field));
        record.set(field, canonical);
    }
    record
}
