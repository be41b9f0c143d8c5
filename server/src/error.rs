use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use form::{gateway::GatewayError, models::ErrorMap};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid application")]
    Invalid(ErrorMap),

    #[error("The spreadsheet rejected the submission")]
    UpstreamRejected,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Invalid(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors })))
                    .into_response()
            }
            AppError::UpstreamRejected | AppError::Gateway(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
        }
    }
}
