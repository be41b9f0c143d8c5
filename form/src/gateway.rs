use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::FormRecord;

/// What we know about a submission once the wire call has completed.
///
/// The production sink (Google Apps Script) answers with a redirect whose
/// body is never read, so `Unknown` is its normal outcome: the POST went
/// through, the remote verdict is invisible. Callers decide whether that
/// counts as success.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Acknowledged,
    Rejected,
    Unknown,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call never made it onto the wire.
    #[error("Failed to send message. Please try again.")]
    Unavailable,
}

#[async_trait]
pub trait SubmissionGateway {
    /// One-way send of a validated record. `Err` is reserved for transport
    /// failures; a reachable endpoint always yields a [`Delivery`].
    async fn submit(&self, record: &FormRecord) -> Result<Delivery, GatewayError>;
}
