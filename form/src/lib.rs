//! # Club Contact Form
//!
//! Membership application pipeline for the ETERNOTES music club site.
//!
//! ## Flow
//!
//! - Every keystroke goes through [`normalize::normalize`] before storage
//!   (CNI casing/stripping, Moroccan phone prefix rewriting)
//! - Changing a field clears any error already shown for it, nothing else
//! - Validation only runs on submit: required pass first, then format pass
//!   over non-empty fields
//! - A clean record is handed to the [`gateway::SubmissionGateway`] which
//!   posts it to the Google Sheets webhook
//!
//! ## Delivery states
//!
//! The Apps Script endpoint is an opaque sink: it answers with a redirect
//! whose body we never read, so "the POST went through" is the strongest
//! signal available. The gateway therefore reports one of three outcomes:
//!
//! - **Acknowledged**: the endpoint answered 2xx (never seen in practice)
//! - **Unknown**: the request was sent but the response is opaque
//! - **Rejected**: the endpoint answered with an error status
//!
//! [`state::submit`] counts Unknown as a user-facing success. There is no
//! confirmation id and no retry; a submission the sheet silently drops is
//! still shown as sent. Known gap, lives here until the webhook grows an
//! acknowledgment channel.
//!
//! ## Statuses
//!
//! One form instance owns one record/error-map/status triple. Status is
//! Idle, Pending while the gateway call is in flight (doubles as the
//! re-entrancy guard), or Succeeded for the 5 seconds the success banner
//! is displayed.

pub mod gateway;
pub mod models;
pub mod normalize;
pub mod sheets;
pub mod state;
pub mod validate;
