//! Core wire types for the Payname payment platform API.
//!
//! This crate holds the pieces of the SDK that never touch the network:
//!
//! - **Envelope**: the JSON object wrapping every API response
//! - **Classification**: [`ApiIssue`] and [`Severity`], the structured view
//!   of a non-clean outcome
//!
//! The platform's envelope is non-standard: a single `success` flag carries
//! transport-level success, while a secondary code field (two naming
//! conventions coexist) can downgrade a successful call to a warning. The
//! types here encode that contract so the client crate only has to route on
//! it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod envelope;
pub mod issue;

pub use envelope::{Envelope, Logs};
pub use issue::{ApiIssue, Severity, UNKNOWN_CODE, UNKNOWN_REQUEST_ID};
