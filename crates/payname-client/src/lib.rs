//! Payname API client SDK.
//!
//! This crate provides a client library for the Payname payment platform's
//! HTTP/JSON API: request dispatch, authentication, response classification,
//! and typed records for the platform resources (users, payments, debits,
//! credits, cards, IBANs, documents, popups).
//!
//! # Example
//!
//! ```no_run
//! use payname_client::{Config, Payname};
//! use payname_client::resources::payment::Payment;
//!
//! # async fn example() -> Result<(), payname_client::Error> {
//! let config = Config::new("shop-id", "sec-key").with_oauth(false);
//! let client = Payname::new(config);
//!
//! let payment = Payment::get(&client, "pay_123").await?;
//! println!("status: {}", payment.status);
//!
//! // Warnings never abort a call; poll for them afterwards.
//! if let Some(issue) = client.last_error() {
//!     println!("last call warned: {issue}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication modes
//!
//! With OAuth disabled (simple-auth mode) the secret key itself is sent as
//! the auth token on every call. With OAuth enabled, obtain a grant via
//! [`Payname::request_token`] and store it with [`Payname::set_token`]; the
//! dispatcher never replaces a stored token on its own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;

pub use auth::TokenGrant;
pub use client::{CallOutcome, Payname};
pub use config::{Config, DEFAULT_HOST};
pub use error::{Error, Result};
pub use transport::{OneShotTransport, PooledTransport, Transport};

pub use payname_core::{ApiIssue, Envelope, Severity};
