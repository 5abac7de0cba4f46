//! Typed records for the platform resources.
//!
//! Each record maps the `data` payload of its endpoints; the operations are
//! mechanical request-shape construction, dispatched through
//! [`Payname`](crate::Payname) and decoded from the envelope. Where the
//! upstream API takes open-ended key/value maps (most create and update
//! options), the operations accept `serde_json::Value`; where the shape is
//! fixed (cards, popups, simulations) a typed request struct is used.

pub mod card;
pub mod credit;
pub mod debit;
pub mod doc;
pub mod iban;
pub mod payment;
pub mod popup;
pub mod user;
