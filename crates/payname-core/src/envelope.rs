//! Response envelope returned by every API call.
//!
//! Two generations of the API coexist on the wire: the current convention
//! reports application codes under `code` and request ids under `id`, while
//! older endpoints still use `error` and `logs.log`. Exactly one convention
//! is populated per response; the accessors here resolve the priority so
//! callers never look at the raw fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed response envelope.
///
/// Unrecognized keys are ignored; absent optional fields stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Transport-level success flag. `false` means the call failed.
    pub success: bool,

    /// Application-level code, current convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Application-level code, old convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable message. Always present on a well-formed envelope.
    pub msg: String,

    /// Additional details attached to an error, if the API returned any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    /// Payload of the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Request id, current convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Request log reference, old convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Logs>,
}

/// `logs` sub-object of the envelope, old request-id convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logs {
    /// Request id.
    pub log: i64,
}

impl Envelope {
    /// Application-level code, whichever convention is populated.
    ///
    /// The current convention (`code`) wins over the old one (`error`).
    #[must_use]
    pub fn issue_code(&self) -> Option<&str> {
        self.code.as_deref().or(self.error.as_deref())
    }

    /// True when the envelope carries a warning-severity code.
    ///
    /// Severity is positional: only the first character of the code counts.
    #[must_use]
    pub fn has_warning_code(&self) -> bool {
        self.issue_code().is_some_and(|code| code.starts_with('W'))
    }

    /// Request id, whichever convention is populated.
    #[must_use]
    pub fn request_id(&self) -> Option<i64> {
        self.id.or_else(|| self.logs.as_ref().map(|logs| logs.log))
    }
}
