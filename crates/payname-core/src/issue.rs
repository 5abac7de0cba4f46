//! Classification of API-level failures and warnings.

use std::fmt;

use serde_json::Value;

use crate::envelope::Envelope;

/// Code reported when an envelope carries neither `code` nor `error`.
pub const UNKNOWN_CODE: &str = "n.a.";

/// Request id reported when an envelope carries neither `id` nor `logs.log`.
pub const UNKNOWN_REQUEST_ID: i64 = -1;

/// Severity of an [`ApiIssue`].
///
/// A warning means the call's main functionality was delivered but the
/// platform flagged something along the way; an error means the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The call failed.
    Error,
    /// The call succeeded with reservations.
    Warning,
}

impl Severity {
    /// Derive the severity from an application code.
    ///
    /// There is no canonical list of warning codes upstream; the contract is
    /// purely positional on the leading `'W'`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.starts_with('W') {
            Self::Warning
        } else {
            Self::Error
        }
    }
}

/// A non-clean outcome reported by the API.
///
/// Instances are built exclusively from parsed envelopes through
/// [`ApiIssue::from_envelope`]; the fields are private and there is no other
/// constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiIssue {
    code: String,
    severity: Severity,
    message: String,
    details: Option<Value>,
    request_id: i64,
    data: Option<Value>,
}

impl ApiIssue {
    /// Build an issue from a parsed envelope.
    #[must_use]
    pub fn from_envelope(envelope: &Envelope) -> Self {
        let code = envelope.issue_code().unwrap_or(UNKNOWN_CODE).to_string();
        let severity = Severity::from_code(&code);
        Self {
            severity,
            message: envelope.msg.clone(),
            details: envelope.details.clone(),
            request_id: envelope.request_id().unwrap_or(UNKNOWN_REQUEST_ID),
            data: envelope.data.clone(),
            code,
        }
    }

    /// Application code, e.g. `WUC120`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Severity derived from the code.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// True for a real error (not a warning).
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True for a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Message returned by the API.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Details attached to the issue, if any.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Id of the API call. Useful when reporting a call to support.
    #[must_use]
    pub fn request_id(&self) -> i64 {
        self.request_id
    }

    /// Payload attached to the issue, if any. Usually empty.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Text used as the message of the error raised for this issue.
    ///
    /// The data payload is appended JSON-encoded only when present and
    /// non-empty; non-ASCII text passes through unescaped.
    #[must_use]
    pub fn exception_message(&self) -> String {
        let mut message = format!(
            "{} - {} (request id: {})",
            self.code, self.message, self.request_id
        );
        if let Some(data) = &self.data {
            if !is_empty_value(data) {
                if let Ok(encoded) = serde_json::to_string(data) {
                    message.push_str(" - ");
                    message.push_str(&encoded);
                }
            }
        }
        message
    }
}

impl fmt::Display for ApiIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exception_message())
    }
}

/// Emptiness the way the upstream platform means it: `null`, `""`, `"0"`,
/// `0`, `false`, `[]` and `{}` all count as empty.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
