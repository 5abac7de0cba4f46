//! Hosted payment popup.

use serde::{Deserialize, Serialize};

use crate::client::Payname;
use crate::error::Result;

/// Options accepted by the popup endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PopupRequest {
    /// Amount to pay in the popup.
    pub amount: f64,

    /// Redirect here once the payment finishes, instead of closing the
    /// popup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_ok: Option<String>,

    /// Redirect here when the user cancels, instead of closing the popup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_cancel: Option<String>,
}

impl PopupRequest {
    /// Popup for a plain amount, with no redirect overrides.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            callback_ok: None,
            callback_cancel: None,
        }
    }
}

/// Hosted payment popup for the current shop.
#[derive(Debug, Clone, Copy)]
pub struct Popup;

#[derive(Debug, Deserialize)]
struct PopupData {
    url: String,
}

impl Popup {
    /// Create a popup and return the URL to open.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, request: &PopupRequest) -> Result<String> {
        let payload = serde_json::to_value(request)?;
        let data: PopupData = client.post("/popup", &payload).await?.decode()?;
        Ok(data.url)
    }
}
