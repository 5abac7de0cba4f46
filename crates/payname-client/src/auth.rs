//! OAuth-mode token endpoints.
//!
//! In OAuth mode the token slot is only ever fed explicitly: obtain a grant
//! here, then store it with [`Payname::set_token`]. The dispatcher itself
//! never refreshes or replaces a stored token.

use serde::Deserialize;
use serde_json::json;

use crate::client::Payname;
use crate::error::Result;

/// Token issued by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    /// Token to store on the client via [`Payname::set_token`].
    pub token: String,
}

impl Payname {
    /// Request a fresh token from the platform.
    ///
    /// An ordinary dispatched POST; the credentials are read from the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Fails like any other dispatched call.
    pub async fn request_token(&self) -> Result<TokenGrant> {
        let payload = json!({
            "ID": self.config().id()?,
            "secret": self.config().secret()?,
        });
        self.post("/auth/token", &payload).await?.decode()
    }

    /// Exchange the currently stored token for a refreshed one.
    ///
    /// # Errors
    ///
    /// Fails like any other dispatched call.
    pub async fn refresh_token(&self) -> Result<TokenGrant> {
        let payload = json!({
            "ID": self.config().id()?,
            "token": self.token(),
        });
        self.post("/auth/refresh_token", &payload).await?.decode()
    }
}
