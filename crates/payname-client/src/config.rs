//! Client configuration.
//!
//! Credentials and behavior flags for a [`Payname`](crate::Payname) client.
//! Credential validation is lazy: empty values are only rejected when the
//! dispatcher actually needs them, not when they are set.

use crate::error::{Error, Result};

/// Default API host.
pub const DEFAULT_HOST: &str = "https://api.payname.fr/v2";

/// Environment variable overriding the API host at bulk-setup time.
pub const HOST_OVERRIDE_ENV: &str = "PAYNAME_API_HOST";

/// Client configuration: credentials, host, and behavior flags.
#[derive(Debug, Clone)]
pub struct Config {
    id: String,
    secret: String,
    host: String,
    use_oauth: bool,
    pooled_transport: bool,
}

impl Default for Config {
    /// Unconfigured state: empty credentials, default host, both flags off.
    fn default() -> Self {
        Self {
            id: String::new(),
            secret: String::new(),
            host: DEFAULT_HOST.to_string(),
            use_oauth: false,
            pooled_transport: false,
        }
    }
}

impl Config {
    /// Bulk setup: credentials with OAuth and the pooled transport enabled.
    ///
    /// Applies the `PAYNAME_API_HOST` environment override when present.
    #[must_use]
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        let host = match std::env::var(HOST_OVERRIDE_ENV) {
            Ok(host) => {
                tracing::debug!(%host, "using API host override from environment");
                host
            }
            Err(_) => DEFAULT_HOST.to_string(),
        };
        Self {
            id: id.into(),
            secret: secret.into(),
            host,
            use_oauth: true,
            pooled_transport: true,
        }
    }

    /// Set the account id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the secret key. Use the test key for sandbox runs.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Override the API host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Enable or disable OAuth mode.
    ///
    /// Disabled means simple-auth mode: the secret key is used directly as
    /// the auth token on every call.
    #[must_use]
    pub fn with_oauth(mut self, use_oauth: bool) -> Self {
        self.use_oauth = use_oauth;
        self
    }

    /// Select the pooled transport (connection reuse) over the one-shot one.
    #[must_use]
    pub fn with_pooled_transport(mut self, pooled: bool) -> Self {
        self.pooled_transport = pooled;
        self
    }

    /// Account id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the client has not been fully
    /// configured. Checked on every access.
    pub fn id(&self) -> Result<&str> {
        self.check()?;
        Ok(&self.id)
    }

    /// Secret key. Doubles as the auth token in simple-auth mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the client has not been fully
    /// configured. Checked on every access.
    pub fn secret(&self) -> Result<&str> {
        self.check()?;
        Ok(&self.secret)
    }

    /// Configured API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// True when OAuth mode is enabled.
    #[must_use]
    pub fn use_oauth(&self) -> bool {
        self.use_oauth
    }

    /// True when the pooled transport is selected.
    #[must_use]
    pub fn pooled_transport(&self) -> bool {
        self.pooled_transport
    }

    /// Both credential fields must be non-empty before any call.
    fn check(&self) -> Result<()> {
        if self.id.is_empty() || self.secret.is_empty() {
            return Err(Error::Configuration(
                "Payname API is not configured, set an account id and a secret key".to_string(),
            ));
        }
        Ok(())
    }
}
