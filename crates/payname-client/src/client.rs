//! Request dispatch and outcome classification.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use payname_core::{ApiIssue, Envelope};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::{OneShotTransport, PooledTransport, Transport};

/// Outcome of a call the platform accepted.
///
/// The platform can flag an accepted call with a warning code; such calls
/// return their data normally, with the warning carried alongside (and kept
/// in the client's last-error slot).
#[derive(Debug, Clone)]
pub enum CallOutcome {
    /// Clean success.
    Clean(Option<Value>),
    /// Success with a warning-severity code attached.
    Warning(Option<Value>, ApiIssue),
}

impl CallOutcome {
    /// Payload of the call, dropping any warning.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        match self {
            Self::Clean(data) | Self::Warning(data, _) => data,
        }
    }

    /// Warning attached to the call, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&ApiIssue> {
        match self {
            Self::Clean(_) => None,
            Self::Warning(_, issue) => Some(issue),
        }
    }

    /// Decode the payload into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the payload is missing or does
    /// not match the expected shape.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(
            self.into_data().unwrap_or(Value::Null),
        )?)
    }
}

/// Shared mutable state of a client and its clones.
#[derive(Debug, Default)]
struct State {
    token: RwLock<String>,
    last_issue: RwLock<Option<ApiIssue>>,
}

impl State {
    fn token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn last_issue(&self) -> Option<ApiIssue> {
        self.last_issue
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_last_issue(&self, issue: Option<ApiIssue>) {
        *self
            .last_issue
            .write()
            .unwrap_or_else(PoisonError::into_inner) = issue;
    }
}

/// Payname API client.
///
/// Owns the configuration, the current auth token, and the last observed
/// issue. Clones share the token and issue slots; distinct clients are fully
/// independent, so one instance per set of credentials is the rule.
#[derive(Debug, Clone)]
pub struct Payname {
    config: Config,
    transport: Arc<dyn Transport>,
    state: Arc<State>,
}

impl Payname {
    /// Create a client over the transport selected by the configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let transport: Arc<dyn Transport> = if config.pooled_transport() {
            Arc::new(PooledTransport::new())
        } else {
            Arc::new(OneShotTransport)
        };
        Self::with_transport(config, transport)
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            state: Arc::new(State::default()),
        }
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current auth token.
    #[must_use]
    pub fn token(&self) -> String {
        self.state.token()
    }

    /// Replace the auth token, obtained via the auth endpoints (OAuth mode).
    pub fn set_token(&self, token: impl Into<String>) {
        self.state.set_token(token.into());
    }

    /// Issue reported by the most recent call, or `None` after a clean one.
    ///
    /// Overwritten on every completed call: errors and warnings land here, a
    /// clean success clears it. Warnings never abort a call, so callers that
    /// care about them must poll this after each call.
    #[must_use]
    pub fn last_error(&self) -> Option<ApiIssue> {
        self.state.last_issue()
    }

    /// GET request against an API path.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Configuration`], a transport-level error, or
    /// [`Error::Api`] when the platform rejects the call.
    pub async fn get(&self, path: &str) -> Result<CallOutcome> {
        self.call(Method::GET, path, None).await
    }

    /// POST request with a JSON payload.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Configuration`], a transport-level error, or
    /// [`Error::Api`] when the platform rejects the call.
    pub async fn post(&self, path: &str, payload: &Value) -> Result<CallOutcome> {
        self.call(Method::POST, path, Some(payload)).await
    }

    /// PUT request with an optional JSON payload.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Configuration`], a transport-level error, or
    /// [`Error::Api`] when the platform rejects the call.
    pub async fn put(&self, path: &str, payload: Option<&Value>) -> Result<CallOutcome> {
        self.call(Method::PUT, path, payload).await
    }

    /// DELETE request against an API path.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Configuration`], a transport-level error, or
    /// [`Error::Api`] when the platform rejects the call.
    pub async fn delete(&self, path: &str) -> Result<CallOutcome> {
        self.call(Method::DELETE, path, None).await
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<CallOutcome> {
        let token = self.ensure_token()?;
        let url = format!("{}{}", self.config.host(), path);
        let body = payload.map(serde_json::to_string).transpose()?;

        tracing::debug!(%method, %url, "dispatching API call");
        let raw = self
            .transport
            .execute(method.clone(), &url, &token, body)
            .await
            .map_err(|source| Error::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let Ok(envelope) = serde_json::from_str::<Envelope>(&raw) else {
            return Err(Error::InvalidJson {
                method,
                url,
                body: raw,
            });
        };

        self.classify(envelope)
    }

    /// Token to send with the next call.
    ///
    /// Simple-auth mode recomputes the slot from the secret key every time,
    /// overwriting anything set explicitly. OAuth mode passes the stored
    /// token through untouched, stale or empty included.
    fn ensure_token(&self) -> Result<String> {
        if !self.config.use_oauth() {
            let secret = self.config.secret()?.to_string();
            self.state.set_token(secret.clone());
            return Ok(secret);
        }
        Ok(self.state.token())
    }

    fn classify(&self, envelope: Envelope) -> Result<CallOutcome> {
        if !envelope.success {
            let issue = ApiIssue::from_envelope(&envelope);
            self.state.set_last_issue(Some(issue.clone()));
            return Err(Error::Api(issue));
        }
        if envelope.has_warning_code() {
            let issue = ApiIssue::from_envelope(&envelope);
            tracing::warn!(code = issue.code(), "API call succeeded with a warning");
            self.state.set_last_issue(Some(issue.clone()));
            return Ok(CallOutcome::Warning(envelope.data, issue));
        }
        self.state.set_last_issue(None);
        Ok(CallOutcome::Clean(envelope.data))
    }
}
