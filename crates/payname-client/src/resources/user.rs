//! Platform users (buyers and sellers) and their attachments.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;
use crate::resources::card::Card;
use crate::resources::doc::Doc;
use crate::resources::iban::Iban;

/// A platform user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User hash, public id.
    pub hash: String,

    /// Email address.
    pub email: Option<String>,

    /// Phone number.
    pub phone: Option<String>,

    /// First name.
    pub first_name: Option<String>,

    /// Last name.
    pub last_name: Option<String>,

    /// Postal address.
    pub address: Option<String>,

    /// City.
    pub city: Option<String>,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Birth date as a Unix timestamp. See [`User::birth_date`].
    pub birthdate: Option<i64>,

    /// Social security number (URSSAF option).
    pub secu: Option<String>,

    /// Validation status of the user.
    pub status: Option<String>,

    /// IBANs returned inline by the create and get endpoints.
    #[serde(rename = "iban", skip_serializing)]
    pub ibans: Vec<Iban>,
}

impl User {
    /// Create a user.
    ///
    /// `options` is the open-ended creation map documented by the platform
    /// (identity fields, inline IBAN, ...).
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, options: &Value) -> Result<Self> {
        client.post("/user", options).await?.decode()
    }

    /// Fetch one user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, hash: &str) -> Result<Self> {
        client.get(&format!("/user/{hash}")).await?.decode()
    }

    /// List users. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname) -> Result<Vec<Self>> {
        client.get("/user").await?.decode()
    }

    /// Push the local fields to the platform and reload from the response.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn update(&mut self, client: &Payname) -> Result<()> {
        let payload = serde_json::to_value(&*self)?;
        let path = format!("/user/{}", self.hash);
        *self = client.put(&path, Some(&payload)).await?.decode()?;
        Ok(())
    }

    /// Delete the user on the platform.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        client.delete(&format!("/user/{}", self.hash)).await?;
        Ok(())
    }

    /// Birth date as a calendar date, when the timestamp is set and valid.
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birthdate
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .map(|datetime| datetime.date_naive())
    }

    /// Fetch the cards registered by this user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn cards(&self, client: &Payname) -> Result<Vec<Card>> {
        Card::list(client, &self.hash).await
    }

    /// Fetch one document of this user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn doc(&self, client: &Payname, hash: &str) -> Result<Doc> {
        Doc::get(client, &self.hash, hash).await
    }

    /// Fetch all documents of this user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn docs(&self, client: &Payname) -> Result<Vec<Doc>> {
        Doc::list(client, &self.hash).await
    }

    /// Fetch one IBAN of this user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn iban(&self, client: &Payname, hash: &str) -> Result<Iban> {
        Iban::get(client, &self.hash, hash).await
    }

    /// Fetch all IBANs of this user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn fetch_ibans(&self, client: &Payname) -> Result<Vec<Iban>> {
        Iban::list(client, &self.hash).await
    }
}
