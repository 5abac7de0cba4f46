//! User IBANs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;

/// An IBAN registered on a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Iban {
    /// IBAN hash, public id.
    pub hash: String,

    /// Parent user hash.
    pub user: String,

    /// IBAN code.
    pub iban: Option<String>,

    /// True for the user's default IBAN.
    pub master: Option<bool>,

    /// True for a production IBAN, false for a test one.
    pub is_prod: Option<bool>,

    /// Free-form title.
    pub title: Option<String>,
}

impl Iban {
    /// Register an IBAN on a user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, user_hash: &str, options: &Value) -> Result<Self> {
        let path = format!("/user/{user_hash}/iban");
        let mut iban: Self = client.post(&path, options).await?.decode()?;
        iban.user = user_hash.to_string();
        Ok(iban)
    }

    /// Fetch one IBAN of a user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, user_hash: &str, hash: &str) -> Result<Self> {
        let path = format!("/user/{user_hash}/iban/{hash}");
        let mut iban: Self = client.get(&path).await?.decode()?;
        iban.user = user_hash.to_string();
        Ok(iban)
    }

    /// List the IBANs of a user. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname, user_hash: &str) -> Result<Vec<Self>> {
        let path = format!("/user/{user_hash}/iban");
        let mut ibans: Vec<Self> = client.get(&path).await?.decode()?;
        for iban in &mut ibans {
            iban.user = user_hash.to_string();
        }
        Ok(ibans)
    }

    /// Push the local fields to the platform and reload from the response.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn update(&mut self, client: &Payname) -> Result<()> {
        let path = format!("/user/{}/iban/{}", self.user, self.hash);
        let payload = serde_json::to_value(&*self)?;
        let mut updated: Self = client.put(&path, Some(&payload)).await?.decode()?;
        if updated.user.is_empty() {
            updated.user = std::mem::take(&mut self.user);
        }
        *self = updated;
        Ok(())
    }

    /// Delete the IBAN on the platform.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        let path = format!("/user/{}/iban/{}", self.user, self.hash);
        client.delete(&path).await?;
        Ok(())
    }
}
