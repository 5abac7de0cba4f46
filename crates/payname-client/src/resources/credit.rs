//! Credits: money pushed to a seller within a payment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;

/// A credit attached to a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credit {
    /// Credit hash, public id.
    pub hash: String,

    /// Parent payment hash.
    pub payment: String,

    /// Hash of the credited user.
    pub user: String,

    /// Transfer method: `iban`, or one of the reserved `Marketplace`,
    /// `Payname` and `URSSAF` commission entries.
    pub method: String,

    /// Credit status: `W_USER`, `W_METHOD`, `W_EXEC`, `F_SENT`, `F_DONE` or
    /// `D_CANCELLED`.
    pub status: String,

    /// Planned due date; execution is held until it passes.
    pub due_at: Option<String>,

    /// Actual transfer date.
    pub paid_at: Option<String>,

    /// Credit amount.
    pub amount: Option<f64>,
}

impl Credit {
    /// Create a credit under a payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, payment_hash: &str, options: &Value) -> Result<Self> {
        let path = format!("/payment/{payment_hash}/credit");
        let mut credit: Self = client.post(&path, options).await?.decode()?;
        credit.payment = payment_hash.to_string();
        Ok(credit)
    }

    /// Fetch one credit of a payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, payment_hash: &str, hash: &str) -> Result<Self> {
        let path = format!("/payment/{payment_hash}/credit/{hash}");
        let mut credit: Self = client.get(&path).await?.decode()?;
        credit.payment = payment_hash.to_string();
        Ok(credit)
    }

    /// List the credits of a payment. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname, payment_hash: &str) -> Result<Vec<Self>> {
        let path = format!("/payment/{payment_hash}/credit");
        let mut credits: Vec<Self> = client.get(&path).await?.decode()?;
        for credit in &mut credits {
            credit.payment = payment_hash.to_string();
        }
        Ok(credits)
    }

    /// Push the local fields to the platform and reload from the response.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn update(&mut self, client: &Payname) -> Result<()> {
        let path = format!("/payment/{}/credit/{}", self.payment, self.hash);
        let payload = serde_json::to_value(&*self)?;
        let mut updated: Self = client.put(&path, Some(&payload)).await?.decode()?;
        if updated.payment.is_empty() {
            updated.payment = std::mem::take(&mut self.payment);
        }
        *self = updated;
        Ok(())
    }

    /// Delete the credit on the platform.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        let path = format!("/payment/{}/credit/{}", self.payment, self.hash);
        client.delete(&path).await?;
        Ok(())
    }
}
