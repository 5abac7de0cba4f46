//! Debits: money pulled from a buyer within a payment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;

/// A debit attached to a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Debit {
    /// Debit hash, public id.
    pub hash: String,

    /// Parent payment hash.
    pub payment: String,

    /// Hash of the debited user.
    pub user: String,

    /// Transfer method: `card` or `iban`.
    pub method: String,

    /// Card token to debit, when the method is `card`.
    pub token: String,

    /// Debit status: `W_USER`, `W_METHOD`, `W_EXEC`, `F_SENT`, `F_DONE` or
    /// `D_CANCELLED`.
    pub status: String,

    /// Planned due date; execution is held until it passes.
    pub due_at: Option<String>,

    /// Actual transfer date.
    pub paid_at: Option<String>,

    /// Debit amount.
    pub amount: Option<f64>,

    /// 3D-Secure redirect fields, JSON-encoded, while a 3DS check is pending.
    pub method_data: Option<String>,
}

impl Debit {
    /// Create a debit under a payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, payment_hash: &str, options: &Value) -> Result<Self> {
        let path = format!("/payment/{payment_hash}/debit");
        let mut debit: Self = client.post(&path, options).await?.decode()?;
        debit.payment = payment_hash.to_string();
        Ok(debit)
    }

    /// Fetch one debit of a payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, payment_hash: &str, hash: &str) -> Result<Self> {
        let path = format!("/payment/{payment_hash}/debit/{hash}");
        let mut debit: Self = client.get(&path).await?.decode()?;
        debit.payment = payment_hash.to_string();
        Ok(debit)
    }

    /// List the debits of a payment. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname, payment_hash: &str) -> Result<Vec<Self>> {
        let path = format!("/payment/{payment_hash}/debit");
        let mut debits: Vec<Self> = client.get(&path).await?.decode()?;
        for debit in &mut debits {
            debit.payment = payment_hash.to_string();
        }
        Ok(debits)
    }

    /// Push the local fields to the platform and reload from the response.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn update(&mut self, client: &Payname) -> Result<()> {
        let path = format!("/payment/{}/debit/{}", self.payment, self.hash);
        let payload = serde_json::to_value(&*self)?;
        let mut updated: Self = client.put(&path, Some(&payload)).await?.decode()?;
        if updated.payment.is_empty() {
            updated.payment = std::mem::take(&mut self.payment);
        }
        *self = updated;
        Ok(())
    }

    /// Delete the debit on the platform.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        let path = format!("/payment/{}/debit/{}", self.payment, self.hash);
        client.delete(&path).await?;
        Ok(())
    }

    /// True when the debit waits for the user to complete 3D-Secure.
    #[must_use]
    pub fn is_waiting_3ds(&self) -> bool {
        self.status == "W_METHOD" && self.method_data.is_some()
    }

    /// Redirect fields for the 3D-Secure form, when a check is pending.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the method data is not JSON.
    pub fn three_ds_info(&self) -> Result<Option<Value>> {
        Ok(self
            .method_data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?)
    }
}
