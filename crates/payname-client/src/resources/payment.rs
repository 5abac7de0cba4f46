//! Payments and their lifecycle operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;
use crate::resources::credit::Credit;
use crate::resources::debit::Debit;

/// A payment: a set of debits balanced by a set of credits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// Payment hash, public id.
    pub hash: String,

    /// External order id defined by the shop.
    pub order: String,

    /// Payment status.
    ///
    /// `W_DEBIT` while debits execute, then `C_BALANCE` /
    /// `C_DOUBLE_WAITING` / `C_WAITING` through confirmation, `F_CREDIT`
    /// while credits execute, `F_DONE` once finished, `D_ADMIN` when
    /// deleted by the shop owner.
    pub status: String,

    /// Confirmation strategy: `double`, `simple` or `none`.
    pub confirmation: String,

    /// Commission rate applied to the payment.
    pub commission: f64,

    /// Fixed commission applied to the payment.
    pub comm_fixed: f64,

    /// Free-to-use external data.
    pub external_data: String,

    /// Whether URSSAF management is enabled.
    pub option_urssaf: bool,

    /// Worked hours used to compute the URSSAF amount.
    pub urssaf_nb_hours: f64,

    /// Debits attached to the payment, when returned inline.
    #[serde(rename = "debit", skip_serializing)]
    pub debits: Vec<Debit>,

    /// Credits attached to the payment, when returned inline.
    #[serde(rename = "credit", skip_serializing)]
    pub credits: Vec<Credit>,
}

/// Input of the amount-simulation endpoint.
///
/// Anchor the simulation on either the credit side (what the sellers should
/// receive) or the debit side (what the buyer pays); the remaining fields
/// default to the marketplace configuration when omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulateRequest {
    /// Target credit amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,

    /// Target debit amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<f64>,

    /// Commission rate to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,

    /// Fixed commission to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comm_fixed: Option<f64>,

    /// Worked hours (URSSAF only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_hours: Option<f64>,

    /// Employee postal code (URSSAF only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Employer birth date (URSSAF only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl SimulateRequest {
    /// Simulation anchored on the credit amount.
    #[must_use]
    pub fn from_credit(credit: f64) -> Self {
        Self {
            credit: Some(credit),
            ..Self::default()
        }
    }

    /// Simulation anchored on the debit amount.
    #[must_use]
    pub fn from_debit(debit: f64) -> Self {
        Self {
            debit: Some(debit),
            ..Self::default()
        }
    }
}

impl Payment {
    /// Create a payment.
    ///
    /// `options` is the open-ended creation map documented by the platform
    /// (confirmation strategy, commissions, inline debits/credits, ...).
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call, or with a serialization error when
    /// the response payload does not describe a payment.
    pub async fn create(client: &Payname, options: &Value) -> Result<Self> {
        client.post("/payment", options).await?.decode()
    }

    /// Fetch one payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, hash: &str) -> Result<Self> {
        client.get(&format!("/payment/{hash}")).await?.decode()
    }

    /// List payments. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname) -> Result<Vec<Self>> {
        client.get("/payment").await?.decode()
    }

    /// Push the local fields to the platform and reload from the response.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn update(&mut self, client: &Payname) -> Result<()> {
        let payload = serde_json::to_value(&*self)?;
        let path = format!("/payment/{}", self.hash);
        *self = client.put(&path, Some(&payload)).await?.decode()?;
        Ok(())
    }

    /// Delete the payment on the platform.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        client.delete(&format!("/payment/{}", self.hash)).await?;
        Ok(())
    }

    /// Confirm the payment, starting credit execution per the confirmation
    /// strategy. Returns the response data; re-fetch for fresh state.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn confirm(&self, client: &Payname) -> Result<Option<Value>> {
        let path = format!("/payment/{}/confirm", self.hash);
        Ok(client.put(&path, None).await?.into_data())
    }

    /// Start execution of all pending debits. Returns the response data;
    /// re-fetch for fresh state.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn exec_debits(&self, client: &Payname) -> Result<Option<Value>> {
        let path = format!("/payment/{}/exec_debits", self.hash);
        Ok(client.put(&path, None).await?.into_data())
    }

    /// Start execution of all pending credits. Returns the response data;
    /// re-fetch for fresh state.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn exec_credits(&self, client: &Payname) -> Result<Option<Value>> {
        let path = format!("/payment/{}/exec_credits", self.hash);
        Ok(client.put(&path, None).await?.into_data())
    }

    /// Check the payment balance (total debits vs total credits).
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn balance(&self, client: &Payname) -> Result<Option<Value>> {
        let path = format!("/payment/{}/balance", self.hash);
        Ok(client.put(&path, None).await?.into_data())
    }

    /// Simulate the amounts of a prospective payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn simulate(client: &Payname, request: &SimulateRequest) -> Result<Value> {
        let payload = serde_json::to_value(request)?;
        Ok(client
            .post("/payment/simulate", &payload)
            .await?
            .into_data()
            .unwrap_or(Value::Null))
    }

    /// Finalize a 3D-Secure check from the bank's callback fields.
    ///
    /// Only for direct payments; debit-level 3DS goes through
    /// [`Debit`](crate::resources::debit::Debit).
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn finalize_3ds(client: &Payname, pares: &str, md: &str) -> Result<Option<Value>> {
        let payload = serde_json::json!({ "PaRes": pares, "MD": md });
        Ok(client
            .post("/payment/finalize3ds", &payload)
            .await?
            .into_data())
    }

    /// Fetch one debit attached to this payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn debit(&self, client: &Payname, hash: &str) -> Result<Debit> {
        Debit::get(client, &self.hash, hash).await
    }

    /// Fetch all debits attached to this payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn fetch_debits(&self, client: &Payname) -> Result<Vec<Debit>> {
        Debit::list(client, &self.hash).await
    }

    /// Fetch one credit attached to this payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn credit(&self, client: &Payname, hash: &str) -> Result<Credit> {
        Credit::get(client, &self.hash, hash).await
    }

    /// Fetch all credits attached to this payment.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn fetch_credits(&self, client: &Payname) -> Result<Vec<Credit>> {
        Credit::list(client, &self.hash).await
    }

    /// True when any inline debit is waiting for 3D-Secure validation.
    #[must_use]
    pub fn is_waiting_3ds(&self) -> bool {
        self.debits.iter().any(Debit::is_waiting_3ds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_debits_and_credits_deserialize() {
        let payment: Payment = serde_json::from_value(json!({
            "hash": "pay_1",
            "order": "ord_9",
            "status": "W_DEBIT",
            "debit": [{"hash": "deb_1", "status": "W_EXEC"}],
            "credit": [{"hash": "cre_1", "status": "W_USER"}]
        }))
        .expect("payment should decode");
        assert_eq!(payment.debits.len(), 1);
        assert_eq!(payment.credits.len(), 1);
        assert_eq!(payment.debits[0].hash, "deb_1");
    }

    #[test]
    fn serializing_skips_inline_lists() {
        let payment: Payment = serde_json::from_value(json!({
            "hash": "pay_1",
            "debit": [{"hash": "deb_1"}]
        }))
        .expect("payment should decode");
        let value = serde_json::to_value(&payment).expect("payment should encode");
        assert!(value.get("debit").is_none());
        assert!(value.get("credit").is_none());
        assert_eq!(value["hash"], "pay_1");
    }

    #[test]
    fn waiting_3ds_delegates_to_debits() {
        let payment: Payment = serde_json::from_value(json!({
            "hash": "pay_1",
            "debit": [
                {"hash": "deb_1", "status": "W_EXEC"},
                {"hash": "deb_2", "status": "W_METHOD", "method_data": "{\"url\":\"x\"}"}
            ]
        }))
        .expect("payment should decode");
        assert!(payment.is_waiting_3ds());
    }

    #[test]
    fn simulate_request_serializes_set_fields_only() {
        let request = SimulateRequest::from_credit(100.0);
        let value = serde_json::to_value(&request).expect("request should encode");
        assert_eq!(value, json!({"credit": 100.0}));

        let request = SimulateRequest {
            nb_hours: Some(3.5),
            ..SimulateRequest::from_debit(120.0)
        };
        let value = serde_json::to_value(&request).expect("request should encode");
        assert_eq!(value, json!({"debit": 120.0, "nb_hours": 3.5}));
    }
}
