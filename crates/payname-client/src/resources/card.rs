//! Payment cards.
//!
//! Card data is tokenized by the platform; the SDK never stores the
//! sensitive fields beyond the one tokenization request.

use serde::{Deserialize, Serialize};

use crate::client::Payname;
use crate::error::Result;

/// A tokenized card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Card token, public id.
    pub hash: String,

    /// Masked card number.
    pub number: Option<String>,

    /// Email of the owner.
    pub email: Option<String>,

    /// True for a production card, false for a test one.
    pub is_prod: Option<bool>,

    /// Card scheme.
    #[serde(rename = "type")]
    pub card_type: Option<String>,

    /// Hash of the owning user.
    pub user: Option<String>,

    /// Expiry year.
    pub expiry_year: Option<i32>,

    /// Expiry month.
    pub expiry_month: Option<u32>,
}

/// Input of the card tokenization endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CardRequest {
    /// Primary account number.
    pub number: String,

    /// Expiry date.
    pub expiry: CardExpiry,

    /// Security code (CVV, CVC, ...).
    pub security: String,

    /// Email or hash of the owner.
    pub user: String,
}

/// Expiry date of a card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CardExpiry {
    /// Four-digit year.
    pub year: i32,

    /// Month, 1 to 12.
    pub month: u32,
}

impl Card {
    /// Tokenize a card. The platform keeps the sensitive data and hands
    /// back a reusable token.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, request: &CardRequest) -> Result<Self> {
        let payload = serde_json::to_value(request)?;
        client.post("/token", &payload).await?.decode()
    }

    /// Fetch one card by token.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, hash: &str) -> Result<Self> {
        client.get(&format!("/card/{hash}")).await?.decode()
    }

    /// List the cards of a user. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname, user_hash: &str) -> Result<Vec<Self>> {
        let path = format!("/user/{user_hash}/card");
        let mut cards: Vec<Self> = client.get(&path).await?.decode()?;
        for card in &mut cards {
            card.user = Some(user_hash.to_string());
        }
        Ok(cards)
    }

    /// Delete the card on the platform.
    ///
    /// A card can only be created and deleted; the platform forbids updates.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        client.delete(&format!("/card/{}", self.hash)).await?;
        Ok(())
    }
}
