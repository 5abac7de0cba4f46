//! User identity documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Payname;
use crate::error::Result;

/// A document uploaded for a user's validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Doc {
    /// Document hash, public id.
    pub hash: String,

    /// Document type.
    #[serde(rename = "type")]
    pub doc_type: Option<String>,

    /// File content, base64-encoded.
    pub file: Option<String>,

    /// Parent user hash.
    pub user: String,

    /// Validation status of the document.
    pub status: Option<String>,
}

impl Doc {
    /// Upload a document for a user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn create(client: &Payname, user_hash: &str, options: &Value) -> Result<Self> {
        let path = format!("/user/{user_hash}/doc");
        let mut doc: Self = client.post(&path, options).await?.decode()?;
        doc.user = user_hash.to_string();
        Ok(doc)
    }

    /// Fetch one document of a user.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn get(client: &Payname, user_hash: &str, hash: &str) -> Result<Self> {
        let path = format!("/user/{user_hash}/doc/{hash}");
        let mut doc: Self = client.get(&path).await?.decode()?;
        doc.user = user_hash.to_string();
        Ok(doc)
    }

    /// List the documents of a user. Pagination is not implemented upstream.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn list(client: &Payname, user_hash: &str) -> Result<Vec<Self>> {
        let path = format!("/user/{user_hash}/doc");
        let mut docs: Vec<Self> = client.get(&path).await?.decode()?;
        for doc in &mut docs {
            doc.user = user_hash.to_string();
        }
        Ok(docs)
    }

    /// Delete the document on the platform. Documents cannot be updated.
    ///
    /// # Errors
    ///
    /// Fails like any dispatched call.
    pub async fn delete(self, client: &Payname) -> Result<()> {
        let path = format!("/user/{}/doc/{}", self.user, self.hash);
        client.delete(&path).await?;
        Ok(())
    }
}
