use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

impl Identity {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Single-letter badge shown next to the account.
    pub fn badge(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}
