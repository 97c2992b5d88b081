use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use super::IdentityProvider;
use crate::domain::identity::Identity;

/// Identity for the self-hosted backend: a single configured local profile.
pub struct LocalIdentityProvider {
    identity: RwLock<Option<Identity>>,
}

impl LocalIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity: RwLock::new(identity),
        }
    }

    /// Profile ids are derived from the email so the same profile keeps its rows.
    pub fn for_email(email: &str) -> Self {
        let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("mailto:{}", email).as_bytes());
        Self::new(Some(Identity::new(id, email)))
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn current_identity(&self) -> Option<Identity> {
        self.identity.read().clone()
    }

    async fn sign_in_with_oauth(&self, provider: &str, redirect_to: &str) -> Result<String> {
        info!(provider = %provider, "Local backend has no OAuth provider, redirecting directly");
        Ok(redirect_to.to_string())
    }

    async fn sign_out(&self) -> Result<()> {
        *self.identity.write() = None;
        Ok(())
    }
}
