use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use super::backend::Backend;
use crate::domain::contact::Contact;
use crate::domain::identity::Identity;
use crate::repository::{ContactStore, IdentityProvider};

/// Where the app should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SignIn,
    Dashboard,
}

/// Outcome of loading the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    SignedOut,
    Ready {
        identity: Identity,
        contacts: Vec<Contact>,
    },
}

impl Bootstrap {
    pub fn navigation(&self) -> Navigation {
        match self {
            Bootstrap::SignedOut => Navigation::SignIn,
            Bootstrap::Ready { .. } => Navigation::Dashboard,
        }
    }
}

pub struct SessionService {
    auth: Arc<dyn IdentityProvider>,
    store: Arc<dyn ContactStore>,
}

impl SessionService {
    pub fn new(backend: &Backend) -> Self {
        Self {
            auth: backend.auth.clone(),
            store: backend.store.clone(),
        }
    }

    /// Looks up the identity once and, if present, loads that user's contacts.
    /// A failed fetch yields an empty list rather than an error.
    pub async fn bootstrap(&self) -> Bootstrap {
        let Some(identity) = self.auth.current_identity().await else {
            info!("No identity, redirecting to sign-in");
            return Bootstrap::SignedOut;
        };

        let contacts = match self.store.list(identity.id).await {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(user_id = %identity.id, error = %e, "Contact fetch failed, starting empty");
                Vec::new()
            }
        };

        info!(user_id = %identity.id, count = contacts.len(), "Session loaded");
        Bootstrap::Ready { identity, contacts }
    }

    /// Starts the OAuth flow; the caller does not wait for it to finish.
    pub async fn start_sign_in(&self, provider: &str, redirect_to: &str) -> Result<String> {
        self.auth.sign_in_with_oauth(provider, redirect_to).await
    }
}
