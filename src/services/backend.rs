use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::clipboard::{Clipboard, SystemClipboard};
use crate::config::{AppConfig, BackendKind};
use crate::repository::database::init_database;
use crate::repository::{
    ContactStore, IdentityProvider, LocalIdentityProvider, SqliteContactStore, SupabaseClient,
};

/// The external collaborators a session talks to.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn ContactStore>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.auth, &other.auth)
            && Arc::ptr_eq(&self.store, &other.store)
            && Arc::ptr_eq(&self.clipboard, &other.clipboard)
    }
}

impl Backend {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let backend = match config.backend {
            BackendKind::Supabase => {
                info!(url = %config.supabase_url, "Using hosted backend");
                let client = Arc::new(SupabaseClient::new(
                    &config.supabase_url,
                    &config.supabase_anon_key,
                    config.access_token.clone(),
                ));
                Self {
                    auth: client.clone(),
                    store: client,
                    clipboard: Arc::new(SystemClipboard),
                }
            }
            BackendKind::Sqlite => {
                info!(path = %config.database_path.display(), "Using local backend");
                let pool = init_database(&config.database_path.to_string_lossy()).await?;
                Self {
                    auth: Arc::new(LocalIdentityProvider::for_email(&config.local_user_email)),
                    store: Arc::new(SqliteContactStore::new(pool)),
                    clipboard: Arc::new(SystemClipboard),
                }
            }
        };

        Ok(backend)
    }
}
