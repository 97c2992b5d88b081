pub mod contact_repository;
pub mod database;
pub mod local_identity;
pub mod mock;
pub mod supabase;

use crate::domain::contact::{Contact, ContactFields};
use crate::domain::identity::Identity;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub use contact_repository::SqliteContactStore;
pub use local_identity::LocalIdentityProvider;
pub use supabase::SupabaseClient;

/// Remote table of contacts. Every call is a single round-trip; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All rows owned by `owner`, oldest first.
    async fn list(&self, owner: Uuid) -> Result<Vec<Contact>>;

    /// Inserts a row and returns the canonical record with its assigned id.
    async fn insert(&self, owner: Uuid, fields: &ContactFields) -> Result<Contact>;

    async fn update(&self, id: Uuid, fields: &ContactFields) -> Result<()>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Third-party sign-in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `None` covers both "signed out" and "could not tell".
    async fn current_identity(&self) -> Option<Identity>;

    /// Starts the provider's OAuth flow and returns the URL the user was sent to.
    async fn sign_in_with_oauth(&self, provider: &str, redirect_to: &str) -> Result<String>;

    async fn sign_out(&self) -> Result<()>;
}
