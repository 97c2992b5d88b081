// Test helpers for integration testing

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::contact::{Contact, ContactFields};
use crate::domain::identity::Identity;
use crate::repository::mock::{InMemoryContactStore, ScriptedIdentityProvider};
use crate::services::clipboard::mock::RecordingClipboard;
use crate::services::{Backend, BookSettings, Bootstrap, ContactBook, RolodexError, SessionService};

/// A backend wired to in-memory collaborators, with handles kept for assertions.
pub struct TestContext {
    pub identity: Identity,
    pub store: InMemoryContactStore,
    pub auth: ScriptedIdentityProvider,
    pub clipboard: RecordingClipboard,
    pub backend: Backend,
}

impl TestContext {
    /// Signed in as jane@example.com with an empty contact list.
    pub fn new_for_test() -> Self {
        let identity = Identity::new(Uuid::new_v4(), "jane@example.com");
        Self::build(
            identity.clone(),
            ScriptedIdentityProvider::signed_in(identity),
            InMemoryContactStore::new(),
            RecordingClipboard::new(),
        )
    }

    pub fn signed_out() -> Self {
        Self::build(
            Identity::new(Uuid::new_v4(), ""),
            ScriptedIdentityProvider::signed_out(),
            InMemoryContactStore::new(),
            RecordingClipboard::new(),
        )
    }

    /// Seeds the store with contacts owned by the signed-in identity, oldest first.
    pub fn with_contacts(self, entries: &[(&str, &str, &str)]) -> Self {
        let base = Utc::now() - ChronoDuration::minutes(entries.len() as i64);
        let contacts = entries
            .iter()
            .enumerate()
            .map(|(i, (name, phone, address))| {
                let mut contact =
                    Contact::new(self.identity.id, ContactFields::new(*name, *phone, *address));
                contact.created_at = base + ChronoDuration::minutes(i as i64);
                contact
            })
            .collect();
        let store = self.store.clone().with_contacts(contacts);
        Self::build(self.identity, self.auth, store, self.clipboard)
    }

    pub fn with_failing_clipboard(self) -> Self {
        Self::build(
            self.identity,
            self.auth,
            self.store,
            RecordingClipboard::failing(),
        )
    }

    pub fn with_failing_sign_out(self) -> Self {
        let auth = self.auth.clone().with_failing_sign_out();
        Self::build(self.identity, auth, self.store, self.clipboard)
    }

    /// Runs the dashboard bootstrap and opens a book with default timings.
    pub async fn open_book(&self) -> Result<ContactBook> {
        self.open_book_with(BookSettings::default()).await
    }

    pub async fn open_book_with(&self, settings: BookSettings) -> Result<ContactBook> {
        match SessionService::new(&self.backend).bootstrap().await {
            Bootstrap::Ready { identity, contacts } => {
                ContactBook::new(identity, contacts, &self.backend, settings)
            }
            Bootstrap::SignedOut => Err(RolodexError::NotSignedIn.into()),
        }
    }

    fn build(
        identity: Identity,
        auth: ScriptedIdentityProvider,
        store: InMemoryContactStore,
        clipboard: RecordingClipboard,
    ) -> Self {
        let backend = Backend {
            auth: Arc::new(auth.clone()),
            store: Arc::new(store.clone()),
            clipboard: Arc::new(clipboard.clone()),
        };
        Self {
            identity,
            store,
            auth,
            clipboard,
            backend,
        }
    }
}
