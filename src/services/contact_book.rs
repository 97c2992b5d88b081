use anyhow::{Context, Result};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::backend::Backend;
use super::book_view::{BookView, ContactStats, Draft};
use super::clipboard::Clipboard;
use super::error_handling::{LogHelper, RolodexError};
use super::feedback::FeedbackChannel;
use super::search::{filter_contacts, DebouncedQuery};
use super::session::Navigation;
use super::timer::SingleShotTimer;
use super::validation::InputValidator;
use crate::domain::contact::{Contact, ContactFields, Field};
use crate::domain::identity::Identity;
use crate::domain::notification::Notification;
use crate::repository::{ContactStore, IdentityProvider};

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSettings {
    pub toast_duration: Duration,
    pub search_debounce: Duration,
}

impl Default for BookSettings {
    fn default() -> Self {
        Self {
            toast_duration: TOAST_DURATION,
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

/// Result of a mutating operation as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote store acknowledged and the local list was updated.
    Applied,
    /// The remote store failed; the local list is unchanged.
    Rejected,
    /// A precondition failed; nothing was sent.
    Skipped,
}

#[derive(Debug, Default)]
struct BookState {
    contacts: Vec<Contact>,
    adding: bool,
    new_draft: Draft,
    edit_draft: Option<Draft>,
    deleting: HashSet<Uuid>,
    signing_out: bool,
    search: DebouncedQuery,
    feedback: FeedbackChannel,
}

struct Inner {
    identity: Identity,
    store: Arc<dyn ContactStore>,
    auth: Arc<dyn IdentityProvider>,
    clipboard: Arc<dyn Clipboard>,
    settings: BookSettings,
    state: Mutex<BookState>,
    toast_timer: SingleShotTimer,
    search_timer: SingleShotTimer,
    revision: watch::Sender<u64>,
}

/// Dashboard state for one signed-in session: the contact list mirrored from the
/// remote store, the two form drafts, search and the toast slot.
///
/// Local state changes only after the remote store answers. The state lock is
/// never held across an await.
#[derive(Clone)]
pub struct ContactBook {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ContactBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactBook")
            .field("identity", &self.inner.identity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ContactBook {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ContactBook {
    /// Must be called from within a Tokio runtime; timers are spawned on it.
    pub fn new(
        identity: Identity,
        contacts: Vec<Contact>,
        backend: &Backend,
        settings: BookSettings,
    ) -> Result<Self> {
        let runtime = Handle::try_current().context("Contact book needs a Tokio runtime")?;
        let (revision, _) = watch::channel(0);

        info!(user_id = %identity.id, contacts = contacts.len(), "Contact book ready");

        Ok(Self {
            inner: Arc::new(Inner {
                identity,
                store: backend.store.clone(),
                auth: backend.auth.clone(),
                clipboard: backend.clipboard.clone(),
                settings,
                state: Mutex::new(BookState {
                    contacts,
                    ..BookState::default()
                }),
                toast_timer: SingleShotTimer::new(runtime.clone()),
                search_timer: SingleShotTimer::new(runtime),
                revision,
            }),
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.inner.identity
    }

    /// Receiver that ticks after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    pub fn view(&self) -> BookView {
        let state = self.lock();
        let visible = filter_contacts(&state.contacts, state.search.applied())
            .into_iter()
            .cloned()
            .collect();
        BookView {
            identity: self.inner.identity.clone(),
            contacts: state.contacts.clone(),
            visible,
            stats: ContactStats::from_contacts(&state.contacts),
            adding: state.adding,
            new_draft: state.new_draft.clone(),
            edit_draft: state.edit_draft.clone(),
            deleting: state.deleting.clone(),
            signing_out: state.signing_out,
            search_raw: state.search.raw().to_string(),
            search: state.search.applied().to_string(),
            toast: state.feedback.current().cloned(),
        }
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.lock().contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().contacts.is_empty()
    }

    pub fn stats(&self) -> ContactStats {
        ContactStats::from_contacts(&self.lock().contacts)
    }

    /// Contacts matching the applied (debounced) query.
    pub fn visible(&self) -> Vec<Contact> {
        let state = self.lock();
        filter_contacts(&state.contacts, state.search.applied())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.lock().feedback.current().cloned()
    }

    pub fn is_deleting(&self, id: Uuid) -> bool {
        self.lock().deleting.contains(&id)
    }

    // Contact store

    /// Inserts a contact for the signed-in identity and appends it on success.
    /// Either way the new-contact form is reset and closed.
    pub async fn create_contact(&self, fields: ContactFields) -> MutationOutcome {
        let fields = match InputValidator::validate_fields(&fields) {
            Ok(fields) => fields,
            Err(_) => {
                LogHelper::log_skipped("create", "blank name");
                return MutationOutcome::Skipped;
            }
        };
        self.mutate(|state| state.new_draft.saving = true);
        self.run_create(fields).await
    }

    /// Sends an update for `id` and replaces that element in place on success.
    pub async fn update_contact(&self, id: Uuid, fields: ContactFields) -> MutationOutcome {
        let fields = match InputValidator::validate_fields(&fields) {
            Ok(fields) => fields,
            Err(_) => {
                LogHelper::log_skipped("update", "blank name");
                return MutationOutcome::Skipped;
            }
        };
        {
            let mut state = self.lock();
            if !state.contacts.iter().any(|c| c.id == id) {
                debug!(error = %RolodexError::ContactNotFound { id }, "Update skipped");
                return MutationOutcome::Skipped;
            }
            if let Some(draft) = state.edit_draft.as_mut().filter(|d| d.target == Some(id)) {
                draft.saving = true;
            }
        }
        self.notify();
        self.run_update(id, fields).await
    }

    /// Deletes `id` remotely, flagging only that row as busy while in flight.
    pub async fn delete_contact(&self, id: Uuid) -> MutationOutcome {
        let name = {
            let mut state = self.lock();
            state.deleting.insert(id);
            state
                .contacts
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Contact".to_string())
        };
        self.notify();

        let result = self.inner.store.delete(id).await;

        let outcome = {
            let mut state = self.lock();
            state.deleting.remove(&id);
            match result {
                Ok(()) => {
                    state.contacts.retain(|c| c.id != id);
                    self.show_toast(&mut state, Notification::success(format!("{} removed", name)));
                    MutationOutcome::Applied
                }
                Err(e) => {
                    self.report_failure(&mut state, "delete", e, "Failed to delete");
                    MutationOutcome::Rejected
                }
            }
        };
        LogHelper::log_contact_operation("delete", Some(id), outcome == MutationOutcome::Applied);
        self.notify();
        outcome
    }

    /// Copies `text` to the system clipboard. Clipboard failures are not surfaced.
    pub fn copy(&self, text: &str) {
        if let Err(e) = self.inner.clipboard.write_text(text) {
            LogHelper::log_ignored_failure("copy", &e);
        }
        let mut state = self.lock();
        self.show_toast(&mut state, Notification::success("Copied!"));
        drop(state);
        self.notify();
    }

    /// Signs out and always routes to the sign-in screen, whatever the provider says.
    pub async fn sign_out(&self) -> Navigation {
        self.mutate(|state| state.signing_out = true);

        if let Err(e) = self.inner.auth.sign_out().await {
            LogHelper::log_ignored_failure("sign_out", &e);
        }

        let mut state = self.lock();
        self.show_toast(&mut state, Notification::success("Signed out"));
        drop(state);
        self.notify();
        Navigation::SignIn
    }

    // Form controllers

    /// The add button: toggles the new-contact form and closes any edit in progress.
    pub fn toggle_adding(&self) {
        self.mutate(|state| {
            state.adding = !state.adding;
            state.edit_draft = None;
        });
    }

    pub fn open_new(&self) {
        self.mutate(|state| {
            state.adding = true;
            state.edit_draft = None;
        });
    }

    pub fn cancel_new(&self) {
        self.mutate(close_new_form);
    }

    pub fn set_new_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.mutate(|state| state.new_draft.fields.set(field, value));
    }

    /// Saves the new-contact draft. No-op while the name is blank or a save is in flight.
    pub async fn save_new(&self) -> MutationOutcome {
        let fields = {
            let mut state = self.lock();
            if !state.new_draft.can_save() {
                LogHelper::log_skipped("create", "draft not saveable");
                return MutationOutcome::Skipped;
            }
            state.new_draft.saving = true;
            state.new_draft.fields.trimmed()
        };
        self.notify();
        self.run_create(fields).await
    }

    /// Opens the edit form for `id`, closing the new-contact form.
    pub fn start_edit(&self, id: Uuid) -> bool {
        let mut state = self.lock();
        let Some(draft) = state.contacts.iter().find(|c| c.id == id).map(Draft::for_contact) else {
            return false;
        };
        state.edit_draft = Some(draft);
        close_new_form(&mut state);
        drop(state);
        self.notify();
        true
    }

    pub fn set_edit_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.mutate(|state| {
            if let Some(draft) = state.edit_draft.as_mut() {
                draft.fields.set(field, value);
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.mutate(|state| state.edit_draft = None);
    }

    /// Saves the active edit draft. No-op while the name is blank or a save is in flight.
    pub async fn save_edit(&self) -> MutationOutcome {
        let (id, fields) = {
            let mut state = self.lock();
            let Some((id, can_save)) = state
                .edit_draft
                .as_ref()
                .and_then(|d| d.target.map(|id| (id, d.can_save())))
            else {
                return MutationOutcome::Skipped;
            };
            if !can_save {
                LogHelper::log_skipped("update", "draft not saveable");
                return MutationOutcome::Skipped;
            }
            if !state.contacts.iter().any(|c| c.id == id) {
                // The row went away while it was being edited
                state.edit_draft = None;
                drop(state);
                self.notify();
                return MutationOutcome::Skipped;
            }
            let Some(draft) = state.edit_draft.as_mut() else {
                return MutationOutcome::Skipped;
            };
            draft.saving = true;
            (id, draft.fields.trimmed())
        };
        self.notify();
        self.run_update(id, fields).await
    }

    // Search

    /// Records the typed query; the filter follows once typing pauses.
    pub fn set_search(&self, raw: impl Into<String>) {
        let generation = self.mutate(|state| state.search.input(raw));
        let book = self.downgrade();
        self.inner
            .search_timer
            .restart(self.inner.settings.search_debounce, move || {
                if let Some(book) = book.upgrade() {
                    let settled = book.lock().search.settle(generation);
                    if settled {
                        book.notify();
                    }
                }
            });
    }

    pub fn clear_search(&self) {
        self.set_search("");
    }

    // Internals

    async fn run_create(&self, fields: ContactFields) -> MutationOutcome {
        let result = self.inner.store.insert(self.inner.identity.id, &fields).await;

        let (outcome, id) = {
            let mut state = self.lock();
            let outcome = match result {
                Ok(contact) => {
                    let id = contact.id;
                    let message = format!("{} added!", contact.name);
                    state.contacts.push(contact);
                    self.show_toast(&mut state, Notification::success(message));
                    (MutationOutcome::Applied, Some(id))
                }
                Err(e) => {
                    self.report_failure(&mut state, "create", e, "Failed to save contact");
                    (MutationOutcome::Rejected, None)
                }
            };
            state.new_draft = Draft::default();
            state.adding = false;
            outcome
        };
        LogHelper::log_contact_operation("create", id, outcome == MutationOutcome::Applied);
        self.notify();
        outcome
    }

    async fn run_update(&self, id: Uuid, fields: ContactFields) -> MutationOutcome {
        let result = self.inner.store.update(id, &fields).await;

        let outcome = {
            let mut state = self.lock();
            let outcome = match result {
                Ok(()) => {
                    if let Some(contact) = state.contacts.iter_mut().find(|c| c.id == id) {
                        contact.apply(fields);
                    }
                    self.show_toast(&mut state, Notification::success("Contact updated!"));
                    MutationOutcome::Applied
                }
                Err(e) => {
                    self.report_failure(&mut state, "update", e, "Failed to update");
                    MutationOutcome::Rejected
                }
            };
            // Failed saves also leave edit mode
            if state
                .edit_draft
                .as_ref()
                .is_some_and(|d| d.target == Some(id))
            {
                state.edit_draft = None;
            }
            outcome
        };
        LogHelper::log_contact_operation("update", Some(id), outcome == MutationOutcome::Applied);
        self.notify();
        outcome
    }

    fn report_failure(
        &self,
        state: &mut BookState,
        operation: &str,
        error: anyhow::Error,
        message: &str,
    ) {
        LogHelper::log_error_with_context(message, &RolodexError::remote(operation, error));
        self.show_toast(state, Notification::error(message));
    }

    fn show_toast(&self, state: &mut BookState, notification: Notification) {
        let generation = state.feedback.show(notification);
        let book = self.downgrade();
        self.inner
            .toast_timer
            .restart(self.inner.settings.toast_duration, move || {
                if let Some(book) = book.upgrade() {
                    let expired = book.lock().feedback.expire(generation);
                    if expired {
                        book.notify();
                    }
                }
            });
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut BookState) -> R) -> R {
        let result = f(&mut self.lock());
        self.notify();
        result
    }

    fn lock(&self) -> MutexGuard<'_, BookState> {
        self.inner.state.lock()
    }

    fn notify(&self) {
        self.inner.revision.send_modify(|revision| *revision += 1);
    }

    fn downgrade(&self) -> WeakBook {
        WeakBook(Arc::downgrade(&self.inner))
    }
}

fn close_new_form(state: &mut BookState) {
    state.adding = false;
    state.new_draft.fields.clear();
}

struct WeakBook(Weak<Inner>);

impl WeakBook {
    fn upgrade(&self) -> Option<ContactBook> {
        self.0.upgrade().map(|inner| ContactBook { inner })
    }
}
