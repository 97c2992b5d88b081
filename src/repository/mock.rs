//! In-memory collaborators for tests and demos.
use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

use super::{ContactStore, IdentityProvider};
use crate::domain::contact::{Contact, ContactFields};
use crate::domain::identity::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    List,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List { owner: Uuid },
    Insert { owner: Uuid, fields: ContactFields },
    Update { id: Uuid, fields: ContactFields },
    Delete { id: Uuid },
}

impl StoreCall {
    pub fn operation(&self) -> StoreOperation {
        match self {
            StoreCall::List { .. } => StoreOperation::List,
            StoreCall::Insert { .. } => StoreOperation::Insert,
            StoreCall::Update { .. } => StoreOperation::Update,
            StoreCall::Delete { .. } => StoreOperation::Delete,
        }
    }
}

#[derive(Default)]
struct StoreState {
    rows: Vec<Contact>,
    failing: HashMap<StoreOperation, usize>,
    failing_always: HashMap<StoreOperation, bool>,
    delays: HashMap<StoreOperation, VecDeque<Duration>>,
    default_delay: Duration,
    calls: Vec<StoreCall>,
}

/// Contacts table kept in memory, with failure injection and artificial latency.
#[derive(Clone, Default)]
pub struct InMemoryContactStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(self, contacts: Vec<Contact>) -> Self {
        self.state.lock().rows = contacts;
        self
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        self.state.lock().default_delay = delay;
        self
    }

    /// Makes the next `count` calls of `operation` fail.
    pub fn fail_next(&self, operation: StoreOperation, count: usize) {
        *self.state.lock().failing.entry(operation).or_insert(0) += count;
    }

    pub fn set_failing(&self, operation: StoreOperation, failing: bool) {
        self.state.lock().failing_always.insert(operation, failing);
    }

    /// Latency for the next call of `operation`; queued delays are consumed in call order.
    pub fn queue_delay(&self, operation: StoreOperation, delay: Duration) {
        self.state
            .lock()
            .delays
            .entry(operation)
            .or_default()
            .push_back(delay);
    }

    pub fn rows(&self) -> Vec<Contact> {
        self.state.lock().rows.clone()
    }

    pub fn get_call_history(&self) -> Vec<StoreCall> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self, operation: StoreOperation) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    /// Records the call; returns the latency to simulate and whether the call fails.
    fn begin(&self, call: StoreCall) -> (Duration, bool) {
        let operation = call.operation();
        let mut state = self.state.lock();
        state.calls.push(call);

        let default_delay = state.default_delay;
        let delay = state
            .delays
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
            .unwrap_or(default_delay);

        let mut fail = state.failing_always.get(&operation).copied().unwrap_or(false);
        if let Some(remaining) = state.failing.get_mut(&operation) {
            if *remaining > 0 {
                *remaining -= 1;
                fail = true;
            }
        }
        (delay, fail)
    }

    async fn simulate(&self, call: StoreCall) -> Result<()> {
        let operation = call.operation();
        let (delay, fail) = self.begin(call);
        if !delay.is_zero() {
            sleep(delay).await;
        }
        if fail {
            bail!("Simulated {:?} failure", operation);
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self, owner: Uuid) -> Result<Vec<Contact>> {
        self.simulate(StoreCall::List { owner }).await?;
        let mut rows: Vec<Contact> = self
            .state
            .lock()
            .rows
            .iter()
            .filter(|c| c.user_id == owner)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.created_at);
        Ok(rows)
    }

    async fn insert(&self, owner: Uuid, fields: &ContactFields) -> Result<Contact> {
        self.simulate(StoreCall::Insert {
            owner,
            fields: fields.clone(),
        })
        .await?;
        let contact = Contact::new(owner, fields.clone());
        self.state.lock().rows.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: Uuid, fields: &ContactFields) -> Result<()> {
        self.simulate(StoreCall::Update {
            id,
            fields: fields.clone(),
        })
        .await?;
        let mut state = self.state.lock();
        match state.rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                row.apply(fields.clone());
                Ok(())
            }
            None => bail!("Contact not found: {}", id),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.simulate(StoreCall::Delete { id }).await?;
        self.state.lock().rows.retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct IdentityState {
    identity: Option<Identity>,
    sign_out_fails: bool,
    lookups: usize,
    sign_ins: Vec<(String, String)>,
    sign_outs: usize,
}

/// Identity provider with a fixed, swappable session.
#[derive(Clone, Default)]
pub struct ScriptedIdentityProvider {
    state: Arc<Mutex<IdentityState>>,
}

impl ScriptedIdentityProvider {
    pub fn signed_in(identity: Identity) -> Self {
        let provider = Self::default();
        provider.state.lock().identity = Some(identity);
        provider
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_failing_sign_out(self) -> Self {
        self.state.lock().sign_out_fails = true;
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.state.lock().lookups
    }

    pub fn sign_out_count(&self) -> usize {
        self.state.lock().sign_outs
    }

    pub fn sign_in_requests(&self) -> Vec<(String, String)> {
        self.state.lock().sign_ins.clone()
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    async fn current_identity(&self) -> Option<Identity> {
        let mut state = self.state.lock();
        state.lookups += 1;
        state.identity.clone()
    }

    async fn sign_in_with_oauth(&self, provider: &str, redirect_to: &str) -> Result<String> {
        self.state
            .lock()
            .sign_ins
            .push((provider.to_string(), redirect_to.to_string()));
        Ok(format!("mock://authorize?provider={}", provider))
    }

    async fn sign_out(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.sign_outs += 1;
        if state.sign_out_fails {
            bail!("Simulated sign-out failure");
        }
        state.identity = None;
        Ok(())
    }
}
