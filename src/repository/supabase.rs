use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{ContactStore, IdentityProvider};
use crate::domain::contact::{Contact, ContactFields};
use crate::domain::identity::Identity;

const CONTACTS_TABLE: &str = "contacts";

/// Client for a hosted Supabase project: GoTrue for auth, PostgREST for rows.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
    open_browser: bool,
}

#[derive(Serialize)]
struct InsertRow<'a> {
    user_id: Uuid,
    name: &'a str,
    phone: &'a str,
    address: &'a str,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, access_token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(access_token),
            open_browser: true,
        }
    }

    /// Keeps `sign_in_with_oauth` from launching a browser (headless runs and tests).
    pub fn without_browser(mut self) -> Self {
        self.open_browser = false;
        self
    }

    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write() = token;
    }

    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/auth/v1/authorize", self.base_url),
            &[("provider", provider), ("redirect_to", redirect_to)],
        )
        .context("Invalid Supabase URL")
    }

    fn table_url(&self, filters: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rest/v1/{}", self.base_url, CONTACTS_TABLE))
            .context("Invalid Supabase URL")?;
        url.query_pairs_mut()
            .extend_pairs(filters.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .access_token
            .read()
            .clone()
            .unwrap_or_else(|| self.anon_key.clone());
        req.header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn current_identity(&self) -> Option<Identity> {
        if self.access_token.read().is_none() {
            debug!("No access token, treating session as signed out");
            return None;
        }

        let url = format!("{}/auth/v1/user", self.base_url);
        let response = match self.with_auth(self.http.get(&url)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Could not reach identity provider");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "Identity provider rejected session");
            return None;
        }

        response.json::<Identity>().await.ok()
    }

    async fn sign_in_with_oauth(&self, provider: &str, redirect_to: &str) -> Result<String> {
        let url = self.authorize_url(provider, redirect_to)?;
        info!(provider = %provider, "Starting OAuth sign-in");
        if self.open_browser {
            open_url(url.as_str())?;
        }
        Ok(url.to_string())
    }

    async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let result = self
            .with_auth(self.http.post(&url))
            .send()
            .await
            .and_then(|r| r.error_for_status());
        self.set_access_token(None);
        result.context("Sign-out request failed")?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for SupabaseClient {
    async fn list(&self, owner: Uuid) -> Result<Vec<Contact>> {
        let url = self.table_url(&[
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", owner)),
            ("order", "created_at.asc".to_string()),
        ])?;

        let contacts = self
            .with_auth(self.http.get(url))
            .send()
            .await?
            .error_for_status()
            .context("Failed to list contacts")?
            .json::<Vec<Contact>>()
            .await?;

        Ok(contacts)
    }

    async fn insert(&self, owner: Uuid, fields: &ContactFields) -> Result<Contact> {
        let url = self.table_url(&[("select", "*".to_string())])?;
        let row = InsertRow {
            user_id: owner,
            name: &fields.name,
            phone: &fields.phone,
            address: &fields.address,
        };

        let mut created = self
            .with_auth(self.http.post(url))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?
            .error_for_status()
            .context("Failed to insert contact")?
            .json::<Vec<Contact>>()
            .await?;

        created
            .pop()
            .ok_or_else(|| anyhow!("Insert returned no rows"))
    }

    async fn update(&self, id: Uuid, fields: &ContactFields) -> Result<()> {
        let url = self.table_url(&[("id", format!("eq.{}", id))])?;

        self.with_auth(self.http.patch(url))
            .json(fields)
            .send()
            .await?
            .error_for_status()
            .context("Failed to update contact")?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let url = self.table_url(&[("id", format!("eq.{}", id))])?;

        self.with_auth(self.http.delete(url))
            .send()
            .await?
            .error_for_status()
            .context("Failed to delete contact")?;

        Ok(())
    }
}

/// Open a URL in the default browser
fn open_url(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = std::process::Command::new("xdg-open");

    cmd.arg(url)
        .spawn()
        .with_context(|| format!("Could not open browser for {}", url))?;
    Ok(())
}
