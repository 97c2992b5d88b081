use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

use super::ContactStore;
use crate::domain::contact::{Contact, ContactFields};

/// Self-hosted contacts table backed by SQLite.
#[derive(Clone)]
pub struct SqliteContactStore {
    pool: Arc<SqlitePool>,
}

impl SqliteContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, phone, address, created_at
            FROM contacts
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|row| contact_from_row(&row)).transpose()
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn list(&self, owner: Uuid) -> Result<Vec<Contact>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, phone, address, created_at
            FROM contacts
            WHERE user_id = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(owner.to_string())
        .fetch_all(&*self.pool)
        .await
        .context("Failed to list contacts")?;

        rows.iter().map(contact_from_row).collect()
    }

    async fn insert(&self, owner: Uuid, fields: &ContactFields) -> Result<Contact> {
        let contact = Contact::new(owner, fields.clone());

        sqlx::query(
            r#"
            INSERT INTO contacts (id, user_id, name, phone, address, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contact.id.to_string())
        .bind(owner.to_string())
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(&contact.address)
        // Fixed-width timestamps keep lexical order equal to time order
        .bind(contact.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&*self.pool)
        .await
        .context("Failed to insert contact")?;

        Ok(contact)
    }

    async fn update(&self, id: Uuid, fields: &ContactFields) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET name = ?, phone = ?, address = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(&fields.address)
        .bind(id.to_string())
        .execute(&*self.pool)
        .await
        .context("Failed to update contact")?;

        if result.rows_affected() == 0 {
            bail!("Contact not found: {}", id);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .context("Failed to delete contact")?;

        if result.rows_affected() == 0 {
            bail!("Contact not found: {}", id);
        }
        Ok(())
    }
}

fn contact_from_row(row: &SqliteRow) -> Result<Contact> {
    Ok(Contact {
        id: Uuid::parse_str(&row.get::<String, _>("id"))?,
        user_id: Uuid::parse_str(&row.get::<String, _>("user_id"))?,
        name: row.get("name"),
        phone: row.get("phone"),
        address: row.get("address"),
        created_at: DateTime::parse_from_rfc3339(&row.get::<String, _>("created_at"))?
            .with_timezone(&Utc),
    })
}
