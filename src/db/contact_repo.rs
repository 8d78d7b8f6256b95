// src/db/contact_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::contact::{Contact, ContactPayload},
};

const COLUMNS: &str = "id, first_name, last_name, email, phone, mobile, title, account_name, \
    lead_source, address, description, created_at, updated_at";

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    pub async fn create(&self, input: &ContactPayload) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            INSERT INTO contacts (
                first_name, last_name, email, phone, mobile, title,
                account_name, lead_source, address, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.mobile)
        .bind(&input.title)
        .bind(&input.account_name)
        .bind(&input.lead_source)
        .bind(&input.address)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    pub async fn update(&self, id: Uuid, input: &ContactPayload) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            UPDATE contacts SET
                first_name = $2, last_name = $3, email = $4, phone = $5, mobile = $6,
                title = $7, account_name = $8, lead_source = $9, address = $10,
                description = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.mobile)
        .bind(&input.title)
        .bind(&input.account_name)
        .bind(&input.lead_source)
        .bind(&input.address)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
