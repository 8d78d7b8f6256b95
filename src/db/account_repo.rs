// src/db/account_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::account::{Account, AccountPayload},
};

const COLUMNS: &str = "id, account_name, account_owner, account_type, industry, phone, email, \
    website, billing_address, annual_revenue, description, created_at, updated_at";

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(&format!(
            "SELECT {COLUMNS} FROM accounts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn create(&self, input: &AccountPayload) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            r#"
            INSERT INTO accounts (
                account_name, account_owner, account_type, industry, phone, email,
                website, billing_address, annual_revenue, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.account_name)
        .bind(&input.account_owner)
        .bind(input.account_type)
        .bind(&input.industry)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.website)
        .bind(&input.billing_address)
        .bind(input.annual_revenue)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn update(&self, id: Uuid, input: &AccountPayload) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            r#"
            UPDATE accounts SET
                account_name = $2, account_owner = $3, account_type = $4, industry = $5,
                phone = $6, email = $7, website = $8, billing_address = $9,
                annual_revenue = $10, description = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.account_name)
        .bind(&input.account_owner)
        .bind(input.account_type)
        .bind(&input.industry)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.website)
        .bind(&input.billing_address)
        .bind(input.annual_revenue)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
