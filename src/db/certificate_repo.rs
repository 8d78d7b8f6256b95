// src/db/certificate_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{db_utils::unique_violation_or_db, error::AppError},
    models::certificate::{Certificate, CertificatePayload},
};

const COLUMNS: &str = "id, certificate_number, holder_name, title, issuer, issue_date, \
    expiry_date, status, description, created_at, updated_at";

#[derive(Clone)]
pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {COLUMNS} FROM certificates ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, AppError> {
        let certificate = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {COLUMNS} FROM certificates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certificate)
    }

    pub async fn create(&self, input: &CertificatePayload) -> Result<Certificate, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            r#"
            INSERT INTO certificates (
                certificate_number, holder_name, title, issuer,
                issue_date, expiry_date, status, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.certificate_number)
        .bind(&input.holder_name)
        .bind(&input.title)
        .bind(&input.issuer)
        .bind(input.issue_date)
        .bind(input.expiry_date)
        .bind(input.status)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            unique_violation_or_db(e, || {
                format!("O certificado '{}' já existe.", input.certificate_number)
            })
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &CertificatePayload,
    ) -> Result<Option<Certificate>, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            r#"
            UPDATE certificates SET
                certificate_number = $2, holder_name = $3, title = $4, issuer = $5,
                issue_date = $6, expiry_date = $7, status = $8, description = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.certificate_number)
        .bind(&input.holder_name)
        .bind(&input.title)
        .bind(&input.issuer)
        .bind(input.issue_date)
        .bind(input.expiry_date)
        .bind(input.status)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            unique_violation_or_db(e, || {
                format!("O certificado '{}' já existe.", input.certificate_number)
            })
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
