// src/db/invoice_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{db_utils::unique_violation_or_db, error::AppError},
    models::invoice::{Invoice, InvoicePayload},
};

const COLUMNS: &str = "id, invoice_number, customer, invoice_date, due_date, amount, discount, \
    gst_rate, status, notes, created_at, updated_at";

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {COLUMNS} FROM invoices ORDER BY invoice_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    pub async fn create(&self, input: &InvoicePayload) -> Result<Invoice, AppError> {
        sqlx::query_as::<_, Invoice>(&format!(
            r#"
            INSERT INTO invoices (
                invoice_number, customer, invoice_date, due_date,
                amount, discount, gst_rate, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.invoice_number)
        .bind(&input.customer)
        .bind(input.invoice_date)
        .bind(input.due_date)
        .bind(input.amount)
        .bind(input.discount)
        .bind(input.gst_rate)
        .bind(input.status)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            unique_violation_or_db(e, || format!("A fatura '{}' já existe.", input.invoice_number))
        })
    }

    pub async fn update(&self, id: Uuid, input: &InvoicePayload) -> Result<Option<Invoice>, AppError> {
        sqlx::query_as::<_, Invoice>(&format!(
            r#"
            UPDATE invoices SET
                invoice_number = $2, customer = $3, invoice_date = $4, due_date = $5,
                amount = $6, discount = $7, gst_rate = $8, status = $9, notes = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.invoice_number)
        .bind(&input.customer)
        .bind(input.invoice_date)
        .bind(input.due_date)
        .bind(input.amount)
        .bind(input.discount)
        .bind(input.gst_rate)
        .bind(input.status)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            unique_violation_or_db(e, || format!("A fatura '{}' já existe.", input.invoice_number))
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    use crate::models::invoice::InvoiceStatus;

    fn payload(number: &str, status: &str) -> InvoicePayload {
        serde_json::from_value(json!({
            "invoiceNumber": number,
            "customer": "Acme",
            "invoiceDate": "2024-05-01",
            "dueDate": "2024-05-31",
            "amount": 1000,
            "discount": 100,
            "gstRate": 18,
            "status": status
        }))
        .unwrap()
    }

    #[sqlx::test]
    async fn test_invoice_lifecycle(pool: PgPool) {
        let repo = InvoiceRepository::new(pool);

        let created = repo.create(&payload("NF-001", "Draft")).await.unwrap();
        assert_eq!(created.invoice_number, "NF-001");
        assert_eq!(created.amount, Decimal::from(1000));
        assert_eq!(created.discount, Decimal::from(100));
        assert_eq!(created.gst_rate, Decimal::from(18));
        assert_eq!(created.status, InvoiceStatus::Draft);

        let updated = repo
            .update(created.id, &payload("NF-001", "Paid"))
            .await
            .unwrap()
            .expect("fatura existe");
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert!(updated.updated_at >= created.updated_at);

        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn test_duplicate_invoice_number_is_a_conflict(pool: PgPool) {
        let repo = InvoiceRepository::new(pool);
        repo.create(&payload("NF-001", "Sent")).await.unwrap();
        let other = repo.create(&payload("NF-002", "Sent")).await.unwrap();

        let err = repo.create(&payload("NF-001", "Draft")).await.unwrap_err();
        assert!(matches!(err, AppError::UniqueConstraintViolation(_)));

        // renomear para um número já usado também conflita
        let err = repo.update(other.id, &payload("NF-001", "Sent")).await.unwrap_err();
        assert!(matches!(err, AppError::UniqueConstraintViolation(_)));
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
