// src/db/complaint_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::complaint::{Complaint, ComplaintPayload},
};

const COLUMNS: &str = "id, company_name, complainer_name, contact_number, email_address, subject, \
    date, case_status, priority, case_origin, description, created_at, updated_at";

// Responsável por todas as interações com a tabela 'complaints'
#[derive(Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Mais recentes primeiro; a ordenação da tabela é feita depois, em memória
    pub async fn list(&self) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {COLUMNS} FROM complaints ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {COLUMNS} FROM complaints WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(complaint)
    }

    pub async fn create(&self, input: &ComplaintPayload) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            r#"
            INSERT INTO complaints (
                company_name, complainer_name, contact_number, email_address, subject,
                date, case_status, priority, case_origin, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.company_name)
        .bind(&input.complainer_name)
        .bind(&input.contact_number)
        .bind(&input.email_address)
        .bind(&input.subject)
        .bind(input.date)
        .bind(input.case_status)
        .bind(input.priority)
        .bind(&input.case_origin)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &ComplaintPayload,
    ) -> Result<Option<Complaint>, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            r#"
            UPDATE complaints SET
                company_name = $2, complainer_name = $3, contact_number = $4,
                email_address = $5, subject = $6, date = $7, case_status = $8,
                priority = $9, case_origin = $10, description = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.company_name)
        .bind(&input.complainer_name)
        .bind(&input.contact_number)
        .bind(&input.email_address)
        .bind(&input.subject)
        .bind(input.date)
        .bind(input.case_status)
        .bind(input.priority)
        .bind(&input.case_origin)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(complaint)
    }

    /// Retorna `false` quando não havia linha com esse id.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::models::{complaint::CaseStatus, shared::Priority};

    fn payload(subject: &str, status: &str, priority: &str) -> ComplaintPayload {
        serde_json::from_value(json!({
            "companyName": "Acme",
            "complainerName": "João",
            "contactNumber": "11999998888",
            "emailAddress": "joao@email.com",
            "subject": subject,
            "date": "2024-05-20",
            "caseStatus": status,
            "priority": priority,
            "caseOrigin": "Phone"
        }))
        .unwrap()
    }

    #[sqlx::test]
    async fn test_complaint_lifecycle(pool: PgPool) {
        let repo = ComplaintRepository::new(pool);

        let created = repo.create(&payload("Entrega atrasada", "Pending", "Low")).await.unwrap();
        assert_eq!(created.subject, "Entrega atrasada");
        assert_eq!(created.case_status, CaseStatus::Pending);
        assert_eq!(created.priority, Priority::Low);
        assert!(created.description.is_none());

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let updated = repo
            .update(created.id, &payload("Cobrança indevida", "InProgress", "High"))
            .await
            .unwrap()
            .expect("registro existe");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.subject, "Cobrança indevida");
        assert_eq!(updated.case_status, CaseStatus::InProgress);
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let found = repo.find_by_id(created.id).await.unwrap().expect("registro existe");
        assert_eq!(found.case_status, CaseStatus::InProgress);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[sqlx::test]
    async fn test_update_of_missing_complaint_returns_none(pool: PgPool) {
        let repo = ComplaintRepository::new(pool);
        let result = repo
            .update(Uuid::new_v4(), &payload("Qualquer", "Resolved", "Medium"))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
