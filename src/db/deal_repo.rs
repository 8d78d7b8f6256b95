// src/db/deal_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::deal::{Deal, DealPayload},
};

const COLUMNS: &str = "id, deal_name, customer, amount, stage, probability, expected_close_date, \
    assigned_user, description, created_at, updated_at";

#[derive(Clone)]
pub struct DealRepository {
    pool: PgPool,
}

impl DealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Deal>, AppError> {
        let deals = sqlx::query_as::<_, Deal>(&format!(
            "SELECT {COLUMNS} FROM deals ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(deals)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Deal>, AppError> {
        let deal = sqlx::query_as::<_, Deal>(&format!("SELECT {COLUMNS} FROM deals WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deal)
    }

    pub async fn create(&self, input: &DealPayload) -> Result<Deal, AppError> {
        let deal = sqlx::query_as::<_, Deal>(&format!(
            r#"
            INSERT INTO deals (
                deal_name, customer, amount, stage, probability,
                expected_close_date, assigned_user, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.deal_name)
        .bind(&input.customer)
        .bind(input.amount)
        .bind(input.stage)
        .bind(input.probability)
        .bind(input.expected_close_date)
        .bind(&input.assigned_user)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(deal)
    }

    pub async fn update(&self, id: Uuid, input: &DealPayload) -> Result<Option<Deal>, AppError> {
        let deal = sqlx::query_as::<_, Deal>(&format!(
            r#"
            UPDATE deals SET
                deal_name = $2, customer = $3, amount = $4, stage = $5, probability = $6,
                expected_close_date = $7, assigned_user = $8, description = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.deal_name)
        .bind(&input.customer)
        .bind(input.amount)
        .bind(input.stage)
        .bind(input.probability)
        .bind(input.expected_close_date)
        .bind(&input.assigned_user)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deal)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM deals WHERE id = $1")
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

    use crate::models::deal::DealStage;

    #[sqlx::test]
    async fn test_every_stage_round_trips_through_postgres(pool: PgPool) {
        let repo = DealRepository::new(pool);

        for (wire, stage) in [
            ("Prospecting", DealStage::Prospecting),
            ("Qualification", DealStage::Qualification),
            ("Proposal", DealStage::Proposal),
            ("Negotiation", DealStage::Negotiation),
            ("ClosedWon", DealStage::ClosedWon),
            ("ClosedLost", DealStage::ClosedLost),
        ] {
            let payload: DealPayload = serde_json::from_value(json!({
                "dealName": format!("Negócio {wire}"),
                "customer": "Acme",
                "amount": 1500.5,
                "stage": wire,
                "probability": 40
            }))
            .unwrap();

            let deal = repo.create(&payload).await.unwrap();
            assert_eq!(deal.stage, stage);
            assert_eq!(deal.probability, Some(40));
        }

        assert_eq!(repo.list().await.unwrap().len(), 6);
    }
}
