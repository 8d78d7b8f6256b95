// src/db/event_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::event::{ScheduledEvent, ScheduledEventPayload},
};

const COLUMNS: &str = "id, title, start_time, end_time, location, organizer, participants, \
    description, created_at, updated_at";

#[derive(Clone)]
pub struct ScheduledEventRepository {
    pool: PgPool,
}

impl ScheduledEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Agenda: próximos eventos primeiro
    pub async fn list(&self) -> Result<Vec<ScheduledEvent>, AppError> {
        let events = sqlx::query_as::<_, ScheduledEvent>(&format!(
            "SELECT {COLUMNS} FROM scheduled_events ORDER BY start_time ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduledEvent>, AppError> {
        let event = sqlx::query_as::<_, ScheduledEvent>(&format!(
            "SELECT {COLUMNS} FROM scheduled_events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn create(&self, input: &ScheduledEventPayload) -> Result<ScheduledEvent, AppError> {
        let event = sqlx::query_as::<_, ScheduledEvent>(&format!(
            r#"
            INSERT INTO scheduled_events (
                title, start_time, end_time, location, organizer, participants, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(&input.location)
        .bind(&input.organizer)
        .bind(&input.participants)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &ScheduledEventPayload,
    ) -> Result<Option<ScheduledEvent>, AppError> {
        let event = sqlx::query_as::<_, ScheduledEvent>(&format!(
            r#"
            UPDATE scheduled_events SET
                title = $2, start_time = $3, end_time = $4, location = $5,
                organizer = $6, participants = $7, description = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(&input.location)
        .bind(&input.organizer)
        .bind(&input.participants)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM scheduled_events WHERE id = $1")
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

    #[sqlx::test]
    async fn test_participants_are_stored_as_text_array(pool: PgPool) {
        let repo = ScheduledEventRepository::new(pool);
        let payload: ScheduledEventPayload = serde_json::from_value(json!({
            "title": "Reunião de alinhamento",
            "startTime": "2024-06-01T09:00:00Z",
            "endTime": "2024-06-01T10:30:00Z",
            "participants": ["ana@acme.com", "bruno@acme.com"]
        }))
        .unwrap();

        let event = repo.create(&payload).await.unwrap();
        assert_eq!(event.participants, vec!["ana@acme.com", "bruno@acme.com"]);
        assert!(event.end_time > event.start_time);

        let found = repo.find_by_id(event.id).await.unwrap().expect("evento existe");
        assert_eq!(found.participants.len(), 2);

        assert!(repo.delete(event.id).await.unwrap());
        assert!(repo.find_by_id(event.id).await.unwrap().is_none());
    }
}
