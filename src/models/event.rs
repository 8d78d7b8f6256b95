// src/models/event.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{common::list_query::Listable, models::shared::{date_range_error, validate_not_blank}};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub id: Uuid,

    #[schema(example = "Reunião de alinhamento")]
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub organizer: Option<String>,

    // No Postgres é TEXT[], no Rust é Vec<String>
    #[schema(example = json!(["ana@acme.com", "bruno@acme.com"]))]
    pub participants: Vec<String>,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for ScheduledEvent {
    const SEARCHABLE_FIELDS: &'static [&'static str] =
        &["title", "location", "organizer", "participants"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_event_window"))]
pub struct ScheduledEventPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub location: Option<String>,
    pub organizer: Option<String>,

    #[serde(default)]
    pub participants: Vec<String>,

    pub description: Option<String>,
}

fn validate_event_window(payload: &ScheduledEventPayload) -> Result<(), ValidationError> {
    if payload.end_time < payload.start_time {
        return Err(date_range_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_before_start_is_rejected() {
        let payload: ScheduledEventPayload = serde_json::from_value(json!({
            "title": "Reunião",
            "startTime": "2024-06-01T15:00:00Z",
            "endTime": "2024-06-01T14:00:00Z"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_zero_length_event_is_allowed() {
        let payload: ScheduledEventPayload = serde_json::from_value(json!({
            "title": "Lembrete",
            "startTime": "2024-06-01T15:00:00Z",
            "endTime": "2024-06-01T15:00:00Z"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.participants.is_empty());
    }
}
