// src/models/task.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::list_query::Listable, models::shared::{validate_not_blank, Priority}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Deferred,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,

    #[schema(example = "Ligar para o cliente")]
    pub subject: String,
    pub assigned_user: Option<String>,
    pub related_to: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Task {
    const SEARCHABLE_FIELDS: &'static [&'static str] =
        &["subject", "assignedUser", "relatedTo", "status", "priority"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub subject: String,

    pub assigned_user: Option<String>,
    pub related_to: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    pub description: Option<String>,
}
