// src/db/task_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::task::{Task, TaskPayload},
};

const COLUMNS: &str = "id, subject, assigned_user, related_to, due_date, status, priority, \
    description, created_at, updated_at";

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!("SELECT {COLUMNS} FROM tasks WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    pub async fn create(&self, input: &TaskPayload) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (
                subject, assigned_user, related_to, due_date, status, priority, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.subject)
        .bind(&input.assigned_user)
        .bind(&input.related_to)
        .bind(input.due_date)
        .bind(input.status)
        .bind(input.priority)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn update(&self, id: Uuid, input: &TaskPayload) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks SET
                subject = $2, assigned_user = $3, related_to = $4, due_date = $5,
                status = $6, priority = $7, description = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.subject)
        .bind(&input.assigned_user)
        .bind(&input.related_to)
        .bind(input.due_date)
        .bind(input.status)
        .bind(input.priority)
        .bind(&input.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
