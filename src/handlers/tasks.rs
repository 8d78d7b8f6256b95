// src/handlers/tasks.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        list_query::ListQueryParams,
        response::{ApiResponse, ListResponse, MessageResponse},
    },
    config::AppState,
    middleware::{list_params::ListParams, record_id::RecordId, validated_json::ValidatedJson},
    models::task::{Task, TaskPayload},
};

const ENTITY: &str = "Tarefa";

// GET /api/v1/tasks
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "Tasks",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de tarefas", body = ListResponse<Task>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let tasks = app_state.task_repo.list().await?;
    let page = query.apply(tasks)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/tasks
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "Tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Tarefa criada com sucesso.", body = ApiResponse<Task>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state.task_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %task.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Tarefa criada com sucesso.", task))))
}

// GET /api/v1/tasks/{id}
#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Task>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state
        .task_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(task)))
}

// PUT /api/v1/tasks/{id}
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    request_body = TaskPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Tarefa atualizada com sucesso.", body = ApiResponse<Task>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<TaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state
        .task_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Tarefa atualizada com sucesso.", task)))
}

// DELETE /api/v1/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Tarefa removida com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.task_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Tarefa removida com sucesso.")))
}
