// src/handlers/events.rs

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
    models::event::{ScheduledEvent, ScheduledEventPayload},
};

const ENTITY: &str = "Evento";

// GET /api/v1/events
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de eventos agendados", body = ListResponse<ScheduledEvent>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_events(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.event_repo.list().await?;
    let page = query.apply(events)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/events
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    request_body = ScheduledEventPayload,
    responses(
        (status = 201, description = "Evento agendado com sucesso.", body = ApiResponse<ScheduledEvent>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_event(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ScheduledEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state.event_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %event.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Evento agendado com sucesso.", event))))
}

// GET /api/v1/events/{id}
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<ScheduledEvent>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_event(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(event)))
}

// PUT /api/v1/events/{id}
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    tag = "Events",
    request_body = ScheduledEventPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Evento atualizado com sucesso.", body = ApiResponse<ScheduledEvent>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_event(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<ScheduledEventPayload>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state
        .event_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Evento atualizado com sucesso.", event)))
}

// DELETE /api/v1/events/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    tag = "Events",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Evento removido com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_event(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.event_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Evento removido com sucesso.")))
}
