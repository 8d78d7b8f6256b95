// src/handlers/complaints.rs

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
    models::complaint::{Complaint, ComplaintPayload},
};

const ENTITY: &str = "Reclamação";

// GET /api/v1/complaints
#[utoipa::path(
    get,
    path = "/api/v1/complaints",
    tag = "Complaints",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de reclamações", body = ListResponse<Complaint>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_complaints(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let complaints = app_state.complaint_repo.list().await?;
    let page = query.apply(complaints)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/complaints
#[utoipa::path(
    post,
    path = "/api/v1/complaints",
    tag = "Complaints",
    request_body = ComplaintPayload,
    responses(
        (status = 201, description = "Reclamação registrada com sucesso.", body = ApiResponse<Complaint>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_complaint(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state.complaint_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %complaint.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Reclamação registrada com sucesso.", complaint))))
}

// GET /api/v1/complaints/{id}
#[utoipa::path(
    get,
    path = "/api/v1/complaints/{id}",
    tag = "Complaints",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Complaint>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_complaint(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state
        .complaint_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(complaint)))
}

// PUT /api/v1/complaints/{id}
#[utoipa::path(
    put,
    path = "/api/v1/complaints/{id}",
    tag = "Complaints",
    request_body = ComplaintPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Reclamação atualizada com sucesso.", body = ApiResponse<Complaint>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_complaint(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<ComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state
        .complaint_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Reclamação atualizada com sucesso.", complaint)))
}

// DELETE /api/v1/complaints/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/complaints/{id}",
    tag = "Complaints",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Reclamação removida com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_complaint(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.complaint_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Reclamação removida com sucesso.")))
}
