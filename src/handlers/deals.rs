// src/handlers/deals.rs

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
    models::deal::{Deal, DealPayload},
};

const ENTITY: &str = "Negócio";

// GET /api/v1/deals
#[utoipa::path(
    get,
    path = "/api/v1/deals",
    tag = "Deals",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de negócios", body = ListResponse<Deal>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_deals(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let deals = app_state.deal_repo.list().await?;
    let page = query.apply(deals)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/deals
#[utoipa::path(
    post,
    path = "/api/v1/deals",
    tag = "Deals",
    request_body = DealPayload,
    responses(
        (status = 201, description = "Negócio criado com sucesso.", body = ApiResponse<Deal>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_deal(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DealPayload>,
) -> Result<impl IntoResponse, AppError> {
    let deal = app_state.deal_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %deal.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Negócio criado com sucesso.", deal))))
}

// GET /api/v1/deals/{id}
#[utoipa::path(
    get,
    path = "/api/v1/deals/{id}",
    tag = "Deals",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Deal>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_deal(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let deal = app_state
        .deal_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(deal)))
}

// PUT /api/v1/deals/{id}
#[utoipa::path(
    put,
    path = "/api/v1/deals/{id}",
    tag = "Deals",
    request_body = DealPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Negócio atualizado com sucesso.", body = ApiResponse<Deal>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_deal(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<DealPayload>,
) -> Result<impl IntoResponse, AppError> {
    let deal = app_state
        .deal_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Negócio atualizado com sucesso.", deal)))
}

// DELETE /api/v1/deals/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/deals/{id}",
    tag = "Deals",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Negócio removido com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_deal(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.deal_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Negócio removido com sucesso.")))
}
