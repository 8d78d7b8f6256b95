// src/handlers/accounts.rs

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
    models::account::{Account, AccountPayload},
};

const ENTITY: &str = "Conta";

// GET /api/v1/accounts
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    tag = "Accounts",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de contas", body = ListResponse<Account>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_accounts(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let accounts = app_state.account_repo.list().await?;
    let page = query.apply(accounts)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    tag = "Accounts",
    request_body = AccountPayload,
    responses(
        (status = 201, description = "Conta criada com sucesso.", body = ApiResponse<Account>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_account(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    let account = app_state.account_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %account.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Conta criada com sucesso.", account))))
}

// GET /api/v1/accounts/{id}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Account>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_account(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let account = app_state
        .account_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(account)))
}

// PUT /api/v1/accounts/{id}
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    tag = "Accounts",
    request_body = AccountPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Conta atualizada com sucesso.", body = ApiResponse<Account>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_account(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<AccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    let account = app_state
        .account_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Conta atualizada com sucesso.", account)))
}

// DELETE /api/v1/accounts/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Conta removida com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_account(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.account_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Conta removida com sucesso.")))
}
