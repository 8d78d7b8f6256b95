// src/handlers/contacts.rs

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
    models::contact::{Contact, ContactPayload},
};

const ENTITY: &str = "Contato";

// GET /api/v1/contacts
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    tag = "Contacts",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de contatos", body = ListResponse<Contact>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let contacts = app_state.contact_repo.list().await?;
    let page = query.apply(contacts)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/contacts
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "Contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contato criado com sucesso.", body = ApiResponse<Contact>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_contact(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %contact.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Contato criado com sucesso.", contact))))
}

// GET /api/v1/contacts/{id}
#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Contact>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_contact(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state
        .contact_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(contact)))
}

// PUT /api/v1/contacts/{id}
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    request_body = ContactPayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Contato atualizado com sucesso.", body = ApiResponse<Contact>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_contact(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state
        .contact_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Contato atualizado com sucesso.", contact)))
}

// DELETE /api/v1/contacts/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Contato removido com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_contact(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.contact_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Contato removido com sucesso.")))
}
