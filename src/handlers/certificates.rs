// src/handlers/certificates.rs

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
    models::certificate::{Certificate, CertificatePayload},
};

const ENTITY: &str = "Certificado";

// GET /api/v1/certificates
#[utoipa::path(
    get,
    path = "/api/v1/certificates",
    tag = "Certificates",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de certificados", body = ListResponse<Certificate>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_certificates(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let certificates = app_state.certificate_repo.list().await?;
    let page = query.apply(certificates)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/certificates
#[utoipa::path(
    post,
    path = "/api/v1/certificates",
    tag = "Certificates",
    request_body = CertificatePayload,
    responses(
        (status = 201, description = "Certificado emitido com sucesso.", body = ApiResponse<Certificate>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_certificate(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CertificatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let certificate = app_state.certificate_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %certificate.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Certificado emitido com sucesso.", certificate))))
}

// GET /api/v1/certificates/{id}
#[utoipa::path(
    get,
    path = "/api/v1/certificates/{id}",
    tag = "Certificates",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<Certificate>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_certificate(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let certificate = app_state
        .certificate_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(certificate)))
}

// PUT /api/v1/certificates/{id}
#[utoipa::path(
    put,
    path = "/api/v1/certificates/{id}",
    tag = "Certificates",
    request_body = CertificatePayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Certificado atualizado com sucesso.", body = ApiResponse<Certificate>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_certificate(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<CertificatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let certificate = app_state
        .certificate_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(entity = ENTITY, id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Certificado atualizado com sucesso.", certificate)))
}

// DELETE /api/v1/certificates/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/certificates/{id}",
    tag = "Certificates",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Certificado removido com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_certificate(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.certificate_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Certificado removido com sucesso.")))
}
