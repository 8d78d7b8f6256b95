// src/handlers/complaint_route.rs
//
// Rota única /api/complaint, no formato que as telas antigas de reclamação
// consomem: o id vem na query (GET/DELETE) ou no corpo (PUT), e não há
// paginação no GET.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    common::{
        error::AppError,
        response::{ApiResponse, MessageResponse},
    },
    config::AppState,
    middleware::{record_id::parse_record_id, validated_json::ValidatedJson},
    models::complaint::{Complaint, ComplaintPayload},
};

const ENTITY: &str = "Reclamação";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ComplaintIdQuery {
    /// ID da reclamação
    pub id: Option<String>,
}

impl ComplaintIdQuery {
    fn parsed_id(&self) -> Result<Option<Uuid>, AppError> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_record_id(raw).map(Some),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintPayload {
    pub id: Uuid,

    #[serde(flatten)]
    pub complaint: ComplaintPayload,
}

// A validação é a mesma do formulário de criação
impl Validate for UpdateComplaintPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.complaint.validate()
    }
}

// GET /api/complaint
#[utoipa::path(
    get,
    path = "/api/complaint",
    tag = "Complaint (legado)",
    params(ComplaintIdQuery),
    responses(
        (status = 200, description = "Sem id: todas as reclamações, mais recentes primeiro. Com `?id=`: `data` é a própria reclamação (ApiResponse<Complaint>)", body = ApiResponse<Vec<Complaint>>),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Reclamação não encontrada")
    )
)]
pub async fn get_complaints(
    State(app_state): State<AppState>,
    Query(query): Query<ComplaintIdQuery>,
) -> Result<Response, AppError> {
    let Some(id) = query.parsed_id()? else {
        let complaints = app_state.complaint_repo.list().await?;
        return Ok(Json(ApiResponse::ok(complaints)).into_response());
    };

    let complaint = app_state
        .complaint_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(ApiResponse::ok(complaint)).into_response())
}

// POST /api/complaint
#[utoipa::path(
    post,
    path = "/api/complaint",
    tag = "Complaint (legado)",
    request_body = ComplaintPayload,
    responses(
        (status = 201, description = "Reclamação registrada", body = ApiResponse<Complaint>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn post_complaint(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state.complaint_repo.create(&payload).await?;
    tracing::info!(entity = ENTITY, id = %complaint.id, "registro criado (rota legada)");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Reclamação registrada com sucesso.", complaint)),
    ))
}

// PUT /api/complaint
#[utoipa::path(
    put,
    path = "/api/complaint",
    tag = "Complaint (legado)",
    request_body = UpdateComplaintPayload,
    responses(
        (status = 200, description = "Reclamação atualizada", body = ApiResponse<Complaint>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Reclamação não encontrada")
    )
)]
pub async fn put_complaint(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state
        .complaint_repo
        .update(payload.id, &payload.complaint)
        .await?
        .ok_or(AppError::not_found(ENTITY, payload.id))?;
    tracing::info!(entity = ENTITY, id = %payload.id, "registro atualizado (rota legada)");

    Ok(Json(ApiResponse::with_message("Reclamação atualizada com sucesso.", complaint)))
}

// DELETE /api/complaint?id=...
#[utoipa::path(
    delete,
    path = "/api/complaint",
    tag = "Complaint (legado)",
    params(ComplaintIdQuery),
    responses(
        (status = 200, description = "Reclamação removida", body = MessageResponse),
        (status = 400, description = "id ausente ou inválido"),
        (status = 404, description = "Reclamação não encontrada")
    )
)]
pub async fn delete_complaint(
    State(app_state): State<AppState>,
    Query(query): Query<ComplaintIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = query
        .parsed_id()?
        .ok_or_else(|| AppError::InvalidQuery("O parâmetro 'id' é obrigatório.".to_string()))?;

    if !app_state.complaint_repo.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(entity = ENTITY, id = %id, "registro removido (rota legada)");

    Ok(Json(MessageResponse::new("Reclamação removida com sucesso.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_payload_flattens_complaint_fields() {
        let id = Uuid::new_v4();
        let payload: UpdateComplaintPayload = serde_json::from_value(json!({
            "id": id,
            "companyName": "Acme",
            "complainerName": "João",
            "contactNumber": "11999998888",
            "emailAddress": "joao@email.com",
            "subject": "Cobrança indevida",
            "date": "2024-05-20",
            "caseStatus": "InProgress",
            "priority": "High",
            "caseOrigin": "Email"
        }))
        .unwrap();

        assert_eq!(payload.id, id);
        assert_eq!(payload.complaint.subject, "Cobrança indevida");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_blank_id_is_treated_as_absent() {
        let query = ComplaintIdQuery { id: Some("  ".into()) };
        assert_eq!(query.parsed_id().unwrap(), None);
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let query = ComplaintIdQuery { id: Some("42".into()) };
        assert!(matches!(query.parsed_id(), Err(AppError::InvalidQuery(_))));
    }
}
