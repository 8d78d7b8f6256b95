// src/handlers/invoices.rs

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
    models::invoice::{InvoicePayload, InvoiceView},
};

// Leitura sempre via InvoiceService, para que os totais venham calculados.

// GET /api/v1/invoices
#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    tag = "Invoices",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Lista paginada de faturas (com totais calculados)", body = ListResponse<InvoiceView>),
        (status = 400, description = "Parâmetros de listagem inválidos")
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    ListParams(query): ListParams,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.invoice_service.list().await?;
    let page = query.apply(invoices)?;

    Ok(Json(ListResponse::from(page)))
}

// POST /api/v1/invoices
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    tag = "Invoices",
    request_body = InvoicePayload,
    responses(
        (status = 201, description = "Fatura criada com sucesso.", body = ApiResponse<InvoiceView>),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<InvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.invoice_service.create(&payload).await?;
    tracing::info!(entity = "Fatura", id = %invoice.invoice.id, "registro criado");

    Ok((StatusCode::CREATED, Json(ApiResponse::with_message("Fatura criada com sucesso.", invoice))))
}

// GET /api/v1/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro encontrado", body = ApiResponse<InvoiceView>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.invoice_service.find_by_id(id).await?;

    Ok(Json(ApiResponse::ok(invoice)))
}

// PUT /api/v1/invoices/{id}
#[utoipa::path(
    put,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    request_body = InvoicePayload,
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Fatura atualizada com sucesso.", body = ApiResponse<InvoiceView>),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn update_invoice(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<InvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.invoice_service.update(id, &payload).await?;
    tracing::info!(entity = "Fatura", id = %id, "registro atualizado");

    Ok(Json(ApiResponse::with_message("Fatura atualizada com sucesso.", invoice)))
}

// DELETE /api/v1/invoices/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Fatura removida com sucesso.", body = MessageResponse),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    app_state.invoice_service.delete(id).await?;
    tracing::info!(entity = "Fatura", id = %id, "registro removido");

    Ok(Json(MessageResponse::new("Fatura removida com sucesso.")))
}
