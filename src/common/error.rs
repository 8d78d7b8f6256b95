// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Um ou mais campos são inválidos.")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo JSON ausente, malformado ou com tipos errados
    #[error("Corpo da requisição inválido: {0}")]
    MalformedBody(String),

    // Parâmetros de listagem, ids malformados, etc.
    #[error("Parâmetros inválidos: {0}")]
    InvalidQuery(String),

    #[error("{entity} '{id}' não encontrado(a).")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0}")]
    UniqueConstraintViolation(String),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Código estável que o frontend usa para decidir o que mostrar.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::MalformedBody(_) => "malformed_body",
            AppError::InvalidQuery(_) => "invalid_query",
            AppError::NotFound { .. } => "not_found",
            AppError::DatabaseError(sqlx::Error::RowNotFound) => "not_found",
            AppError::UniqueConstraintViolation(_) => "conflict",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MalformedBody(_) | AppError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } | AppError::DatabaseError(sqlx::Error::RowNotFound) => {
                StatusCode::NOT_FOUND
            }
            AppError::UniqueConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// "email_address" -> "emailAddress", para bater com os nomes do JSON
fn to_camel_case(field: &str) -> String {
    if field.starts_with("__") {
        return field.to_string();
    }
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        match &self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(to_camel_case(&field), messages);
                }
                let body = Json(json!({
                    "success": false,
                    "message": self.to_string(),
                    "error": code,
                    "details": details,
                }));
                return (status, body).into_response();
            }
            AppError::DatabaseError(sqlx::Error::RowNotFound) => {}
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                tracing::error!("Erro Interno do Servidor: {:?}", self);
            }
            _ => {}
        }

        let message = match &self {
            AppError::DatabaseError(sqlx::Error::RowNotFound) => "Registro não encontrado.".to_string(),
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                "Ocorreu um erro inesperado.".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
            "error": code,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::{ValidationError, ValidationErrors};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_404_with_failure_envelope() {
        let id = Uuid::new_v4();
        let (status, body) = render(AppError::not_found("Reclamação", id)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains(&id.to_string()));
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields_in_camel_case() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("email");
        err.message = Some("invalid_email".into());
        errors.add("email_address", err);

        let (status, body) = render(AppError::ValidationError(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"]["emailAddress"][0], "invalid_email");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let (status, body) = render(AppError::InternalServerError(anyhow::anyhow!("segredo"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("segredo"));
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err = AppError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn test_camel_case_conversion() {
        assert_eq!(to_camel_case("gst_rate"), "gstRate");
        assert_eq!(to_camel_case("subject"), "subject");
        assert_eq!(to_camel_case("__all__"), "__all__");
    }
}
