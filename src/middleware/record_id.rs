// src/middleware/record_id.rs

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::common::error::AppError;

// O `{id}` das rotas. Um id malformado vira 400 no formato padrão de erro,
// em vez da rejeição em texto puro do axum.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

        parse_record_id(&raw).map(RecordId)
    }
}

pub fn parse_record_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::InvalidQuery(format!("'{raw}' não é um identificador válido.")))
}
