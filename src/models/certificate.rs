// src/models/certificate.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{common::list_query::Listable, models::shared::{date_range_error, validate_not_blank}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "certificate_status", rename_all = "snake_case")]
pub enum CertificateStatus {
    #[default]
    Active,
    Expired,
    Revoked,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,

    #[schema(example = "CERT-2024-0001")]
    pub certificate_number: String,
    pub holder_name: String,
    #[schema(example = "Treinamento de Segurança")]
    pub title: String,
    pub issuer: String,

    #[schema(value_type = String, format = Date)]
    pub issue_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub expiry_date: Option<NaiveDate>,

    pub status: CertificateStatus,
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Certificate {
    const SEARCHABLE_FIELDS: &'static [&'static str] =
        &["certificateNumber", "holderName", "title", "issuer", "status"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_certificate_dates"))]
pub struct CertificatePayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub certificate_number: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub holder_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub issuer: String,

    #[schema(value_type = String, format = Date)]
    pub issue_date: NaiveDate,

    #[schema(value_type = Option<String>, format = Date)]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: CertificateStatus,

    pub description: Option<String>,
}

fn validate_certificate_dates(payload: &CertificatePayload) -> Result<(), ValidationError> {
    match payload.expiry_date {
        Some(expiry) if expiry < payload.issue_date => Err(date_range_error()),
        _ => Ok(()),
    }
}
